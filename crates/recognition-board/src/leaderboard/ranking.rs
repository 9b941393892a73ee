use std::collections::BTreeMap;

use super::domain::{EmployeeId, RankTrend};

/// Orders employees by total score descending, breaking ties by ascending id,
/// and assigns each its 1-based sorted position.
pub fn assign_ranks(scores: &[(EmployeeId, u32)]) -> BTreeMap<EmployeeId, u32> {
    let mut ordered: Vec<&(EmployeeId, u32)> = scores.iter().collect();
    ordered.sort_by(|(left_id, left_score), (right_id, right_score)| {
        right_score
            .cmp(left_score)
            .then_with(|| left_id.cmp(right_id))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, (employee_id, _))| (employee_id.clone(), position as u32 + 1))
        .collect()
}

pub fn rank_trend(rank: u32, previous_rank: Option<u32>) -> RankTrend {
    match previous_rank {
        None => RankTrend::New,
        Some(previous) if rank < previous => RankTrend::Improved,
        Some(previous) if rank > previous => RankTrend::Declined,
        Some(_) => RankTrend::Unchanged,
    }
}

/// Positions gained since the previous period; negative when the employee dropped.
pub fn rank_change(rank: u32, previous_rank: Option<u32>) -> Option<i64> {
    previous_rank.map(|previous| i64::from(previous) - i64::from(rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, u32)]) -> Vec<(EmployeeId, u32)> {
        pairs
            .iter()
            .map(|(id, score)| (EmployeeId::from(*id), *score))
            .collect()
    }

    #[test]
    fn orders_by_score_descending() {
        let ranks = assign_ranks(&scores(&[("EMP003", 70), ("EMP001", 95), ("EMP002", 88)]));

        assert_eq!(ranks[&EmployeeId::from("EMP001")], 1);
        assert_eq!(ranks[&EmployeeId::from("EMP002")], 2);
        assert_eq!(ranks[&EmployeeId::from("EMP003")], 3);
    }

    #[test]
    fn ties_resolve_by_ascending_id_regardless_of_input_order() {
        let forward = assign_ranks(&scores(&[("A", 40), ("B", 40)]));
        let reversed = assign_ranks(&scores(&[("B", 40), ("A", 40)]));

        assert_eq!(forward, reversed);
        assert_eq!(forward[&EmployeeId::from("A")], 1);
        assert_eq!(forward[&EmployeeId::from("B")], 2);
    }

    #[test]
    fn ranks_cover_one_through_n_exactly_once() {
        let ranks = assign_ranks(&scores(&[
            ("EMP010", 50),
            ("EMP004", 50),
            ("EMP007", 12),
            ("EMP001", 99),
            ("EMP002", 0),
        ]));

        let mut assigned: Vec<u32> = ranks.values().copied().collect();
        assigned.sort_unstable();
        assert_eq!(assigned, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_population_has_no_ranks() {
        assert!(assign_ranks(&[]).is_empty());
    }

    #[test]
    fn trend_follows_previous_rank() {
        assert_eq!(rank_trend(5, None), RankTrend::New);
        assert_eq!(rank_trend(2, Some(4)), RankTrend::Improved);
        assert_eq!(rank_trend(4, Some(2)), RankTrend::Declined);
        assert_eq!(rank_trend(3, Some(3)), RankTrend::Unchanged);
    }

    #[test]
    fn change_is_signed_position_delta() {
        assert_eq!(rank_change(2, Some(4)), Some(2));
        assert_eq!(rank_change(4, Some(2)), Some(-2));
        assert_eq!(rank_change(1, None), None);
    }
}
