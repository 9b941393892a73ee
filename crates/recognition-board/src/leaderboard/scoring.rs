use super::domain::{EmployeeActivityRecord, EmployeeId, PointBreakdown, ScoreCategory};

/// Inclusive upper bound of any single category.
pub const MAX_CATEGORY_POINTS: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("{category} score {value} for {employee_id} is outside 0..=20")]
    OutOfRangeScore {
        employee_id: EmployeeId,
        category: ScoreCategory,
        value: i32,
    },
}

/// Sums the category points of a record. Absent categories contribute nothing.
pub fn aggregate(record: &EmployeeActivityRecord) -> Result<u32, ScoreError> {
    let mut total: u32 = 0;

    for (&category, &value) in &record.point_breakdown {
        if !(0..=MAX_CATEGORY_POINTS).contains(&value) {
            return Err(ScoreError::OutOfRangeScore {
                employee_id: record.employee_id.clone(),
                category,
                value,
            });
        }
        total += value as u32;
    }

    Ok(total)
}

/// Maximum reachable total for the categories present in `breakdown`.
pub fn score_bound(breakdown: &PointBreakdown) -> u32 {
    breakdown.len() as u32 * MAX_CATEGORY_POINTS as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::domain::EmployeeStatus;

    fn record(points: &[(ScoreCategory, i32)]) -> EmployeeActivityRecord {
        EmployeeActivityRecord {
            employee_id: EmployeeId::from("EMP001"),
            display_name: "Sarah Johnson".to_string(),
            department: "Engineering".to_string(),
            status: EmployeeStatus::Active,
            point_breakdown: points.iter().copied().collect(),
            previous_rank: None,
            achievement_facts: Vec::new(),
            category: "Staff of the Month".to_string(),
        }
    }

    #[test]
    fn sums_all_present_categories() {
        let record = record(&[
            (ScoreCategory::Attendance, 20),
            (ScoreCategory::Nominations, 18),
            (ScoreCategory::Voting, 19),
            (ScoreCategory::PeerReviews, 17),
            (ScoreCategory::Badges, 15),
        ]);

        assert_eq!(aggregate(&record), Ok(89));
        assert_eq!(score_bound(&record.point_breakdown), 100);
    }

    #[test]
    fn missing_categories_count_as_zero() {
        let record = record(&[(ScoreCategory::Attendance, 20)]);

        assert_eq!(aggregate(&record), Ok(20));
        assert_eq!(score_bound(&record.point_breakdown), 20);
    }

    #[test]
    fn empty_breakdown_scores_zero() {
        assert_eq!(aggregate(&record(&[])), Ok(0));
    }

    #[test]
    fn accepts_range_edges() {
        let record = record(&[(ScoreCategory::Voting, 0), (ScoreCategory::Badges, 20)]);
        assert_eq!(aggregate(&record), Ok(20));
    }

    #[test]
    fn rejects_scores_above_range() {
        let record = record(&[(ScoreCategory::Attendance, 20), (ScoreCategory::Voting, 21)]);

        match aggregate(&record) {
            Err(ScoreError::OutOfRangeScore {
                employee_id,
                category,
                value,
            }) => {
                assert_eq!(employee_id.as_str(), "EMP001");
                assert_eq!(category, ScoreCategory::Voting);
                assert_eq!(value, 21);
            }
            other => panic!("expected out of range error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_scores_instead_of_clamping() {
        let record = record(&[(ScoreCategory::PeerReviews, -1)]);
        let error = aggregate(&record).expect_err("negative score rejected");
        assert!(error.to_string().contains("peerReviews score -1"));
    }
}
