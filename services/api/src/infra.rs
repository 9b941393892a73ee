use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use recognition_board::error::AppError;
use recognition_board::leaderboard::{
    AchievementFact, ActivityCsvImporter, ActivitySnapshot, BadgeId, EmployeeActivityRecord,
    EmployeeId, EmployeeStatus, ScoreCategory,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads a snapshot from disk. CSV exports carry no period of their own, so `period`
/// labels them; JSON snapshots keep theirs unless one is supplied.
pub(crate) fn load_snapshot(
    path: &Path,
    period: Option<String>,
) -> Result<ActivitySnapshot, AppError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        return Ok(ActivityCsvImporter::from_path(path, period)?);
    }

    let reader = BufReader::new(File::open(path)?);
    let mut snapshot: ActivitySnapshot = serde_json::from_reader(reader)?;
    if period.is_some() {
        snapshot.period = period;
    }
    Ok(snapshot)
}

pub(crate) const DEMO_PERIOD: &str = "2024-11";

/// Reference dataset used by the demo command and the route tests.
pub(crate) fn demo_snapshot() -> ActivitySnapshot {
    let records = vec![
        demo_record(
            "EMP101",
            "Sofia Martinez",
            "Engineering",
            EmployeeStatus::Active,
            "Staff of the Month",
            [20, 19, 18, 19, 18],
            Some(1),
            &[
                ("top-performer", Some((2024, 10, 31))),
                ("mentor", Some((2024, 8, 12))),
                ("goal-crusher", None),
                ("team-player", Some((2024, 6, 3))),
            ],
        ),
        demo_record(
            "EMP102",
            "Daniel Okafor",
            "Customer Success",
            EmployeeStatus::Active,
            "Culture Champion",
            [19, 20, 18, 17, 18],
            Some(3),
            &[("customer-hero", Some((2024, 11, 4)))],
        ),
        demo_record(
            "EMP103",
            "Hana Suzuki",
            "Accounting",
            EmployeeStatus::Active,
            "Most Punctual",
            [20, 15, 16, 18, 17],
            Some(2),
            &[("perfect-attendance", Some((2024, 11, 1)))],
        ),
        demo_record(
            "EMP104",
            "Omar Haddad",
            "Engineering",
            EmployeeStatus::Active,
            "Culture Champion",
            [16, 17, 17, 16, 15],
            None,
            &[("rising-star", Some((2024, 11, 8))), ("hackathon-winner", None)],
        ),
        demo_record(
            "EMP105",
            "Grace Kim",
            "Finance",
            EmployeeStatus::OnLeave,
            "Staff of the Month",
            [12, 16, 15, 17, 14],
            Some(4),
            &[("innovation-champion", Some((2024, 5, 20)))],
        ),
        demo_record(
            "EMP106",
            "Lucas Ferreira",
            "Operations",
            EmployeeStatus::Active,
            "Most Punctual",
            [19, 11, 13, 14, 12],
            Some(6),
            &[],
        ),
        demo_record(
            "EMP107",
            "Amara Nwosu",
            "Customer Success",
            EmployeeStatus::Active,
            "Staff of the Month",
            [15, 14, 12, 13, 15],
            Some(5),
            &[("team-player", Some((2024, 9, 9)))],
        ),
    ];

    ActivitySnapshot {
        period: Some(DEMO_PERIOD.to_string()),
        records,
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_record(
    id: &str,
    name: &str,
    department: &str,
    status: EmployeeStatus,
    category: &str,
    points: [i32; 5],
    previous_rank: Option<u32>,
    achievements: &[(&str, Option<(i32, u32, u32)>)],
) -> EmployeeActivityRecord {
    EmployeeActivityRecord {
        employee_id: EmployeeId::from(id),
        display_name: name.to_string(),
        department: department.to_string(),
        status,
        point_breakdown: ScoreCategory::ALL.into_iter().zip(points).collect(),
        previous_rank,
        achievement_facts: achievements
            .iter()
            .map(|(badge, date)| AchievementFact {
                badge_id: BadgeId(badge.to_string()),
                earned_on: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            })
            .collect(),
        category: category.to_string(),
    }
}
