use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::LeaderboardConfig;
use crate::leaderboard::badges::{BadgeCatalog, BadgeId};
use crate::leaderboard::domain::{
    AchievementFact, ActivitySnapshot, EmployeeActivityRecord, EmployeeId, EmployeeStatus,
    ScoreCategory,
};
use crate::leaderboard::{LeaderboardEntry, LeaderboardService, RankingEngine};

pub(super) fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid date")
}

pub(super) fn fact(badge_id: &str, earned_on: Option<&str>) -> AchievementFact {
    AchievementFact {
        badge_id: BadgeId::from(badge_id),
        earned_on: earned_on.map(date),
    }
}

pub(super) fn record(
    employee_id: &str,
    display_name: &str,
    department: &str,
    category: &str,
    points: &[(ScoreCategory, i32)],
    previous_rank: Option<u32>,
) -> EmployeeActivityRecord {
    EmployeeActivityRecord {
        employee_id: EmployeeId::from(employee_id),
        display_name: display_name.to_string(),
        department: department.to_string(),
        status: EmployeeStatus::Active,
        point_breakdown: points.iter().copied().collect(),
        previous_rank,
        achievement_facts: Vec::new(),
        category: category.to_string(),
    }
}

pub(super) fn full_points(values: [i32; 5]) -> Vec<(ScoreCategory, i32)> {
    ScoreCategory::ALL.into_iter().zip(values).collect()
}

/// Ten employees in shuffled input order; totals are distinct so ranks follow score.
///
/// | rank | id     | total | category          |
/// |------|--------|-------|-------------------|
/// | 1    | EMP001 | 95    | Staff of the Month|
/// | 2    | EMP002 | 90    | Staff of the Month|
/// | 3    | EMP003 | 86    | Most Punctual     |
/// | 4    | EMP004 | 84    | Culture Champion  |
/// | 5    | EMP005 | 81    | Staff of the Month|
/// | 6    | EMP023 | 79    | Most Punctual     |
/// | 7    | EMP007 | 77    | Innovation Award  |
/// | 8    | EMP008 | 74    | Staff of the Month|
/// | 9    | EMP009 | 71    | Culture Champion  |
/// | 10   | EMP010 | 58    | Most Punctual     |
pub(super) fn reference_records() -> Vec<EmployeeActivityRecord> {
    let mut sarah = record(
        "EMP001",
        "Sarah Johnson",
        "Engineering",
        "Staff of the Month",
        &full_points([20, 19, 18, 19, 19]),
        Some(2),
    );
    sarah.achievement_facts = vec![
        fact("team-player", Some("2024-05-12")),
        fact("top-performer", Some("2024-09-30")),
        fact("mentor", None),
        fact("perfect-attendance", Some("2024-06-30")),
    ];

    let mut david = record(
        "EMP004",
        "David Kim",
        "Engineering",
        "Culture Champion",
        &full_points([18, 17, 17, 16, 16]),
        Some(6),
    );
    david.achievement_facts = vec![
        fact("innovation-leader", Some("2024-08-15")),
        fact("innovation-champion", Some("2024-04-01")),
    ];

    let mut olivia = record(
        "EMP010",
        "Olivia Brown",
        "Accounting",
        "Most Punctual",
        &[
            (ScoreCategory::Attendance, 20),
            (ScoreCategory::Nominations, 12),
            (ScoreCategory::Voting, 13),
            (ScoreCategory::Badges, 13),
        ],
        Some(9),
    );
    olivia.status = EmployeeStatus::OnLeave;
    olivia.achievement_facts = vec![fact("perfect-attendance", None)];

    vec![
        record(
            "EMP007",
            "James Wilson",
            "Finance",
            "Innovation Award",
            &full_points([16, 16, 15, 15, 15]),
            Some(8),
        ),
        olivia,
        record(
            "EMP003",
            "Emily Rodriguez",
            "Human Resources",
            "Most Punctual",
            &full_points([20, 17, 16, 17, 16]),
            Some(3),
        ),
        sarah,
        record(
            "EMP023",
            "Priya Patel",
            "Accounting",
            "Most Punctual",
            &full_points([20, 15, 15, 15, 14]),
            Some(5),
        ),
        record(
            "EMP009",
            "Robert Taylor",
            "Operations",
            "Culture Champion",
            &full_points([15, 15, 14, 14, 13]),
            Some(10),
        ),
        record(
            "EMP002",
            "Michael Chen",
            "Marketing",
            "Staff of the Month",
            &full_points([19, 18, 18, 18, 17]),
            Some(1),
        ),
        david,
        record(
            "EMP008",
            "Anna Martinez",
            "Customer Support",
            "Staff of the Month",
            &full_points([16, 15, 15, 14, 14]),
            Some(7),
        ),
        record(
            "EMP005",
            "Lisa Thompson",
            "Sales",
            "Staff of the Month",
            &full_points([17, 16, 17, 16, 15]),
            None,
        ),
    ]
}

pub(super) fn reference_snapshot() -> ActivitySnapshot {
    ActivitySnapshot {
        period: Some("2024-10".to_string()),
        records: reference_records(),
    }
}

pub(super) fn catalog() -> Arc<BadgeCatalog> {
    Arc::new(BadgeCatalog::standard())
}

pub(super) fn engine() -> RankingEngine {
    RankingEngine::new(catalog())
}

pub(super) fn service() -> LeaderboardService {
    LeaderboardService::new(catalog(), LeaderboardConfig::default())
}

pub(super) fn ids<'a>(entries: impl IntoIterator<Item = &'a LeaderboardEntry>) -> Vec<&'a str> {
    entries
        .into_iter()
        .map(|entry| entry.employee_id.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
