use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badges::{BadgeId, EarnedBadge};

/// Identifier wrapper for employees; ordering drives the rank tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    OnLeave,
}

impl EmployeeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }
}

/// Activity signal families contributing to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    Attendance,
    Nominations,
    Voting,
    PeerReviews,
    Badges,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Attendance,
        ScoreCategory::Nominations,
        ScoreCategory::Voting,
        ScoreCategory::PeerReviews,
        ScoreCategory::Badges,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ScoreCategory::Attendance => "attendance",
            ScoreCategory::Nominations => "nominations",
            ScoreCategory::Voting => "voting",
            ScoreCategory::PeerReviews => "peerReviews",
            ScoreCategory::Badges => "badges",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw per-category points. Values are validated by the aggregator, not here.
pub type PointBreakdown = BTreeMap<ScoreCategory, i32>;

/// Raw achievement fact supplied by the data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementFact {
    pub badge_id: BadgeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_on: Option<NaiveDate>,
}

/// Immutable input row describing one employee for one ranking period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeActivityRecord {
    pub employee_id: EmployeeId,
    pub display_name: String,
    pub department: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub point_breakdown: PointBreakdown,
    #[serde(default)]
    pub previous_rank: Option<u32>,
    #[serde(default)]
    pub achievement_facts: Vec<AchievementFact>,
    pub category: String,
}

/// Snapshot handed over by the data provider for a single ranking run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub records: Vec<EmployeeActivityRecord>,
}

/// Movement of an employee between the previous and the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankTrend {
    Improved,
    Declined,
    Unchanged,
    New,
}

impl RankTrend {
    pub const fn label(self) -> &'static str {
        match self {
            RankTrend::Improved => "up",
            RankTrend::Declined => "down",
            RankTrend::Unchanged => "same",
            RankTrend::New => "new",
        }
    }
}

/// Derived leaderboard row produced by a ranking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub employee_id: EmployeeId,
    pub display_name: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub category: String,
    pub point_breakdown: PointBreakdown,
    pub previous_rank: Option<u32>,
    pub achievement_facts: Vec<AchievementFact>,
    pub total_score: u32,
    pub rank: u32,
    pub rank_trend: RankTrend,
    pub rank_change: Option<i64>,
    pub earned_badges: Vec<EarnedBadge>,
    pub period: Option<String>,
}
