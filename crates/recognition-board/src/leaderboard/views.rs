use chrono::NaiveDate;
use serde::Serialize;

use super::badges::{top_badges, BadgeDiagnostic, BadgeIcon, EarnedBadge, TopBadges};
use super::domain::{EmployeeId, EmployeeStatus, LeaderboardEntry, PointBreakdown, RankTrend};
use super::query::{Page, QueryWarning};
use super::scoring::score_bound;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub id: String,
    pub name: String,
    pub icon: BadgeIcon,
    /// `None` renders as "earned, date unknown".
    pub earned_on: Option<NaiveDate>,
}

impl From<&EarnedBadge> for BadgeView {
    fn from(earned: &EarnedBadge) -> Self {
        Self {
            id: earned.badge.id.0.clone(),
            name: earned.badge.name.clone(),
            icon: earned.badge.icon,
            earned_on: earned.earned_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactBadgesView {
    pub shown: Vec<BadgeView>,
    pub remaining: usize,
}

impl From<TopBadges<'_>> for CompactBadgesView {
    fn from(top: TopBadges<'_>) -> Self {
        Self {
            shown: top.shown.iter().map(BadgeView::from).collect(),
            remaining: top.remaining,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntryView {
    pub rank: u32,
    pub employee_id: EmployeeId,
    pub display_name: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub status_label: &'static str,
    pub category: String,
    pub total_score: u32,
    pub max_score: u32,
    pub point_breakdown: PointBreakdown,
    pub rank_trend: RankTrend,
    pub trend_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_change: Option<i64>,
    pub badges: CompactBadgesView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl LeaderboardEntry {
    pub fn top_badges(&self, limit: usize) -> TopBadges<'_> {
        top_badges(&self.earned_badges, limit)
    }

    pub fn to_view(&self, compact_badges: usize) -> LeaderboardEntryView {
        LeaderboardEntryView {
            rank: self.rank,
            employee_id: self.employee_id.clone(),
            display_name: self.display_name.clone(),
            department: self.department.clone(),
            status: self.status,
            status_label: self.status.label(),
            category: self.category.clone(),
            total_score: self.total_score,
            max_score: score_bound(&self.point_breakdown),
            point_breakdown: self.point_breakdown.clone(),
            rank_trend: self.rank_trend,
            trend_label: self.rank_trend.label(),
            previous_rank: self.previous_rank,
            rank_change: self.rank_change,
            badges: self.top_badges(compact_badges).into(),
            period: self.period.clone(),
        }
    }
}

/// Payload handed to the presentation layer for one leaderboard screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub total_employees: usize,
    pub matched: usize,
    pub podium: Vec<LeaderboardEntryView>,
    pub page: Page<LeaderboardEntryView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<BadgeDiagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<QueryWarning>,
}
