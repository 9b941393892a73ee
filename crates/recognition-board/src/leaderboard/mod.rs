//! Recognition ranking and scoring engine.
//!
//! Data flows one way: activity records are scored, ranked, and enriched with badges
//! in a single run, and the run is then filtered, split, and paged for presentation.
//! Every step is a pure function over an immutable snapshot, so concurrent runs only
//! share the read-only badge catalog.

pub mod badges;
pub mod domain;
mod engine;
pub mod import;
pub mod query;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use badges::{
    BadgeCatalog, BadgeDefinition, BadgeDiagnostic, BadgeEvaluation, BadgeEvaluator, BadgeIcon,
    BadgeId, CatalogError, EarnedBadge, TopBadges,
};
pub use domain::{
    AchievementFact, ActivitySnapshot, EmployeeActivityRecord, EmployeeId, EmployeeStatus,
    LeaderboardEntry, PointBreakdown, RankTrend, ScoreCategory,
};
pub use engine::{LeaderboardRun, QueryResult, RankingEngine, RankingError};
pub use import::{ActivityCsvImporter, ActivityImportError};
pub use query::{CategoryFilter, LeaderboardQuery, Page, QueryWarning};
pub use router::leaderboard_router;
pub use scoring::ScoreError;
pub use service::{LeaderboardService, QueryParams};
pub use views::{LeaderboardEntryView, LeaderboardResponse};
