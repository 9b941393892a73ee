use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::badges::{BadgeCatalog, BadgeDiagnostic, BadgeEvaluator};
use super::domain::{ActivitySnapshot, EmployeeId, LeaderboardEntry};
use super::query::{
    filter_entries, paginate, take_podium, validate_category, LeaderboardQuery, Page,
    QueryWarning,
};
use super::ranking::{assign_ranks, rank_change, rank_trend};
use super::scoring::{aggregate, ScoreError};

/// Failure aborting a whole ranking run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("employee '{0}' appears more than once in the snapshot")]
    DuplicateEmployee(EmployeeId),
    #[error("previous rank for {0} must be at least 1")]
    InvalidPreviousRank(EmployeeId),
}

/// Stateless pipeline: aggregate, rank, enrich with badges.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    badges: BadgeEvaluator,
}

impl RankingEngine {
    pub fn new(catalog: Arc<BadgeCatalog>) -> Self {
        Self {
            badges: BadgeEvaluator::new(catalog),
        }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        self.badges.catalog()
    }

    /// Ranks every record of the snapshot. Any invalid record fails the whole run.
    pub fn run(&self, snapshot: &ActivitySnapshot) -> Result<LeaderboardRun, RankingError> {
        let mut seen = BTreeSet::new();
        let mut scores = Vec::with_capacity(snapshot.records.len());

        for record in &snapshot.records {
            if !seen.insert(&record.employee_id) {
                return Err(RankingError::DuplicateEmployee(record.employee_id.clone()));
            }
            if record.previous_rank == Some(0) {
                return Err(RankingError::InvalidPreviousRank(
                    record.employee_id.clone(),
                ));
            }
            scores.push((record.employee_id.clone(), aggregate(record)?));
        }

        let ranks = assign_ranks(&scores);
        let totals: BTreeMap<&EmployeeId, u32> =
            scores.iter().map(|(id, total)| (id, *total)).collect();

        let mut diagnostics = Vec::new();
        let mut entries: Vec<LeaderboardEntry> = snapshot
            .records
            .iter()
            .map(|record| {
                let rank = ranks[&record.employee_id];
                let evaluation = self
                    .badges
                    .evaluate(&record.employee_id, &record.achievement_facts);
                diagnostics.extend(evaluation.diagnostics);

                LeaderboardEntry {
                    employee_id: record.employee_id.clone(),
                    display_name: record.display_name.clone(),
                    department: record.department.clone(),
                    status: record.status,
                    category: record.category.clone(),
                    point_breakdown: record.point_breakdown.clone(),
                    previous_rank: record.previous_rank,
                    achievement_facts: record.achievement_facts.clone(),
                    total_score: totals[&record.employee_id],
                    rank,
                    rank_trend: rank_trend(rank, record.previous_rank),
                    rank_change: rank_change(rank, record.previous_rank),
                    earned_badges: evaluation.earned,
                    period: snapshot.period.clone(),
                }
            })
            .collect();

        entries.sort_by_key(|entry| entry.rank);
        diagnostics.sort_by(|left, right| diagnostic_key(left).cmp(&diagnostic_key(right)));

        debug!(
            employees = entries.len(),
            diagnostics = diagnostics.len(),
            period = snapshot.period.as_deref().unwrap_or("unspecified"),
            "leaderboard ranked"
        );

        Ok(LeaderboardRun {
            period: snapshot.period.clone(),
            entries,
            diagnostics,
        })
    }
}

fn diagnostic_key(diagnostic: &BadgeDiagnostic) -> (&EmployeeId, &str) {
    match diagnostic {
        BadgeDiagnostic::UnknownBadgeId {
            employee_id,
            badge_id,
        } => (employee_id, badge_id.as_str()),
    }
}

/// Result of one ranking run, ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRun {
    pub period: Option<String>,
    pub entries: Vec<LeaderboardEntry>,
    pub diagnostics: Vec<BadgeDiagnostic>,
}

/// One filtered view over a run: the podium of the filtered set plus the requested page.
/// Pages slice the whole filtered sequence, so podium entries also appear on their page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    pub matched: usize,
    pub podium: Vec<&'a LeaderboardEntry>,
    pub page: Page<&'a LeaderboardEntry>,
    pub warnings: Vec<QueryWarning>,
}

impl LeaderboardRun {
    pub fn entry(&self, employee_id: &EmployeeId) -> Option<&LeaderboardEntry> {
        self.entries
            .iter()
            .find(|entry| &entry.employee_id == employee_id)
    }

    /// Distinct recognition categories present in the run.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect()
    }

    pub fn query(&self, query: &LeaderboardQuery, podium_size: usize) -> QueryResult<'_> {
        let mut warnings = Vec::new();
        if let Some(warning) = validate_category(&query.category, &self.categories()) {
            warn!(?warning, "category filter matches no known category");
            warnings.push(warning);
        }

        let filtered = filter_entries(&self.entries, query);

        QueryResult {
            matched: filtered.len(),
            podium: take_podium(&filtered, podium_size),
            page: paginate(&filtered, query.page_size, query.page_number),
            warnings,
        }
    }
}
