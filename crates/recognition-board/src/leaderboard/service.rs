use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::badges::BadgeCatalog;
use super::domain::ActivitySnapshot;
use super::engine::{RankingEngine, RankingError};
use super::query::{CategoryFilter, LeaderboardQuery};
use super::views::LeaderboardResponse;
use crate::config::LeaderboardConfig;

/// Loose query parameters as they arrive from the dashboard; unset fields fall back to
/// the configured presentation defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// Service composing the ranking engine with presentation defaults.
#[derive(Debug, Clone)]
pub struct LeaderboardService {
    engine: RankingEngine,
    config: LeaderboardConfig,
}

impl LeaderboardService {
    pub fn new(catalog: Arc<BadgeCatalog>, config: LeaderboardConfig) -> Self {
        Self {
            engine: RankingEngine::new(catalog),
            config,
        }
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    pub fn resolve_query(&self, params: QueryParams) -> LeaderboardQuery {
        LeaderboardQuery {
            category: params
                .category
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or_default(),
            period: params.period,
            search: params.search.unwrap_or_default(),
            page_size: params.page_size.unwrap_or(self.config.page_size),
            page_number: params.page.unwrap_or(1),
        }
    }

    /// Ranks the snapshot and renders the requested view of it.
    pub fn leaderboard(
        &self,
        snapshot: &ActivitySnapshot,
        query: &LeaderboardQuery,
    ) -> Result<LeaderboardResponse, RankingError> {
        let run = self.engine.run(snapshot)?;
        let result = run.query(query, self.config.podium_size);
        let compact = self.config.compact_badges;

        Ok(LeaderboardResponse {
            period: run.period.clone(),
            total_employees: run.entries.len(),
            matched: result.matched,
            podium: result
                .podium
                .iter()
                .map(|entry| entry.to_view(compact))
                .collect(),
            page: result.page.map(|entry| entry.to_view(compact)),
            diagnostics: run.diagnostics.clone(),
            warnings: result.warnings,
        })
    }
}
