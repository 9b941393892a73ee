//! Badge catalog and the evaluator projecting it onto an employee's achievement facts.
//!
//! Earning predicates are evaluated upstream by the data provider; the evaluator only
//! intersects the supplied badge ids with the catalog, keeping catalog order. Ids the
//! catalog does not know are skipped and reported on the diagnostic channel so callers
//! that want strict validation can act on them without failing a run.

mod catalog;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{AchievementFact, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(pub String);

impl BadgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BadgeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Icon identifiers resolved to artwork by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeIcon {
    Trophy,
    Star,
    Clock,
    Users,
    Lightbulb,
    Heart,
    Award,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: BadgeIcon,
}

impl BadgeDefinition {
    pub fn new(id: &str, name: &str, description: &str, icon: BadgeIcon) -> Self {
        Self {
            id: BadgeId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("badge '{0}' is defined more than once")]
    DuplicateBadge(BadgeId),
}

/// Canonical, read-only badge list. Its order is the presentation order of earned badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for badge in &badges {
            if !seen.insert(&badge.id) {
                return Err(CatalogError::DuplicateBadge(badge.id.clone()));
            }
        }

        Ok(Self { badges })
    }

    pub fn standard() -> Self {
        Self {
            badges: catalog::standard_badges(),
        }
    }

    pub fn get(&self, id: &BadgeId) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|badge| &badge.id == id)
    }

    pub fn contains(&self, id: &BadgeId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

/// Catalog badge held by an employee. `earned_on` is `None` when the provider had no date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedBadge {
    #[serde(flatten)]
    pub badge: BadgeDefinition,
    pub earned_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeDiagnostic {
    UnknownBadgeId {
        employee_id: EmployeeId,
        badge_id: BadgeId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeEvaluation {
    pub earned: Vec<EarnedBadge>,
    pub diagnostics: Vec<BadgeDiagnostic>,
}

impl BadgeEvaluation {
    pub fn top_badges(&self, limit: usize) -> TopBadges<'_> {
        top_badges(&self.earned, limit)
    }
}

/// Compact badge view: leading badges plus how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBadges<'a> {
    pub shown: &'a [EarnedBadge],
    pub remaining: usize,
}

pub fn top_badges(earned: &[EarnedBadge], limit: usize) -> TopBadges<'_> {
    let cut = limit.min(earned.len());
    TopBadges {
        shown: &earned[..cut],
        remaining: earned.len() - cut,
    }
}

/// Projects the shared catalog onto achievement facts.
#[derive(Debug, Clone)]
pub struct BadgeEvaluator {
    catalog: Arc<BadgeCatalog>,
}

impl BadgeEvaluator {
    pub fn new(catalog: Arc<BadgeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, employee_id: &EmployeeId, facts: &[AchievementFact]) -> BadgeEvaluation {
        let mut earned_on: BTreeMap<&BadgeId, Option<NaiveDate>> = BTreeMap::new();
        let mut unknown: BTreeSet<&BadgeId> = BTreeSet::new();

        for fact in facts {
            if !self.catalog.contains(&fact.badge_id) {
                unknown.insert(&fact.badge_id);
                continue;
            }

            earned_on
                .entry(&fact.badge_id)
                .and_modify(|current| *current = earliest(*current, fact.earned_on))
                .or_insert(fact.earned_on);
        }

        let earned = self
            .catalog
            .iter()
            .filter_map(|badge| {
                earned_on.get(&badge.id).map(|date| EarnedBadge {
                    badge: badge.clone(),
                    earned_on: *date,
                })
            })
            .collect();

        let diagnostics = unknown
            .into_iter()
            .map(|badge_id| {
                warn!(%employee_id, %badge_id, "ignoring badge id missing from catalog");
                BadgeDiagnostic::UnknownBadgeId {
                    employee_id: employee_id.clone(),
                    badge_id: badge_id.clone(),
                }
            })
            .collect();

        BadgeEvaluation {
            earned,
            diagnostics,
        }
    }
}

fn earliest(left: Option<NaiveDate>, right: Option<NaiveDate>) -> Option<NaiveDate> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.min(right)),
        (date, None) | (None, date) => date,
    }
}
