use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::LeaderboardEntry;

/// Sentinel the dashboard sends when no category is selected.
pub const ALL_CATEGORIES: &str = "All Categories";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES || trimmed == "All" {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => expected == category,
        }
    }
}

/// Immutable filter, search, and paging parameters for one leaderboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub category: CategoryFilter,
    pub period: Option<String>,
    pub search: String,
    pub page_size: usize,
    pub page_number: usize,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            period: None,
            search: String::new(),
            page_size: 10,
            page_number: 1,
        }
    }
}

impl LeaderboardQuery {
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = CategoryFilter::parse(category);
        self
    }

    pub fn with_period(mut self, period: &str) -> Self {
        self.period = Some(period.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_page(mut self, page_size: usize, page_number: usize) -> Self {
        self.page_size = page_size;
        self.page_number = page_number;
        self
    }

    fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

/// Soft problems with a query. They never fail the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryWarning {
    InvalidCategoryFilter { category: String },
}

/// Flags a category filter naming none of the `known` categories.
pub fn validate_category(filter: &CategoryFilter, known: &BTreeSet<&str>) -> Option<QueryWarning> {
    match filter {
        CategoryFilter::Only(category) if !known.contains(category.as_str()) => {
            Some(QueryWarning::InvalidCategoryFilter {
                category: category.clone(),
            })
        }
        _ => None,
    }
}

/// Applies category, period, and search predicates. Ranks are left untouched.
pub fn filter_entries<'a>(
    entries: &'a [LeaderboardEntry],
    query: &LeaderboardQuery,
) -> Vec<&'a LeaderboardEntry> {
    let needle = query.search_needle();

    entries
        .iter()
        .filter(|entry| query.category.matches(&entry.category))
        .filter(|entry| match &query.period {
            Some(period) => entry.period.as_deref() == Some(period.as_str()),
            None => true,
        })
        .filter(|entry| match &needle {
            Some(needle) => matches_search(entry, needle),
            None => true,
        })
        .collect()
}

/// Case-insensitive substring match on employee id or department.
fn matches_search(entry: &LeaderboardEntry, needle: &str) -> bool {
    entry.employee_id.as_str().to_lowercase().contains(needle)
        || entry.department.to_lowercase().contains(needle)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Slices `items` into a 1-based page. Out-of-range pages come back empty.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let items = if page_number == 0 || page_number > total_pages {
        Vec::new()
    } else {
        let start = (page_number - 1) * page_size;
        let end = (start + page_size).min(total_items);
        items[start..end].to_vec()
    };

    Page {
        items,
        page_number,
        page_size,
        total_items,
        total_pages,
    }
}

/// Leading `podium_size` entries of an already filtered, already ranked sequence.
/// The podium highlights entries; it does not remove them from the paged sequence.
pub fn take_podium<T: Clone>(items: &[T], podium_size: usize) -> Vec<T> {
    items[..podium_size.min(items.len())].to_vec()
}
