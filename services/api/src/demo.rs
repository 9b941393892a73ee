use crate::infra::{demo_snapshot, load_snapshot};
use clap::Args;
use recognition_board::config::{AppConfig, LeaderboardConfig};
use recognition_board::error::AppError;
use recognition_board::leaderboard::{
    BadgeCatalog, BadgeDiagnostic, LeaderboardEntryView, LeaderboardResponse, LeaderboardService,
    QueryParams, QueryWarning,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Narrow the second demo view to one award category.
    #[arg(long, default_value = "Culture Champion")]
    pub(crate) category: String,
    /// Entries per page for the demo output.
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    /// Print the badge catalog before the leaderboard.
    #[arg(long)]
    pub(crate) list_badges: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Activity snapshot to rank (.json snapshot or .csv export)
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Award category to show ("All Categories" shows everyone)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Period label; also labels CSV exports, which carry none
    #[arg(long)]
    pub(crate) period: Option<String>,
    /// Case-insensitive match on employee id or department
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// 1-based page number
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Entries per page (defaults to LEADERBOARD_PAGE_SIZE)
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
}

pub(crate) fn run_rank_report(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        snapshot,
        category,
        period,
        search,
        page,
        page_size,
    } = args;

    let config = AppConfig::load()?;
    let service = LeaderboardService::new(Arc::new(BadgeCatalog::standard()), config.leaderboard);
    let snapshot = load_snapshot(&snapshot, period.clone())?;

    let query = service.resolve_query(QueryParams {
        category,
        period,
        search,
        page,
        page_size,
    });
    let response = service.leaderboard(&snapshot, &query)?;
    render_leaderboard(&response);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        category,
        page_size,
        list_badges,
    } = args;

    let catalog = Arc::new(BadgeCatalog::standard());
    let service = LeaderboardService::new(catalog.clone(), LeaderboardConfig::default());
    let snapshot = demo_snapshot();

    println!("Recognition leaderboard demo");

    if list_badges {
        println!("\nBadge catalog");
        for badge in catalog.iter() {
            println!("- {} ({}): {}", badge.name, badge.id, badge.description);
        }
    }

    let overall = service.leaderboard(
        &snapshot,
        &service.resolve_query(QueryParams {
            page_size,
            ..QueryParams::default()
        }),
    )?;
    render_leaderboard(&overall);

    println!("\n--- Filtered by category: {category} ---");
    let filtered = service.leaderboard(
        &snapshot,
        &service.resolve_query(QueryParams {
            category: Some(category),
            page_size,
            ..QueryParams::default()
        }),
    )?;
    render_leaderboard(&filtered);

    Ok(())
}

pub(crate) fn render_leaderboard(response: &LeaderboardResponse) {
    match &response.period {
        Some(period) => println!("\nLeaderboard for {period}"),
        None => println!("\nLeaderboard"),
    }
    println!(
        "{} of {} employees match",
        response.matched, response.total_employees
    );

    if !response.podium.is_empty() {
        println!("\nPodium");
        for entry in &response.podium {
            println!(
                "  #{} {} ({}) {}/{} pts",
                entry.rank, entry.display_name, entry.department, entry.total_score, entry.max_score
            );
        }
    }

    let page = &response.page;
    if page.items.is_empty() {
        println!("\nNo entries on page {}", page.page_number);
    } else {
        println!(
            "\nPage {}/{} ({} per page)",
            page.page_number, page.total_pages, page.page_size
        );
        for entry in &page.items {
            println!("- {}", describe_entry(entry));
        }
    }

    if !response.diagnostics.is_empty() {
        println!("\nBadge diagnostics");
        for diagnostic in &response.diagnostics {
            match diagnostic {
                BadgeDiagnostic::UnknownBadgeId {
                    employee_id,
                    badge_id,
                } => println!("- {employee_id}: unknown badge '{badge_id}' ignored"),
            }
        }
    }

    for warning in &response.warnings {
        match warning {
            QueryWarning::InvalidCategoryFilter { category } => {
                println!("\nWarning: no employee is in category '{category}'")
            }
        }
    }
}

fn describe_entry(entry: &LeaderboardEntryView) -> String {
    let movement = match entry.rank_change {
        Some(change) if change > 0 => format!("{} {change}", entry.trend_label),
        Some(change) if change < 0 => format!("{} {}", entry.trend_label, change.abs()),
        _ => entry.trend_label.to_string(),
    };

    let mut badges: Vec<&str> = entry
        .badges
        .shown
        .iter()
        .map(|badge| badge.name.as_str())
        .collect();
    let more = format!("+{} more", entry.badges.remaining);
    if entry.badges.remaining > 0 {
        badges.push(more.as_str());
    }
    let badges = if badges.is_empty() {
        "no badges".to_string()
    } else {
        badges.join(", ")
    };

    format!(
        "#{} {} {} | {} | {} | {} pts | {} | {}",
        entry.rank,
        entry.employee_id,
        entry.display_name,
        entry.department,
        entry.status_label,
        entry.total_score,
        movement,
        badges
    )
}
