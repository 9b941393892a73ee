use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::badges::BadgeId;
use super::domain::{
    AchievementFact, ActivitySnapshot, EmployeeActivityRecord, EmployeeId, EmployeeStatus,
    PointBreakdown, ScoreCategory,
};

#[derive(Debug)]
pub enum ActivityImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidStatus { employee_id: String, value: String },
    InvalidAchievement { employee_id: String, value: String },
    InvalidPreviousRank { employee_id: String },
}

impl std::fmt::Display for ActivityImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityImportError::Io(err) => write!(f, "failed to read activity export: {}", err),
            ActivityImportError::Csv(err) => write!(f, "invalid activity CSV data: {}", err),
            ActivityImportError::InvalidStatus { employee_id, value } => {
                write!(f, "unknown status '{}' for {}", value, employee_id)
            }
            ActivityImportError::InvalidAchievement { employee_id, value } => write!(
                f,
                "achievement '{}' for {} must be badge-id or badge-id@YYYY-MM-DD",
                value, employee_id
            ),
            ActivityImportError::InvalidPreviousRank { employee_id } => {
                write!(f, "previous rank for {} must be at least 1", employee_id)
            }
        }
    }
}

impl std::error::Error for ActivityImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivityImportError::Io(err) => Some(err),
            ActivityImportError::Csv(err) => Some(err),
            ActivityImportError::InvalidStatus { .. }
            | ActivityImportError::InvalidAchievement { .. }
            | ActivityImportError::InvalidPreviousRank { .. } => None,
        }
    }
}

impl From<std::io::Error> for ActivityImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ActivityImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads an activity export (one row per employee) into a snapshot.
pub struct ActivityCsvImporter;

impl ActivityCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        period: Option<String>,
    ) -> Result<ActivitySnapshot, ActivityImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, period)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        period: Option<String>,
    ) -> Result<ActivitySnapshot, ActivityImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<ActivityRow>() {
            records.push(row?.into_record()?);
        }

        Ok(ActivitySnapshot { period, records })
    }
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    employee_id: String,
    display_name: String,
    department: String,
    status: String,
    category: String,
    #[serde(default)]
    attendance: Option<i32>,
    #[serde(default)]
    nominations: Option<i32>,
    #[serde(default)]
    voting: Option<i32>,
    #[serde(default)]
    peer_reviews: Option<i32>,
    #[serde(default)]
    badges: Option<i32>,
    #[serde(default)]
    previous_rank: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    achievements: Option<String>,
}

impl ActivityRow {
    fn into_record(self) -> Result<EmployeeActivityRecord, ActivityImportError> {
        let status = parse_status(&self.status).ok_or_else(|| {
            ActivityImportError::InvalidStatus {
                employee_id: self.employee_id.clone(),
                value: self.status.clone(),
            }
        })?;

        if self.previous_rank == Some(0) {
            return Err(ActivityImportError::InvalidPreviousRank {
                employee_id: self.employee_id,
            });
        }

        let point_breakdown: PointBreakdown = [
            (ScoreCategory::Attendance, self.attendance),
            (ScoreCategory::Nominations, self.nominations),
            (ScoreCategory::Voting, self.voting),
            (ScoreCategory::PeerReviews, self.peer_reviews),
            (ScoreCategory::Badges, self.badges),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.map(|value| (category, value)))
        .collect();

        let achievement_facts = match self.achievements.as_deref() {
            Some(raw) => parse_achievements(&self.employee_id, raw)?,
            None => Vec::new(),
        };

        Ok(EmployeeActivityRecord {
            employee_id: EmployeeId(self.employee_id),
            display_name: self.display_name,
            department: self.department,
            status,
            point_breakdown,
            previous_rank: self.previous_rank,
            achievement_facts,
            category: self.category,
        })
    }
}

fn parse_status(raw: &str) -> Option<EmployeeStatus> {
    let normalized: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.as_str() {
        "active" => Some(EmployeeStatus::Active),
        "onleave" => Some(EmployeeStatus::OnLeave),
        _ => None,
    }
}

fn parse_achievements(
    employee_id: &str,
    raw: &str,
) -> Result<Vec<AchievementFact>, ActivityImportError> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let invalid = || ActivityImportError::InvalidAchievement {
                employee_id: employee_id.to_string(),
                value: item.to_string(),
            };

            let (badge_id, earned_on) = match item.split_once('@') {
                Some((badge_id, date)) => {
                    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                        .map_err(|_| invalid())?;
                    (badge_id.trim(), Some(date))
                }
                None => (item, None),
            };

            if badge_id.is_empty() {
                return Err(invalid());
            }

            Ok(AchievementFact {
                badge_id: BadgeId::from(badge_id),
                earned_on,
            })
        })
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
