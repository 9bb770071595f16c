// src/resumes/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Resume Models
// ============================================================================

/// Processing status of a parsed resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    Processed,
    Processing,
    Failed,
    Archived,
}

impl ResumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::Processed => "processed",
            ResumeStatus::Processing => "processing",
            ResumeStatus::Failed => "failed",
            ResumeStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "processed" => Some(ResumeStatus::Processed),
            "processing" => Some(ResumeStatus::Processing),
            "failed" => Some(ResumeStatus::Failed),
            "archived" => Some(ResumeStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistoryEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
}

/// One parsed resume as held by the in-memory collection.
///
/// `id` may be omitted in seed files; the loader assigns a generated one.
/// Seeded ids are otherwise kept verbatim so share links survive restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub education: String,
    pub upload_date: NaiveDate,
    pub status: ResumeStatus,
    pub match_score: Option<u8>,
    pub location: String,
    pub salary_range: String,
    pub summary: String,
    #[serde(default)]
    pub work_history: Vec<WorkHistoryEntry>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
}

// ============================================================================
// View Parameters
// ============================================================================

/// Status filter: a specific status or pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ResumeStatus),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(StatusFilter::All);
        }
        ResumeStatus::parse(value).map(StatusFilter::Only)
    }

    pub fn allows(&self, status: ResumeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Parse the leading integer of a free-text experience value.
///
/// "8 years" yields 8; a value with no leading digits ("Entry level")
/// yields None and the record is excluded from every bracket except `all`.
pub fn leading_years(experience: &str) -> Option<u32> {
    let digits: String = experience
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Experience bracket derived from the leading years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBracket {
    All,
    /// 0-3 years
    Junior,
    /// 4-7 years
    Mid,
    /// 8+ years
    Senior,
}

impl ExperienceBracket {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(ExperienceBracket::All),
            "junior" => Some(ExperienceBracket::Junior),
            "mid" => Some(ExperienceBracket::Mid),
            "senior" => Some(ExperienceBracket::Senior),
            _ => None,
        }
    }

    pub fn matches(&self, experience: &str) -> bool {
        if let ExperienceBracket::All = self {
            return true;
        }
        let years = match leading_years(experience) {
            Some(years) => years,
            None => return false,
        };
        match self {
            ExperienceBracket::All => true,
            ExperienceBracket::Junior => years <= 3,
            ExperienceBracket::Mid => (4..=7).contains(&years),
            ExperienceBracket::Senior => years > 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBracket::All => "all",
            ExperienceBracket::Junior => "junior",
            ExperienceBracket::Mid => "mid",
            ExperienceBracket::Senior => "senior",
        }
    }
}

/// Sort key for the visible projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent upload first
    UploadDate,
    /// Case-insensitive lexicographic, ascending
    Name,
    /// Highest score first, absent scored as 0
    MatchScore,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upload_date" => Some(SortKey::UploadDate),
            "name" => Some(SortKey::Name),
            "match_score" => Some(SortKey::MatchScore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::UploadDate => "upload_date",
            SortKey::Name => "name",
            SortKey::MatchScore => "match_score",
        }
    }
}

/// Presentation-only view mode. Validated and echoed back, never affects
/// which records are returned or their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

// ============================================================================
// Request / Response Models
// ============================================================================

/// Raw query parameters for the resume list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ResumeQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub experience: Option<String>,
    pub sort_by: Option<String>,
    pub view: Option<String>,
}

impl ResumeQuery {
    /// Resolve the validated raw parameters into typed view options.
    /// Unrecognized values fall back to the pass-through defaults; the
    /// validators reject them before this is reached.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            search: self.search.clone().unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .and_then(StatusFilter::parse)
                .unwrap_or(StatusFilter::All),
            bracket: self
                .experience
                .as_deref()
                .and_then(ExperienceBracket::parse)
                .unwrap_or(ExperienceBracket::All),
            sort: self
                .sort_by
                .as_deref()
                .and_then(SortKey::parse)
                .unwrap_or(SortKey::UploadDate),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
            .as_deref()
            .and_then(ViewMode::parse)
            .unwrap_or(ViewMode::List)
    }
}

/// Raw query parameters for the export endpoint: the list filters plus an
/// output format.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub experience: Option<String>,
    pub sort_by: Option<String>,
    pub view: Option<String>,
}

impl ExportQuery {
    pub fn as_resume_query(&self) -> ResumeQuery {
        ResumeQuery {
            search: self.search.clone(),
            status: self.status.clone(),
            experience: self.experience.clone(),
            sort_by: self.sort_by.clone(),
            view: self.view.clone(),
        }
    }
}

/// Typed, validated parameters for computing the visible projection.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub search: String,
    pub status: StatusFilter,
    pub bracket: ExperienceBracket,
    pub sort: SortKey,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            bracket: ExperienceBracket::All,
            sort: SortKey::UploadDate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewMeta {
    pub visible: usize,
    pub total: usize,
    pub search: String,
    pub status: String,
    pub experience: String,
    pub sort_by: String,
    pub view: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRecord>,
    pub meta: ViewMeta,
}
