// src/resumes/validators.rs

use crate::common::{ValidationResult, Validator};

use super::models::{ExperienceBracket, ExportQuery, ResumeQuery, SortKey, StatusFilter, ViewMode};

// ============================================================================
// Resume Query Validators
// ============================================================================

pub struct ResumeQueryValidator;

impl Validator<ResumeQuery> for ResumeQueryValidator {
    fn validate(&self, data: &ResumeQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(search) = &data.search {
            if search.len() > 200 {
                result.add_error("search", "Search text must be less than 200 characters");
            }
        }

        if let Some(status) = &data.status {
            if StatusFilter::parse(status).is_none() {
                result.add_error(
                    "status",
                    "Invalid status filter. Use 'all', 'processed', 'processing', 'failed' or 'archived'",
                );
            }
        }

        if let Some(experience) = &data.experience {
            if ExperienceBracket::parse(experience).is_none() {
                result.add_error(
                    "experience",
                    "Invalid experience bracket. Use 'all', 'junior', 'mid' or 'senior'",
                );
            }
        }

        if let Some(sort_by) = &data.sort_by {
            if SortKey::parse(sort_by).is_none() {
                result.add_error(
                    "sort_by",
                    "Invalid sort key. Use 'upload_date', 'name' or 'match_score'",
                );
            }
        }

        if let Some(view) = &data.view {
            if ViewMode::parse(view).is_none() {
                result.add_error("view", "Invalid view mode. Use 'grid' or 'list'");
            }
        }

        result
    }
}

// ============================================================================
// Export Query Validators
// ============================================================================

pub struct ExportQueryValidator;

impl Validator<ExportQuery> for ExportQueryValidator {
    fn validate(&self, data: &ExportQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(format) = &data.format {
            if format != "csv" && format != "json" {
                result.add_error("format", "Invalid format. Use 'csv' or 'json'");
            }
        }

        result.merge(ResumeQueryValidator.validate(&data.as_resume_query()));
        result
    }
}
