// src/dashboard/models.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::resumes::models::ResumeStatus;

// Dashboard models
#[derive(Debug, Serialize)]
pub struct DashboardMetrics {
    // Core metrics
    pub total_resumes: i64,
    pub processed: i64,
    pub processing: i64,
    pub failed: i64,
    pub archived: i64,
    pub processed_today: i64,
    pub average_match_score: Option<f64>,
    pub last_updated: String,

    // Breakdown for charts
    pub resumes_by_status: HashMap<String, i64>,

    // Top items
    pub top_skills: Vec<SkillCount>,

    // Recent activity
    pub recent_uploads: Vec<RecentUpload>,
}

#[derive(Debug, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct RecentUpload {
    pub id: String,
    pub name: String,
    pub position: String,
    pub upload_date: NaiveDate,
    pub status: ResumeStatus,
    pub match_score: Option<u8>,
}
