// src/dashboard/metrics.rs
//! Dashboard metrics computed from the live collection.
//!
//! The frontend dashboard used to render hard-coded numbers; these are the
//! same figures derived honestly from whatever the store currently holds.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

use crate::resumes::models::{ResumeRecord, ResumeStatus};

use super::models::{DashboardMetrics, RecentUpload, SkillCount};

const TOP_SKILL_LIMIT: usize = 5;
const RECENT_UPLOAD_LIMIT: usize = 5;

pub fn compute_metrics(records: &[ResumeRecord], today: NaiveDate) -> DashboardMetrics {
    let mut resumes_by_status: HashMap<String, i64> = HashMap::new();
    for record in records {
        *resumes_by_status
            .entry(record.status.as_str().to_string())
            .or_insert(0) += 1;
    }

    let count_of = |status: ResumeStatus| {
        resumes_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0)
    };

    let processed_today = records
        .iter()
        .filter(|r| r.status == ResumeStatus::Processed && r.upload_date == today)
        .count() as i64;

    let scores: Vec<f64> = records
        .iter()
        .filter_map(|r| r.match_score.map(f64::from))
        .collect();
    let average_match_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    DashboardMetrics {
        total_resumes: records.len() as i64,
        processed: count_of(ResumeStatus::Processed),
        processing: count_of(ResumeStatus::Processing),
        failed: count_of(ResumeStatus::Failed),
        archived: count_of(ResumeStatus::Archived),
        processed_today,
        average_match_score,
        last_updated: Utc::now().to_rfc3339(),
        resumes_by_status,
        top_skills: top_skills(records),
        recent_uploads: recent_uploads(records),
    }
}

/// Most frequent skills, ties broken alphabetically for a stable response.
fn top_skills(records: &[ResumeRecord]) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for record in records {
        for skill in &record.skills {
            *counts.entry(skill.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, i64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_SKILL_LIMIT)
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect()
}

fn recent_uploads(records: &[ResumeRecord]) -> Vec<RecentUpload> {
    let mut ordered: Vec<&ResumeRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
    ordered
        .into_iter()
        .take(RECENT_UPLOAD_LIMIT)
        .map(|r| RecentUpload {
            id: r.id.clone(),
            name: r.name.clone(),
            position: r.position.clone(),
            upload_date: r.upload_date,
            status: r.status,
            match_score: r.match_score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resumes::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_status_counts_cover_collection() {
        let records = seed::builtin_records();
        let metrics = compute_metrics(&records, today());

        assert_eq!(metrics.total_resumes, 6);
        assert_eq!(metrics.processed, 3);
        assert_eq!(metrics.processing, 1);
        assert_eq!(metrics.failed, 1);
        assert_eq!(metrics.archived, 1);
        assert_eq!(
            metrics.processed + metrics.processing + metrics.failed + metrics.archived,
            metrics.total_resumes
        );
        assert_eq!(metrics.resumes_by_status.get("processed"), Some(&3));
    }

    #[test]
    fn test_processed_today_matches_upload_date() {
        let records = seed::builtin_records();
        let metrics = compute_metrics(&records, today());
        // Only Sarah Johnson is processed with upload date 2024-01-15.
        assert_eq!(metrics.processed_today, 1);

        let other_day = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let metrics = compute_metrics(&records, other_day);
        assert_eq!(metrics.processed_today, 0);
    }

    #[test]
    fn test_average_ignores_unscored_records() {
        let records = seed::builtin_records();
        let metrics = compute_metrics(&records, today());
        // Scores: 95, 92, 88, 71, 90 (David Kim has none).
        let expected = (95.0 + 92.0 + 88.0 + 71.0 + 90.0) / 5.0;
        assert_eq!(metrics.average_match_score, Some(expected));
    }

    #[test]
    fn test_average_absent_for_unscored_collection() {
        let mut records = seed::builtin_records();
        for record in &mut records {
            record.match_score = None;
        }
        let metrics = compute_metrics(&records, today());
        assert_eq!(metrics.average_match_score, None);
    }

    #[test]
    fn test_top_skills_ranked_and_capped() {
        let records = seed::builtin_records();
        let metrics = compute_metrics(&records, today());

        assert!(metrics.top_skills.len() <= 5);
        // AWS, Kubernetes, Python and React each appear twice; the tie
        // breaks alphabetically.
        assert_eq!(metrics.top_skills[0].skill, "AWS");
        assert_eq!(metrics.top_skills[0].count, 2);
        for pair in metrics.top_skills.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_recent_uploads_most_recent_first() {
        let records = seed::builtin_records();
        let metrics = compute_metrics(&records, today());

        assert_eq!(metrics.recent_uploads.len(), 5);
        assert_eq!(metrics.recent_uploads[0].id, "R_7F3K2M");
        for pair in metrics.recent_uploads.windows(2) {
            assert!(pair[0].upload_date >= pair[1].upload_date);
        }
    }
}
