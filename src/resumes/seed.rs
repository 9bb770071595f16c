// src/resumes/seed.rs
//! Built-in seed collection for the demo deployment.
//!
//! Records are seeded once at startup; there is no upload path. A JSON file
//! named by RESUME_SEED_PATH replaces the built-in set, and entries in that
//! file may omit their id.

use chrono::NaiveDate;

use crate::common::generate_resume_id;

use super::models::{ResumeRecord, ResumeStatus, WorkHistoryEntry};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are literal and always valid.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn job(company: &str, position: &str, duration: &str) -> WorkHistoryEntry {
    WorkHistoryEntry {
        company: company.to_string(),
        position: position.to_string(),
        duration: duration.to_string(),
    }
}

/// Assign generated ids to records that arrived without one.
pub fn assign_missing_ids(records: &mut [ResumeRecord]) {
    for record in records.iter_mut() {
        if record.id.is_empty() {
            record.id = generate_resume_id();
        }
    }
}

/// The built-in demo collection. Covers every status and experience
/// bracket, including one record whose experience has no parseable years.
pub fn builtin_records() -> Vec<ResumeRecord> {
    vec![
        ResumeRecord {
            id: "R_7F3K2M".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            position: "Senior Software Engineer".to_string(),
            experience: "8 years".to_string(),
            skills: strings(&[
                "React",
                "Node.js",
                "Python",
                "AWS",
                "Docker",
                "Kubernetes",
            ]),
            education: "Master's in Computer Science - Stanford University".to_string(),
            upload_date: date(2024, 1, 15),
            status: ResumeStatus::Processed,
            match_score: Some(95),
            location: "San Francisco, CA".to_string(),
            salary_range: "$150,000 - $180,000".to_string(),
            summary: "Experienced full-stack developer with expertise in modern web technologies and cloud infrastructure.".to_string(),
            work_history: vec![
                job("Google", "Senior Software Engineer", "2020-2024"),
                job("Facebook", "Software Engineer", "2018-2020"),
            ],
            certifications: strings(&[
                "AWS Solutions Architect",
                "Certified Kubernetes Administrator",
            ]),
            languages: strings(&["English (Native)", "Spanish (Fluent)"]),
            projects: strings(&[
                "E-commerce Platform",
                "Real-time Chat Application",
                "ML-powered Recommendation System",
            ]),
        },
        ResumeRecord {
            id: "R_8MWQT2".to_string(),
            name: "Michael Chen".to_string(),
            email: "m.chen@email.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            position: "Data Scientist".to_string(),
            experience: "5 years".to_string(),
            skills: strings(&[
                "Python",
                "Machine Learning",
                "SQL",
                "TensorFlow",
                "PyTorch",
                "R",
            ]),
            education: "PhD in Data Science - MIT".to_string(),
            upload_date: date(2024, 1, 14),
            status: ResumeStatus::Processed,
            match_score: Some(92),
            location: "Boston, MA".to_string(),
            salary_range: "$130,000 - $160,000".to_string(),
            summary: "Data scientist with strong background in machine learning and statistical analysis.".to_string(),
            work_history: vec![
                job("Netflix", "Senior Data Scientist", "2021-2024"),
                job("Uber", "Data Scientist", "2019-2021"),
            ],
            certifications: strings(&[
                "Google Cloud Professional Data Engineer",
                "AWS Machine Learning Specialty",
            ]),
            languages: strings(&["English (Native)", "Mandarin (Native)"]),
            projects: strings(&[
                "Recommendation Algorithm",
                "Fraud Detection System",
                "Customer Segmentation Model",
            ]),
        },
        ResumeRecord {
            id: "R_K7NP3X".to_string(),
            name: "Emily Rodriguez".to_string(),
            email: "emily.r@email.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            position: "Product Manager".to_string(),
            experience: "6 years".to_string(),
            skills: strings(&[
                "Product Strategy",
                "Agile",
                "Scrum",
                "Analytics",
                "User Research",
                "Roadmapping",
            ]),
            education: "MBA in Business Administration - Harvard Business School".to_string(),
            upload_date: date(2024, 1, 13),
            status: ResumeStatus::Processing,
            match_score: Some(88),
            location: "New York, NY".to_string(),
            salary_range: "$140,000 - $170,000".to_string(),
            summary: "Strategic product manager with proven track record of launching successful digital products.".to_string(),
            work_history: vec![
                job("Amazon", "Senior Product Manager", "2020-2024"),
                job("Microsoft", "Product Manager", "2018-2020"),
            ],
            certifications: strings(&[
                "Certified Scrum Product Owner",
                "Google Analytics Certified",
            ]),
            languages: strings(&["English (Native)", "Spanish (Fluent)"]),
            projects: strings(&[
                "Mobile App Launch",
                "B2B Platform Redesign",
                "AI-powered Features",
            ]),
        },
        ResumeRecord {
            id: "R_2VB9HD".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 222-8811".to_string(),
            position: "Frontend Developer".to_string(),
            experience: "2 years".to_string(),
            skills: strings(&["JavaScript", "React", "CSS", "TypeScript"]),
            education: "BSc in Computer Science - University of Washington".to_string(),
            upload_date: date(2024, 1, 12),
            status: ResumeStatus::Processed,
            match_score: Some(71),
            location: "Seattle, WA".to_string(),
            salary_range: "$90,000 - $110,000".to_string(),
            summary: "Frontend developer focused on accessible, component-driven interfaces.".to_string(),
            work_history: vec![job("Shopify", "Junior Frontend Developer", "2022-2024")],
            certifications: Vec::new(),
            languages: strings(&["English (Native)"]),
            projects: strings(&["Design System Library", "Checkout Redesign"]),
        },
        ResumeRecord {
            id: "R_9XCW41".to_string(),
            name: "David Kim".to_string(),
            email: "d.kim@email.com".to_string(),
            phone: "+1 (555) 334-9090".to_string(),
            position: "QA Engineer".to_string(),
            // No leading number on purpose: exercises the malformed
            // experience fallback in the bracket filter.
            experience: "Entry level".to_string(),
            skills: strings(&["Selenium", "Cypress", "Test Planning"]),
            education: "BSc in Information Systems - UC Irvine".to_string(),
            upload_date: date(2024, 1, 10),
            status: ResumeStatus::Failed,
            match_score: None,
            location: "Irvine, CA".to_string(),
            salary_range: "$75,000 - $90,000".to_string(),
            summary: "QA engineer transitioning from manual to automated testing.".to_string(),
            work_history: Vec::new(),
            certifications: strings(&["ISTQB Foundation"]),
            languages: strings(&["English (Native)", "Korean (Native)"]),
            projects: strings(&["Regression Suite Migration"]),
        },
        ResumeRecord {
            id: "R_TR5ZP8".to_string(),
            name: "Priya Patel".to_string(),
            email: "priya.patel@email.com".to_string(),
            phone: "+1 (555) 610-4477".to_string(),
            position: "DevOps Engineer".to_string(),
            experience: "12 years".to_string(),
            skills: strings(&["Terraform", "AWS", "Kubernetes", "CI/CD", "Go"]),
            education: "MSc in Software Engineering - Georgia Tech".to_string(),
            upload_date: date(2024, 1, 8),
            status: ResumeStatus::Archived,
            match_score: Some(90),
            location: "Austin, TX".to_string(),
            salary_range: "$160,000 - $190,000".to_string(),
            summary: "Infrastructure engineer specializing in multi-region Kubernetes platforms.".to_string(),
            work_history: vec![
                job("Cloudflare", "Staff DevOps Engineer", "2019-2024"),
                job("Rackspace", "Systems Engineer", "2012-2019"),
            ],
            certifications: strings(&["CKA", "AWS DevOps Professional"]),
            languages: strings(&["English (Fluent)", "Hindi (Native)", "Gujarati (Native)"]),
            projects: strings(&["Zero-downtime Migration", "Internal Deploy Platform"]),
        },
    ]
}
