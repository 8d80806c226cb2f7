//! Heuristic sub-scorers behind the ATS analysis.
//!
//! Two families live here. The `analyze_*` functions feed the displayed
//! sections breakdown (score + issue/suggestion strings). The `*_score`
//! functions feed the overall-score formula and use different bases and
//! bonuses. The two families overlap in intent but are computed differently;
//! both sets of constants are part of the observable contract and must not
//! be merged.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// Quantifiable-evidence pattern: bare numbers, percentages, dollar figures.
pub(crate) static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[%$]?").expect("number pattern is valid"));

/// Accepted date shapes: "YYYY" or "YYYY-MM".
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}(-\d{2})?$").expect("date pattern is valid"));

/// Action-verb vocabulary. The displayed content check scans only the first
/// six entries; the overall-score variant scans all twelve.
pub(crate) const ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "developed",
    "implemented",
    "improved",
    "increased",
    "led",
    "managed",
    "optimized",
    "reduced",
    "designed",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingSection {
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub score: u32,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSection {
    pub score: u32,
    pub issues: Vec<String>,
}

fn non_empty_dates<'a>(
    resume: &'a ResumeRecord,
    include_projects: bool,
) -> impl Iterator<Item = &'a str> {
    let experience = resume
        .experience
        .iter()
        .flat_map(|exp| [exp.start_date.as_str(), exp.end_date.as_str()]);
    let education = resume
        .education
        .iter()
        .flat_map(|edu| [edu.start_date.as_str(), edu.end_date.as_str()]);
    let projects = resume
        .projects
        .iter()
        .filter(move |_| include_projects)
        .flat_map(|project| [project.start_date.as_str(), project.end_date.as_str()]);

    experience
        .chain(education)
        .chain(projects)
        .filter(|date| !date.is_empty())
}

/// Formatting section of the displayed breakdown. Base 85, fixed deductions
/// for a missing phone number, a missing LinkedIn URL, and malformed dates
/// (one deduction no matter how many dates are off).
pub fn analyze_formatting(resume: &ResumeRecord) -> FormattingSection {
    let mut issues = Vec::new();
    let mut score: i32 = 85;

    if resume.personal_info.phone.is_empty() {
        issues.push("Add phone number for better contact accessibility".to_string());
        score -= 5;
    }
    if !resume.personal_info.has_linkedin() {
        issues.push("Include LinkedIn profile URL".to_string());
        score -= 3;
    }

    let has_malformed_date =
        non_empty_dates(resume, false).any(|date| !DATE_PATTERN.is_match(date));
    if has_malformed_date {
        issues.push("Use consistent date format (YYYY-MM or YYYY)".to_string());
        score -= 10;
    }

    FormattingSection {
        score: score.max(0) as u32,
        issues,
    }
}

/// Formatting component of the overall-score formula. Base 80, bonuses for
/// date-format consistency (project dates included here) and for having any
/// achievement bullets.
pub fn formatting_score(resume: &ResumeRecord) -> f64 {
    let mut score: f64 = 80.0;

    let formats: HashSet<&str> = non_empty_dates(resume, true)
        .map(|date| {
            if DATE_PATTERN.is_match(date) {
                if date.contains('-') {
                    "YYYY-MM"
                } else {
                    "YYYY"
                }
            } else {
                "other"
            }
        })
        .collect();
    match formats.len() {
        1 => score += 10.0,
        2 => score += 5.0,
        _ => {}
    }

    let has_achievements = resume
        .experience
        .iter()
        .any(|exp| !exp.achievements.is_empty())
        || resume
            .projects
            .iter()
            .any(|project| !project.achievements.is_empty());
    if has_achievements {
        score += 10.0;
    }

    score.min(100.0)
}

/// Content section of the displayed breakdown. Base 75, one suggestion per
/// failed check: quantifiable evidence, summary length, action verbs (first
/// six of the vocabulary), certifications.
pub fn analyze_content(resume: &ResumeRecord, resume_text: &str) -> ContentSection {
    let mut suggestions = Vec::new();
    let mut score: i32 = 75;

    if !NUMBER_PATTERN.is_match(resume_text) {
        suggestions
            .push("Add quantifiable achievements with specific numbers and percentages".to_string());
        score -= 15;
    }

    if resume.personal_info.summary.chars().count() < 100 {
        suggestions.push("Expand your professional summary to 2-3 sentences".to_string());
        score -= 10;
    }

    let has_action_verbs = ACTION_VERBS[..6]
        .iter()
        .any(|verb| resume_text.contains(verb));
    if !has_action_verbs {
        suggestions.push("Use strong action verbs to describe your accomplishments".to_string());
        score -= 10;
    }

    if resume.certifications.is_empty() {
        suggestions.push("Consider adding relevant industry certifications".to_string());
        score -= 5;
    }

    ContentSection {
        score: score.max(0) as u32,
        suggestions,
    }
}

/// Content component of the overall-score formula. Base 60, additive: 3
/// points per quantifiable match capped at 20, 2 per action verb capped at
/// 15, 5 for a summary beyond 100 characters.
pub fn content_score(resume: &ResumeRecord, resume_text: &str) -> f64 {
    let mut score: f64 = 60.0;

    let number_matches = NUMBER_PATTERN.find_iter(resume_text).count();
    score += ((number_matches * 3) as f64).min(20.0);

    let verb_matches = ACTION_VERBS
        .iter()
        .filter(|verb| resume_text.contains(**verb))
        .count();
    score += ((verb_matches * 2) as f64).min(15.0);

    if resume.personal_info.summary.chars().count() > 100 {
        score += 5.0;
    }

    score.min(100.0)
}

/// Structure section of the displayed breakdown. Base 90, deductions for a
/// missing experience section, a thin skill list, and an empty summary.
pub fn analyze_structure(resume: &ResumeRecord) -> StructureSection {
    let mut issues = Vec::new();
    let mut score: i32 = 90;

    if resume.experience.is_empty() {
        issues.push("Add work experience section".to_string());
        score -= 20;
    }

    if resume.skills.len() < 5 {
        issues.push("Include at least 5 relevant skills".to_string());
        score -= 10;
    }

    if resume.personal_info.summary.is_empty() {
        issues.push("Add a professional summary".to_string());
        score -= 15;
    }

    StructureSection {
        score: score.max(0) as u32,
        issues,
    }
}

/// Completeness component of the overall-score formula: fixed awards for the
/// presence of each section, capped at 100. Overlaps with the structure
/// section in intent but not in weights; both are kept deliberately.
pub fn completeness_score(resume: &ResumeRecord) -> f64 {
    let mut score: f64 = 0.0;
    let personal = &resume.personal_info;

    if !personal.name.is_empty() {
        score += 10.0;
    }
    if !personal.email.is_empty() {
        score += 10.0;
    }
    if !personal.phone.is_empty() {
        score += 5.0;
    }
    if personal.summary.chars().count() > 50 {
        score += 15.0;
    }
    if !resume.experience.is_empty() {
        score += 20.0;
    }
    if !resume.education.is_empty() {
        score += 15.0;
    }
    if resume.skills.len() >= 5 {
        score += 15.0;
    }
    if !resume.projects.is_empty() {
        score += 5.0;
    }
    if !resume.certifications.is_empty() {
        score += 3.0;
    }
    if personal.has_linkedin() {
        score += 2.0;
    }

    score.min(100.0)
}
