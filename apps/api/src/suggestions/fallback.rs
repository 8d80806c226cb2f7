//! Deterministic local suggestions, used whenever the webhook is
//! unreachable, misconfigured, or returns garbage. Rules run in a fixed
//! order and the list is truncated to five entries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::industry::GENERAL;
use crate::models::resume::ResumeRecord;
use crate::suggestions::{Suggestion, SuggestionKind, SuggestionSection};

/// Upper bound on the returned list.
pub const FALLBACK_SUGGESTION_LIMIT: usize = 5;

/// Quantified-achievement markers: percentages, "N+", dollar figures, or
/// impact verbs.
static QUANTIFIED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\d+\+|\$\d+|increased|improved|reduced|saved")
        .expect("quantified pattern is valid")
});

const COMPANY_TIPS: &[(&str, &str)] = &[
    (
        "google",
        "Focus on innovation, scalability, and data-driven results. Mention experience with large-scale systems.",
    ),
    (
        "microsoft",
        "Highlight collaboration, cloud technologies, and enterprise solutions experience.",
    ),
    (
        "amazon",
        "Emphasize customer obsession, ownership, and experience with distributed systems.",
    ),
    (
        "deloitte",
        "Showcase consulting experience, client management, and business transformation projects.",
    ),
    (
        "tcs",
        "Highlight experience with enterprise clients, agile methodologies, and global delivery models.",
    ),
    (
        "infosys",
        "Focus on digital transformation, automation, and client-centric solutions.",
    ),
    (
        "capgemini",
        "Emphasize innovation, digital solutions, and multi-industry experience.",
    ),
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn generate_fallback_suggestions(resume: &ResumeRecord, company: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if resume.personal_info.summary.chars().count() < 50 {
        suggestions.push(Suggestion {
            id: "summary-length".to_string(),
            kind: SuggestionKind::Improvement,
            section: SuggestionSection::Summary,
            title: "Enhance your professional summary".to_string(),
            description: "Your summary should be 2-3 sentences highlighting your key \
                          achievements and career goals."
                .to_string(),
            example: Some(
                "Results-driven Software Engineer with 5+ years of experience building \
                 scalable web applications. Specialized in React and Node.js with a proven \
                 track record of improving application performance by 40% and leading \
                 cross-functional teams."
                    .to_string(),
            ),
        });
    }

    if resume.experience.is_empty() {
        suggestions.push(Suggestion {
            id: "add-experience".to_string(),
            kind: SuggestionKind::Warning,
            section: SuggestionSection::Experience,
            title: "Add work experience".to_string(),
            description: "Include your relevant work experience to showcase your professional \
                          background."
                .to_string(),
            example: None,
        });
    } else {
        let has_quantified_results = resume.experience.iter().any(|exp| {
            exp.achievements
                .iter()
                .any(|achievement| QUANTIFIED_PATTERN.is_match(achievement))
        });
        if !has_quantified_results {
            suggestions.push(Suggestion {
                id: "quantify-achievements".to_string(),
                kind: SuggestionKind::Improvement,
                section: SuggestionSection::Experience,
                title: "Add quantifiable results".to_string(),
                description: "Include specific numbers, percentages, and metrics to \
                              demonstrate your impact."
                    .to_string(),
                example: Some(
                    "Instead of 'Improved application performance', write 'Improved \
                     application performance by 40%, reducing load times from 3s to 1.8s'"
                        .to_string(),
                ),
            });
        }
    }

    if resume.skills.len() < 5 {
        suggestions.push(Suggestion {
            id: "add-skills".to_string(),
            kind: SuggestionKind::Tip,
            section: SuggestionSection::Skills,
            title: "Add more relevant skills".to_string(),
            description: "Include 8-12 relevant technical and soft skills to improve ATS \
                          matching."
                .to_string(),
            example: None,
        });
    }

    if company != GENERAL {
        if let Some((id, tip)) = COMPANY_TIPS.iter().find(|(id, _)| *id == company) {
            suggestions.push(Suggestion {
                id: format!("company-{id}"),
                kind: SuggestionKind::Tip,
                section: SuggestionSection::General,
                title: format!("Optimize for {}", capitalize(id)),
                description: (*tip).to_string(),
                example: None,
            });
        }
    }

    suggestions.push(Suggestion {
        id: "ats-keywords".to_string(),
        kind: SuggestionKind::Tip,
        section: SuggestionSection::General,
        title: "Include relevant keywords".to_string(),
        description: "Use keywords from the job description throughout your resume to improve \
                      ATS matching."
            .to_string(),
        example: None,
    });

    suggestions.push(Suggestion {
        id: "action-verbs".to_string(),
        kind: SuggestionKind::Improvement,
        section: SuggestionSection::Experience,
        title: "Use strong action verbs".to_string(),
        description: "Start bullet points with powerful action verbs like 'Led', \
                      'Implemented', 'Optimized', 'Architected'."
            .to_string(),
        example: Some(
            "Instead of 'Was responsible for managing team', write 'Led cross-functional \
             team of 8 engineers to deliver project 2 weeks ahead of schedule'"
                .to_string(),
        ),
    });

    suggestions.truncate(FALLBACK_SUGGESTION_LIMIT);
    suggestions
}
