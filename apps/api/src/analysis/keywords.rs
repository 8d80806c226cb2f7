//! Keyword extraction and matching.
//!
//! Matching is deliberately crude: case-insensitive substring containment
//! against the projected resume text, no tokenization, no stemming, and no
//! deduplication of the extracted set. The weakness is part of the contract
//! — scores and present/missing lists downstream depend on the literal
//! substring rule.

use serde::{Deserialize, Serialize};

use crate::analysis::industry::keywords_for;

/// Technical vocabulary scanned against job descriptions.
const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node.js",
    "angular",
    "vue",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
    "git",
    "ci/cd",
    "agile",
    "scrum",
    "rest api",
    "graphql",
    "microservices",
    "machine learning",
    "ai",
    "data science",
    "tensorflow",
    "pytorch",
];

/// Soft-skill vocabulary scanned against job descriptions.
const SOFT_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "analytical",
    "creative",
    "detail-oriented",
];

/// Keyword analysis shown to the user: score plus the present/missing split,
/// truncated for display (10 present, 8 missing).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSection {
    pub score: u32,
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

/// Derives the job-relevant keyword set: the fixed technical and soft-skill
/// vocabularies plus the active industry profile's keywords (lowercased),
/// keeping those that appear as substrings of the lowercased job text.
/// Overlaps between vocabularies yield duplicate entries by design.
pub fn extract_job_keywords(job_description: &str, company: &str) -> Vec<String> {
    let text = job_description.to_lowercase();

    TECH_KEYWORDS
        .iter()
        .map(|kw| (*kw).to_string())
        .chain(SOFT_KEYWORDS.iter().map(|kw| (*kw).to_string()))
        .chain(keywords_for(company).iter().map(|kw| kw.to_lowercase()))
        .filter(|kw| text.contains(kw.as_str()))
        .collect()
}

/// Splits a keyword set into (present, missing) against the projected resume
/// text. Exhaustive and disjoint over the input set; order preserved.
pub(crate) fn partition_keywords(
    keywords: &[String],
    resume_text: &str,
) -> (Vec<String>, Vec<String>) {
    keywords
        .iter()
        .cloned()
        .partition(|kw| resume_text.contains(&kw.to_lowercase()))
}

/// Keyword sub-analysis for the displayed sections breakdown.
pub fn analyze_keywords(
    resume_text: &str,
    job_description: Option<&str>,
    company: &str,
) -> KeywordSection {
    let relevant: Vec<String> = match job_description {
        Some(jd) => extract_job_keywords(jd, company),
        None => keywords_for(company).iter().map(|kw| (*kw).to_string()).collect(),
    };

    let (present, missing) = partition_keywords(&relevant, resume_text);

    let score = if relevant.is_empty() {
        70
    } else {
        ((present.len() as f64 / relevant.len() as f64) * 100.0).round() as u32
    };

    KeywordSection {
        score,
        present: present.into_iter().take(10).collect(),
        missing: missing.into_iter().take(8).collect(),
    }
}

/// Keyword component of the overall-score formula. Unlike the displayed
/// analysis this stays unrounded, and without a job description it matches
/// directly against the industry profile.
pub fn keyword_score(resume_text: &str, job_description: Option<&str>, company: &str) -> f64 {
    match job_description {
        None => {
            let industry = keywords_for(company);
            let matched = industry
                .iter()
                .filter(|kw| resume_text.contains(&kw.to_lowercase()))
                .count();
            ((matched as f64 / industry.len() as f64) * 100.0).min(100.0)
        }
        Some(jd) => {
            let job_keywords = extract_job_keywords(jd, company);
            if job_keywords.is_empty() {
                return 70.0;
            }
            let matched = job_keywords
                .iter()
                .filter(|kw| resume_text.contains(&kw.to_lowercase()))
                .count();
            ((matched as f64 / job_keywords.len() as f64) * 100.0).min(100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_keeps_only_keywords_in_job_text() {
        let extracted = extract_job_keywords("We need Python and Docker experience", "general");
        assert!(extracted.contains(&"python".to_string()));
        assert!(extracted.contains(&"docker".to_string()));
        assert!(!extracted.contains(&"graphql".to_string()));
    }

    #[test]
    fn test_extraction_preserves_vocabulary_overlap_duplicates() {
        // "python" sits in both the technical vocabulary and the general
        // profile, so a JD mentioning it yields two entries.
        let extracted = extract_job_keywords("python", "general");
        let count = extracted.iter().filter(|kw| *kw == "python").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let keywords: Vec<String> = ["python", "react", "sql", "graphql"]
            .iter()
            .map(|kw| (*kw).to_string())
            .collect();
        let text = "built python services backed by sql";
        let (present, missing) = partition_keywords(&keywords, text);

        assert_eq!(present.len() + missing.len(), keywords.len());
        for kw in &present {
            assert!(!missing.contains(kw));
        }
        assert_eq!(present, vec!["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_job_description_scenario_python_react_sql() {
        let text = "senior engineer python and sql pipelines";
        let section = analyze_keywords(text, Some("python, react, sql"), "general");

        // tech vocabulary contributes python/react/sql, the general profile
        // contributes them again: 6 relevant, 4 present.
        assert_eq!(section.score, 67);
        assert!(section.present.contains(&"python".to_string()));
        assert!(section.present.contains(&"sql".to_string()));
        assert!(section.missing.contains(&"react".to_string()));
        assert!(!section.present.contains(&"react".to_string()));
    }

    #[test]
    fn test_no_job_description_scores_against_industry_profile() {
        let section = analyze_keywords("machine learning with tensorflow", None, "google");
        assert!(section.present.contains(&"Machine Learning".to_string()));
        assert!(section.present.contains(&"TensorFlow".to_string()));
        assert_eq!(section.score, ((2.0 / 12.0_f64) * 100.0).round() as u32);
    }

    #[test]
    fn test_display_truncation_caps_present_and_missing() {
        let jd = "javascript python java react node.js angular vue aws azure gcp \
                  docker kubernetes sql mongodb git agile scrum graphql";
        let section = analyze_keywords("", Some(jd), "general");
        assert!(section.present.len() <= 10);
        assert!(section.missing.len() <= 8);
    }

    #[test]
    fn test_score_defaults_to_70_when_extraction_is_empty() {
        let section = analyze_keywords("anything", Some("zzzz"), "general");
        assert_eq!(section.score, 70);
        assert!(section.present.is_empty());
        assert!(section.missing.is_empty());

        assert_eq!(keyword_score("anything", Some("zzzz"), "general"), 70.0);
    }

    #[test]
    fn test_internal_score_without_job_description_uses_profile() {
        let score = keyword_score("python and react and sql", None, "general");
        // python, react, sql out of 12 general keywords.
        assert!((score - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_resume_text_scores_zero() {
        assert_eq!(keyword_score("  ", None, "general"), 0.0);
    }
}
