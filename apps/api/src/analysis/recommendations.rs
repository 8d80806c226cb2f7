//! Recommendation generator — a fixed-order sequence of predicate→message
//! rules over the resume, the projected text, and the job description, with
//! a final truncation to six entries. Order is part of the contract; rules
//! are never reordered by severity.

use crate::analysis::keywords::extract_job_keywords;
use crate::analysis::scoring::NUMBER_PATTERN;
use crate::models::resume::ResumeRecord;

/// Upper bound on the returned list.
pub const RECOMMENDATION_LIMIT: usize = 6;

pub fn generate_recommendations(
    resume: &ResumeRecord,
    resume_text: &str,
    company: &str,
    job_description: Option<&str>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !NUMBER_PATTERN.is_match(resume_text) {
        recommendations.push(
            "Add quantifiable achievements with specific numbers, percentages, or dollar amounts"
                .to_string(),
        );
    }

    if resume.personal_info.summary.chars().count() < 100 {
        recommendations.push(
            "Expand your professional summary to better highlight your value proposition"
                .to_string(),
        );
    }

    if resume.skills.len() < 8 {
        recommendations.push("Include more relevant technical and soft skills".to_string());
    }

    if resume.projects.is_empty() {
        recommendations
            .push("Add personal or professional projects to showcase your abilities".to_string());
    }

    match company {
        "google" => {
            recommendations.push(
                "Emphasize data-driven decision making and scalability in your achievements"
                    .to_string(),
            );
            if !resume_text.contains("machine learning") && !resume_text.contains("ai") {
                recommendations
                    .push("Consider highlighting any AI/ML experience or interest".to_string());
            }
        }
        "microsoft" => {
            recommendations.push("Highlight collaboration and teamwork experiences".to_string());
            if !resume_text.contains("azure") && !resume_text.contains("cloud") {
                recommendations.push(
                    "Mention any cloud computing experience, especially with Azure".to_string(),
                );
            }
        }
        "amazon" => {
            recommendations
                .push("Include examples that demonstrate Amazon's Leadership Principles".to_string());
            if !resume_text.contains("customer") {
                recommendations
                    .push("Emphasize customer-focused achievements and experiences".to_string());
            }
        }
        _ => {}
    }

    if let Some(jd) = job_description {
        let missing: Vec<String> = extract_job_keywords(jd, company)
            .into_iter()
            .filter(|kw| !resume_text.contains(&kw.to_lowercase()))
            .take(3)
            .collect();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Consider incorporating these job-relevant keywords: {}",
                missing.join(", ")
            ));
        }
    }

    recommendations.truncate(RECOMMENDATION_LIMIT);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{PersonalInfo, ProjectEntry, SkillEntry};

    fn sparse_resume() -> ResumeRecord {
        ResumeRecord::default()
    }

    #[test]
    fn test_general_rules_fire_for_sparse_resume() {
        let recs = generate_recommendations(&sparse_resume(), "  ", "general", None);
        assert!(recs.iter().any(|r| r.contains("quantifiable achievements")));
        assert!(recs.iter().any(|r| r.contains("professional summary")));
        assert!(recs
            .iter()
            .any(|r| r.contains("technical and soft skills")));
        assert!(recs.iter().any(|r| r.contains("projects")));
        // "general" contributes no company-specific hints.
        assert_eq!(recs.len(), 4);
    }

    #[test]
    fn test_rules_are_emitted_in_fixed_order() {
        let recs = generate_recommendations(&sparse_resume(), "  ", "general", None);
        assert!(recs[0].contains("quantifiable"));
        assert!(recs[1].contains("summary"));
        assert!(recs[2].contains("skills"));
        assert!(recs[3].contains("projects"));
    }

    #[test]
    fn test_google_hints_include_conditional_ml_hint() {
        let recs = generate_recommendations(&sparse_resume(), "  ", "google", None);
        assert!(recs
            .iter()
            .any(|r| r.contains("data-driven decision making")));
        assert!(recs.iter().any(|r| r.contains("AI/ML")));
    }

    #[test]
    fn test_google_ml_hint_suppressed_when_text_mentions_ai() {
        let recs =
            generate_recommendations(&sparse_resume(), "built ai pipelines", "google", None);
        assert!(!recs.iter().any(|r| r.contains("AI/ML")));
    }

    #[test]
    fn test_amazon_customer_hint_is_conditional() {
        let with = generate_recommendations(&sparse_resume(), "  ", "amazon", None);
        assert!(with.iter().any(|r| r.contains("customer-focused")));

        let without =
            generate_recommendations(&sparse_resume(), "customer support tooling", "amazon", None);
        assert!(!without.iter().any(|r| r.contains("customer-focused")));
    }

    #[test]
    fn test_job_description_rule_lists_up_to_three_missing_keywords() {
        let recs = generate_recommendations(
            &sparse_resume(),
            "  ",
            "general",
            Some("python react sql docker kubernetes"),
        );
        let keyword_rec = recs
            .iter()
            .find(|r| r.contains("job-relevant keywords"))
            .expect("keyword recommendation present");
        let listed = keyword_rec.split(':').nth(1).unwrap();
        assert_eq!(listed.split(',').count(), 3);
    }

    #[test]
    fn test_list_is_capped_at_six() {
        // Sparse resume + google hints + JD keywords = 7 firing rules.
        let recs = generate_recommendations(
            &sparse_resume(),
            "  ",
            "google",
            Some("python react sql"),
        );
        assert_eq!(recs.len(), RECOMMENDATION_LIMIT);
    }

    #[test]
    fn test_satisfied_resume_gets_no_generic_advice() {
        let resume = ResumeRecord {
            personal_info: PersonalInfo {
                summary: "S".repeat(120),
                ..PersonalInfo::default()
            },
            projects: vec![ProjectEntry::default()],
            skills: (0..8)
                .map(|i| SkillEntry {
                    id: format!("s{i}"),
                    name: format!("Skill {i}"),
                    level: 3,
                })
                .collect(),
            ..ResumeRecord::default()
        };
        let recs =
            generate_recommendations(&resume, "improved latency by 30%", "general", None);
        assert!(recs.is_empty());
    }
}
