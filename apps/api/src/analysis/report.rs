//! ATS analysis report — assembles the full `AtsAnalysis` from the text
//! projection, the four displayed sub-analyses, the recommendation list, and
//! the overall-score formula.
//!
//! The overall score blends four internal scorers (completeness, keyword,
//! formatting, content) whose variants differ from the displayed sections
//! breakdown. The divergence is deliberate and observable; see scoring.rs.

use serde::{Deserialize, Serialize};

use crate::analysis::industry::{keywords_for, top_keywords_for};
use crate::analysis::keywords::{analyze_keywords, keyword_score, KeywordSection};
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::scoring::{
    analyze_content, analyze_formatting, analyze_structure, completeness_score, content_score,
    formatting_score, ContentSection, FormattingSection, StructureSection,
};
use crate::analysis::text::project_resume_text;
use crate::models::resume::ResumeRecord;

/// Static industry-average score shown in the competitor comparison.
pub const COMPETITOR_AVERAGE_SCORE: u32 = 72;

const WEIGHT_COMPLETENESS: f64 = 0.25;
const WEIGHT_KEYWORDS: f64 = 0.30;
const WEIGHT_FORMATTING: f64 = 0.20;
const WEIGHT_CONTENT: f64 = 0.25;

/// Full analysis returned to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub overall_score: u32,
    pub sections: SectionScores,
    pub recommendations: Vec<String>,
    pub industry_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorAnalysis>,
}

/// The displayed per-section breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub formatting: FormattingSection,
    pub keywords: KeywordSection,
    pub content: ContentSection,
    pub structure: StructureSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub average_score: u32,
    pub top_keywords: Vec<String>,
}

/// Runs the full analysis. Pure function of its inputs: identical inputs
/// produce identical reports. An empty job description selects the
/// no-job-description scoring paths.
pub fn analyze_resume(
    resume: &ResumeRecord,
    job_description: Option<&str>,
    company: &str,
) -> AtsAnalysis {
    let job_description = job_description.filter(|jd| !jd.is_empty());
    let resume_text = project_resume_text(resume);

    AtsAnalysis {
        overall_score: overall_score(resume, &resume_text, job_description, company),
        sections: SectionScores {
            formatting: analyze_formatting(resume),
            keywords: analyze_keywords(&resume_text, job_description, company),
            content: analyze_content(resume, &resume_text),
            structure: analyze_structure(resume),
        },
        recommendations: generate_recommendations(resume, &resume_text, company, job_description),
        industry_keywords: keywords_for(company)
            .iter()
            .map(|kw| (*kw).to_string())
            .collect(),
        competitor_analysis: Some(CompetitorAnalysis {
            average_score: COMPETITOR_AVERAGE_SCORE,
            top_keywords: top_keywords_for(company)
                .iter()
                .map(|kw| (*kw).to_string())
                .collect(),
        }),
    }
}

/// Weighted blend of the four internal scorers, clamped and rounded.
fn overall_score(
    resume: &ResumeRecord,
    resume_text: &str,
    job_description: Option<&str>,
    company: &str,
) -> u32 {
    let score = completeness_score(resume) * WEIGHT_COMPLETENESS
        + keyword_score(resume_text, job_description, company) * WEIGHT_KEYWORDS
        + formatting_score(resume) * WEIGHT_FORMATTING
        + content_score(resume, resume_text) * WEIGHT_CONTENT;

    score.clamp(0.0, 100.0).round() as u32
}
