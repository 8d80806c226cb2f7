//! Resume data model — the value record the UI posts for analysis.
//!
//! Every field carries a serde default so a degraded payload (missing
//! sections, absent optional fields) deserializes cleanly instead of
//! failing the request. Optionality is resolved here, at the boundary:
//! scorers treat an empty string and an absent field identically.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub internships: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfo {
    /// A LinkedIn URL counts as provided only when non-empty.
    pub fn has_linkedin(&self) -> bool {
        self.linkedin.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Shared by the experience and internships sections — identical shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub url: Option<String>,
    pub github: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    /// Self-assessed proficiency, 1–5.
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_with_defaults() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert!(record.personal_info.name.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.personal_info.linkedin.is_none());
    }

    #[test]
    fn test_camel_case_payload_deserializes() {
        let json = r#"{
            "personalInfo": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+1 555 0100",
                "location": "London",
                "title": "Software Engineer",
                "summary": "Engineer with a focus on analytical engines.",
                "linkedin": "https://linkedin.com/in/ada"
            },
            "experience": [{
                "id": "exp1",
                "company": "Analytical Engines Ltd",
                "position": "Engineer",
                "startDate": "2020-01",
                "endDate": "2022-06",
                "current": false,
                "description": "Built computation pipelines",
                "achievements": ["Reduced runtime by 40%"]
            }],
            "skills": [{"id": "s1", "name": "Python", "level": 5}]
        }"#;

        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info.name, "Ada Lovelace");
        assert!(record.personal_info.has_linkedin());
        assert_eq!(record.experience[0].start_date, "2020-01");
        assert_eq!(record.experience[0].achievements.len(), 1);
        assert_eq!(record.skills[0].level, 5);
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_empty_linkedin_counts_as_absent() {
        let info = PersonalInfo {
            linkedin: Some(String::new()),
            ..PersonalInfo::default()
        };
        assert!(!info.has_linkedin());
    }

    #[test]
    fn test_record_serializes_camel_case_keys() {
        let record = ResumeRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("certifications").is_some());
    }
}
