//! Resume text projection — flattens a resume record into one lowercase
//! searchable string. Every keyword and content heuristic runs against this
//! projection, and it is rebuilt per analysis call, never cached.

use crate::models::resume::ResumeRecord;

/// Projects the record into a single lowercase string: personal info first,
/// then experience, education, projects, internships, certifications, and
/// skill names, all parts joined with single spaces.
pub fn project_resume_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<String> = vec![
        resume.personal_info.name.clone(),
        resume.personal_info.title.clone(),
        resume.personal_info.summary.clone(),
    ];

    for exp in &resume.experience {
        parts.push(format!(
            "{} {} {} {}",
            exp.company,
            exp.position,
            exp.description,
            exp.achievements.join(" ")
        ));
    }

    for edu in &resume.education {
        parts.push(format!(
            "{} {} {} {}",
            edu.institution, edu.degree, edu.field, edu.description
        ));
    }

    for project in &resume.projects {
        parts.push(format!(
            "{} {} {} {}",
            project.name,
            project.description,
            project.technologies.join(" "),
            project.achievements.join(" ")
        ));
    }

    for internship in &resume.internships {
        parts.push(format!(
            "{} {} {} {}",
            internship.company,
            internship.position,
            internship.description,
            internship.achievements.join(" ")
        ));
    }

    for cert in &resume.certifications {
        parts.push(format!("{} {}", cert.name, cert.issuer));
    }

    for skill in &resume.skills {
        parts.push(skill.name.clone());
    }

    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationEntry, ExperienceEntry, PersonalInfo, SkillEntry,
    };

    #[test]
    fn test_projection_is_lowercase() {
        let resume = ResumeRecord {
            personal_info: PersonalInfo {
                name: "Ada LOVELACE".to_string(),
                title: "Engineer".to_string(),
                ..PersonalInfo::default()
            },
            ..ResumeRecord::default()
        };
        let text = project_resume_text(&resume);
        assert!(text.contains("ada lovelace"));
        assert!(!text.contains("LOVELACE"));
    }

    #[test]
    fn test_projection_includes_every_section() {
        let resume = ResumeRecord {
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                title: "Engineer".to_string(),
                summary: "Systems background".to_string(),
                ..PersonalInfo::default()
            },
            experience: vec![ExperienceEntry {
                company: "Initech".to_string(),
                position: "Developer".to_string(),
                description: "Backend services".to_string(),
                achievements: vec!["Shipped billing".to_string()],
                ..ExperienceEntry::default()
            }],
            internships: vec![ExperienceEntry {
                company: "Globex".to_string(),
                position: "Intern".to_string(),
                ..ExperienceEntry::default()
            }],
            certifications: vec![CertificationEntry {
                name: "Cloud Practitioner".to_string(),
                issuer: "AWS".to_string(),
                ..CertificationEntry::default()
            }],
            skills: vec![SkillEntry {
                name: "Rust".to_string(),
                ..SkillEntry::default()
            }],
            ..ResumeRecord::default()
        };

        let text = project_resume_text(&resume);
        for expected in [
            "systems background",
            "initech",
            "shipped billing",
            "globex",
            "cloud practitioner",
            "aws",
            "rust",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in {text:?}");
        }
    }

    #[test]
    fn test_experience_precedes_internships() {
        let resume = ResumeRecord {
            experience: vec![ExperienceEntry {
                company: "FirstCo".to_string(),
                ..ExperienceEntry::default()
            }],
            internships: vec![ExperienceEntry {
                company: "SecondCo".to_string(),
                ..ExperienceEntry::default()
            }],
            ..ResumeRecord::default()
        };
        let text = project_resume_text(&resume);
        assert!(text.find("firstco").unwrap() < text.find("secondco").unwrap());
    }

    #[test]
    fn test_empty_record_projects_to_whitespace() {
        let text = project_resume_text(&ResumeRecord::default());
        assert!(text.trim().is_empty());
    }
}
