//! Industry keyword catalog — static per-company vocabularies used to bias
//! keyword scoring and recommendations.
//!
//! Read-only after initialization. Lookups are case-sensitive against a
//! closed identifier set and silently fall back to the `general` profile for
//! anything unrecognized; there is no error path.

/// Identifier of the fallback profile.
pub const GENERAL: &str = "general";

const GOOGLE_KEYWORDS: &[&str] = &[
    "Machine Learning",
    "Artificial Intelligence",
    "Data Science",
    "TensorFlow",
    "Python",
    "BigQuery",
    "GCP",
    "Kubernetes",
    "Microservices",
    "Scalability",
    "Analytics",
    "Algorithm",
];

const MICROSOFT_KEYWORDS: &[&str] = &[
    "Azure",
    "C#",
    ".NET",
    "PowerBI",
    "SQL Server",
    "Teams",
    "Office 365",
    "DevOps",
    "Agile",
    "Cloud Computing",
    "TypeScript",
    "Collaboration",
];

const AMAZON_KEYWORDS: &[&str] = &[
    "AWS",
    "Lambda",
    "DynamoDB",
    "S3",
    "EC2",
    "Leadership Principles",
    "Customer Obsession",
    "Scalability",
    "Microservices",
    "DevOps",
    "Java",
    "Distributed Systems",
];

const DELOITTE_KEYWORDS: &[&str] = &[
    "Consulting",
    "Project Management",
    "Business Analysis",
    "SAP",
    "Data Analytics",
    "Digital Transformation",
    "Strategy",
    "Client Relations",
    "Process Improvement",
];

const TCS_KEYWORDS: &[&str] = &[
    "Java",
    "Spring Boot",
    "Oracle",
    "Agile",
    "DevOps",
    "Enterprise Applications",
    "Software Development",
    "Testing",
    "Database Management",
];

const INFOSYS_KEYWORDS: &[&str] = &[
    "Java",
    "Hibernate",
    "SQL",
    "REST API",
    "Microservices",
    "Spring Framework",
    "Web Services",
    "Application Development",
    "System Integration",
];

const CAPGEMINI_KEYWORDS: &[&str] = &[
    "Java",
    "Cloud Computing",
    "Salesforce",
    "Agile",
    "Digital Transformation",
    "Consulting",
    "Enterprise Solutions",
    "System Architecture",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "SQL",
    "Git",
    "Agile",
    "REST API",
    "Database",
    "Problem Solving",
    "Communication",
    "Teamwork",
];

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("google", GOOGLE_KEYWORDS),
    ("microsoft", MICROSOFT_KEYWORDS),
    ("amazon", AMAZON_KEYWORDS),
    ("deloitte", DELOITTE_KEYWORDS),
    ("tcs", TCS_KEYWORDS),
    ("infosys", INFOSYS_KEYWORDS),
    ("capgemini", CAPGEMINI_KEYWORDS),
    (GENERAL, GENERAL_KEYWORDS),
];

const GENERAL_TOP_KEYWORDS: &[&str] = &["JavaScript", "React", "Python", "SQL", "Git"];

/// Top-keyword subsets exist only for the companies below; everything else
/// shares the general subset.
const TOP_INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "google",
        &["Python", "Machine Learning", "TensorFlow", "GCP", "Data Science"],
    ),
    ("microsoft", &["Azure", "C#", ".NET", "TypeScript", "DevOps"]),
    (
        "amazon",
        &["AWS", "Java", "Microservices", "Leadership", "Scalability"],
    ),
    (GENERAL, GENERAL_TOP_KEYWORDS),
];

/// Full keyword list for a company, defaulting to the general profile.
pub fn keywords_for(company: &str) -> &'static [&'static str] {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(id, _)| *id == company)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(GENERAL_KEYWORDS)
}

/// Top-keyword subset for a company, defaulting to the general subset.
pub fn top_keywords_for(company: &str) -> &'static [&'static str] {
    TOP_INDUSTRY_KEYWORDS
        .iter()
        .find(|(id, _)| *id == company)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(GENERAL_TOP_KEYWORDS)
}

/// Canonical identifier for a company token: the token itself when known,
/// otherwise `general`.
pub fn resolve_company(company: &str) -> &'static str {
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(id, _)| *id == company)
        .map(|(id, _)| *id)
        .unwrap_or(GENERAL)
}
