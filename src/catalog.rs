//! Role suggestions, learning tips and resource links for skill recommendations

use crate::error::{Result, SkillScopeError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Curated roles offered as target suggestions during analysis
pub const POPULAR_ROLES: &[&str] = &[
    // Technology
    "Data Scientist",
    "AI Engineer",
    "Full-Stack Developer",
    "Cloud Architect",
    "DevOps Engineer",
    "Software Architect",
    // Business & Management
    "Project Manager",
    "Product Manager",
    "Business Analyst",
    "Operations Manager",
    "Strategy Consultant",
    // Marketing & Sales
    "Marketing Manager",
    "Digital Marketing Director",
    "Sales Manager",
    "Business Development Manager",
    "Brand Manager",
    // Finance & Accounting
    "Financial Analyst",
    "Investment Analyst",
    "Finance Manager",
    "Controller",
    "Accountant",
    // Healthcare
    "Healthcare Administrator",
    "Clinical Manager",
    "Medical Director",
    "Healthcare Consultant",
    // Human Resources
    "HR Manager",
    "Talent Acquisition Lead",
    "People Operations Director",
    "HR Business Partner",
    // Design & Creative
    "UX Designer",
    "Creative Director",
    "Product Designer",
    "Brand Designer",
];

/// Sample resume bundled for quick demos without a real PDF
pub const SAMPLE_RESUME: &str = include_str!("../data/sample_resume.txt");

const BUILTIN_TIPS: &str = include_str!("../data/learning_tips.toml");

/// Filter the role suggestions by a case-insensitive substring match
pub fn filter_roles(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    POPULAR_ROLES
        .iter()
        .copied()
        .filter(|role| role.to_lowercase().contains(&needle))
        .collect()
}

/// Search link for video tutorials on a skill
pub fn youtube_search_url(skill: &str) -> String {
    let query = format!("{} tutorial", skill);
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(&query)
    )
}

/// Search link for courses on a skill
pub fn coursera_search_url(skill: &str) -> String {
    format!(
        "https://www.coursera.org/search?query={}",
        urlencoding::encode(skill)
    )
}

#[derive(Debug, Deserialize)]
struct TipsFile {
    #[serde(default)]
    tips: BTreeMap<String, String>,
}

/// Lookup table of per-skill learning tips
///
/// Ships with a built-in table and can be replaced wholesale by pointing
/// `report.tips_file` at a custom TOML file with the same `[tips]` layout.
#[derive(Debug, Clone)]
pub struct LearningTips {
    tips: BTreeMap<String, String>,
}

impl LearningTips {
    /// Load tips from the override file when configured, otherwise the built-in table
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let raw = match override_path {
            Some(path) => std::fs::read_to_string(path)?,
            None => BUILTIN_TIPS.to_string(),
        };
        let parsed: TipsFile = toml::from_str(&raw)
            .map_err(|e| SkillScopeError::Configuration(format!("Invalid tips file: {}", e)))?;
        Ok(Self { tips: parsed.tips })
    }

    /// Tip for a skill, falling back to generic advice for unknown skills
    pub fn tip_for(&self, skill: &str) -> String {
        match self.tips.get(skill) {
            Some(tip) => tip.clone(),
            None => format!(
                "Practice {} through hands-on projects and online tutorials to build real-world experience.",
                skill
            ),
        }
    }

    /// Number of skills with a dedicated tip
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_filter_roles_case_insensitive() {
        let matches = filter_roles("engineer");
        assert!(matches.contains(&"AI Engineer"));
        assert!(matches.contains(&"DevOps Engineer"));
        assert!(!matches.contains(&"Product Manager"));

        let upper = filter_roles("MANAGER");
        assert!(upper.contains(&"Project Manager"));
        assert!(upper.contains(&"Brand Manager"));
        assert!(!upper.contains(&"Data Scientist"));
    }

    #[test]
    fn test_popular_roles_match_suggested_targets() {
        assert_eq!(POPULAR_ROLES.len(), 33);
        for role in [
            "Data Scientist",
            "AI Engineer",
            "Strategy Consultant",
            "Talent Acquisition Lead",
            "Creative Director",
        ] {
            assert!(POPULAR_ROLES.contains(&role), "missing {role}");
        }
    }

    #[test]
    fn test_filter_roles_empty_query_returns_all() {
        assert_eq!(filter_roles("").len(), POPULAR_ROLES.len());
    }

    #[test]
    fn test_sample_resume_is_the_canned_demo_profile() {
        assert!(SAMPLE_RESUME.starts_with("John Doe\nSoftware Engineer | 5 years of experience"));
        assert!(SAMPLE_RESUME.contains("TECHNICAL SKILLS:"));
        assert!(SAMPLE_RESUME.contains("Senior Software Engineer at Tech Corp (2021-Present)"));
        assert!(SAMPLE_RESUME.contains("AWS Certified Solutions Architect"));
    }

    #[test]
    fn test_builtin_tips_cover_known_skills() {
        let tips = LearningTips::load(None).unwrap();
        assert!(tips.len() >= 30);
        assert!(tips.tip_for("Python").contains("basic syntax"));
        assert!(tips.tip_for("CI/CD").contains("GitHub Actions"));
    }

    #[test]
    fn test_unknown_skill_gets_fallback_tip() {
        let tips = LearningTips::load(None).unwrap();
        assert_eq!(
            tips.tip_for("Elixir"),
            "Practice Elixir through hands-on projects and online tutorials to build real-world experience."
        );
    }

    #[test]
    fn test_tips_file_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tips]").unwrap();
        writeln!(file, "Python = \"Custom advice\"").unwrap();

        let tips = LearningTips::load(Some(file.path())).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips.tip_for("Python"), "Custom advice");
    }

    #[test]
    fn test_search_urls_are_encoded() {
        assert_eq!(
            youtube_search_url("Machine Learning"),
            "https://www.youtube.com/results?search_query=Machine%20Learning%20tutorial"
        );
        assert_eq!(
            coursera_search_url("CI/CD"),
            "https://www.coursera.org/search?query=CI%2FCD"
        );
    }
}
