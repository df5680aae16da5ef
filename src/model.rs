//! Analysis result model received from the analysis service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder shown whenever the service sends no usable summary.
pub const SUMMARY_PLACEHOLDER: &str = "No summary available";

/// Number of skills shown before previews collapse into "+N more" / "...".
pub const SKILL_PREVIEW_LIMIT: usize = 10;

/// Structured analysis of a resume, received verbatim from the service.
///
/// Every collection tolerates absence on the wire so a partial response
/// still renders end to end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Narrative profile summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Detected professional field
    #[serde(default)]
    pub current_field: Option<String>,

    /// Full list of detected competencies
    #[serde(default)]
    pub skills: Vec<String>,

    /// Years of professional experience
    #[serde(default)]
    pub experience_years: f64,

    /// ATS optimization notes, each carrying a leading marker glyph
    #[serde(default)]
    pub ats_feedback: Vec<String>,

    /// Per-category comparison of candidate vs industry values
    #[serde(default)]
    pub radar_data: RadarData,

    /// Role name -> match score percentage in [0, 100]
    #[serde(default)]
    pub role_matches: BTreeMap<String, f64>,

    /// Role name -> skills missing for that role; absent role means no gaps
    #[serde(default)]
    pub skill_gaps: BTreeMap<String, Vec<String>>,

    /// Industry sectors currently seeking this profile; may be empty
    #[serde(default)]
    pub trending_industries: Vec<String>,

    /// Ordered learning recommendations
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Radar chart payload: category labels plus two aligned value series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<RadarSeries>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarSeries {
    /// Display name of the series ("Your Skills" / "Industry Standard")
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// One entry of the learning roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    /// Skill to develop
    pub skill: String,

    /// Free-text priority, classified case-insensitively for styling
    #[serde(default)]
    pub priority: String,

    /// Suggested learning resource
    #[serde(default)]
    pub resource: String,

    /// Expected learning timeframe
    #[serde(default)]
    pub timeframe: String,

    /// Optional concrete study tip
    #[serde(default)]
    pub learning_tip: Option<String>,
}

/// Classification of an ATS feedback note by its leading marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsNoteKind {
    Warning,
    Confirmation,
}

/// Priority bands used for recommendation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
    Other,
}

impl AnalysisResult {
    /// Summary text with the placeholder substituted for absent or empty input.
    pub fn summary_text(&self) -> &str {
        match self.summary.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => SUMMARY_PLACEHOLDER,
        }
    }

    /// Roles ordered by descending match score, ties broken by ascending
    /// role name. BTreeMap iteration is already name-ordered, so the stable
    /// sort settles ties deterministically.
    pub fn ranked_roles(&self) -> Vec<(&str, f64)> {
        let mut roles: Vec<(&str, f64)> = self
            .role_matches
            .iter()
            .map(|(role, score)| (role.as_str(), *score))
            .collect();
        roles.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        roles
    }

    /// Highest-scoring role, if any roles were matched.
    pub fn top_role(&self) -> Option<(&str, f64)> {
        self.ranked_roles().into_iter().next()
    }

    /// Missing skills for a role; a role absent from the map has none.
    pub fn gaps_for(&self, role: &str) -> &[String] {
        self.skill_gaps.get(role).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Recommendation {
    pub fn priority_level(&self) -> PriorityLevel {
        match self.priority.to_lowercase().as_str() {
            "high" => PriorityLevel::High,
            "medium" => PriorityLevel::Medium,
            "low" => PriorityLevel::Low,
            _ => PriorityLevel::Other,
        }
    }
}

/// Classify an ATS note by its leading glyph. Warnings carry ⚠️, 📋, 📊
/// or 🎯; everything else reads as a confirmation.
pub fn ats_note_kind(note: &str) -> AtsNoteKind {
    const WARNING_MARKERS: [&str; 4] = ["⚠️", "📋", "📊", "🎯"];
    if WARNING_MARKERS.iter().any(|m| note.starts_with(m)) {
        AtsNoteKind::Warning
    } else {
        AtsNoteKind::Confirmation
    }
}

/// Format a score or year count the way the service's numbers read:
/// integral values drop the decimal point (82 -> "82", 82.5 -> "82.5").
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_roles(roles: &[(&str, f64)]) -> AnalysisResult {
        let mut result: AnalysisResult = serde_json::from_str("{}").unwrap();
        for (role, score) in roles {
            result.role_matches.insert(role.to_string(), *score);
        }
        result
    }

    #[test]
    fn test_empty_response_deserializes() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert!(result.skills.is_empty());
        assert!(result.summary.is_none());
        assert_eq!(result.experience_years, 0.0);
        assert!(result.radar_data.labels.is_empty());
    }

    #[test]
    fn test_ranked_roles_orders_by_score_descending() {
        let result = result_with_roles(&[
            ("UX Designer", 40.0),
            ("Data Scientist", 82.0),
            ("Project Manager", 61.0),
        ]);
        let ranked = result.ranked_roles();
        assert_eq!(ranked[0].0, "Data Scientist");
        assert_eq!(ranked[1].0, "Project Manager");
        assert_eq!(ranked[2].0, "UX Designer");
    }

    #[test]
    fn test_ranked_roles_breaks_ties_by_name() {
        let result = result_with_roles(&[
            ("Zoologist", 50.0),
            ("Analyst", 50.0),
            ("Manager", 50.0),
        ]);
        let names: Vec<&str> = result.ranked_roles().iter().map(|(r, _)| *r).collect();
        assert_eq!(names, vec!["Analyst", "Manager", "Zoologist"]);
    }

    #[test]
    fn test_top_role() {
        let result = result_with_roles(&[("Data Scientist", 82.0), ("UX Designer", 40.0)]);
        let (role, score) = result.top_role().unwrap();
        assert_eq!(role, "Data Scientist");
        assert_eq!(score, 82.0);

        let empty = result_with_roles(&[]);
        assert!(empty.top_role().is_none());
    }

    #[test]
    fn test_summary_placeholder() {
        let mut result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.summary_text(), SUMMARY_PLACEHOLDER);

        result.summary = Some(String::new());
        assert_eq!(result.summary_text(), SUMMARY_PLACEHOLDER);

        result.summary = Some("Strong candidate.".to_string());
        assert_eq!(result.summary_text(), "Strong candidate.");
    }

    #[test]
    fn test_gaps_for_missing_role_is_empty() {
        let mut result = result_with_roles(&[("Data Scientist", 82.0), ("UX Designer", 40.0)]);
        result.skill_gaps.insert(
            "Data Scientist".to_string(),
            vec!["SQL".to_string(), "Statistics".to_string()],
        );
        assert_eq!(result.gaps_for("Data Scientist"), ["SQL", "Statistics"]);
        assert!(result.gaps_for("UX Designer").is_empty());
    }

    #[test]
    fn test_ats_note_classification() {
        assert_eq!(ats_note_kind("⚠️ Consider adding an email"), AtsNoteKind::Warning);
        assert_eq!(ats_note_kind("📋 Add standard sections"), AtsNoteKind::Warning);
        assert_eq!(ats_note_kind("📊 Quantify achievements"), AtsNoteKind::Warning);
        assert_eq!(ats_note_kind("🎯 Mention these keywords"), AtsNoteKind::Warning);
        assert_eq!(ats_note_kind("✅ Email found"), AtsNoteKind::Confirmation);
        assert_eq!(ats_note_kind("💡 Use a clean layout"), AtsNoteKind::Confirmation);
    }

    #[test]
    fn test_priority_classification() {
        let mut rec = Recommendation {
            skill: "SQL".to_string(),
            priority: "High".to_string(),
            resource: String::new(),
            timeframe: String::new(),
            learning_tip: None,
        };
        assert_eq!(rec.priority_level(), PriorityLevel::High);
        rec.priority = "medium".to_string();
        assert_eq!(rec.priority_level(), PriorityLevel::Medium);
        rec.priority = "LOW".to_string();
        assert_eq!(rec.priority_level(), PriorityLevel::Low);
        rec.priority = "Urgent".to_string();
        assert_eq!(rec.priority_level(), PriorityLevel::Other);
    }

    #[test]
    fn test_format_number_trims_integral_values() {
        assert_eq!(format_number(82.0), "82");
        assert_eq!(format_number(82.5), "82.5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(5.0), "5");
    }
}
