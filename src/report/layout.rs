//! Deterministic page layout for the career analysis report
//!
//! Builds a typed drawing list per page from an analysis result. The same
//! result and timestamp always produce the same layout, which keeps the PDF
//! writer trivial and makes pagination testable without decoding PDF bytes.

use crate::model::{format_number, AnalysisResult, Recommendation, SKILL_PREVIEW_LIMIT};
use crate::report::metrics::{wrap_text, FontStyle};

/// A4 page width
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 page height
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Lowest baseline body content may occupy; below this lives only the footer
pub const CONTENT_FLOOR_MM: f64 = 270.0;

const MARGIN_TOP_MM: f64 = 20.0;
const FOOTER_Y_MM: f64 = 285.0;
const HEADING_DROP_MM: f64 = 8.0;
const LINE_STEP_MM: f64 = 5.0;

const SUMMARY_WRAP_MM: f64 = 170.0;
const TIP_WRAP_MM: f64 = 160.0;
const SCORE_BAR_MAX_MM: f64 = 60.0;
const GAPS_PER_ROLE: usize = 5;

/// Label stamped into every page footer
pub const PRODUCT_LABEL: &str = "SkillScope Career Analyzer";

/// An RGB color in the 0-255 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Indigo accent used for the title, scores and bars
pub const PRIMARY: Color = Color { r: 99, g: 102, b: 241 };
/// Near-black body text
pub const TEXT: Color = Color { r: 31, g: 41, b: 55 };
/// Gray for secondary text and footers
pub const MUTED: Color = Color { r: 156, g: 163, b: 175 };

/// A single drawing instruction, positioned in millimeters from the
/// top-left corner of the page. Text coordinates are the baseline start.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f64,
        y: f64,
        size: f64,
        style: FontStyle,
        color: Color,
        content: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Fully laid out report, ready for the PDF writer
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Page>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lay out the full report for one analysis result
///
/// `generated_on` is the preformatted date shown under the title; passing it
/// in keeps the layout a pure function of its arguments.
pub fn build_layout(result: &AnalysisResult, generated_on: &str) -> ReportLayout {
    let mut composer = Composer::new();

    header(&mut composer, result, generated_on);
    overview(&mut composer, result);
    role_scores(&mut composer, result);
    skill_gaps(&mut composer, result);
    industries(&mut composer, result);
    recommendations(&mut composer, result);

    let mut pages = composer.finish();
    stamp_footers(&mut pages);
    ReportLayout { pages }
}

/// Single downward cursor over a growing list of pages
///
/// Every block asks `ensure_room` for its vertical extent (distance from the
/// cursor to the lowest ink the block will place) before drawing, so no block
/// is ever split across a page break.
struct Composer {
    pages: Vec<Page>,
    ops: Vec<DrawOp>,
    y: f64,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: MARGIN_TOP_MM,
        }
    }

    fn ensure_room(&mut self, extent: f64) {
        if self.y + extent > CONTENT_FLOOR_MM {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.pages.push(Page {
            ops: std::mem::take(&mut self.ops),
        });
        self.y = MARGIN_TOP_MM;
    }

    /// Text at the cursor baseline
    fn text(&mut self, x: f64, content: impl Into<String>, size: f64, style: FontStyle, color: Color) {
        let y = self.y;
        self.text_at(x, y, content, size, style, color);
    }

    /// Text at a fixed baseline, independent of the cursor
    fn text_at(
        &mut self,
        x: f64,
        y: f64,
        content: impl Into<String>,
        size: f64,
        style: FontStyle,
        color: Color,
    ) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            size,
            style,
            color,
            content: content.into(),
        });
    }

    fn section_heading(&mut self, title: &str, keep_with: f64) {
        self.ensure_room(HEADING_DROP_MM + keep_with);
        self.text(20.0, title, 12.0, FontStyle::Regular, TEXT);
        self.y += HEADING_DROP_MM;
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(Page { ops: self.ops });
        self.pages
    }
}

fn header(c: &mut Composer, result: &AnalysisResult, generated_on: &str) {
    c.text_at(20.0, 20.0, "Career Analysis Report", 24.0, FontStyle::Regular, PRIMARY);
    c.text_at(
        20.0,
        28.0,
        format!("Generated on {}", generated_on),
        10.0,
        FontStyle::Regular,
        MUTED,
    );
    c.ops.push(DrawOp::Line {
        from: (20.0, 32.0),
        to: (190.0, 32.0),
        width: 0.5,
        color: PRIMARY,
    });

    c.text_at(20.0, 42.0, "Professional Summary", 12.0, FontStyle::Regular, TEXT);
    c.y = 48.0;
    // The summary is the one free-flowing paragraph: its first line sits
    // directly under the heading, and overflow lines continue page by page.
    for line in wrap_text(result.summary_text(), 10.0, FontStyle::Regular, SUMMARY_WRAP_MM) {
        c.ensure_room(0.0);
        c.text(20.0, line, 10.0, FontStyle::Regular, TEXT);
        c.y += LINE_STEP_MM;
    }
    c.y += 10.0;
}

fn overview(c: &mut Composer, result: &AnalysisResult) {
    c.section_heading("Profile Overview", 0.0);

    if let Some(field) = &result.current_field {
        overview_row(c, format!("Current Field: {}", field), 6.0);
    }
    overview_row(
        c,
        format!("Competencies Identified: {}", result.skills.len()),
        6.0,
    );
    overview_row(
        c,
        format!(
            "Years of Experience: {}",
            format_number(result.experience_years)
        ),
        6.0,
    );

    let preview_len = result.skills.len().min(SKILL_PREVIEW_LIMIT);
    let ellipsis = if result.skills.len() > SKILL_PREVIEW_LIMIT {
        "..."
    } else {
        ""
    };
    overview_row(
        c,
        format!(
            "Key Skills: {}{}",
            result.skills[..preview_len].join(", "),
            ellipsis
        ),
        10.0,
    );
}

fn overview_row(c: &mut Composer, content: String, advance: f64) {
    c.ensure_room(0.0);
    c.text(25.0, content, 10.0, FontStyle::Regular, TEXT);
    c.y += advance;
}

fn role_scores(c: &mut Composer, result: &AnalysisResult) {
    // A row's lowest ink is the bar, reaching 1mm under the baseline
    c.section_heading("Role Match Scores", 1.0);

    for (role, score) in result.ranked_roles() {
        c.ensure_room(1.0);
        c.text(25.0, format!("{}:", role), 10.0, FontStyle::Regular, TEXT);
        c.text(
            120.0,
            format!("{}%", format_number(score)),
            10.0,
            FontStyle::Regular,
            PRIMARY,
        );
        let bar = (score / 100.0 * SCORE_BAR_MAX_MM).clamp(0.0, SCORE_BAR_MAX_MM);
        if bar > 0.0 {
            c.ops.push(DrawOp::FillRect {
                x: 130.0,
                y: c.y - 3.0,
                width: bar,
                height: 4.0,
                color: PRIMARY,
            });
        }
        c.y += 7.0;
    }
    c.y += 5.0;
}

fn skill_gaps(c: &mut Composer, result: &AnalysisResult) {
    let groups: Vec<(&str, &[String])> = result
        .ranked_roles()
        .into_iter()
        .map(|(role, _)| (role, result.gaps_for(role)))
        .filter(|(_, gaps)| !gaps.is_empty())
        .collect();

    let first_extent = groups
        .first()
        .map(|(_, gaps)| gap_group_extent(gaps))
        .unwrap_or(0.0);
    c.section_heading("Skills to Develop", first_extent);

    for (role, gaps) in groups {
        let shown = &gaps[..gaps.len().min(GAPS_PER_ROLE)];
        c.ensure_room(gap_group_extent(gaps));
        c.text(25.0, format!("{}:", role), 10.0, FontStyle::Bold, TEXT);
        c.y += 6.0;
        for skill in shown {
            c.text(30.0, format!("\u{2022} {}", skill), 10.0, FontStyle::Regular, MUTED);
            c.y += LINE_STEP_MM;
        }
        c.y += 3.0;
    }
}

fn gap_group_extent(gaps: &[String]) -> f64 {
    let shown = gaps.len().min(GAPS_PER_ROLE);
    6.0 + LINE_STEP_MM * (shown.saturating_sub(1)) as f64
}

fn industries(c: &mut Composer, result: &AnalysisResult) {
    if result.trending_industries.is_empty() {
        return;
    }
    c.section_heading("Trending Industries for Your Profile", 0.0);

    for industry in &result.trending_industries {
        c.ensure_room(0.0);
        c.text(25.0, format!("\u{2022} {}", industry), 10.0, FontStyle::Regular, MUTED);
        c.y += LINE_STEP_MM;
    }
    c.y += 8.0;
}

fn recommendations(c: &mut Composer, result: &AnalysisResult) {
    let entries: Vec<(usize, &Recommendation, Vec<String>)> = result
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let tip_lines = match rec.learning_tip.as_deref() {
                Some(tip) if !tip.is_empty() => wrap_text(
                    &format!("Tip: {}", tip),
                    10.0,
                    FontStyle::Regular,
                    TIP_WRAP_MM,
                ),
                _ => Vec::new(),
            };
            (i, rec, tip_lines)
        })
        .collect();

    let first_extent = entries
        .first()
        .map(|(_, _, tips)| rec_entry_extent(tips.len()))
        .unwrap_or(0.0);
    c.section_heading("Learning Recommendations", first_extent);

    for (index, rec, tip_lines) in entries {
        c.ensure_room(rec_entry_extent(tip_lines.len()));
        c.text(
            25.0,
            format!("{}. {}", index + 1, rec.skill),
            10.0,
            FontStyle::Bold,
            PRIMARY,
        );
        c.y += 6.0;
        c.text(30.0, format!("Priority: {}", rec.priority), 10.0, FontStyle::Regular, TEXT);
        c.y += LINE_STEP_MM;
        c.text(30.0, format!("Resource: {}", rec.resource), 10.0, FontStyle::Regular, TEXT);
        c.y += LINE_STEP_MM;
        c.text(30.0, format!("Timeframe: {}", rec.timeframe), 10.0, FontStyle::Regular, TEXT);
        c.y += LINE_STEP_MM;
        for line in tip_lines {
            c.text(30.0, line, 10.0, FontStyle::Regular, MUTED);
            c.y += LINE_STEP_MM;
        }
        c.y += 5.0;
    }
}

// Baseline offsets inside one recommendation entry: title at 0, the three
// detail rows at 6/11/16, tip lines from 21 on.
fn rec_entry_extent(tip_line_count: usize) -> f64 {
    if tip_line_count == 0 {
        16.0
    } else {
        21.0 + LINE_STEP_MM * (tip_line_count - 1) as f64
    }
}

fn stamp_footers(pages: &mut [Page]) {
    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        page.ops.push(DrawOp::Text {
            x: 180.0,
            y: FOOTER_Y_MM,
            size: 8.0,
            style: FontStyle::Regular,
            color: MUTED,
            content: format!("Page {} of {}", index + 1, total),
        });
        page.ops.push(DrawOp::Text {
            x: 20.0,
            y: FOOTER_Y_MM,
            size: 8.0,
            style: FontStyle::Regular,
            color: MUTED,
            content: PRODUCT_LABEL.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn base_result() -> AnalysisResult {
        let mut role_matches = BTreeMap::new();
        role_matches.insert("Data Scientist".to_string(), 82.0);
        role_matches.insert("UX Designer".to_string(), 40.0);

        let mut skill_gaps = BTreeMap::new();
        skill_gaps.insert(
            "Data Scientist".to_string(),
            vec!["SQL".to_string(), "Statistics".to_string()],
        );

        AnalysisResult {
            summary: Some("Experienced engineer with a data focus.".to_string()),
            current_field: Some("Software Engineering".to_string()),
            skills: vec!["Python".to_string(), "Docker".to_string()],
            experience_years: 6.0,
            role_matches,
            skill_gaps,
            trending_industries: vec!["AI & ML".to_string()],
            recommendations: vec![Recommendation {
                skill: "SQL".to_string(),
                priority: "High".to_string(),
                resource: "Mode SQL Tutorial".to_string(),
                timeframe: "2-3 months".to_string(),
                learning_tip: Some("Practice writing queries daily.".to_string()),
            }],
            ..Default::default()
        }
    }

    fn page_texts(page: &Page) -> Vec<&str> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn find_page_with(layout: &ReportLayout, needle: &str) -> Option<usize> {
        layout
            .pages
            .iter()
            .position(|p| page_texts(p).iter().any(|t| t.contains(needle)))
    }

    #[test]
    fn test_small_report_fits_one_page() {
        let layout = build_layout(&base_result(), "1/15/2025");
        assert_eq!(layout.page_count(), 1);

        let texts = page_texts(&layout.pages[0]);
        assert_eq!(texts[0], "Career Analysis Report");
        assert_eq!(texts[1], "Generated on 1/15/2025");
    }

    #[test]
    fn test_sections_appear_in_order() {
        let layout = build_layout(&base_result(), "1/15/2025");
        let texts = page_texts(&layout.pages[0]);

        let pos = |needle: &str| {
            texts
                .iter()
                .position(|t| *t == needle)
                .unwrap_or_else(|| panic!("missing section {needle}"))
        };
        assert!(pos("Professional Summary") < pos("Profile Overview"));
        assert!(pos("Profile Overview") < pos("Role Match Scores"));
        assert!(pos("Role Match Scores") < pos("Skills to Develop"));
        assert!(pos("Skills to Develop") < pos("Trending Industries for Your Profile"));
        assert!(pos("Trending Industries for Your Profile") < pos("Learning Recommendations"));
    }

    #[test]
    fn test_same_input_same_layout() {
        let result = base_result();
        assert_eq!(
            build_layout(&result, "1/15/2025"),
            build_layout(&result, "1/15/2025")
        );
    }

    #[test]
    fn test_role_rows_ranked_with_name_tiebreak() {
        let mut result = base_result();
        result.role_matches.insert("Backend Developer".to_string(), 82.0);

        let layout = build_layout(&result, "1/15/2025");
        let texts = page_texts(&layout.pages[0]);
        let rows: Vec<&str> = texts
            .iter()
            .copied()
            .filter(|t| t.ends_with(':') && t.len() > 1 && *t != "Key Skills:")
            .collect();
        // Equal scores fall back to alphabetical order
        assert_eq!(
            rows[..3],
            ["Backend Developer:", "Data Scientist:", "UX Designer:"]
        );
    }

    #[test]
    fn test_score_bar_width_follows_score_and_clamps() {
        let mut result = base_result();
        result.role_matches.insert("Robotics Lead".to_string(), 150.0);
        result.role_matches.insert("Zero Fit".to_string(), 0.0);

        let layout = build_layout(&result, "1/15/2025");
        let bars: Vec<f64> = layout.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { width, .. } => Some(*width),
                _ => None,
            })
            .collect();

        // Rows are ranked, so the clamped 150% bar comes first
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], 60.0);
        assert!((bars[1] - 49.2).abs() < 1e-9);
        assert!((bars[2] - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_gap_groups_follow_ranking_and_skip_gapless_roles() {
        let layout = build_layout(&base_result(), "1/15/2025");
        let texts = page_texts(&layout.pages[0]);

        let heading = texts.iter().position(|t| *t == "Skills to Develop").unwrap();
        let after_heading = &texts[heading + 1..];
        assert_eq!(after_heading[0], "Data Scientist:");
        assert_eq!(after_heading[1], "\u{2022} SQL");
        assert_eq!(after_heading[2], "\u{2022} Statistics");
        // UX Designer has no gaps, so no group is emitted for it
        assert!(!after_heading.contains(&"UX Designer:"));

        // Role rows above the gap section still rank by score
        let ds_row = texts.iter().position(|t| *t == "Data Scientist:").unwrap();
        let ux_row = texts.iter().position(|t| *t == "UX Designer:").unwrap();
        assert!(ds_row < ux_row);
    }

    #[test]
    fn test_gap_bullets_capped_at_five() {
        let mut result = base_result();
        let many: Vec<String> = (1..=7).map(|i| format!("Skill {i}")).collect();
        result.skill_gaps.insert("Data Scientist".to_string(), many);

        let layout = build_layout(&result, "1/15/2025");
        let bullet_count = page_texts(&layout.pages[0])
            .iter()
            .filter(|t| t.starts_with("\u{2022} Skill"))
            .count();
        assert_eq!(bullet_count, 5);
    }

    #[test]
    fn test_skills_preview_truncates_beyond_limit() {
        let mut result = base_result();
        result.skills = (1..=12).map(|i| format!("S{i}")).collect();

        let layout = build_layout(&result, "1/15/2025");
        let texts = page_texts(&layout.pages[0]);
        let key_skills = texts
            .iter()
            .find(|t| t.starts_with("Key Skills:"))
            .unwrap();
        assert!(key_skills.ends_with("..."));
        assert!(key_skills.contains("S10"));
        assert!(!key_skills.contains("S11"));
    }

    #[test]
    fn test_missing_summary_uses_placeholder() {
        let mut result = base_result();
        result.summary = None;

        let layout = build_layout(&result, "1/15/2025");
        assert!(page_texts(&layout.pages[0]).contains(&"No summary available"));
    }

    #[test]
    fn test_empty_industries_section_omitted() {
        let mut result = base_result();
        result.trending_industries.clear();

        let layout = build_layout(&result, "1/15/2025");
        assert!(find_page_with(&layout, "Trending Industries").is_none());
    }

    #[test]
    fn test_footers_stamped_on_every_page() {
        let mut result = base_result();
        result.recommendations = (1..=30)
            .map(|i| Recommendation {
                skill: format!("Skill {i}"),
                priority: "Medium".to_string(),
                resource: "Course".to_string(),
                timeframe: "1-2 months".to_string(),
                learning_tip: None,
            })
            .collect();

        let layout = build_layout(&result, "1/15/2025");
        let total = layout.page_count();
        assert!(total > 1);

        for (index, page) in layout.pages.iter().enumerate() {
            let texts = page_texts(page);
            let expected = format!("Page {} of {}", index + 1, total);
            assert_eq!(texts[texts.len() - 2], expected);
            assert_eq!(texts[texts.len() - 1], PRODUCT_LABEL);
        }
    }

    #[test]
    fn test_no_body_ink_below_content_floor() {
        let mut result = base_result();
        result.summary = Some("A long narrative. ".repeat(80));
        result.recommendations = (1..=25)
            .map(|i| Recommendation {
                skill: format!("Skill {i}"),
                priority: "High".to_string(),
                resource: "Docs".to_string(),
                timeframe: "1 month".to_string(),
                learning_tip: Some("Work through a project from start to finish.".to_string()),
            })
            .collect();

        let layout = build_layout(&result, "1/15/2025");
        for page in &layout.pages {
            for op in &page.ops {
                match op {
                    DrawOp::Text { y, .. } => {
                        assert!(*y <= CONTENT_FLOOR_MM || *y == 285.0, "text at y={y}");
                    }
                    DrawOp::FillRect { y, height, .. } => {
                        assert!(y + height <= CONTENT_FLOOR_MM, "rect bottom at {}", y + height);
                    }
                    DrawOp::Line { from, to, .. } => {
                        assert!(from.1 <= CONTENT_FLOOR_MM && to.1 <= CONTENT_FLOOR_MM);
                    }
                }
            }
        }
    }

    #[test]
    fn test_recommendation_entry_never_splits() {
        let mut result = base_result();
        // 13 role rows leave the recommendations heading at 251mm, where the
        // entry can no longer fit above the floor
        for i in 1..=11 {
            result.role_matches.insert(format!("Role {i:02}"), 50.0);
        }
        result.recommendations = vec![Recommendation {
            skill: "Kubernetes".to_string(),
            priority: "High".to_string(),
            resource: "CKA prep course".to_string(),
            timeframe: "3-4 months".to_string(),
            learning_tip: Some("Deploy a small app to understand pods and services.".to_string()),
        }];

        let layout = build_layout(&result, "1/15/2025");
        assert_eq!(layout.page_count(), 2);
        assert_eq!(find_page_with(&layout, "Role Match Scores"), Some(0));

        // Heading, entry title, details and tip all move to the next page
        // together instead of straddling the break
        let heading_page = find_page_with(&layout, "Learning Recommendations").unwrap();
        assert_eq!(heading_page, 1);
        assert_eq!(find_page_with(&layout, "1. Kubernetes"), Some(heading_page));
        assert_eq!(
            find_page_with(&layout, "Timeframe: 3-4 months"),
            Some(heading_page)
        );
        assert_eq!(find_page_with(&layout, "Deploy a small app"), Some(heading_page));
    }

    #[test]
    fn test_heading_kept_with_first_content() {
        let mut result = base_result();
        // 21 role rows leave the gaps heading at 259mm: alone it would fit,
        // but not together with its first group
        for i in 1..=19 {
            result.role_matches.insert(format!("Role {i:02}"), 50.0);
        }

        let layout = build_layout(&result, "1/15/2025");
        let heading_page = find_page_with(&layout, "Skills to Develop").unwrap();
        assert_eq!(heading_page, 1);
        assert_eq!(find_page_with(&layout, "\u{2022} SQL"), Some(heading_page));
    }
}
