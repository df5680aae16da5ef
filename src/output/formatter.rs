//! Output formatters - console, JSON and HTML renditions of a career analysis

use crate::catalog;
use crate::chart;
use crate::config::OutputFormat;
use crate::error::{Result, SkillScopeError};
use crate::model::{
    ats_note_kind, format_number, AnalysisResult, AtsNoteKind, PriorityLevel, SKILL_PREVIEW_LIMIT,
};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const ATS_INTRO: &str = "Applicant Tracking Systems (ATS) scan resumes before human eyes see them. Here's how to improve your resume's compatibility:";
const INDUSTRIES_INTRO: &str =
    "Based on your skill set, these sectors are actively seeking professionals like you:";

/// Trait for formatting a full analysis
pub trait OutputFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping results into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// HTML formatter producing a standalone dashboard page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Your Career Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #6366f1;
            padding-bottom: 20px;
        }
        .header h1 { color: #6366f1; margin-bottom: 5px; }
        .header .meta { color: #9ca3af; }
        .section {
            margin: 25px 0;
        }
        .section h2 {
            color: #6366f1;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .summary {
            background: #eef2ff;
            border-left: 4px solid #6366f1;
            padding: 15px;
            border-radius: 6px;
        }
        .best-match {
            background: linear-gradient(135deg, #6366f1, #a855f7);
            color: white;
            padding: 20px;
            border-radius: 8px;
            text-align: center;
        }
        .best-match .role { font-size: 1.8em; font-weight: bold; }
        .chip {
            display: inline-block;
            background: #f3f4f6;
            border: 1px solid #e5e7eb;
            border-radius: 16px;
            padding: 4px 12px;
            margin: 3px;
            font-size: 0.9em;
        }
        .chip.industry { border-color: #d8b4fe; color: #7e22ce; background: white; }
        table.radar {
            width: 100%;
            border-collapse: collapse;
            margin: 10px 0;
        }
        table.radar th, table.radar td {
            text-align: left;
            padding: 8px 12px;
            border-bottom: 1px solid #e9ecef;
        }
        .role-card {
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 15px;
            margin: 10px 0;
        }
        .role-card h4 { margin: 0 0 8px 0; }
        .score-strong { color: #16a34a; font-weight: bold; }
        .score-moderate { color: #ca8a04; font-weight: bold; }
        .score-low { color: #dc2626; font-weight: bold; }
        .bar-track {
            background: #e5e7eb;
            border-radius: 9999px;
            height: 8px;
            margin: 8px 0;
        }
        .bar-fill {
            background: #6366f1;
            border-radius: 9999px;
            height: 8px;
        }
        .gaps { color: #6b7280; font-size: 0.9em; }
        .ats-note {
            padding: 10px 12px;
            border-radius: 6px;
            margin: 6px 0;
            background: #f8f9fa;
        }
        .ats-note.warn { border-left: 4px solid #d97706; }
        .ats-note.ok { border-left: 4px solid #16a34a; }
        .recommendation {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #6366f1;
        }
        .priority-high { border-left-color: #dc2626; }
        .priority-medium { border-left-color: #ca8a04; }
        .priority-low { border-left-color: #16a34a; }
        .priority-badge {
            display: inline-block;
            font-size: 0.8em;
            border-radius: 4px;
            padding: 2px 8px;
            margin-left: 8px;
            background: #e5e7eb;
        }
        .tip {
            background: #eef2ff;
            border: 1px solid #c7d2fe;
            border-radius: 6px;
            padding: 10px;
            margin: 8px 0;
            font-size: 0.9em;
        }
        .timeframe { color: #6b7280; font-size: 0.9em; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Your Career Analysis</h1>
            <p class="meta">{% if has_current_field %}{{ current_field }} | {% endif %}{{ competency_count }} competencies detected | {{ experience_years }} years experience</p>
            <p class="meta">Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Professional Summary</h2>
            <p class="summary">{{ summary }}</p>
        </div>

        {% if has_top_role %}
        <div class="section">
            <div class="best-match">
                <p>Best Match</p>
                <p class="role">{{ top_role }}</p>
                <p>{{ top_role_score }}% Match</p>
            </div>
        </div>
        {% endif %}

        {% if has_ats %}
        <div class="section">
            <h2>ATS Optimization Tips</h2>
            {{ ats_html | safe }}
        </div>
        {% endif %}

        {% if has_radar %}
        <div class="section">
            <h2>Key Competencies Comparison</h2>
            <table class="radar">
                <tr><th>Competency</th><th>You</th><th>Industry Standard</th></tr>
                {{ radar_html | safe }}
            </table>
        </div>
        {% endif %}

        <div class="section">
            <h2>Your Competencies</h2>
            {{ skills_html | safe }}
        </div>

        <div class="section">
            <h2>Role Match Scores</h2>
            {{ role_cards_html | safe }}
        </div>

        {% if has_industries %}
        <div class="section">
            <h2>Trending Industries for Your Profile</h2>
            <p>{{ industries_intro }}</p>
            {{ industries_html | safe }}
        </div>
        {% endif %}

        <div class="section">
            <h2>Recommended Learning Path</h2>
            {{ recommendations_html | safe }}
        </div>

        <div class="metadata">
            <p><strong>Generated by SkillScope Career Analyzer v{{ version }}</strong></p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    current_field: String,
    has_current_field: bool,
    competency_count: usize,
    experience_years: String,
    summary: String,
    top_role: String,
    top_role_score: String,
    has_top_role: bool,
    ats_html: String,
    has_ats: bool,
    radar_html: String,
    has_radar: bool,
    skills_html: String,
    role_cards_html: String,
    industries_intro: String,
    industries_html: String,
    has_industries: bool,
    recommendations_html: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_match_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 75.0 => ("STRONG MATCH", Color::Green),
            s if s >= 50.0 => ("MODERATE MATCH", Color::Yellow),
            _ => ("LOW MATCH", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: PriorityLevel) -> String {
        if self.use_colors {
            let icon = match priority {
                PriorityLevel::High => "⚠️",
                PriorityLevel::Medium => "📋",
                PriorityLevel::Low => "💡",
                PriorityLevel::Other => "🔹",
            };
            format!("{} ", icon)
        } else {
            let text_icon = match priority {
                PriorityLevel::High => "[!]",
                PriorityLevel::Medium => "[-]",
                PriorityLevel::Low => "[+]",
                PriorityLevel::Other => "[.]",
            };
            format!("{} ", text_icon)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 YOUR CAREER ANALYSIS", 1));
        let mut headline = Vec::new();
        if let Some(field) = &result.current_field {
            headline.push(self.colorize(field, Color::Cyan));
        }
        headline.push(format!("{} competencies detected", result.skills.len()));
        headline.push(format!(
            "{} years experience",
            format_number(result.experience_years)
        ));
        output.push_str(&format!("{}\n", headline.join(" | ")));

        // Best match
        if let Some((role, score)) = result.top_role() {
            output.push_str(&self.format_header("🏆 Best Match", 2));
            output.push_str(&format!(
                "{} - {}% Match {}\n",
                self.colorize(role, Color::White),
                format_number(score),
                self.format_match_badge(score)
            ));
        }

        // Professional Summary
        output.push_str(&self.format_header("Professional Summary", 2));
        output.push_str(&format!("{}\n", result.summary_text()));

        // ATS feedback
        if !result.ats_feedback.is_empty() {
            output.push_str(&self.format_header("ATS Optimization Tips", 2));
            output.push_str(&format!("{}\n", ATS_INTRO));
            for note in &result.ats_feedback {
                let color = match ats_note_kind(note) {
                    AtsNoteKind::Warning => Color::Yellow,
                    AtsNoteKind::Confirmation => Color::Green,
                };
                output.push_str(&format!("  {}\n", self.colorize(note, color)));
            }
        }

        // Radar comparison
        let points = chart::comparison_points(&result.radar_data);
        if !points.is_empty() {
            output.push_str(&self.format_header("Key Competencies Comparison", 2));
            for point in &points {
                output.push_str(&format!(
                    "  • {}: you {}% | industry {}%\n",
                    point.category,
                    format_number(point.your_value),
                    format_number(point.industry_value)
                ));
            }
        }

        // Competencies
        if !result.skills.is_empty() {
            output.push_str(&self.format_header("Your Competencies", 3));
            for skill in result.skills.iter().take(SKILL_PREVIEW_LIMIT) {
                output.push_str(&format!("  • {}\n", skill));
            }
            if result.skills.len() > SKILL_PREVIEW_LIMIT {
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize(
                        &format!("+{} more", result.skills.len() - SKILL_PREVIEW_LIMIT),
                        Color::BrightBlack
                    )
                ));
            }
        }

        // Role matches
        output.push_str(&self.format_header("Role Match Scores", 2));
        for (role, score) in result.ranked_roles() {
            output.push_str(&format!(
                "{}: {}% {}\n",
                self.colorize(role, Color::White),
                format_number(score),
                self.format_match_badge(score)
            ));

            let gaps = result.gaps_for(role);
            if !gaps.is_empty() {
                let shown = if self.detailed { gaps.len() } else { 3 };
                let preview: Vec<&str> =
                    gaps.iter().take(shown).map(String::as_str).collect();
                output.push_str(&format!(
                    "   Skills to Develop: {}\n",
                    self.colorize(&preview.join(", "), Color::BrightBlack)
                ));
            }
        }

        // Trending industries
        if !result.trending_industries.is_empty() {
            output.push_str(&self.format_header("Trending Industries for Your Profile", 2));
            output.push_str(&format!("{}\n", INDUSTRIES_INTRO));
            for industry in &result.trending_industries {
                output.push_str(&format!(
                    "  • {}\n",
                    self.colorize(industry, Color::Magenta)
                ));
            }
        }

        // Learning path
        if !result.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommended Learning Path", 2));
            for (i, rec) in result.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}{} [{} Priority]\n",
                    i + 1,
                    self.format_priority_icon(rec.priority_level()),
                    self.colorize(&rec.skill, Color::White),
                    rec.priority
                ));
                output.push_str(&format!("   Resource: {}\n", rec.resource));
                output.push_str(&format!("   Timeframe: {}\n", rec.timeframe));
                if let Some(tip) = &rec.learning_tip {
                    output.push_str(&format!(
                        "   💡 {}\n",
                        self.colorize(tip, Color::BrightBlack)
                    ));
                }
                if self.detailed {
                    output.push_str(&format!(
                        "   YouTube: {}\n",
                        catalog::youtube_search_url(&rec.skill)
                    ));
                    output.push_str(&format!(
                        "   Coursera: {}\n",
                        catalog::coursera_search_url(&rec.skill)
                    ));
                }
                output.push('\n');
            }
        }

        // Footer
        output.push_str(&format!(
            "\n{} Generated by SkillScope Career Analyzer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, result: &AnalysisResult) -> HtmlTemplate {
        let ats_html = result
            .ats_feedback
            .iter()
            .map(|note| {
                let class = match ats_note_kind(note) {
                    AtsNoteKind::Warning => "warn",
                    AtsNoteKind::Confirmation => "ok",
                };
                format!("<div class=\"ats-note {}\">{}</div>", class, note)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let points = chart::comparison_points(&result.radar_data);
        let radar_html = points
            .iter()
            .map(|p| {
                format!(
                    "<tr><td>{}</td><td>{}%</td><td>{}%</td></tr>",
                    p.category,
                    format_number(p.your_value),
                    format_number(p.industry_value)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let skills_html = result
            .skills
            .iter()
            .map(|s| format!("<span class=\"chip\">{}</span>", s))
            .collect::<Vec<_>>()
            .join("\n");

        let role_cards_html = result
            .ranked_roles()
            .into_iter()
            .map(|(role, score)| {
                let score_class = if score >= 75.0 {
                    "score-strong"
                } else if score >= 50.0 {
                    "score-moderate"
                } else {
                    "score-low"
                };
                let width = score.clamp(0.0, 100.0);
                let gaps = result.gaps_for(role);
                let gaps_html = if gaps.is_empty() {
                    String::new()
                } else {
                    let preview: Vec<&str> =
                        gaps.iter().take(3).map(String::as_str).collect();
                    format!(
                        "<p class=\"gaps\">Skills to Develop: {}</p>",
                        preview.join(", ")
                    )
                };
                format!(
                    "<div class=\"role-card\">\n    <h4>{}</h4>\n    <p>Match Score: <span class=\"{}\">{}%</span></p>\n    <div class=\"bar-track\"><div class=\"bar-fill\" style=\"width: {}%\"></div></div>\n    {}\n</div>",
                    role,
                    score_class,
                    format_number(score),
                    format_number(width),
                    gaps_html
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let industries_html = result
            .trending_industries
            .iter()
            .map(|i| format!("<span class=\"chip industry\">{}</span>", i))
            .collect::<Vec<_>>()
            .join("\n");

        let recommendations_html = result
            .recommendations
            .iter()
            .map(|rec| {
                let priority_class = match rec.priority_level() {
                    PriorityLevel::High => "priority-high",
                    PriorityLevel::Medium => "priority-medium",
                    PriorityLevel::Low => "priority-low",
                    PriorityLevel::Other => "",
                };
                let tip_html = rec
                    .learning_tip
                    .as_ref()
                    .map(|tip| format!("<div class=\"tip\">💡 {}</div>", tip))
                    .unwrap_or_default();
                format!(
                    "<div class=\"recommendation {}\">\n    <h4>{} <span class=\"priority-badge\">{} Priority</span></h4>\n    <p>{}</p>\n    {}\n    <p class=\"timeframe\">⏱ {}</p>\n</div>",
                    priority_class, rec.skill, rec.priority, rec.resource, tip_html, rec.timeframe
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let (top_role, top_role_score) = result
            .top_role()
            .map(|(role, score)| (role.to_string(), format_number(score)))
            .unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            current_field: result.current_field.clone().unwrap_or_default(),
            has_current_field: result.current_field.is_some(),
            competency_count: result.skills.len(),
            experience_years: format_number(result.experience_years),
            summary: result.summary_text().to_string(),
            has_top_role: !top_role.is_empty(),
            top_role,
            top_role_score,
            ats_html,
            has_ats: !result.ats_feedback.is_empty(),
            has_radar: !points.is_empty(),
            radar_html,
            skills_html,
            role_cards_html,
            industries_intro: INDUSTRIES_INTRO.to_string(),
            industries_html,
            has_industries: !result.trending_industries.is_empty(),
            recommendations_html,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        let template_data = self.create_template_data(result);
        template_data
            .render()
            .map_err(|e| SkillScopeError::Report(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, result: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(result),
            OutputFormat::Json => self.json_formatter.format_report(result),
            OutputFormat::Html => self.html_formatter.format_report(result),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, source_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
    }
}
