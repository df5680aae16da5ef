//! CLI interface for the career analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillscope")]
#[command(about = "Career and skill-gap analysis tool with PDF report export")]
#[command(long_about = "Submit a resume to the analysis service and explore role matches, skill gaps, trending industries and learning recommendations from the console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume and present the results
    Analyze {
        /// Path to resume file (PDF)
        #[arg(short, long, required_unless_present = "sample", conflicts_with = "sample")]
        resume: Option<PathBuf>,

        /// Analyze the bundled sample resume instead of a file
        #[arg(long)]
        sample: bool,

        /// Target role to match against
        #[arg(short = 't', long)]
        role: Option<String>,

        /// Path to a plain-text job description file
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save formatted output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Export the PDF report alongside the output
        #[arg(long)]
        report: bool,

        /// Save the raw analysis as JSON for later re-rendering
        #[arg(long)]
        save_json: Option<PathBuf>,
    },

    /// Render the PDF report from a saved analysis
    Report {
        /// Path to a saved analysis JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the report into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// List popular roles to target
    Roles {
        /// Case-insensitive filter
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show the learning tip and search links for a skill
    Tip {
        /// Skill name (e.g. "SQL", "Machine Learning")
        skill: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
