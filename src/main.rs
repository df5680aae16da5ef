//! SkillScope: career and skill-gap analysis tool with PDF report export

use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use skillscope::catalog::{self, LearningTips};
use skillscope::cli::{self, Cli, Commands, ConfigAction};
use skillscope::client::AnalysisClient;
use skillscope::config::Config;
use skillscope::error::{Result, SkillScopeError};
use skillscope::model::{format_number, AnalysisResult};
use skillscope::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use skillscope::report;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            sample,
            role,
            job,
            detailed,
            output,
            save,
            report: export_pdf,
            save_json,
        } => {
            info!("Starting resume analysis");

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(|e| SkillScopeError::InvalidInput(e))?;

            println!("🚀 Resume analysis");
            if let Some(path) = &resume {
                println!("📄 Resume: {}", path.display());
            }
            if sample {
                println!("📝 Using the bundled sample resume");
            }
            if let Some(target) = &role {
                println!("🎯 Target Role: {}", target);
            }
            if let Some(job_path) = &job {
                println!("💼 Job Description: {}", job_path.display());
            }
            println!("🔧 Output Format: {:?}", output_format);
            if detailed {
                println!("📊 Detailed analysis enabled");
            }

            // Read the optional job description before any request goes out
            let job_text = match &job {
                Some(path) => {
                    cli::validate_file_extension(path, &["txt", "md"]).map_err(|e| {
                        SkillScopeError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    Some(std::fs::read_to_string(path)?)
                }
                None => None,
            };

            let client = AnalysisClient::from_config(&config.api)?;

            println!();
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing your resume...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let outcome = match &resume {
                Some(path) => {
                    client
                        .analyze_resume(path, role.as_deref(), job_text.as_deref())
                        .await
                }
                None => {
                    client
                        .analyze_text(catalog::SAMPLE_RESUME, role.as_deref(), job_text.as_deref())
                        .await
                }
            };
            spinner.finish_and_clear();
            let mut result = outcome?;

            apply_learning_tips(&mut result, &config)?;

            // Present the analysis
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let formatted = generator.generate_report(&result, output_format)?;
            println!("{}", formatted);

            if let Some(save_path) = save {
                let target = if save_path.is_dir() {
                    let source = resume
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .and_then(|n| n.to_str())
                        .unwrap_or("sample");
                    save_path.join(suggest_filename(output_format, source, true))
                } else {
                    save_path
                };
                save_report_to_file(&formatted, &target)?;
                println!("💾 Output saved to: {}", target.display());
            }

            if let Some(json_path) = save_json {
                let json = serde_json::to_string_pretty(&result)?;
                save_report_to_file(&json, &json_path)?;
                println!("💾 Analysis JSON saved to: {}", json_path.display());
            }

            if export_pdf {
                let path = report::save_report(&result, &config.report.output_dir)?;
                println!("📄 PDF report saved to: {}", path.display());
            }

            if let Some((best, score)) = result.top_role() {
                println!(
                    "\n🎯 Analysis complete! Best match: {} ({}% match)",
                    best,
                    format_number(score)
                );
            } else {
                println!("\n✅ Analysis complete!");
            }
        }

        Commands::Report { input, out_dir } => {
            info!("Rendering report from saved analysis");

            cli::validate_file_extension(&input, &["json"])
                .map_err(|e| SkillScopeError::InvalidInput(format!("Analysis file: {}", e)))?;

            println!("📄 Rendering report from: {}", input.display());
            let content = std::fs::read_to_string(&input)?;
            let mut result: AnalysisResult = serde_json::from_str(&content)?;

            apply_learning_tips(&mut result, &config)?;

            let dir = out_dir.unwrap_or_else(|| config.report.output_dir.clone());
            let path = report::save_report(&result, &dir)?;
            println!("✅ Report saved to: {}", path.display());
        }

        Commands::Roles { filter } => {
            let query = filter.unwrap_or_default();
            let roles = catalog::filter_roles(&query);

            if roles.is_empty() {
                println!("No roles match '{}'", query);
            } else {
                println!("📚 Popular Roles\n");
                for role in &roles {
                    println!("  • {}", role);
                }
                println!("\n{} roles", roles.len());
                println!("💡 Pass one with: skillscope analyze --sample --role \"<name>\"");
            }
        }

        Commands::Tip { skill } => {
            let tips = LearningTips::load(config.report.tips_file.as_deref())?;

            println!("💡 Learning Tip: {}", tips.tip_for(&skill));
            println!("\n🔗 Learn More:");
            println!("  Search on YouTube: {}", catalog::youtube_search_url(&skill));
            println!(
                "  Search on Coursera: {}",
                catalog::coursera_search_url(&skill)
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("API Base URL: {}", config.api.base_url);
                println!("Request Timeout: {}s", config.api.timeout_secs);
                println!("Output Format: {:?}", config.output.format);
                println!("Detailed Output: {}", config.output.detailed);
                println!("Color Output: {}", config.output.color_output);
                println!("Report Directory: {}", config.report.output_dir.display());
                if let Some(tips) = &config.report.tips_file {
                    println!("Learning Tips File: {}", tips.display());
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Fill in missing learning tips from the tip table
fn apply_learning_tips(result: &mut AnalysisResult, config: &Config) -> Result<()> {
    let tips = LearningTips::load(config.report.tips_file.as_deref())?;
    for rec in &mut result.recommendations {
        if rec.learning_tip.is_none() {
            rec.learning_tip = Some(tips.tip_for(&rec.skill));
        }
    }
    Ok(())
}
