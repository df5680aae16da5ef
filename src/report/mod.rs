//! Career analysis report pipeline: layout, text metrics and the PDF writer

pub mod layout;
pub mod metrics;
pub mod writer;

pub use layout::{build_layout, ReportLayout, PRODUCT_LABEL};
pub use writer::write_pdf;

use crate::error::Result;
use crate::model::AnalysisResult;
use chrono::Local;
use std::path::{Path, PathBuf};

/// File name every exported report is saved under
pub const REPORT_FILE_NAME: &str = "career-analysis-report.pdf";

/// Render a result to PDF bytes, stamping the given generation date
pub fn render_pdf(result: &AnalysisResult, generated_on: &str) -> Result<Vec<u8>> {
    write_pdf(&build_layout(result, generated_on))
}

/// Render a result with today's date and save it under the canonical
/// file name inside `output_dir`
pub fn save_report(result: &AnalysisResult, output_dir: &Path) -> Result<PathBuf> {
    let generated_on = Local::now().format("%-m/%-d/%Y").to_string();
    let bytes = render_pdf(result, &generated_on)?;

    if !output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(output_dir)?;
    }
    let path = output_dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
