//! HTTP client for the resume analysis service

use crate::config::ApiConfig;
use crate::error::{Result, SkillScopeError};
use crate::model::AnalysisResult;
use log::debug;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Upload cap enforced before any bytes leave the machine
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const ANALYZE_FALLBACK_MESSAGE: &str = "Failed to analyze resume. Please try again.";

#[derive(Debug, Serialize)]
struct AnalyzeTextRequest<'a> {
    text_resume: &'a str,
    target_role: Option<&'a str>,
    job_description: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the two analysis endpoints of the service
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(&api.base_url, api.timeout_secs)
    }

    /// Upload a PDF resume for analysis
    pub async fn analyze_resume(
        &self,
        pdf_path: &Path,
        target_role: Option<&str>,
        job_description: Option<&str>,
    ) -> Result<AnalysisResult> {
        validate_pdf_upload(pdf_path)?;

        let bytes = std::fs::read(pdf_path)?;
        let file_name = pdf_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.pdf")
            .to_string();
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let mut form = Form::new().part("file", part);
        if let Some(role) = target_role {
            form = form.text("target_role", role.to_string());
        }
        if let Some(jd) = job_description {
            form = form.text("job_description", jd.to_string());
        }

        let response = self
            .client
            .post(self.endpoint("/api/analyze-resume"))
            .multipart(form)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Submit raw resume text for analysis
    pub async fn analyze_text(
        &self,
        text: &str,
        target_role: Option<&str>,
        job_description: Option<&str>,
    ) -> Result<AnalysisResult> {
        debug!("Requesting text analysis ({} chars)", text.len());

        let request = AnalyzeTextRequest {
            text_resume: text,
            target_role,
            job_description,
        };
        let response = self
            .client
            .post(self.endpoint("/api/analyze-text"))
            .json(&request)
            .send()
            .await?;
        parse_response(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn parse_response(response: reqwest::Response) -> Result<AnalysisResult> {
    if response.status().is_success() {
        return Ok(response.json::<AnalysisResult>().await?);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = extract_detail(&body).unwrap_or_else(|| ANALYZE_FALLBACK_MESSAGE.to_string());
    Err(SkillScopeError::Api { status, message })
}

// Service errors carry a human-readable `detail` field
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

fn validate_pdf_upload(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(SkillScopeError::InvalidInput(
            "Please upload a PDF file".to_string(),
        ));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(SkillScopeError::InvalidInput(format!(
            "File is too large ({:.1} MB). Maximum size is 10 MB.",
            metadata.len() as f64 / (1024.0 * 1024.0)
        )));
    }
    Ok(())
}
