//! Resume checks

use crate::context::ProbeContext;
use crate::error::{ProbeError, ProbeResult};
use crate::shape::{compact, require_array, require_fields, require_object, text_len, typed};
use careergpt_probe_common::protocol::ResumeAnalyzeRequest;
use careergpt_probe_common::types::{value_text, OpaqueId, ResumeUploadResponse};
use std::path::Path;

const SAMPLE_FILE_NAME: &str = "john_doe_resume.txt";

const SAMPLE_RESUME: &str = "John Doe
Software Engineer

EXPERIENCE:
- 3 years at Tech Company as Senior Developer
- Built scalable web applications using Python and React
- Led team of 5 developers on cloud migration project

SKILLS:
- Programming: Python, JavaScript, Java, SQL
- Frameworks: React, Django, Flask, Node.js
- Cloud: AWS, Docker, Kubernetes
- Databases: PostgreSQL, MongoDB, Redis

EDUCATION:
- BS Computer Science, University of Technology (2018)

ACHIEVEMENTS:
- Increased system performance by 40%
- Reduced deployment time by 60% through CI/CD implementation
- Mentored 3 junior developers";

const UPLOAD_FIELDS: [&str; 4] = ["resumeId", "fileName", "textPreview", "charCount"];

/// MIME type by file extension; unknown extensions upload as octet-stream
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("doc") => "application/msword",
        _ => "application/octet-stream",
    }
}

/// File name, MIME type and bytes of the resume to upload
async fn resume_source(ctx: &ProbeContext) -> ProbeResult<(String, &'static str, Vec<u8>)> {
    match &ctx.config.resume_file {
        Some(path) => {
            let bytes = tokio::fs::read(path).await?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(SAMPLE_FILE_NAME)
                .to_string();
            Ok((name, mime_for(path), bytes))
        }
        None => Ok((
            SAMPLE_FILE_NAME.to_string(),
            "text/plain",
            SAMPLE_RESUME.as_bytes().to_vec(),
        )),
    }
}

/// POST /resume/upload (multipart field `file`)
pub async fn check_upload(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let (file_name, mime, bytes) = resume_source(ctx).await?;
    let response = ctx
        .client
        .upload("/resume/upload", "file", &file_name, mime, bytes)
        .await?;
    let body = response.expect_ok("Upload endpoint")?;
    require_fields(&body, &UPLOAD_FIELDS)?;

    let upload: ResumeUploadResponse = typed(&body)?;
    ctx.captured.resume_id = Some(upload.resume_id.clone());

    Ok(format!(
        "File: {}, Characters: {}, ResumeID: {}",
        value_text(&upload.file_name),
        value_text(&upload.char_count),
        upload.resume_id
    ))
}

/// POST /resume/analyze
pub async fn check_analyze(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let resume_id = ctx.captured.resume()?.clone();
    let request = ResumeAnalyzeRequest { resume_id };
    let response = ctx.client.post_json("/resume/analyze", &request).await?;
    let body = response.expect_ok("Resume")?;

    if require_fields(&body, &["analysis", "resumeId"]).is_err() {
        return Err(ProbeError::Unexpected(format!(
            "Missing analysis or resumeId: {}",
            compact(&body)
        )));
    }

    Ok(format!(
        "Analysis completed in {:.1}s, Length: {} chars",
        response.elapsed_secs(),
        text_len(&body["analysis"])
    ))
}

/// GET /resumes
pub async fn check_list(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let response = ctx.client.get("/resumes").await?;
    let body = response.expect_ok("Resumes endpoint")?;
    let resumes = require_array(&body, "resumes")?;
    Ok(format!("Retrieved {} resumes", resumes.len()))
}

/// GET /resume/{id}
pub async fn check_get(ctx: &mut ProbeContext) -> ProbeResult<String> {
    let resume_id = ctx.captured.resume()?.clone();
    let response = ctx.client.get(&format!("/resume/{resume_id}")).await?;
    let body = response.expect_ok("Resume")?;
    let resume = require_object(&body, "resume")?;

    let same_id = resume.get("id").and_then(OpaqueId::from_value) == Some(resume_id);
    if !same_id || !resume.contains_key("textContent") {
        return Err(ProbeError::Unexpected("Resume structure invalid".to_string()));
    }

    let file_name = resume
        .get("fileName")
        .and_then(|n| n.as_str())
        .unwrap_or("Unknown");
    Ok(format!("Resume found: {file_name}"))
}
