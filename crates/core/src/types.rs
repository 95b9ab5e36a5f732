use serde::{Deserialize, Serialize};

/// `GET /header-info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
}

/// `GET /readme`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeDoc {
    pub content: String,
}

/// `GET /architecture-image`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureImage {
    pub image_url: String,
}

/// `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub signed_url: String,
    pub file_id: String,
    pub gcs_uri: String,
}

/// `POST /analyze_video`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub processed_url: String,
    pub summary: String,
    /// Null when the backend produced no key frame.
    #[serde(default)]
    pub advice_url: Option<String>,
}

/// An uploaded video and its backend-issued identifiers. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub file_id: String,
    /// Backend-internal locator, passed back verbatim on analysis.
    pub storage_uri: String,
    pub playback_url: String,
}

impl From<UploadReceipt> for Asset {
    fn from(receipt: UploadReceipt) -> Self {
        Self {
            file_id: receipt.file_id,
            storage_uri: receipt.gcs_uri,
            playback_url: receipt.signed_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub processed_video_url: String,
    /// Markdown.
    pub summary_text: String,
    pub advice_image_url: String,
}

impl From<AnalysisReport> for AnalysisResult {
    fn from(report: AnalysisReport) -> Self {
        Self {
            processed_video_url: report.processed_url,
            summary_text: report.summary,
            advice_image_url: report.advice_url.unwrap_or_default(),
        }
    }
}
