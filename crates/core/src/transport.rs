use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::{Client, Response, multipart};
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    types::{AnalysisReport, ArchitectureImage, HeaderInfo, ReadmeDoc, UploadReceipt},
};

pub mod endpoints {
    pub const HEADER_INFO: &str = "/header-info";
    pub const README: &str = "/readme";
    pub const ARCHITECTURE_IMAGE: &str = "/architecture-image";
    pub const UPLOAD: &str = "/upload";
    pub const ANALYZE_VIDEO: &str = "/analyze_video";
}

/// The only content type the file picker offers. The backend has the final say.
pub const VIDEO_MIME: &str = "video/mp4";

/// A local video chosen by drag-and-drop or the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
}

impl VideoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string())
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path)
            .await
            .map_err(|e| ClientError::unreadable(&self.path, e))
    }
}

/// Backend operations consumed by the controllers and content panels.
/// Every failure comes back as a value; nothing panics or retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn header_info(&self) -> Result<HeaderInfo>;
    async fn readme(&self) -> Result<ReadmeDoc>;
    async fn architecture_image(&self) -> Result<ArchitectureImage>;
    async fn upload(&self, file: &VideoFile) -> Result<UploadReceipt>;
    async fn analyze(&self, file_id: &str, storage_uri: &str) -> Result<AnalysisReport>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T> {
        let response = self
            .client
            .get(self.build_url(endpoint))
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;

        decode(endpoint, response).await
    }
}

/// Non-success statuses and undecodable bodies are both network failures.
async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::network(
            endpoint,
            format!("status {status}: {body}"),
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::network(endpoint, format!("invalid response body: {e}")))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn header_info(&self) -> Result<HeaderInfo> {
        self.get_json(endpoints::HEADER_INFO).await
    }

    async fn readme(&self) -> Result<ReadmeDoc> {
        self.get_json(endpoints::README).await
    }

    async fn architecture_image(&self) -> Result<ArchitectureImage> {
        self.get_json(endpoints::ARCHITECTURE_IMAGE).await
    }

    async fn upload(&self, file: &VideoFile) -> Result<UploadReceipt> {
        let endpoint = endpoints::UPLOAD;
        let bytes = file.read().await?;
        debug!(file = %file.path().display(), size = bytes.len(), "uploading video");

        let part = multipart::Part::bytes(bytes)
            .file_name(file.file_name())
            .mime_str(VIDEO_MIME)
            .map_err(|e| ClientError::network(endpoint, e))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.build_url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;

        decode(endpoint, response).await
    }

    async fn analyze(&self, file_id: &str, storage_uri: &str) -> Result<AnalysisReport> {
        let endpoint = endpoints::ANALYZE_VIDEO;
        let response = self
            .client
            .post(self.build_url(endpoint))
            .query(&[("gcs_uri", storage_uri), ("file_id", file_id)])
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;

        decode(endpoint, response).await
    }
}
