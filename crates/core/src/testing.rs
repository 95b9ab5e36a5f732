use std::{
    path::Path,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;

use crate::{
    error::{ClientError, Result},
    transport::{Transport, VideoFile, endpoints},
    types::{AnalysisReport, ArchitectureImage, HeaderInfo, ReadmeDoc, UploadReceipt},
};

/// In-memory backend. Derives identifiers from the file stem so `f1.mp4`
/// becomes asset `f1`.
#[derive(Default)]
pub(crate) struct FakeTransport {
    calls: Mutex<Vec<&'static str>>,
    fail_uploads: AtomicBool,
    fail_analysis: AtomicBool,
    fail_content: AtomicBool,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn set_fail_analysis(&self, fail: bool) {
        self.fail_analysis.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn set_fail_content(&self, fail: bool) {
        self.fail_content.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .expect("FakeTransport poisoned")
            .iter()
            .filter(|e| **e == endpoint)
            .count()
    }

    fn record(&self, endpoint: &'static str, fail: &AtomicBool) -> Result<()> {
        self.calls
            .lock()
            .expect("FakeTransport poisoned")
            .push(endpoint);
        if fail.load(Ordering::SeqCst) {
            Err(ClientError::network(endpoint, "status 500: backend unavailable"))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn receipt_for(file: &VideoFile) -> UploadReceipt {
    let name = file.file_name();
    let stem = Path::new(&name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    UploadReceipt {
        signed_url: format!("https://signed/{stem}"),
        file_id: stem,
        gcs_uri: format!("gs://bucket/{name}"),
    }
}

pub(crate) fn report_for(file_id: &str) -> AnalysisReport {
    AnalysisReport {
        processed_url: format!("https://processed/{file_id}"),
        summary: format!("# Report for {file_id}"),
        advice_url: Some(format!("https://advice/{file_id}.png")),
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn header_info(&self) -> Result<HeaderInfo> {
        self.record(endpoints::HEADER_INFO, &self.fail_content)?;
        Ok(HeaderInfo {
            description: "Pocket coach".to_string(),
            icon_url: "https://static/icon.png".to_string(),
        })
    }

    async fn readme(&self) -> Result<ReadmeDoc> {
        self.record(endpoints::README, &self.fail_content)?;
        Ok(ReadmeDoc {
            content: "# Readme".to_string(),
        })
    }

    async fn architecture_image(&self) -> Result<ArchitectureImage> {
        self.record(endpoints::ARCHITECTURE_IMAGE, &self.fail_content)?;
        Ok(ArchitectureImage {
            image_url: "https://static/architecture.png".to_string(),
        })
    }

    async fn upload(&self, file: &VideoFile) -> Result<UploadReceipt> {
        self.record(endpoints::UPLOAD, &self.fail_uploads)?;
        Ok(receipt_for(file))
    }

    async fn analyze(&self, file_id: &str, _storage_uri: &str) -> Result<AnalysisReport> {
        self.record(endpoints::ANALYZE_VIDEO, &self.fail_analysis)?;
        Ok(report_for(file_id))
    }
}
