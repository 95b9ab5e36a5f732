use tracing::{debug, error, info, warn};

use crate::{
    dropzone::DragOutcome,
    error::Result,
    transport::{Transport, VideoFile},
    types::{Asset, UploadReceipt},
    workflow::{Notice, RequestToken, Settled, WorkflowState},
};

/// An issued upload whose network call is still to be run.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub token: RequestToken,
    pub file: VideoFile,
}

/// Marks the upload in flight and issues its token. Rejected while an
/// analysis runs so the two flags never overlap.
pub fn begin_upload(state: &mut WorkflowState, file: VideoFile) -> Option<PendingUpload> {
    if state.is_analyzing() {
        warn!(file = %file.path().display(), "upload rejected while analysis is running");
        state.set_notice(Notice::info(
            "Analysis in progress. Wait for it to finish before uploading another video.",
        ));
        return None;
    }

    let token = state.issue_upload();
    info!(file = %file.path().display(), seq = token.seq(), "upload started");
    Some(PendingUpload { token, file })
}

/// Starts an upload from a handled drop, reporting any files left behind.
pub fn begin_drop_upload(state: &mut WorkflowState, outcome: DragOutcome) -> Option<PendingUpload> {
    if !outcome.discarded.is_empty() {
        let count = outcome.discarded.len();
        state.set_notice(Notice::info(format!(
            "Only one video can be analyzed at a time; ignored {count} additional file{}.",
            if count == 1 { "" } else { "s" }
        )));
    }

    let path = outcome.upload?;
    begin_upload(state, VideoFile::new(path))
}

pub fn finish_upload(
    state: &mut WorkflowState,
    token: RequestToken,
    outcome: Result<UploadReceipt>,
) -> Settled {
    if !state.is_latest_upload(token) {
        debug!(seq = token.seq(), "discarding superseded upload response");
        return Settled::Stale;
    }

    match outcome {
        Ok(receipt) => {
            let asset = Asset::from(receipt);
            info!(file_id = %asset.file_id, "upload complete");
            state.upload_succeeded(asset);
            Settled::Applied
        }
        Err(e) => {
            error!(error = %e, "upload failed");
            state.upload_failed(Notice::error(format!("Upload failed: {e}")));
            Settled::Failed
        }
    }
}

/// Begin, run and settle one upload.
pub async fn submit_upload<T: Transport + ?Sized>(
    state: &mut WorkflowState,
    transport: &T,
    file: VideoFile,
) -> Settled {
    let Some(pending) = begin_upload(state, file) else {
        return Settled::Skipped;
    };
    let outcome = transport.upload(&pending.file).await;
    finish_upload(state, pending.token, outcome)
}
