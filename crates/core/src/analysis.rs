use tracing::{debug, error, info, warn};

use crate::{
    error::Result,
    transport::Transport,
    types::{AnalysisReport, AnalysisResult},
    workflow::{Notice, RequestToken, Settled, WorkflowState},
};

/// An issued analysis. Carries the identifiers of the asset it was issued for
/// so the response can be matched against the asset current at completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub token: RequestToken,
    pub file_id: String,
    pub storage_uri: String,
}

/// No-op without an asset, and while an upload is still in flight.
pub fn begin_analysis(state: &mut WorkflowState) -> Option<PendingAnalysis> {
    let Some(asset) = state.asset() else {
        debug!("analysis requested without an uploaded video");
        return None;
    };
    if state.is_uploading() {
        debug!("analysis requested while an upload is in flight");
        return None;
    }

    let file_id = asset.file_id.clone();
    let storage_uri = asset.storage_uri.clone();
    let token = state.issue_analysis();
    info!(file_id = %file_id, seq = token.seq(), "analysis started");

    Some(PendingAnalysis {
        token,
        file_id,
        storage_uri,
    })
}

pub fn finish_analysis(
    state: &mut WorkflowState,
    pending: &PendingAnalysis,
    outcome: Result<AnalysisReport>,
) -> Settled {
    if !state.is_latest_analysis(pending.token) {
        debug!(seq = pending.token.seq(), "discarding superseded analysis response");
        return Settled::Stale;
    }

    let same_asset = state
        .asset()
        .is_some_and(|asset| asset.file_id == pending.file_id);

    match outcome {
        Ok(_) if !same_asset => {
            warn!(file_id = %pending.file_id, "analysis finished for a video that is no longer current");
            state.analysis_settled_without_result(None);
            Settled::Stale
        }
        Ok(report) => {
            info!(file_id = %pending.file_id, "analysis complete");
            state.analysis_succeeded(AnalysisResult::from(report));
            Settled::Applied
        }
        Err(e) => {
            error!(file_id = %pending.file_id, error = %e, "analysis failed");
            state.analysis_settled_without_result(Some(Notice::error(format!(
                "Analysis failed: {e}"
            ))));
            Settled::Failed
        }
    }
}

/// Begin, run and settle one analysis of the current asset.
pub async fn submit_analysis<T: Transport + ?Sized>(
    state: &mut WorkflowState,
    transport: &T,
) -> Settled {
    let Some(pending) = begin_analysis(state) else {
        return Settled::Skipped;
    };
    let outcome = transport
        .analyze(&pending.file_id, &pending.storage_uri)
        .await;
    finish_analysis(state, &pending, outcome)
}
