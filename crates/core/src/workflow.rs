use crate::types::{AnalysisResult, Asset};

pub const ANALYZE_LABEL: &str = "Analyze Video";
pub const ANALYZING_LABEL: &str = "Analyzing...";

/// Identifies one controller call. Only the most recently issued token of a
/// controller may change state when its response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub(crate) fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub(crate) fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// How a controller call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The response was current and changed state.
    Applied,
    /// The response was current but a failure; the flag is cleared and a notice set.
    Failed,
    /// A newer call superseded this one; nothing changed.
    Stale,
    /// The call was never issued.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message for the view. Failures land here instead of vanishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// What the side-bar drop zone shows, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadBadge {
    DragActive,
    Uploading,
    Ready,
    Prompt,
}

impl UploadBadge {
    pub fn label(&self) -> &'static str {
        match self {
            UploadBadge::DragActive => "Drop to upload",
            UploadBadge::Uploading => "Uploading...",
            UploadBadge::Ready => "Video Ready",
            UploadBadge::Prompt => "Upload Video",
        }
    }
}

/// Single source of truth for the upload/analysis workflow.
///
/// Fields are private: only the upload and analysis controllers mutate them,
/// the view reads through the projections below.
#[derive(Debug, Default)]
pub struct WorkflowState {
    asset: Option<Asset>,
    result: Option<AnalysisResult>,
    uploading: bool,
    analyzing: bool,
    notice: Option<Notice>,
    upload_seq: RequestSeq,
    analysis_seq: RequestSeq,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an asset uploaded in an earlier session.
    pub fn with_asset(asset: Asset) -> Self {
        Self {
            asset: Some(asset),
            ..Self::default()
        }
    }

    pub fn asset(&self) -> Option<&Asset> {
        self.asset.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn can_analyze(&self) -> bool {
        self.asset.is_some() && !self.uploading && !self.analyzing
    }

    pub fn show_original_placeholder(&self) -> bool {
        self.asset.is_none()
    }

    pub fn show_processed_placeholder(&self) -> bool {
        self.asset.is_none() && !self.analyzing
    }

    pub fn show_processing_indicator(&self) -> bool {
        self.analyzing
    }

    pub fn show_summary(&self) -> bool {
        !self.analyzing
            && self
                .result
                .as_ref()
                .is_some_and(|r| !r.summary_text.is_empty())
    }

    pub fn show_advice_placeholder(&self) -> bool {
        self.result
            .as_ref()
            .is_none_or(|r| r.advice_image_url.is_empty())
    }

    pub fn upload_badge(&self, drag_active: bool) -> UploadBadge {
        if drag_active {
            UploadBadge::DragActive
        } else if self.uploading {
            UploadBadge::Uploading
        } else if self.asset.is_some() {
            UploadBadge::Ready
        } else {
            UploadBadge::Prompt
        }
    }

    pub fn analyze_label(&self) -> &'static str {
        if self.analyzing {
            ANALYZING_LABEL
        } else {
            ANALYZE_LABEL
        }
    }

    pub(crate) fn issue_upload(&mut self) -> RequestToken {
        self.uploading = true;
        self.upload_seq.issue()
    }

    pub(crate) fn is_latest_upload(&self, token: RequestToken) -> bool {
        self.upload_seq.is_latest(token)
    }

    pub(crate) fn upload_succeeded(&mut self, asset: Asset) {
        self.uploading = false;
        self.asset = Some(asset);
        self.result = None;
        self.clear_error_notice();
    }

    pub(crate) fn upload_failed(&mut self, notice: Notice) {
        self.uploading = false;
        self.notice = Some(notice);
    }

    pub(crate) fn issue_analysis(&mut self) -> RequestToken {
        self.analyzing = true;
        self.analysis_seq.issue()
    }

    pub(crate) fn is_latest_analysis(&self, token: RequestToken) -> bool {
        self.analysis_seq.is_latest(token)
    }

    pub(crate) fn analysis_succeeded(&mut self, result: AnalysisResult) {
        self.analyzing = false;
        self.result = Some(result);
        self.clear_error_notice();
    }

    pub(crate) fn analysis_settled_without_result(&mut self, notice: Option<Notice>) {
        self.analyzing = false;
        if notice.is_some() {
            self.notice = notice;
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    fn clear_error_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_error) {
            self.notice = None;
        }
    }
}
