//! SportAI Core Library
//!
//! Client-side upload-and-analyze workflow for the SportAI backend: the HTTP
//! transport, the upload and analysis controllers, the workflow state the view
//! renders from, drag-and-drop handling and the static content panels.

pub mod analysis;
pub mod config;
pub mod content;
pub mod dropzone;
pub mod error;
pub mod format;
pub mod transport;
pub mod types;
pub mod upload;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items at crate root
pub use analysis::{PendingAnalysis, begin_analysis, finish_analysis, submit_analysis};
pub use config::ClientConfig;
pub use content::{ContentCache, Panel, PanelContent, PanelState, fetch_panel, open_panel};
pub use dropzone::{DragEvent, DragOutcome, DropZone, FileDropBatcher, WindowFileEvent};
pub use error::{ClientError, Result};
pub use format::{format_analysis_readable, format_asset};
pub use transport::{HttpTransport, Transport, VideoFile};
pub use types::{
    AnalysisReport, AnalysisResult, ArchitectureImage, Asset, HeaderInfo, ReadmeDoc,
    UploadReceipt,
};
pub use upload::{PendingUpload, begin_drop_upload, begin_upload, finish_upload, submit_upload};
pub use workflow::{Notice, NoticeLevel, RequestToken, Settled, UploadBadge, WorkflowState};
