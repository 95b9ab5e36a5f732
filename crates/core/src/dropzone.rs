use std::path::PathBuf;

use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<PathBuf>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DragOver,
}

/// Result of handling one drag event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragOutcome {
    /// Always true: the platform must never open or navigate to a dragged file.
    pub default_suppressed: bool,
    /// First file of a drop, to be uploaded.
    pub upload: Option<PathBuf>,
    /// Remaining files of a multi-file drop. The workflow holds one asset.
    pub discarded: Vec<PathBuf>,
}

impl DragOutcome {
    pub fn suppressed() -> Self {
        Self {
            default_suppressed: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct DropZone {
    state: DragState,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_drag_active(&self) -> bool {
        self.state == DragState::DragOver
    }

    pub fn handle(&mut self, event: DragEvent) -> DragOutcome {
        match event {
            DragEvent::Enter | DragEvent::Over => {
                self.state = DragState::DragOver;
                DragOutcome::suppressed()
            }
            DragEvent::Leave => {
                self.state = DragState::Idle;
                DragOutcome::suppressed()
            }
            DragEvent::Drop(files) => {
                self.state = DragState::Idle;
                let mut files = files.into_iter();
                let upload = files.next();
                let discarded: Vec<PathBuf> = files.collect();
                if !discarded.is_empty() {
                    info!(count = discarded.len(), "ignoring extra dropped files");
                }
                DragOutcome {
                    default_suppressed: true,
                    upload,
                    discarded,
                }
            }
        }
    }
}

/// Per-file window events as delivered by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowFileEvent {
    Hovered(PathBuf),
    Dropped(PathBuf),
    HoverLeft,
}

/// Window systems report a multi-file drag as one hover and one drop event
/// per file. This folds each batch back into a single [`DragEvent::Drop`].
#[derive(Debug, Default)]
pub struct FileDropBatcher {
    hovered: Vec<PathBuf>,
    delivered: Vec<PathBuf>,
}

impl FileDropBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: WindowFileEvent) -> Option<DragEvent> {
        match event {
            WindowFileEvent::Hovered(path) => {
                let entering = self.hovered.is_empty();
                if entering {
                    self.delivered.clear();
                }
                self.hovered.push(path);
                Some(if entering {
                    DragEvent::Enter
                } else {
                    DragEvent::Over
                })
            }
            WindowFileEvent::HoverLeft => {
                self.hovered.clear();
                Some(DragEvent::Leave)
            }
            WindowFileEvent::Dropped(path) => {
                if let Some(pos) = self.delivered.iter().position(|p| *p == path) {
                    debug!(file = %path.display(), "drop already delivered with its batch");
                    self.delivered.remove(pos);
                    return None;
                }

                let mut batch = std::mem::take(&mut self.hovered);
                batch.retain(|p| *p != path);
                batch.insert(0, path);
                self.delivered = batch[1..].to_vec();
                Some(DragEvent::Drop(batch))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn enter_and_over_activate_leave_resets() {
        let mut zone = DropZone::new();
        zone.handle(DragEvent::Enter);
        assert!(zone.is_drag_active());
        zone.handle(DragEvent::Over);
        assert_eq!(zone.state(), DragState::DragOver);
        zone.handle(DragEvent::Leave);
        assert_eq!(zone.state(), DragState::Idle);
    }

    #[test]
    fn every_event_suppresses_default_handling() {
        let mut zone = DropZone::new();
        let events = [
            DragEvent::Leave,
            DragEvent::Drop(Vec::new()),
            DragEvent::Enter,
            DragEvent::Over,
            DragEvent::Over,
            DragEvent::Drop(paths(&["a.mp4"])),
            DragEvent::Leave,
        ];
        for event in events {
            assert!(zone.handle(event).default_suppressed);
        }
    }

    #[test]
    fn drop_uploads_first_file_and_reports_the_rest() {
        let mut zone = DropZone::new();
        zone.handle(DragEvent::Enter);

        let outcome = zone.handle(DragEvent::Drop(paths(&["a.mp4", "b.mp4", "c.mp4"])));

        assert!(!zone.is_drag_active());
        assert_eq!(outcome.upload, Some(PathBuf::from("a.mp4")));
        assert_eq!(outcome.discarded, paths(&["b.mp4", "c.mp4"]));
    }

    #[test]
    fn empty_drop_uploads_nothing() {
        let mut zone = DropZone::new();
        zone.handle(DragEvent::Over);
        let outcome = zone.handle(DragEvent::Drop(Vec::new()));
        assert_eq!(outcome, DragOutcome::suppressed());
        assert!(!zone.is_drag_active());
    }

    #[test]
    fn batcher_folds_per_file_events_into_one_drop() {
        let mut batcher = FileDropBatcher::new();
        assert_eq!(
            batcher.translate(WindowFileEvent::Hovered("a.mp4".into())),
            Some(DragEvent::Enter)
        );
        assert_eq!(
            batcher.translate(WindowFileEvent::Hovered("b.mp4".into())),
            Some(DragEvent::Over)
        );
        assert_eq!(
            batcher.translate(WindowFileEvent::Dropped("a.mp4".into())),
            Some(DragEvent::Drop(paths(&["a.mp4", "b.mp4"])))
        );
        assert_eq!(batcher.translate(WindowFileEvent::Dropped("b.mp4".into())), None);

        // next drag starts fresh
        assert_eq!(
            batcher.translate(WindowFileEvent::Hovered("c.mp4".into())),
            Some(DragEvent::Enter)
        );
    }

    #[test]
    fn batcher_handles_drop_without_hover() {
        let mut batcher = FileDropBatcher::new();
        assert_eq!(
            batcher.translate(WindowFileEvent::Dropped("a.mp4".into())),
            Some(DragEvent::Drop(paths(&["a.mp4"])))
        );
    }

    #[test]
    fn batcher_forgets_hovered_files_on_leave() {
        let mut batcher = FileDropBatcher::new();
        batcher.translate(WindowFileEvent::Hovered("a.mp4".into()));
        assert_eq!(
            batcher.translate(WindowFileEvent::HoverLeft),
            Some(DragEvent::Leave)
        );
        assert_eq!(
            batcher.translate(WindowFileEvent::Dropped("b.mp4".into())),
            Some(DragEvent::Drop(paths(&["b.mp4"])))
        );
    }
}
