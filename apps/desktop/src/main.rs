use std::path::PathBuf;

use iced::event::{self, Event};
use iced::{Element, Subscription, Task, window};
use sportai_core::{
    AnalysisReport, ClientConfig, ClientError, ContentCache, DropZone, FileDropBatcher,
    HttpTransport, Panel, PanelContent, PendingAnalysis, PendingUpload, RequestToken, Transport,
    UploadReceipt, VideoFile, WindowFileEvent, WorkflowState, begin_analysis, begin_drop_upload,
    begin_upload, fetch_panel, finish_analysis, finish_upload,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod view;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let transport = HttpTransport::new(&config)?;

    iced::application(move || App::new(transport.clone()), App::update, App::view)
        .title("SportAI")
        .subscription(App::subscription)
        .run()?;

    Ok(())
}

struct App {
    transport: HttpTransport,
    workflow: WorkflowState,
    drop_zone: DropZone,
    batcher: FileDropBatcher,
    content: ContentCache,
}

#[derive(Debug, Clone)]
enum Message {
    TabSelected(Panel),
    PanelLoaded(Panel, Result<PanelContent, ClientError>),
    PickVideo,
    VideoPicked(Option<PathBuf>),
    WindowFile(WindowFileEvent),
    Uploaded(RequestToken, Result<UploadReceipt, ClientError>),
    Analyze,
    Analyzed(PendingAnalysis, Result<AnalysisReport, ClientError>),
    DismissNotice,
    OpenUrl(String),
}

impl App {
    fn new(transport: HttpTransport) -> (Self, Task<Message>) {
        let mut app = Self {
            transport,
            workflow: WorkflowState::new(),
            drop_zone: DropZone::new(),
            batcher: FileDropBatcher::new(),
            content: ContentCache::new(),
        };
        // header info is part of the main panel, shown first
        let task = app.open(Panel::Main);
        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(panel) => self.open(panel),
            Message::PanelLoaded(panel, outcome) => {
                self.content.finish(panel, outcome);
                Task::none()
            }
            Message::PickVideo => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Select a sports video")
                        .add_filter("MP4 video", &["mp4"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::VideoPicked,
            ),
            Message::VideoPicked(path) => {
                let Some(path) = path else {
                    return Task::none();
                };
                let pending = begin_upload(&mut self.workflow, VideoFile::new(path));
                self.spawn_upload(pending)
            }
            Message::WindowFile(event) => {
                let Some(drag) = self.batcher.translate(event) else {
                    return Task::none();
                };
                let outcome = self.drop_zone.handle(drag);
                let pending = begin_drop_upload(&mut self.workflow, outcome);
                self.spawn_upload(pending)
            }
            Message::Uploaded(token, outcome) => {
                finish_upload(&mut self.workflow, token, outcome);
                Task::none()
            }
            Message::Analyze => {
                let Some(pending) = begin_analysis(&mut self.workflow) else {
                    return Task::none();
                };
                let transport = self.transport.clone();
                let request = pending.clone();
                Task::perform(
                    async move {
                        transport
                            .analyze(&request.file_id, &request.storage_uri)
                            .await
                    },
                    move |outcome| Message::Analyzed(pending, outcome),
                )
            }
            Message::Analyzed(pending, outcome) => {
                finish_analysis(&mut self.workflow, &pending, outcome);
                Task::none()
            }
            Message::DismissNotice => {
                self.workflow.dismiss_notice();
                Task::none()
            }
            Message::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    warn!(url = %url, error = %e, "failed to open url");
                }
                Task::none()
            }
        }
    }

    fn open(&mut self, panel: Panel) -> Task<Message> {
        let Some(panel) = self.content.activate(panel) else {
            return Task::none();
        };
        let transport = self.transport.clone();
        Task::perform(
            async move { fetch_panel(&transport, panel).await },
            move |outcome| Message::PanelLoaded(panel, outcome),
        )
    }

    fn spawn_upload(&self, pending: Option<PendingUpload>) -> Task<Message> {
        let Some(pending) = pending else {
            return Task::none();
        };
        let transport = self.transport.clone();
        let token = pending.token;
        Task::perform(
            async move { transport.upload(&pending.file).await },
            move |outcome| Message::Uploaded(token, outcome),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(path)) => {
                Some(Message::WindowFile(WindowFileEvent::Hovered(path)))
            }
            Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::WindowFile(WindowFileEvent::Dropped(path)))
            }
            Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::WindowFile(WindowFileEvent::HoverLeft))
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        view::root(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        App::new(HttpTransport::new(&config).unwrap()).0
    }

    #[test]
    fn picking_a_video_returns_without_touching_state() {
        let mut app = app();
        let _task = app.update(Message::PickVideo);

        assert!(!app.workflow.is_uploading());
        assert!(app.workflow.notice().is_none());
    }

    #[test]
    fn picked_video_starts_an_upload() {
        let mut app = app();
        let _task = app.update(Message::VideoPicked(Some(PathBuf::from("/clips/serve.mp4"))));

        assert!(app.workflow.is_uploading());
    }

    #[test]
    fn cancelled_pick_does_nothing() {
        let mut app = app();
        let _task = app.update(Message::VideoPicked(None));

        assert!(!app.workflow.is_uploading());
    }
}
