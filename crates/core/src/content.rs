use tracing::{error, info};

use crate::{
    error::Result,
    transport::Transport,
    types::HeaderInfo,
};

pub const DEFAULT_DESCRIPTION: &str =
    "Your AI-powered pocket coach. Capture, analyze, and perfect your form in seconds.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Main,
    Readme,
    Architecture,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Main, Panel::Readme, Panel::Architecture];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Main => "Main Page",
            Panel::Readme => "Read Me",
            Panel::Architecture => "Architecture",
        }
    }

    fn index(&self) -> usize {
        match self {
            Panel::Main => 0,
            Panel::Readme => 1,
            Panel::Architecture => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Header(HeaderInfo),
    Readme(String),
    Architecture(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Loaded(PanelContent),
    Failed,
}

/// Session cache for the three static panels. Each panel is fetched on first
/// activation; once loaded it is never fetched again.
#[derive(Debug, Default)]
pub struct ContentCache {
    active: Panel,
    panels: [PanelState; 3],
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn state(&self, panel: Panel) -> &PanelState {
        &self.panels[panel.index()]
    }

    /// Switches to `panel`. Returns it back when a fetch must be started;
    /// the panel is then marked loading. A failed panel is retried on revisit.
    pub fn activate(&mut self, panel: Panel) -> Option<Panel> {
        self.active = panel;
        let slot = &mut self.panels[panel.index()];
        match *slot {
            PanelState::Idle | PanelState::Failed => {
                *slot = PanelState::Loading;
                Some(panel)
            }
            PanelState::Loading | PanelState::Loaded(_) => None,
        }
    }

    pub fn finish(&mut self, panel: Panel, outcome: Result<PanelContent>) {
        let slot = &mut self.panels[panel.index()];
        *slot = match outcome {
            Ok(content) => {
                info!(panel = panel.label(), "panel content loaded");
                PanelState::Loaded(content)
            }
            Err(e) => {
                error!(panel = panel.label(), error = %e, "failed to load panel content");
                PanelState::Failed
            }
        };
    }

    pub fn show_loading(&self) -> bool {
        matches!(self.state(self.active), PanelState::Loading)
    }

    pub fn header(&self) -> Option<&HeaderInfo> {
        match self.state(Panel::Main) {
            PanelState::Loaded(PanelContent::Header(header)) => Some(header),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        self.header()
            .map(|h| h.description.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn readme(&self) -> Option<&str> {
        match self.state(Panel::Readme) {
            PanelState::Loaded(PanelContent::Readme(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn architecture_image(&self) -> Option<&str> {
        match self.state(Panel::Architecture) {
            PanelState::Loaded(PanelContent::Architecture(url)) => Some(url.as_str()),
            _ => None,
        }
    }
}

pub async fn fetch_panel<T: Transport + ?Sized>(transport: &T, panel: Panel) -> Result<PanelContent> {
    match panel {
        Panel::Main => transport.header_info().await.map(PanelContent::Header),
        Panel::Readme => transport
            .readme()
            .await
            .map(|doc| PanelContent::Readme(doc.content)),
        Panel::Architecture => transport
            .architecture_image()
            .await
            .map(|img| PanelContent::Architecture(img.image_url)),
    }
}

/// Activate and, if needed, load `panel` in one go.
pub async fn open_panel<'a, T: Transport + ?Sized>(
    cache: &'a mut ContentCache,
    transport: &T,
    panel: Panel,
) -> &'a PanelState {
    if let Some(panel) = cache.activate(panel) {
        let outcome = fetch_panel(transport, panel).await;
        cache.finish(panel, outcome);
    }
    cache.state(panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ClientError, testing::FakeTransport, transport::endpoints};

    #[tokio::test]
    async fn readme_is_fetched_once_across_revisits() {
        let transport = FakeTransport::new();
        let mut cache = ContentCache::new();

        open_panel(&mut cache, &transport, Panel::Readme).await;
        open_panel(&mut cache, &transport, Panel::Main).await;
        open_panel(&mut cache, &transport, Panel::Readme).await;
        open_panel(&mut cache, &transport, Panel::Readme).await;

        assert_eq!(transport.calls(endpoints::README), 1);
        assert_eq!(cache.readme(), Some("# Readme"));
    }

    #[test]
    fn activation_while_loading_does_not_refetch() {
        let mut cache = ContentCache::new();
        assert_eq!(cache.activate(Panel::Architecture), Some(Panel::Architecture));
        assert!(cache.show_loading());

        assert_eq!(cache.activate(Panel::Main), Some(Panel::Main));
        assert_eq!(cache.activate(Panel::Architecture), None);
        assert!(cache.show_loading());
    }

    #[test]
    fn loading_indicator_follows_the_active_panel() {
        let mut cache = ContentCache::new();
        cache.activate(Panel::Readme);
        cache.activate(Panel::Main);
        cache.finish(
            Panel::Main,
            Ok(PanelContent::Header(HeaderInfo::default())),
        );

        assert!(!cache.show_loading());
        assert_eq!(cache.state(Panel::Readme), &PanelState::Loading);
    }

    #[tokio::test]
    async fn failure_leaves_panel_empty_and_revisit_retries() {
        let transport = FakeTransport::new();
        transport.set_fail_content(true);
        let mut cache = ContentCache::new();

        open_panel(&mut cache, &transport, Panel::Architecture).await;
        assert_eq!(cache.state(Panel::Architecture), &PanelState::Failed);
        assert!(cache.architecture_image().is_none());

        transport.set_fail_content(false);
        open_panel(&mut cache, &transport, Panel::Architecture).await;

        assert_eq!(transport.calls(endpoints::ARCHITECTURE_IMAGE), 2);
        assert_eq!(
            cache.architecture_image(),
            Some("https://static/architecture.png")
        );
    }

    #[test]
    fn description_falls_back_to_default() {
        let mut cache = ContentCache::new();
        assert_eq!(cache.description(), DEFAULT_DESCRIPTION);

        cache.activate(Panel::Main);
        cache.finish(Panel::Main, Err(ClientError::network(endpoints::HEADER_INFO, "refused")));
        assert_eq!(cache.description(), DEFAULT_DESCRIPTION);

        cache.activate(Panel::Main);
        cache.finish(
            Panel::Main,
            Ok(PanelContent::Header(HeaderInfo {
                description: "Pocket coach".to_string(),
                icon_url: String::new(),
            })),
        );
        assert_eq!(cache.description(), "Pocket coach");
    }
}
