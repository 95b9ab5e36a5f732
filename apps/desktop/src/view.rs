use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Color, Element, Fill, Length};
use sportai_core::{NoticeLevel, Panel, UploadBadge};

use crate::{App, Message};

const MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
const ERROR: Color = Color::from_rgb(0.85, 0.3, 0.3);
const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.95);

pub(crate) fn root(app: &App) -> Element<'_, Message> {
    let body = match app.content.active() {
        Panel::Main => main_page(app),
        Panel::Readme => readme(app),
        Panel::Architecture => architecture(app),
    };

    let mut page = Column::new().spacing(12);
    if let Some(banner) = notice(app) {
        page = page.push(banner);
    }
    if app.content.show_loading() {
        page = page.push(text("Loading...").color(MUTED));
    }
    page = page.push(body);

    row![
        sidebar(app),
        container(scrollable(page).height(Fill))
            .padding(20)
            .width(Fill)
            .height(Fill),
    ]
    .into()
}

fn sidebar(app: &App) -> Element<'_, Message> {
    let active = app.content.active();
    let tabs = Panel::ALL.iter().fold(Column::new().spacing(6), |col, &panel| {
        let tab = button(text(panel.label()))
            .width(Fill)
            .on_press(Message::TabSelected(panel));
        col.push(if panel == active {
            tab.style(button::primary)
        } else {
            tab.style(button::text)
        })
    });

    let badge = app.workflow.upload_badge(app.drop_zone.is_drag_active());
    let drop_zone = button(
        container(text(badge.label()).size(15))
            .padding(24)
            .center_x(Fill),
    )
    .width(Fill)
    .style(if badge == UploadBadge::DragActive {
        button::primary
    } else {
        button::secondary
    })
    .on_press_maybe((!app.workflow.is_uploading()).then_some(Message::PickVideo));

    container(
        column![
            text("SportAI").size(22),
            tabs,
            drop_zone,
            text("or drop an .mp4 onto the window").size(12).color(MUTED),
        ]
        .spacing(16),
    )
    .padding(16)
    .width(Length::Fixed(220.0))
    .height(Fill)
    .style(container::rounded_box)
    .into()
}

fn notice(app: &App) -> Option<Element<'_, Message>> {
    let notice = app.workflow.notice()?;
    let color = match notice.level {
        NoticeLevel::Info => ACCENT,
        NoticeLevel::Error => ERROR,
    };
    Some(
        container(
            row![
                text(notice.message.as_str()).color(color).width(Fill),
                button(text("Dismiss").size(12))
                    .style(button::text)
                    .on_press(Message::DismissNotice),
            ]
            .spacing(8),
        )
        .padding(10)
        .width(Fill)
        .style(container::rounded_box)
        .into(),
    )
}

fn main_page(app: &App) -> Element<'_, Message> {
    let workflow = &app.workflow;

    let mut header = column![
        text("SportAI").size(28),
        text(app.content.description()).color(MUTED),
    ];
    if let Some(icon) = app.content.header().map(|h| h.icon_url.as_str()) {
        if !icon.is_empty() {
            header = header.push(media_link(icon));
        }
    }
    let header = card(header);

    let analyze = button(text(workflow.analyze_label()))
        .style(button::primary)
        .on_press_maybe(workflow.can_analyze().then_some(Message::Analyze));

    let original: Element<'_, Message> = match workflow.asset() {
        Some(asset) if !workflow.show_original_placeholder() => media_link(&asset.playback_url),
        _ => placeholder("Upload a video to get started"),
    };

    let processed: Element<'_, Message> = if workflow.show_processing_indicator() {
        text("Processing video...").color(ACCENT).into()
    } else if let Some(result) = workflow.result() {
        media_link(&result.processed_video_url)
    } else if workflow.show_processed_placeholder() {
        placeholder("Processed video will appear here")
    } else {
        placeholder("Run analysis to see the processed video")
    };

    let tracker = card(column![
        row![text("Player Tracker").size(20).width(Fill), analyze],
        row![
            pane("Original", original),
            pane("AI Processed", processed),
        ]
        .spacing(12),
    ]);

    let mut page = column![header, tracker].spacing(16);

    if workflow.show_summary() {
        if let Some(result) = workflow.result() {
            page = page.push(card(column![
                text("Strategic Summary").size(20),
                text(result.summary_text.as_str()),
            ]));
        }
    }

    let advice: Element<'_, Message> = match workflow.result() {
        Some(result) if !workflow.show_advice_placeholder() => {
            media_link(&result.advice_image_url)
        }
        _ => placeholder("Key frame will appear after analysis"),
    };
    page = page.push(card(column![text("Key Frame").size(20), advice]));

    page.into()
}

fn readme(app: &App) -> Element<'_, Message> {
    match app.content.readme() {
        Some(content) => card(column![text(content)]),
        None => placeholder("Read Me is not available."),
    }
}

fn architecture(app: &App) -> Element<'_, Message> {
    match app.content.architecture_image() {
        Some(url) if !url.is_empty() => card(column![
            text("System Architecture").size(20),
            media_link(url),
        ]),
        _ if app.content.show_loading() => Column::new().into(),
        _ => text("Failed to load architecture image.").color(ERROR).into(),
    }
}

fn card<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    container(content.spacing(10))
        .padding(16)
        .width(Fill)
        .style(container::rounded_box)
        .into()
}

fn pane<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(14).color(MUTED), body].spacing(8))
        .padding(12)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(180.0))
        .style(container::bordered_box)
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    text(label).color(MUTED).into()
}

fn media_link(url: &str) -> Element<'_, Message> {
    column![
        text(url).size(12).color(MUTED),
        button(text("Open").size(13))
            .style(button::secondary)
            .on_press(Message::OpenUrl(url.to_string())),
    ]
    .spacing(6)
    .into()
}
