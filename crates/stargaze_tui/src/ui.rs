//! UI rendering for TUI.

use crate::app::{App, AppMode, DetailMedia, GalleryState, LOADING_NOTICE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
};
use stargaze_core::{MediaItem, MediaKind};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(3)]; // Header
    if app.fact.is_some() {
        constraints.push(Constraint::Length(4)); // Fact panel
    }
    constraints.push(Constraint::Min(0)); // Gallery
    constraints.push(Constraint::Length(3)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut index = 0;
    draw_header(f, chunks[index]);
    index += 1;

    if let Some(fact) = app.fact {
        draw_fact_panel(f, fact, chunks[index]);
        index += 1;
    }

    let gallery_area = chunks[index];
    draw_gallery(f, app, gallery_area);

    draw_status_bar(f, app, chunks[index + 1]);

    // The detail overlay sits on top of the gallery when open
    if app.mode == AppMode::Detail {
        draw_detail_overlay(f, app, f.area());
    }
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Stargaze Space Gallery")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the "did you know" fact panel above the gallery.
#[tracing::instrument(skip_all)]
fn draw_fact_panel(f: &mut Frame, fact: &str, area: Rect) {
    let panel = Paragraph::new(fact)
        .block(Block::default().borders(Borders::ALL).title("Did you know?"))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

/// Draw the status bar with the trigger label and help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Gallery => "↑↓: Navigate | Enter: Detail | F: Fetch | D: New fact | Q: Quit",
        AppMode::Detail => "Esc: Close | Q: Close",
    };

    let status_text = format!("{} | {} | {}", app.status_message, app.trigger_label, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the gallery pane for the current state.
#[tracing::instrument(skip_all)]
fn draw_gallery(f: &mut Frame, app: &App, area: Rect) {
    match &app.gallery {
        GalleryState::Idle => draw_placeholder(f, "Press f to fetch space images", area),
        GalleryState::Loading => draw_placeholder(f, LOADING_NOTICE, area),
        GalleryState::Notice(message) => draw_placeholder(f, message, area),
        GalleryState::Failed(message) => draw_placeholder(f, message, area),
        GalleryState::Populated => draw_cards(f, app, area),
    }
}

/// Draw a gallery-level placeholder message.
fn draw_placeholder(f: &mut Frame, message: &str, area: Rect) {
    let text = format!("🔭\n\n{}", message);
    let placeholder = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Gallery"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

/// Draw one card row per item, in feed order.
fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Kind", "Caption", "Media"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![kind_cell(item), item.caption(), media_cell(item)]).style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(30),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Gallery"))
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(table, area);
}

fn kind_cell(item: &MediaItem) -> String {
    match &item.media_type {
        MediaKind::Image => "image".to_string(),
        MediaKind::Video => "video".to_string(),
        MediaKind::Other(_) => "other".to_string(),
    }
}

/// Thumbnail column: preferred image source for images, the preview image or
/// a play placeholder for videos, a notice for anything else.
fn media_cell(item: &MediaItem) -> String {
    match &item.media_type {
        MediaKind::Image => item.image_source().unwrap_or("").to_string(),
        MediaKind::Video => item
            .thumbnail()
            .map(str::to_string)
            .unwrap_or_else(|| "▶ Watch video".to_string()),
        MediaKind::Other(_) => "Unsupported media type".to_string(),
    }
}

/// Draw the detail overlay centered over the gallery.
#[tracing::instrument(skip_all)]
fn draw_detail_overlay(f: &mut Frame, app: &App, area: Rect) {
    let Some(view) = &app.detail else {
        return;
    };

    let popup = popup_area(area, 70, 80);
    f.render_widget(Clear, popup);

    let mut lines = vec![view.title.clone(), view.date.clone(), String::new()];
    match &view.media {
        DetailMedia::Image { source } => {
            lines.push(format!("Image: {}", source));
        }
        DetailMedia::Video { embed, original } => {
            lines.push(format!("Video embed: {}", embed));
            lines.push(format!("Open in browser: {}", original));
        }
        DetailMedia::Unsupported(kind) => {
            lines.push(format!("Unsupported media type: {}", kind));
        }
        DetailMedia::Empty => {}
    }
    lines.push(String::new());
    lines.push(view.explanation.clone());

    let detail = Paragraph::new(lines.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Detail (Esc to close)"),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(detail, popup);
}

/// Centered popup rectangle covering the given percentages of the area.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
