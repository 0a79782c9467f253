//! Main TUI layout and rendering

use super::app::{App, DisplayMode};
use super::widgets::{InfoCardsWidget, PricePanelWidget, ACCENT, BACKGROUND, DIM, MUTED, NEUTRAL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Size of the compact panel in windowed mode
const WINDOWED_WIDTH: u16 = 72;
const WINDOWED_HEIGHT: u16 = 22;

/// Draw the dashboard to the terminal
pub fn draw(frame: &mut Frame, app: &App) {
    let full = frame.area();
    let area = match app.display_mode() {
        DisplayMode::Maximized => full,
        DisplayMode::Windowed => centered(full, WINDOWED_WIDTH, WINDOWED_HEIGHT),
    };

    if app.display_mode() == DisplayMode::Windowed {
        frame.render_widget(Clear, full);
    }

    let outer = Block::default()
        .borders(match app.display_mode() {
            DisplayMode::Maximized => Borders::NONE,
            DisplayMode::Windowed => Borders::ALL,
        })
        .border_style(Style::default().fg(DIM))
        .title(" BTC/IDR ")
        .style(Style::default().bg(BACKGROUND));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let view = app.render();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Price panel
            Constraint::Length(4), // Info cards
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    draw_title(frame, app, chunks[0]);
    frame.render_widget(PricePanelWidget::new(&view), pad_x(chunks[1], inner.width / 10));
    frame.render_widget(
        InfoCardsWidget::new(&view, app.exchange()),
        pad_x(chunks[2], inner.width / 6),
    );
    draw_footer(frame, chunks[3]);

    if app.show_help() {
        draw_help_overlay(frame, area);
    }
}

/// Draw the title and subtitle
fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "₿ BITCOIN PRICE TRACKER",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Live prices from {}", app.exchange()),
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the footer with keybindings
fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Esc/F11", Style::default().fg(NEUTRAL)),
        Span::styled(": toggle fullscreen  ", Style::default().fg(DIM)),
        Span::styled("q", Style::default().fg(NEUTRAL)),
        Span::styled(": quit  ", Style::default().fg(DIM)),
        Span::styled("?", Style::default().fg(NEUTRAL)),
        Span::styled(": help  •  Updates every 10 seconds", Style::default().fg(DIM)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Draw the help overlay
fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let help_area = centered(area, 44, 9);

    frame.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Esc / F11   ", Style::default().fg(NEUTRAL)),
            Span::raw("Toggle fullscreen"),
        ]),
        Line::from(vec![
            Span::styled("  q / Ctrl+C  ", Style::default().fg(NEUTRAL)),
            Span::raw("Quit"),
        ]),
        Line::from(vec![
            Span::styled("  ?           ", Style::default().fg(NEUTRAL)),
            Span::raw("Toggle this help"),
        ]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(BACKGROUND))
            .title(" Help "),
    );

    frame.render_widget(help, help_area);
}

/// Rect of at most `width` x `height`, centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Shrink `area` horizontally by `pad` on each side
fn pad_x(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect::new(area.x + pad, area.y, area.width - pad * 2, area.height)
}
