//! Last update / status / exchange cards

use super::{status_color, CARD, MUTED, TEXT};
use crate::presenter::app::View;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Row of three small info cards
pub struct InfoCardsWidget<'a> {
    view: &'a View,
    exchange: &'a str,
}

impl<'a> InfoCardsWidget<'a> {
    pub fn new(view: &'a View, exchange: &'a str) -> Self {
        Self { view, exchange }
    }
}

fn card(title: &str, value: Span<'_>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(super::DIM))
        .style(Style::default().bg(CARD));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )),
        Line::from(value),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

impl Widget for InfoCardsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        card(
            "Last Update",
            Span::styled(self.view.last_update.clone(), Style::default().fg(TEXT)),
            chunks[0],
            buf,
        );
        card(
            "Status",
            Span::styled(
                self.view.status.label(),
                Style::default().fg(status_color(self.view.status)),
            ),
            chunks[1],
            buf,
        );
        card(
            "Exchange",
            Span::styled(self.exchange.to_string(), Style::default().fg(TEXT)),
            chunks[2],
            buf,
        );
    }
}
