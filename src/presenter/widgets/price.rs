//! Big price panel

use super::{tone_color, trend_color, PANEL};
use crate::presenter::app::View;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Widget for the current price and the change line under it
pub struct PricePanelWidget<'a> {
    view: &'a View,
}

impl<'a> PricePanelWidget<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }
}

impl Widget for PricePanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(super::DIM))
            .style(Style::default().bg(PANEL));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(4);

        // Vertically center the two lines
        let padding = inner.height.saturating_sub(3) / 2;
        for _ in 0..padding {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            self.view.price.clone(),
            Style::default()
                .fg(tone_color(self.view.price_tone))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        if let Some((ref change, trend)) = self.view.change {
            lines.push(Line::from(Span::styled(
                change.clone(),
                Style::default()
                    .fg(trend_color(trend))
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
