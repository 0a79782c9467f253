//! Dashboard widgets

mod cards;
mod price;

pub use cards::InfoCardsWidget;
pub use price::PricePanelWidget;

use super::app::PriceTone;
use super::state::{ConnectivityStatus, Trend};
use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x0d, 0x11, 0x17);
pub const PANEL: Color = Color::Rgb(0x21, 0x26, 0x2d);
pub const CARD: Color = Color::Rgb(0x16, 0x1b, 0x22);
pub const ACCENT: Color = Color::Rgb(0xf3, 0x9c, 0x12);
pub const MUTED: Color = Color::Rgb(0x8b, 0x94, 0x9e);
pub const DIM: Color = Color::Rgb(0x6e, 0x76, 0x81);
pub const TEXT: Color = Color::Rgb(0xf0, 0xf6, 0xfc);
pub const NEUTRAL: Color = Color::Rgb(0x58, 0xa6, 0xff);
pub const GAIN: Color = Color::Rgb(0x3f, 0xb9, 0x50);
pub const LOSS: Color = Color::Rgb(0xf8, 0x51, 0x49);

pub fn tone_color(tone: PriceTone) -> Color {
    match tone {
        PriceTone::Neutral => NEUTRAL,
        PriceTone::Up => GAIN,
        PriceTone::Down => LOSS,
    }
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => GAIN,
        Trend::Down => LOSS,
        Trend::Flat => MUTED,
    }
}

pub fn status_color(status: ConnectivityStatus) -> Color {
    match status {
        ConnectivityStatus::Live => GAIN,
        ConnectivityStatus::Error | ConnectivityStatus::NoConnection => LOSS,
    }
}
