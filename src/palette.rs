//! Srcery color theme
//!
//! Static color table for the Srcery palette (https://github.com/srcery-colors)
//! plus a helper that themes the egui window with it. The table is a pure
//! lookup; nothing here is applied unless the palette setting is on.

// Full table is kept; the theme only reads a subset of it
#![allow(dead_code)]

use eframe::egui::{self, Color32};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrceryColor {
    // standard colors
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,

    // xterm 256 colors
    Orange,
    BrightOrange,
    HardBlack,
    XGray1,
    XGray2,
    XGray3,
    XGray4,
    XGray5,
    XGray6,
}

impl SrceryColor {
    /// 24-bit `0xRRGGBB` value
    pub fn hex(&self) -> u32 {
        match self {
            Self::Black => 0x1C1B19,
            Self::Red => 0xEF2F27,
            Self::Green => 0x519F50,
            Self::Yellow => 0xFBB829,
            Self::Blue => 0x2C78BF,
            Self::Magenta => 0xE02C6D,
            Self::Cyan => 0x0AAEB3,
            Self::White => 0xD0BFA1,
            Self::BrightBlack => 0x918175,
            Self::BrightRed => 0xF75341,
            Self::BrightGreen => 0x98BC37,
            Self::BrightYellow => 0xFED06E,
            Self::BrightBlue => 0x68A8E4,
            Self::BrightMagenta => 0xFF5C8F,
            Self::BrightCyan => 0x53FDE9,
            Self::BrightWhite => 0xFCE8C3,
            Self::Orange => 0xFF5F00,
            Self::BrightOrange => 0xFF8700,
            Self::HardBlack => 0x121212,
            Self::XGray1 => 0x262626,
            Self::XGray2 => 0x303030,
            Self::XGray3 => 0x3A3A3A,
            Self::XGray4 => 0x444444,
            Self::XGray5 => 0x4E4E4E,
            Self::XGray6 => 0x585858,
        }
    }

    /// 8-bit RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.hex();
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn color32(&self) -> Color32 {
        let (r, g, b) = self.rgb();
        Color32::from_rgb(r, g, b)
    }
}

/// Color of the waveform line when the palette is on
pub const PLOT_LINE: SrceryColor = SrceryColor::Magenta;

/// Window visuals built from the palette
pub fn visuals() -> egui::Visuals {
    use SrceryColor::*;

    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = Black.color32();
    visuals.panel_fill = Black.color32();
    visuals.override_text_color = Some(White.color32());
    visuals.extreme_bg_color = XGray6.color32();
    visuals.faint_bg_color = XGray1.color32();
    visuals.widgets.inactive.bg_fill = BrightBlack.color32();
    visuals.widgets.inactive.weak_bg_fill = BrightBlack.color32();
    visuals.warn_fg_color = Yellow.color32();
    visuals.selection.bg_fill = Blue.color32();
    visuals.hyperlink_color = BrightBlue.color32();
    visuals
}

/// Theme the whole window with the palette
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}
