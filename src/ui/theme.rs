use ratatui::style::Color;

/// Colors for one theme. Chosen per frame from the snapshot's `dark_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub rating: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x11, 0x18, 0x27),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: Color::Rgb(0x3b, 0x82, 0xf6),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    rating: Color::Rgb(0xea, 0xb3, 0x08),
    error: Color::Rgb(0xef, 0x44, 0x44),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x11, 0x18, 0x27),
    muted: Color::Rgb(0x4b, 0x55, 0x63),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
    rating: Color::Rgb(0xca, 0x8a, 0x04),
    error: Color::Rgb(0xdc, 0x26, 0x26),
};

pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        DARK
    } else {
        LIGHT
    }
}
