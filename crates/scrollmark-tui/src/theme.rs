use ratatui::style::Color;

/// Gruvbox-material palette used across the widgets
pub struct GruvboxMaterial;

impl GruvboxMaterial {
    /// Primary background
    pub const BG0: Color = Color::Rgb(0x28, 0x28, 0x28);
    /// Raised background (status bar)
    pub const BG2: Color = Color::Rgb(0x3c, 0x38, 0x36);
    /// Primary foreground
    pub const FG0: Color = Color::Rgb(0xd4, 0xbe, 0x98);
    /// Dimmed foreground
    pub const FG1: Color = Color::Rgb(0xdd, 0xc7, 0xa1);
    /// Border of unfocused elements
    pub const GREY0: Color = Color::Rgb(0x7c, 0x6f, 0x64);
    /// Hint text
    pub const GREY1: Color = Color::Rgb(0x92, 0x83, 0x74);
    /// Accent (progress bar fill, focused border)
    pub const ACCENT: Color = Color::Rgb(0xd8, 0xa6, 0x57);
}
