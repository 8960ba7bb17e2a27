use ratatui::style::{Color, Modifier, Style};

// ─── Bar Palette ─────────────────────────────────────────────────────────
// Same order as `animation::PALETTE`
pub const PALETTE_COLORS: [Color; 5] = [
    Color::Rgb(0x3F, 0x51, 0xB5),
    Color::Rgb(0x4C, 0xAF, 0x50),
    Color::Rgb(0x03, 0xA9, 0xF4),
    Color::Rgb(0xF4, 0x43, 0x36),
    Color::Rgb(0x00, 0x96, 0x88),
];

/// Surface fill behind the bars
pub const BACKGROUND: Color = Color::Rgb(0xBD, 0xBD, 0xBD);

// ─── Status Bar Colors ───────────────────────────────────────────────────

/// Background: always Reset (transparent) — respects terminal background
pub const BG: Color = Color::Reset;

/// Primary text color
pub const FG: Color = Color::White;

/// Dimmed text (labels, hints)
pub const FG_DIM: Color = Color::DarkGray;

/// Accent color (keybinding hints)
pub const ACCENT: Color = Color::Cyan;

/// Fill color for node `index`, wrapping past the end of the palette
pub fn palette_color(index: usize) -> Color {
    PALETTE_COLORS[index % PALETTE_COLORS.len()]
}

// ─── Style Constructors ──────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(FG).bg(BG)
}

pub fn style_dim() -> Style {
    Style::default().fg(FG_DIM).bg(BG)
}

pub fn style_key_hint() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}

pub fn style_key_desc() -> Style {
    Style::default().fg(FG_DIM).bg(BG)
}

/// Swatch for the active node in the status bar
pub fn style_swatch(index: usize) -> Style {
    Style::default()
        .fg(palette_color(index))
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}
