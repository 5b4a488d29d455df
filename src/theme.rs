use ratatui::style::Color;

// Centralized splitter colors. RGB values go through `rgb_to_color` so
// terminals without truecolor still get a close xterm-256 match.

pub const GHOST_RGB: (u8, u8, u8) = (189, 147, 249);
pub const ACCENT_RGB: (u8, u8, u8) = (255, 165, 0);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    if truecolor_supported() {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    } else {
        Color::Indexed(cube_index(rgb))
    }
}

fn truecolor_supported() -> bool {
    std::env::var("COLORTERM")
        .map(|value| {
            let value = value.to_lowercase();
            value.contains("truecolor") || value.contains("24bit")
        })
        .unwrap_or(false)
}

// Nearest entry of the 6x6x6 color cube (indices 16..=231).
fn cube_index((r, g, b): (u8, u8, u8)) -> u8 {
    let step = |v: u8| ((u16::from(v) * 5 + 127) / 255) as u8;
    16 + 36 * step(r) + 6 * step(g) + step(b)
}

pub fn ghost() -> Color {
    rgb_to_color(GHOST_RGB)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

// Handle
pub fn handle_bg() -> Color {
    Color::Black
}
pub fn handle_fg() -> Color {
    Color::DarkGray
}
pub fn handle_hover_bg() -> Color {
    Color::Gray
}
pub fn handle_hover_fg() -> Color {
    Color::White
}

// Panes / status
pub fn pane_border() -> Color {
    Color::DarkGray
}
pub fn pane_border_focused() -> Color {
    Color::Blue
}
pub fn status_bg() -> Color {
    Color::DarkGray
}
pub fn status_fg() -> Color {
    Color::White
}
