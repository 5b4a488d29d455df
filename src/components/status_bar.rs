use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-line bar with left- and right-aligned text.
pub struct StatusBar {
    left: String,
    right: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            style: Style::default().bg(theme::status_bg()).fg(theme::status_fg()),
        }
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let (x, y) = (area.x, area.y);
        let width = area.width as usize;
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        buffer.set_style(Rect { height: 1, ..bounds }, self.style);

        let left = truncate_to_width(&self.left, width);
        safe_set_string(buffer, bounds, x, y, &left, self.style);

        let right = truncate_to_width(&self.right, width);
        let right_width = right.chars().count();
        if right_width > 0 && right_width + left.chars().count() < width {
            let start_x = x.saturating_add((width - right_width) as u16);
            safe_set_string(buffer, bounds, start_x, y, &right, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn draw(bar: &mut StatusBar, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buffer);
            bar.render(&mut frame, area, &ComponentContext::default());
        }
        buffer
    }

    #[test]
    fn left_and_right_are_aligned() {
        let mut bar = StatusBar::new();
        bar.set_left("ab");
        bar.set_right("yz");
        let buffer = draw(&mut bar, 8);
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "a");
        assert_eq!(buffer.cell((6, 0)).unwrap().symbol(), "y");
        assert_eq!(buffer.cell((7, 0)).unwrap().symbol(), "z");
    }

    #[test]
    fn right_dropped_when_crowded() {
        let mut bar = StatusBar::default();
        bar.set_left("abcdef");
        bar.set_right("xyz");
        let buffer = draw(&mut bar, 8);
        assert_eq!(buffer.cell((6, 0)).unwrap().symbol(), " ");
        assert_eq!(bar.right(), "xyz");
    }
}
