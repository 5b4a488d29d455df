//! Splitter chrome: the handle between the panes and the ghost indicator
//! that previews the drop position while dragging.
//!
//! Neither widget touches pane geometry. Pane content is only relaid out
//! once the drag commits, so expensive panes never reflow mid-drag.

use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::constants::{GHOST_THICKNESS, GRIP_LENGTH};
use crate::theme;

/// Thin bar drawn across the container at the live drag position.
#[derive(Debug, Clone, Copy)]
pub struct GhostPreview {
    pub direction: Direction,
    /// Position relative to the container edge.
    pub offset: u16,
}

impl GhostPreview {
    pub fn new(direction: Direction, offset: u16) -> Self {
        Self { direction, offset }
    }

    /// Rect the bar occupies inside `container`, before clipping.
    pub fn bar_rect(&self, container: Rect) -> Rect {
        match self.direction {
            Direction::Horizontal => Rect {
                x: container.x.saturating_add(self.offset),
                y: container.y,
                width: GHOST_THICKNESS,
                height: container.height,
            },
            Direction::Vertical => Rect {
                x: container.x,
                y: container.y.saturating_add(self.offset),
                width: container.width,
                height: GHOST_THICKNESS,
            },
        }
    }
}

impl Widget for GhostPreview {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = self.bar_rect(area).intersection(area).intersection(buf.area);
        if bar.width == 0 || bar.height == 0 {
            return;
        }
        let style = Style::default().bg(theme::ghost()).fg(theme::ghost());
        for y in bar.y..bar.y.saturating_add(bar.height) {
            for x in bar.x..bar.x.saturating_add(bar.width) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }
}

/// The draggable strip between the two panes, with a small grip in the
/// middle.
#[derive(Debug, Clone, Copy)]
pub struct SplitHandle {
    pub direction: Direction,
    pub hovered: bool,
    pub pressed: bool,
}

impl SplitHandle {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            hovered: false,
            pressed: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    fn style(&self) -> Style {
        if self.pressed {
            Style::default()
                .bg(theme::handle_hover_bg())
                .fg(theme::accent())
                .add_modifier(Modifier::BOLD)
        } else if self.hovered {
            Style::default()
                .bg(theme::handle_hover_bg())
                .fg(theme::handle_hover_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::handle_bg())
                .fg(theme::handle_fg())
                .add_modifier(Modifier::DIM)
        }
    }
}

impl Widget for SplitHandle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let clip = area.intersection(buf.area);
        if clip.width == 0 || clip.height == 0 {
            return;
        }
        let style = self.style();
        let fill = match self.direction {
            Direction::Horizontal => "│",
            Direction::Vertical => "─",
        };
        for y in clip.y..clip.y.saturating_add(clip.height) {
            for x in clip.x..clip.x.saturating_add(clip.width) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(fill);
                    cell.set_style(style);
                }
            }
        }

        let grip = if self.hovered || self.pressed { "●" } else { "•" };
        let cells: Vec<(u16, u16)> = match self.direction {
            Direction::Horizontal => {
                let x = area.x + area.width / 2;
                let start = (area.y + area.height / 2).saturating_sub(GRIP_LENGTH / 2);
                (0..GRIP_LENGTH).map(|i| (x, start.saturating_add(i))).collect()
            }
            Direction::Vertical => {
                let y = area.y + area.height / 2;
                let start = (area.x + area.width / 2).saturating_sub(GRIP_LENGTH / 2);
                (0..GRIP_LENGTH).map(|i| (start.saturating_add(i), y)).collect()
            }
        };
        for (x, y) in cells {
            if !crate::ui::rect_contains(clip, x, y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(grip);
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_draws_column_inside_container() {
        let container = Rect::new(2, 0, 8, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
        GhostPreview::new(Direction::Horizontal, 3).render(container, &mut buf);
        for y in 0..3 {
            assert_eq!(buf.cell((5, y)).unwrap().bg, theme::ghost());
            assert_ne!(buf.cell((4, y)).unwrap().bg, theme::ghost());
        }
    }

    #[test]
    fn ghost_beyond_container_is_clipped() {
        let container = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        GhostPreview::new(Direction::Vertical, 6).render(container, &mut buf);
        for y in 0..10 {
            for x in 0..10 {
                assert_ne!(buf.cell((x, y)).unwrap().bg, theme::ghost());
            }
        }
    }

    #[test]
    fn handle_draws_grip_centered() {
        let area = Rect::new(3, 0, 1, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 5));
        SplitHandle::new(Direction::Horizontal).render(area, &mut buf);
        assert_eq!(buf.cell((3, 0)).unwrap().symbol(), "│");
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), "•");
        assert_eq!(buf.cell((3, 2)).unwrap().symbol(), "•");
        assert_eq!(buf.cell((3, 3)).unwrap().symbol(), "•");
        assert_eq!(buf.cell((3, 4)).unwrap().symbol(), "│");
    }

    #[test]
    fn hovered_handle_uses_filled_grip() {
        let area = Rect::new(0, 1, 7, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 3));
        SplitHandle::new(Direction::Vertical)
            .hovered(true)
            .render(area, &mut buf);
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), "●");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), "─");
    }

    #[test]
    fn pressed_handle_highlights_grip() {
        let area = Rect::new(2, 0, 1, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        SplitHandle::new(Direction::Horizontal)
            .pressed(true)
            .render(area, &mut buf);
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), "●");
        assert_eq!(buf.cell((2, 1)).unwrap().fg, theme::accent());
    }
}
