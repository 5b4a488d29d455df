use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;

/// Bordered, scrollable block of text.
#[derive(Debug, Clone)]
pub struct TextPane {
    title: String,
    lines: Vec<String>,
    offset: usize,
    view: usize,
}

impl TextPane {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            offset: 0,
            view: 0,
        }
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_lines(lines);
        self
    }

    pub fn set_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.view.max(1))
    }

    fn scroll_by(&mut self, delta: isize) -> bool {
        let next = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
        let changed = next != self.offset;
        self.offset = next;
        changed
    }
}

impl Component for TextPane {
    fn resize(&mut self, area: Rect, _ctx: &ComponentContext) {
        self.view = area.height.saturating_sub(2) as usize;
        self.offset = self.offset.min(self.max_offset());
    }

    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let border = if ctx.focused() {
            theme::pane_border_focused()
        } else {
            theme::pane_border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.title.as_str());
        let text = Text::from(
            self.lines
                .iter()
                .skip(self.offset)
                .map(|line| Line::from(line.as_str()))
                .collect::<Vec<_>>(),
        );
        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        match event {
            Event::Mouse(_) if ctx.selection_locked() => false,
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.scroll_by(1),
                MouseEventKind::ScrollUp => self.scroll_by(-1),
                _ => false,
            },
            Event::Key(key) if ctx.focused() && key.kind == KeyEventKind::Press => {
                let page = self.view.max(1) as isize;
                match key.code {
                    KeyCode::Down => self.scroll_by(1),
                    KeyCode::Up => self.scroll_by(-1),
                    KeyCode::PageDown => self.scroll_by(page),
                    KeyCode::PageUp => self.scroll_by(-page),
                    _ => false,
                }
            }
            _ => false,
        }
    }
}
