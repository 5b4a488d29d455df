use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use term_split::components::{Component, ComponentContext, SplitPane, TextPane};
use term_split::ui::UiFrame;
use term_split::{Document, SplitterConfig, theme};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn draw(pane: &mut SplitPane<TextPane, TextPane>, area: Rect) -> Buffer {
    let mut buffer = Buffer::empty(area);
    {
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        pane.render(&mut frame, area, &ComponentContext::new(true));
    }
    buffer
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
        .collect()
}

fn panes() -> SplitPane<TextPane, TextPane> {
    SplitPane::new(
        SplitterConfig::horizontal(10),
        Document::new(),
        TextPane::new("left").with_lines(["alpha"]),
        TextPane::new("right").with_lines(["beta"]),
    )
}

#[test]
fn ghost_previews_without_moving_panes() {
    let mut pane = panes();
    let area = Rect::new(0, 0, 30, 5);
    let before = draw(&mut pane, area);
    assert_eq!(before.cell((10, 2)).unwrap().symbol(), "•");
    assert!(row_text(&before, 1).starts_with("│alpha"));

    let ctx = ComponentContext::new(true);
    pane.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), &ctx);
    pane.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 20, 2), &ctx);
    let during = draw(&mut pane, area);
    for y in 0..5 {
        assert_eq!(during.cell((20, y)).unwrap().bg, theme::ghost());
    }
    // handle and pane borders are where they were before the drag
    assert_eq!(during.cell((10, 2)).unwrap().symbol(), "●");
    assert_eq!(during.cell((11, 1)).unwrap().symbol(), "│");

    pane.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 2), &ctx);
    let after = draw(&mut pane, area);
    assert_eq!(after.cell((20, 2)).unwrap().symbol(), "●");
    assert_ne!(after.cell((20, 0)).unwrap().bg, theme::ghost());
    assert_eq!(pane.splitter().basis(), 20);
}

#[test]
fn dropping_second_pane_renders_first_alone() {
    let mut pane = panes();
    let area = Rect::new(0, 0, 30, 4);
    draw(&mut pane, area);
    let right = pane.take_second().expect("second pane present");
    assert_eq!(right.title(), "right");
    let buffer = draw(&mut pane, area);
    assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), "┌");
    assert_eq!(buffer.cell((29, 0)).unwrap().symbol(), "┐");
    assert!(!row_text(&buffer, 1).contains('•'));
}
