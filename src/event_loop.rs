use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Owns the input driver and pumps its events into a handler on the UI
/// thread. Splitter handlers run synchronously inside the pump, so move
/// events are seen strictly in the order the terminal reported them.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler returns `ControlFlow::Quit`.
    ///
    /// The handler gets `None` once per iteration (a chance to draw) and
    /// `Some(event)` for each input event. Pending events are drained
    /// before the next draw so a burst of drag reports does not pile up
    /// behind rendering.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                return Ok(());
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use std::collections::VecDeque;

    struct Scripted(VecDeque<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    fn drag(column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn events_arrive_in_order_and_burst_is_drained() {
        let script = VecDeque::from([drag(1), drag(2), drag(3)]);
        let mut event_loop = EventLoop::new(Scripted(script), Duration::from_millis(0));
        let mut seen = Vec::new();
        let mut idle_ticks = 0;
        event_loop
            .run(|_, event| {
                match event {
                    Some(Event::Mouse(mouse)) => seen.push(mouse.column),
                    Some(_) => {}
                    None => {
                        idle_ticks += 1;
                        if idle_ticks > 1 {
                            return Ok(ControlFlow::Quit);
                        }
                    }
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(idle_ticks, 2);
    }
}
