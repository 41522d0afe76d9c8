use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::get_display_area;
use crossterm::event::{poll, read, Event};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
    Frame,
};
use std::io;
use std::time::Instant;

/// The goodbye presentation shown after the player declines another round
/// or cancels a prompt.  It lingers briefly, then the program exits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Farewell {
    until: Instant,
}

impl Farewell {
    pub(crate) fn new() -> Farewell {
        Farewell {
            until: Instant::now() + consts::FAREWELL_PAUSE,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        let wait = self.until.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            return Ok(Some(Screen::Quit));
        }
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Enter | Command::Esc => Some(Screen::Quit),
            _ => None,
        }
    }
}

impl Widget for &Farewell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let middle = Rect {
            y: display.y + display.height / 2,
            height: 1,
            ..display
        };
        Line::styled("See you later . . .", consts::FAREWELL_STYLE)
            .centered()
            .render(middle, buf);
    }
}
