use crate::app::Screen;
use crate::farewell::Farewell;
use crate::notice::Notice;
use crate::prompt::Prompt;
use crate::setup::SetupScreen;
use crate::util::{get_display_area, Globals};
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::Line,
    widgets::Widget,
    Frame,
};
use std::io;
use std::time::Instant;

/// The play-again decision after a session ends.  An affirmative answer
/// loops back to a fresh setup screen (the speed is asked again); a
/// negative answer or a cancelled prompt leads to the farewell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ReplayScreen {
    globals: Globals,
    prompt: Prompt,
    notice: Option<Notice>,
}

impl ReplayScreen {
    pub(crate) fn new(globals: Globals) -> ReplayScreen {
        ReplayScreen {
            globals,
            prompt: Prompt::new(" Play again? [y/n]: "),
            notice: None,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if let Some(notice) = self.notice.as_ref() {
            let wait = notice.remaining(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.notice = None;
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let now = Instant::now();
        if self.notice.as_ref().is_some_and(|n| n.expired(now)) {
            self.notice = None;
        }
        let ev = event.as_key_press_event()?;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Screen::Quit),
            (_, KeyCode::Esc) => Some(Screen::Farewell(Farewell::new())),
            (_, KeyCode::Enter) => match self.prompt.text().trim().to_lowercase().as_str() {
                "y" | "yes" => Some(Screen::Setup(SetupScreen::new(self.globals.clone()))),
                "n" | "no" => Some(Screen::Farewell(Farewell::new())),
                other => {
                    self.notice = Some(Notice::new(
                        &format!("Invalid entry: [ {other} ] Enter [ y or n ]"),
                        now,
                    ));
                    self.prompt.clear();
                    None
                }
            },
            _ => {
                self.prompt.handle_key(ev);
                None
            }
        }
    }
}

impl Widget for &ReplayScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let mut y = display.y + display.height / 3;
        Line::raw("Another round?")
            .centered()
            .render(
                Rect {
                    y,
                    height: 1,
                    ..display
                },
                buf,
            );
        y += 2;
        let [prompt_area] = Layout::horizontal([Prompt::WIDTH])
            .flex(Flex::Center)
            .areas(Rect {
                y,
                height: Prompt::HEIGHT,
                ..display
            });
        (&self.prompt).render(prompt_area, buf);

        if let Some(notice) = self.notice.as_ref() {
            let notice_area = Rect {
                y: display.bottom().saturating_sub(3),
                height: 3,
                ..display
            };
            notice.render(notice_area, buf);
        }
    }
}
