use crate::app::Screen;
use crate::consts;
use crate::farewell::Farewell;
use crate::game::Game;
use crate::logo::Logo;
use crate::notice::Notice;
use crate::prompt::Prompt;
use crate::speed::Speed;
use crate::util::{get_display_area, Globals};
use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Widget,
    Frame,
};
use std::io;
use std::time::Instant;

/// The start-of-session screen: banner, instructions, and the speed
/// prompt.  Shown before the first session and again before every replay;
/// the speed is solicited afresh each time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SetupScreen {
    globals: Globals,
    prompt: Prompt,
    notice: Option<Notice>,
}

impl SetupScreen {
    pub(crate) fn new(globals: Globals) -> SetupScreen {
        SetupScreen {
            globals,
            prompt: Prompt::new(" Snake speed [10-20]: "),
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
            (_, KeyCode::Enter) => match self.prompt.text().parse::<Speed>() {
                Ok(speed) => Some(Screen::Game(Game::new(self.globals.clone(), speed))),
                Err(e) => {
                    self.notice = Some(Notice::new(
                        &format!(
                            "{e} [ from {min} to {max} ]",
                            min = consts::SPEED_MIN,
                            max = consts::SPEED_MAX,
                        ),
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

static INSTRUCTIONS: &[&str] = &[
    "Steer with the arrow keys",
    "   (or: w a s d / h j k l)",
    "Eat the pellets to grow,",
    "stay inside the walls,",
    "and don't bite yourself!",
];

const INSTRUCTIONS_WIDTH: u16 = 26;
const INSTRUCTIONS_HEIGHT: u16 = 5;

impl Widget for &SetupScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(display);
        let logo_area = Rect {
            height: Logo::HEIGHT,
            ..logo_area
        };
        Logo.render(logo_area, buf);

        let mut y = display.y + Logo::HEIGHT + 1;
        let [instructions_area] = Layout::horizontal([INSTRUCTIONS_WIDTH])
            .flex(Flex::Center)
            .areas(Rect {
                y,
                height: INSTRUCTIONS_HEIGHT,
                ..display
            });
        Text::from_iter(INSTRUCTIONS.iter().copied()).render(instructions_area, buf);
        y += INSTRUCTIONS_HEIGHT + 2;

        let [prompt_area] = Layout::horizontal([Prompt::WIDTH])
            .flex(Flex::Center)
            .areas(Rect {
                y,
                height: Prompt::HEIGHT,
                ..display
            });
        (&self.prompt).render(prompt_area, buf);
        y += Prompt::HEIGHT + 1;

        Line::from_iter([
            Span::raw("Start ("),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw(") or leave ("),
            Span::styled("Esc", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(
            Rect {
                y,
                height: 1,
                ..display
            },
            buf,
        );

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
