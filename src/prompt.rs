use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A one-line modal text input, the terminal stand-in for a dialog box.
/// The owning screen decides what Enter and Esc mean; the prompt only edits
/// its value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Prompt {
    title: &'static str,
    value: String,
}

impl Prompt {
    /// The height that should be used for the `Rect` passed to
    /// `Prompt::render()`
    pub(crate) const HEIGHT: u16 = 3;

    /// The width that should be used for the `Rect` passed to
    /// `Prompt::render()`
    pub(crate) const WIDTH: u16 = 44;

    const MAX_LEN: usize = 32;

    pub(crate) fn new(title: &'static str) -> Prompt {
        Prompt {
            title,
            value: String::new(),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.value
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
    }

    /// Feed a key event into the line editor.  Returns `true` if the event
    /// changed the value.
    pub(crate) fn handle_key(&mut self, ev: KeyEvent) -> bool {
        let text_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match ev.code {
            KeyCode::Char(c) if text_modifiers.contains(ev.modifiers) => {
                if self.value.chars().count() < Prompt::MAX_LEN {
                    self.value.push(c);
                    return true;
                }
                false
            }
            KeyCode::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }
}

impl Widget for &Prompt {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        Line::from_iter([
            Span::raw(self.value.as_str()),
            Span::styled(" ", Style::new().add_modifier(Modifier::REVERSED)),
        ])
        .render(inner, buf);
    }
}
