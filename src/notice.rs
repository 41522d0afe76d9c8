use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    text::Line,
    widgets::{Clear, Widget},
};
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// A short-lived on-screen message: an input hint, an invalid-entry
/// complaint.  Each notice owns its own presentation and disappears on its
/// own after [`consts::NOTICE_TTL`]; screens hold at most one and drop it
/// deterministically when it expires.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Notice {
    lines: Vec<String>,
    until: Instant,
}

impl Notice {
    /// Wrap text at this many columns
    const TEXT_WIDTH: u16 = 56;

    pub(crate) fn new(text: &str, now: Instant) -> Notice {
        let lines = textwrap::wrap(text, usize::from(Notice::TEXT_WIDTH))
            .into_iter()
            .map(Cow::into_owned)
            .collect();
        Notice {
            lines,
            until: now + consts::NOTICE_TTL,
        }
    }

    pub(crate) fn expired(&self, now: Instant) -> bool {
        now >= self.until
    }

    /// Time left before the notice should be cleared
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.until.saturating_duration_since(now)
    }

    fn size(&self) -> Size {
        let width = self
            .lines
            .iter()
            .map(|ln| ln.chars().count())
            .max()
            .unwrap_or(0);
        Size {
            width: u16::try_from(width).unwrap_or(Notice::TEXT_WIDTH),
            height: u16::try_from(self.lines.len()).unwrap_or(1),
        }
    }
}

impl Widget for &Notice {
    /// `area` is the whole display area; the notice centers itself within it
    fn render(self, area: Rect, buf: &mut Buffer) {
        let notice_area = center_rect(area, self.size());
        Clear.render(notice_area, buf);
        for (ln, row) in self.lines.iter().zip(notice_area.rows()) {
            Line::styled(ln.as_str(), consts::NOTICE_STYLE)
                .centered()
                .render(row, buf);
        }
    }
}
