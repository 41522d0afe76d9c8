use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};

/// The banner drawn at the top of the setup screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    pub(crate) const HEIGHT: u16 = 3;
    pub(crate) const WIDTH: u16 = 15;
}

#[rustfmt::skip]
static SNACK: &[&str] = &[
    "╔═╗╔╗╔╔═╗╔═╗╦╔═",
    "╚═╗║║║╠═╣║  ╠╩╗",
    "╚═╝╝╚╝╩ ╩╚═╝╩ ╩",
];

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(SNACK.iter().copied())
            .style(consts::SNAKE_STYLE)
            .render(area, buf);
    }
}
