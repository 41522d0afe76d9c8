use crate::config::Config;
use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// State shared by every screen: the loaded configuration, passed along
/// from screen to screen as sessions come and go
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) config: Config,
}

impl Globals {
    /// Where the durable best score lives, if persistence is enabled
    pub(crate) fn scores_path(&self) -> Option<PathBuf> {
        self.config.scores_file().map(|p| p.into_owned())
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [mid] = Layout::horizontal([size.width]).flex(Flex::Center).areas(area);
    let [mid] = Layout::vertical([size.height]).flex(Flex::Center).areas(mid);
    mid
}
