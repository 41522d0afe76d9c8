use crate::farewell::Farewell;
use crate::game::Game;
use crate::replay::ReplayScreen;
use crate::setup::SetupScreen;
use crate::util::Globals;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The outer lifecycle: one screen at a time, each screen handing back the
/// next one.  Every transition is a value returned from the single event
/// loop below, so nothing can mutate or present session state once `Quit`
/// has been chosen, and terminal teardown (in `main`) happens exactly once,
/// after this loop has exited.
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        let screen = Screen::Setup(SetupScreen::new(globals));
        App { screen }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.screen {
            Screen::Setup(ref setup) => {
                terminal.draw(|frame| setup.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Replay(ref replay) => {
                terminal.draw(|frame| replay.draw(frame))?;
            }
            Screen::Farewell(ref farewell) => {
                terminal.draw(|frame| farewell.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        let next = match self.screen {
            Screen::Setup(ref mut setup) => setup.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Replay(ref mut replay) => replay.process_input()?,
            Screen::Farewell(ref mut farewell) => farewell.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Setup(SetupScreen),
    Game(Game),
    Replay(ReplayScreen),
    Farewell(Farewell),
    Quit,
}
