mod app;
mod command;
mod config;
mod consts;
mod farewell;
mod game;
mod logo;
mod notice;
mod prompt;
mod replay;
mod scores;
mod setup;
mod speed;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = concat!(
    "Usage: snacker [-c|--config <file>]\n",
    "\n",
    "Options:\n",
    "  -c, --config <file>  Read configuration from <file>\n",
    "  -h, --help           Show this message and exit\n",
    "  -V, --version        Show the program version and exit",
);

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snacker: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    let globals = match load_globals(&args) {
        Ok(globals) => globals,
        Err(e) => {
            eprintln!("snacker: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(globals).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn load_globals(args: &Args) -> anyhow::Result<Globals> {
    let (path, allow_missing) = match args.config.as_ref() {
        Some(p) => (p.clone(), false),
        None => (
            Config::default_path().context("could not locate the configuration file")?,
            true,
        ),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    Ok(Globals { config })
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse the command line.  Returns `Ok(None)` if `--help` or
    /// `--version` already did all the work there is to do.
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut config = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => config = Some(PathBuf::from(parser.value()?)),
                Short('h') | Long("help") => {
                    println!("{USAGE}");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("snacker {}", env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(Args { config }))
    }
}
