use std::path::PathBuf;
use thiserror::Error;

/// The session score plus the best score from previous sessions.
///
/// The best score is a single integer stored as decimal text at `path`,
/// created with value `0` the first time it is written.  It changes only
/// through [`commit_if_record`][Scoreboard::commit_if_record], which is
/// called once, at the end of a session; persistence is best-effort and a
/// session never fails because the file is missing or unwritable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scoreboard {
    current: u32,
    path: Option<PathBuf>,
}

impl Scoreboard {
    /// Create a scoreboard for a new session.  `path` is the location of
    /// the durable best score; `None` disables persistence.  A missing
    /// record file is seeded with `0`, best-effort.
    pub(crate) fn new(path: Option<PathBuf>) -> Scoreboard {
        let board = Scoreboard { current: 0, path };
        if board.path.as_deref().is_some_and(|p| !p.exists()) {
            let _ = board.save(0);
        }
        board
    }

    /// The score accumulated this session
    pub(crate) fn current(&self) -> u32 {
        self.current
    }

    /// Record one consumption event
    pub(crate) fn increment(&mut self) {
        self.current += 1;
    }

    /// The best score on record, read fresh from disk.  A missing or
    /// unreadable file counts as 0, as does a file that does not parse as
    /// an integer.
    pub(crate) fn best(&self) -> u32 {
        self.load().unwrap_or(0)
    }

    /// If this session's score beats the best on record, persist it.
    /// The read, comparison, and write happen in this one call so that the
    /// read-modify-write stays a single critical section.
    pub(crate) fn commit_if_record(&self) -> Result<(), SaveError> {
        if self.current > self.best() {
            self.save(self.current)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<u32, LoadError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(0);
        };
        let src = match fs_err::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::Read(e)),
        };
        src.trim()
            .parse::<u32>()
            .map_err(|_| LoadError::Corrupt(src))
    }

    fn save(&self, score: u32) -> Result<(), SaveError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::Mkdir)?;
        }
        fs_err::write(path, format!("{score}\n")).map_err(SaveError::Write)
    }
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to read best-score file")]
    Read(#[source] std::io::Error),
    #[error("best-score file held {0:?}, not an integer")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub(crate) enum SaveError {
    #[error("failed to create parent directories for best-score file")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write best-score file")]
    Write(#[source] std::io::Error),
}
