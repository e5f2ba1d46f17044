//! Application-level errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to spawn game loop thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
    #[error("game loop thread panicked")]
    ThreadPanicked,
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("command channel closed")]
    ChannelClosed,
    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
