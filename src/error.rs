use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("no probability defined for week {week}")]
    MissingProbability { week: usize },
    #[error("could not write table: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
