use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("Cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}
