use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt interrupted")]
    Interrupted,
}

pub type PromptResult<T> = Result<T, PromptError>;
