use crate::{convert::ConvertError, table::LookupError};

#[derive(Debug, thiserror::Error)]
pub enum NodeScaleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{0}")]
    Message(String),

    #[error("{msg} >> {err}")]
    Context { msg: String, err: Box<dyn std::error::Error + Send + Sync> }
}

pub type NodeScaleResult<T> = Result<T, NodeScaleError>;

pub trait ErrorContext<T> {
    fn context<S: Into<String>>(self, msg: S) -> NodeScaleResult<T>;
    fn with_context<S: Into<String>>(self, f: impl FnOnce() -> S) -> NodeScaleResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ErrorContext<T> for Result<T, E> {
    fn context<S: Into<String>>(self, msg: S) -> NodeScaleResult<T> {
        self.map_err(|e| NodeScaleError::Context { msg: msg.into(), err: Box::new(e) })
    }

    fn with_context<S: Into<String>>(self, f: impl FnOnce() -> S) -> NodeScaleResult<T> {
        self.map_err(|e| NodeScaleError::Context { msg: f().into(), err: Box::new(e) })
    }
}
