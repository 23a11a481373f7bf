use derive_builder::UninitializedFieldError;
use crate::{metric::Metric, node::Node, table::LookupError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{metric} scaling factor of source node '{node}' is zero")]
    DivisionByZero { metric: Metric, node: Node },

    #[error("{metric} conversion does not yield a finite number")]
    NonFiniteResult { metric: Metric },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ConvertError {
    pub fn invalid_arg<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<UninitializedFieldError> for ConvertError {
    fn from(e: UninitializedFieldError) -> Self {
        Self::InvalidArgument(format!("missing required value '{}'", e.field_name()))
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[macro_export]
macro_rules! invalid_arg {
    ($msg:literal $(,)?) => {
        Err($crate::convert::ConvertError::InvalidArgument(format!($msg)))?
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::convert::ConvertError::InvalidArgument(format!($fmt, $($arg)*)))?
    };
}
