use derivative::Derivative;
use thiserror::Error;

use crate::values::Val;

pub type Res = Result<Val, SkiError>;

#[derive(Error, PartialEq, Eq, Clone, Hash, Derivative)]
#[derivative(Debug)]
pub enum SkiError {
    #[error("invalid application: {0} cannot be applied to {1}")]
    InvalidApplication(String, String),
    #[error("evaluation exceeded the maximum depth of {0}")]
    DepthExceeded(usize),
    #[error("{0} is not a church boolean")]
    NotABoolean(String),
    #[error("truth table has {1} rows, expected {0}")]
    ShortTable(usize, usize),
    #[error("bad option: {0}")]
    BadOption(String),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("io error: {0}")]
    Io(String),
}

impl SkiError {
    pub fn invalid_application(callee: &Val, arg: &Val) -> Self {
        SkiError::InvalidApplication(callee.to_string(), arg.to_string())
    }
}

impl From<std::io::Error> for SkiError {
    fn from(error: std::io::Error) -> Self {
        SkiError::Io(error.to_string())
    }
}
