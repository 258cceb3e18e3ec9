use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown variable type: {0}")]
    UnknownVariableType(String),
    #[error("column '{column}' is not a label column")]
    NotLabelColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
