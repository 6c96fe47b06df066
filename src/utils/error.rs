use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("subclasses must implement speak() (called on {kind})")]
    UnimplementedOperation { kind: &'static str },

    #[error("operator {op} is not applicable to the given operand")]
    NotApplicable { op: &'static str },
}

pub type Result<T> = std::result::Result<T, DemoError>;
