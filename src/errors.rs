#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
