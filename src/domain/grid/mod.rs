pub mod filter;
pub mod metrics;
pub mod pagination;
pub mod window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidConfiguration(String),
    DivisionByZero,
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidConfiguration(message) => {
                write!(f, "invalid grid configuration: {message}")
            }
            GridError::DivisionByZero => write!(f, "previous close is zero"),
        }
    }
}

impl std::error::Error for GridError {}
