use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsolidationError {
    #[error("too many suppliers: {count} found, at most {max} are supported")]
    TooManySuppliers { count: usize, max: usize },
    #[error("no suppliers to consolidate")]
    NoSuppliers,
}

pub type Result<T> = std::result::Result<T, ConsolidationError>;
