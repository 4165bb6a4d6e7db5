use thiserror::Error;

use crate::interface::list_iterator::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Index out of bounds: {index} (size {size})")]
    IndexOutOfBounds { index: usize, size: usize },
    #[error("List is empty")]
    Empty,
    #[error("No more elements in this direction")]
    Exhausted,
    #[error("Unsupported list iterator operation: {0}")]
    Unsupported(Operation),
}

pub type Result<T> = std::result::Result<T, ListError>;
