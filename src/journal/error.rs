// Journal error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum JournalError {
    #[error("index {index} out of range for journal of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
