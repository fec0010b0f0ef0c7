//! Error handling and result types for prefix-sum structure operations.
//!
//! The original formulation of these structures leaves out-of-range indices
//! as unchecked array access; here that is an explicit error kind instead.

/// Error type for prefix-sum structure operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FenwickError {
    /// Index (or prefix length) outside the structure's logical range.
    IndexOutOfRange(String),
    /// Invalid logical size specified at construction.
    InvalidSize(String),
}

impl FenwickError {
    /// Create an IndexOutOfRange error with context
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange(format!(
            "Index {} is out of range for structure of size {}",
            index, size
        ))
    }

    /// Create an InvalidSize error with context
    pub fn invalid_size(size: usize, min_required: usize) -> Self {
        Self::InvalidSize(format!(
            "Size {} is invalid (minimum required: {})",
            size, min_required
        ))
    }

    /// Check if this error is an index error
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange(_))
    }

    /// Check if this error is a size error
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::InvalidSize(_))
    }
}

impl std::fmt::Display for FenwickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FenwickError::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            FenwickError::InvalidSize(msg) => write!(f, "Invalid size: {}", msg),
        }
    }
}

impl std::error::Error for FenwickError {}

/// Public result type for operations that may fail
pub type FenwickResult<T> = Result<T, FenwickError>;

/// Result type for construction operations
pub type InitResult<T> = Result<T, FenwickError>;

/// Result type for checked query operations
pub type QueryResult<T> = Result<T, FenwickError>;

/// Result type for checked mutation operations
pub type UpdateResult<T> = Result<T, FenwickError>;

/// Result extension trait for improved error handling
pub trait FenwickResultExt<T> {
    /// Convert to a FenwickResult with additional context
    fn with_context(self, context: &str) -> FenwickResult<T>;

    /// Convert to a FenwickResult with operation context
    fn with_operation(self, operation: &str) -> FenwickResult<T>;
}

impl<T> FenwickResultExt<T> for Result<T, FenwickError> {
    fn with_context(self, context: &str) -> FenwickResult<T> {
        self.map_err(|e| match e {
            FenwickError::IndexOutOfRange(msg) => {
                FenwickError::IndexOutOfRange(format!("{}: {}", context, msg))
            }
            FenwickError::InvalidSize(msg) => {
                FenwickError::InvalidSize(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> FenwickResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers_and_predicates() {
        let err = FenwickError::index_out_of_range(7, 5);
        assert!(err.is_index_error());
        assert!(!err.is_size_error());
        assert!(err.to_string().contains("Index 7"));
        assert!(err.to_string().contains("size 5"));

        let err = FenwickError::invalid_size(0, 1);
        assert!(err.is_size_error());
        assert!(err.to_string().contains("Size 0"));
    }

    #[test]
    fn test_with_context_prepends() {
        let res: FenwickResult<()> = Err(FenwickError::index_out_of_range(9, 3));
        let err = res.with_operation("prefix_sum").unwrap_err();
        assert!(err.to_string().contains("Operation 'prefix_sum'"));
        assert!(err.is_index_error());
    }
}
