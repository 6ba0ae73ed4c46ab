use thiserror::Error;

/// Errors returned by fallible `TreeMap` operations
///
/// Whenever one of these is returned, the map is left exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to remove a key whose node still has a left or right subtree
    #[error("only leaf nodes can be removed")]
    InvalidOperation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation_message() {
        assert_eq!(Error::InvalidOperation.to_string(), "only leaf nodes can be removed");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidOperation);
        assert!(err.source().is_none());
    }
}
