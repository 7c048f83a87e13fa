//! Utility macros shared by the grammar and codec modules.

/// Returns early with an error if a condition is not met.
///
/// Works like `assert!`, but produces an `Err` instead of panicking, which keeps
/// the fail-fast style of the parsers readable.
///
/// # Example
///
/// ```ignore
/// ensure!(!input.is_empty(), ParseError::IncompleteRequest);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
