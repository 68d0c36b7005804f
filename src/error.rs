use thiserror::Error;

/// Invalid arguments handed to a dictionary operation.
///
/// Absence of a key is never an error; lookups and removals report it as
/// `Ok(None)`. Structural invariant violations are not represented here
/// either: those indicate a bug in the tree itself and panic instead of
/// returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// Keys and prefixes must contain at least one character.
    #[error("key must not be empty")]
    EmptyKey,

    /// Prefix queries must request at least one result.
    #[error("result count must be at least 1")]
    ZeroCount,
}
