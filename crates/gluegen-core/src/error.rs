//! Errors raised while building a type graph from a dump.

/// A reflection dump that cannot be turned into a graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown type `{name}` referenced by `{referenced_by}`")]
    UnknownType { name: String, referenced_by: String },
    #[error("type `{name}` referenced by `{referenced_by}` is not {expected}")]
    KindMismatch {
        name: String,
        referenced_by: String,
        expected: &'static str,
    },
    #[error("type `{0}` is declared twice in the same dump")]
    DuplicateType(String),
}
