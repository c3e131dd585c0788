use thiserror::Error;

/// Construction-time errors from the node taxonomy.
///
/// Constraint violations are rejected at the constructor; an invalid
/// node is never produced. I/O failures from the trace printer's
/// `save` surface as plain `std::io::Error` at that call site.
#[derive(Debug, Error)]
pub enum AstError {
    /// A tensor was declared with an empty shape; rank must be >= 1.
    #[error("tensor `{name}` has an empty shape; rank must be >= 1")]
    EmptyTensorShape { name: String },
}
