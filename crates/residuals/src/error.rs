use thiserror::Error;

/// Errors raised when caller-supplied arrays have the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// An array has the wrong number of columns.
    #[error("{what} must have {expected} columns, found {found}")]
    Columns {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// An array has the wrong number of rows.
    #[error("{what} must have {expected} rows, found {found}")]
    Rows {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A vector has the wrong length.
    #[error("{what} must have length {expected}, found {found}")]
    Length {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// An array that needs at least one row has none.
    #[error("{what} must not be empty")]
    Empty { what: &'static str },
}

/// The policy evaluator failed at one integration node.
///
/// The node index is the row of the innovation matrix whose next-period
/// realization could not be mapped to a control.
#[derive(Debug, Error)]
#[error("policy evaluation failed at integration node {node}")]
pub struct NodeError<PE> {
    pub node: usize,
    #[source]
    pub source: PE,
}
