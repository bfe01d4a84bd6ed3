//! # Executor Boundary
//!
//! The engine owns no query execution of its own. These two traits are the
//! contract it requires from the underlying tabular query executor: run a
//! query and hand back a single-pass row cursor, then decode the current
//! row through an ordered list of scan targets.
//!
//! ## Cursor Lifecycle
//!
//! A cursor moves `unopened -> iterating -> exhausted`. `advance` must be
//! called before the first `scan`; once it returns `false` the cursor stays
//! exhausted. There is no rewind - a cursor is single-pass and single-use.
//!
//! ## Decode Contract
//!
//! `scan` receives heterogeneous targets and must write through each one
//! according to the column's runtime value type, in column order. Target
//! count and column count must agree; implementations report a mismatch as
//! a decode error.

use crate::column::ScanTarget;
use eyre::Result;

/// Single-pass cursor over a query's result rows.
pub trait Cursor {
    /// Moves to the next row. Returns `false` once the result set is
    /// exhausted; further calls keep returning `false`.
    fn advance(&mut self) -> Result<bool>;

    /// Decodes the current row through the given scan targets, one per
    /// column, in column order.
    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()>;
}

/// A tabular query executor: runs a query, returns a row cursor.
pub trait Executor {
    /// Cursor type borrowed from this executor for one query invocation.
    type Rows<'conn>: Cursor
    where
        Self: 'conn;

    /// Executes the query and returns a cursor positioned before the first
    /// row.
    fn run_query<'conn>(&'conn self, query: &str) -> Result<Self::Rows<'conn>>;
}
