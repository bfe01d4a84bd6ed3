//! # Stub Executor
//!
//! A deterministic in-memory [`Executor`] that replays a fixed result set
//! for any query. Tests and benchmarks use it to exercise the scan
//! strategies against known rows without a database in the loop; the
//! failing variant exercises the query-failure path.
//!
//! The cursor tracks its lifecycle state explicitly
//! (`unopened -> iterating -> exhausted`) and enforces the single-pass
//! contract: `scan` before the first `advance` is an error, and an
//! exhausted cursor stays exhausted.

use crate::column::ScanTarget;
use crate::executor::{Cursor, Executor};
use crate::value::Value;
use eyre::{bail, ensure, Result};
use tracing::trace;

/// In-memory executor replaying a fixed set of rows.
#[derive(Debug, Clone, Default)]
pub struct StubExecutor {
    rows: Vec<Vec<Value>>,
    failure: Option<String>,
}

impl StubExecutor {
    /// An executor with no rows; every query yields an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// An executor replaying the given rows, in order.
    pub fn with_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows,
            failure: None,
        }
    }

    /// Appends one row to the replayed result set.
    pub fn row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    /// An executor that rejects every query with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Number of rows the executor replays per query.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Executor for StubExecutor {
    type Rows<'conn>
        = StubCursor<'conn>
    where
        Self: 'conn;

    fn run_query<'conn>(&'conn self, query: &str) -> Result<Self::Rows<'conn>> {
        if let Some(message) = &self.failure {
            bail!("query rejected: {message}");
        }
        trace!(query, rows = self.rows.len(), "stub query");
        Ok(StubCursor::new(&self.rows))
    }
}

/// Lifecycle state of a [`StubCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Unopened,
    Iterating,
    Exhausted,
}

/// Single-pass cursor over a stub executor's rows.
#[derive(Debug)]
pub struct StubCursor<'a> {
    rows: &'a [Vec<Value>],
    next: usize,
    state: CursorState,
}

impl<'a> StubCursor<'a> {
    fn new(rows: &'a [Vec<Value>]) -> Self {
        Self {
            rows,
            next: 0,
            state: CursorState::Unopened,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CursorState {
        self.state
    }
}

impl Cursor for StubCursor<'_> {
    fn advance(&mut self) -> Result<bool> {
        if self.state == CursorState::Exhausted {
            return Ok(false);
        }
        if self.next < self.rows.len() {
            self.state = CursorState::Iterating;
            self.next += 1;
            Ok(true)
        } else {
            self.state = CursorState::Exhausted;
            Ok(false)
        }
    }

    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()> {
        ensure!(
            self.state == CursorState::Iterating,
            "scan requires a current row; call advance first"
        );
        let row = &self.rows[self.next - 1];
        ensure!(
            targets.len() == row.len(),
            "scan target count {} does not match column count {}",
            targets.len(),
            row.len()
        );
        for (target, value) in targets.iter_mut().zip(row.iter()) {
            target.scan(value.clone())?;
        }
        Ok(())
    }
}
