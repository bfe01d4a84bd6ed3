//! # Rowcast - Strategy-Driven Record Materialization
//!
//! Rowcast turns raw tabular query results into strongly-typed in-memory
//! records without per-type boilerplate. It sits between a tabular query
//! executor (anything that can run a query and hand back a row cursor) and
//! application record types, and lets the caller pick how much automation
//! they want to pay for:
//!
//! | Strategy | Entry point | Per-type cost | Per-row cost |
//! |----------|-------------|---------------|--------------|
//! | **Static** | [`Engine::fetch_all`] | hand-written [`Record`] impl | none |
//! | **Probing** | [`Engine::fetch_probed`] | one [`registry::register`] call | plan lookup once per query |
//! | **Reflective** | [`Engine::fetch_reflected`] | one `field_walk!` invocation | generated field walk |
//! | **Closure** | [`Engine::for_each_row`] | none | whatever the callback does |
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowcast::{Engine, Value};
//! use rowcast::stub::StubExecutor;
//!
//! let db = StubExecutor::new()
//!     .row(vec![Value::Int(1), Value::Text("Alice".into())])
//!     .row(vec![Value::Int(2), Value::Text("Bob".into())]);
//!
//! let engine = Engine::builder().connection("stub://people").build();
//! let people: Vec<Person> = engine.fetch_all(&db, "select id, name from people")?;
//! assert_eq!(people.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Engine (four strategies)          │
//! ├───────────────────────┬──────────────────────┤
//! │  Record / FieldWalk   │  Scan-plan registry  │
//! ├───────────────────────┴──────────────────────┤
//! │      Column capability + scan targets        │
//! ├──────────────────────────────────────────────┤
//! │      Executor / Cursor boundary contract     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Data flows bottom-up: the engine runs a query through an [`Executor`],
//! walks the returned [`Cursor`] row by row, derives an ordered list of
//! scan-target pointers from a freshly allocated record, and lets the cursor
//! decode the current row directly into the record's fields. The populated
//! record is appended to the result collection, which the caller owns.
//!
//! ## Ordering Contract
//!
//! The column ordering of a record's name list, its scan-target list, and
//! the query's result set must agree. This is a caller contract: the engine
//! does not validate it, and a mismatch either decodes values into the wrong
//! fields or fails mid-scan.
//!
//! ## Module Overview
//!
//! - [`column`]: per-field capability contract and scan-target writers
//! - [`record`]: per-type descriptor and reflective field-walk contracts
//! - [`executor`]: boundary traits a query executor must satisfy
//! - [`registry`]: process-wide scan-plan cache keyed by type identity
//! - [`engine`]: the four materialization strategies
//! - [`stub`]: deterministic in-memory executor for tests and benchmarks

#[macro_use]
mod macros;

pub mod column;
pub mod engine;
pub mod executor;
pub mod record;
pub mod registry;
pub mod stub;
pub mod value;

pub use column::{Column, ColumnInfo, ScanTarget, Table};
pub use engine::{Engine, EngineBuilder, EngineConfig};
pub use executor::{Cursor, Executor};
pub use record::{FieldWalk, Record, ScanTargets};
pub use value::Value;
