//! # Materialization Engine
//!
//! The engine owns the four scan strategies and the configuration they run
//! under. It is constructed once by the caller (builder pattern) and passed
//! by reference to every entry point; it holds no mutable state, so a
//! single engine can serve any number of sequential or concurrent queries -
//! concurrency is bounded only by what the underlying executor allows.
//!
//! ## Strategies
//!
//! | Method | Record requirement | Capability check |
//! |--------|--------------------|------------------|
//! | [`Engine::fetch_all`] | `Record + Default` | compile time |
//! | [`Engine::fetch_probed`] | `Default + 'static` | registry lookup, once per query |
//! | [`Engine::fetch_reflected`] | `FieldWalk + Default` | generated field walk |
//! | [`Engine::for_each_row`] | none | caller's responsibility |
//!
//! All four share the same row loop: fetch the next row, allocate, derive
//! scan targets, decode through them, append. A query execution failure is
//! returned to the caller; a per-row decode failure aborts the remaining
//! scan. A record that fails its capability probe is skipped silently -
//! nothing is appended and no error is raised.

use crate::executor::{Cursor, Executor};
use crate::record::{FieldWalk, Record};
use crate::registry;
use eyre::{Result, WrapErr};
use tracing::{debug, trace};

/// Engine configuration, constructed through [`EngineBuilder`] and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    connection: String,
}

impl EngineConfig {
    /// The configured connection string. The engine itself never dials
    /// anything; the value is carried for executors that want it.
    pub fn connection(&self) -> &str {
        &self.connection
    }
}

/// Builder for configuring an [`Engine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    connection: Option<String>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection string. No validation, no reload semantics; the
    /// value is recorded once and read thereafter.
    pub fn connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub fn build(self) -> Engine {
        let config = EngineConfig {
            connection: self.connection.unwrap_or_default(),
        };
        debug!(connection = %config.connection, "engine configured");
        Engine { config }
    }
}

/// The materialization engine. Cheap to construct, stateless across calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// An engine with default (empty) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured connection string.
    pub fn connection(&self) -> &str {
        self.config.connection()
    }

    /// Static materialization: every row is decoded through the record
    /// type's hand-authored descriptor. Zero runtime type inspection.
    pub fn fetch_all<T, E>(&self, db: &E, query: &str) -> Result<Vec<T>>
    where
        T: Record + Default,
        E: Executor,
    {
        debug!(strategy = "static", query, "scanning result set");
        let mut rows = self.open(db, query)?;

        let mut result = Vec::new();
        while rows.advance()? {
            let mut record = T::default();
            let mut targets = record.scan_targets();
            rows.scan(targets.as_mut_slice())?;
            drop(targets);
            result.push(record);
        }

        trace!(rows = result.len(), "static scan complete");
        Ok(result)
    }

    /// Probing materialization: the record type's descriptor plan is looked
    /// up in the registry once, before the row loop. If the type was never
    /// registered the probe fails and every row is consumed but skipped,
    /// yielding an empty collection rather than an error.
    pub fn fetch_probed<T, E>(&self, db: &E, query: &str) -> Result<Vec<T>>
    where
        T: Default + 'static,
        E: Executor,
    {
        let plan = registry::plan_for::<T>();
        debug!(
            strategy = "probing",
            query,
            registered = plan.is_some(),
            "scanning result set"
        );
        let mut rows = self.open(db, query)?;

        let mut result = Vec::new();
        while rows.advance()? {
            let Some(plan) = plan.as_deref() else {
                continue;
            };
            let mut record = T::default();
            let mut targets = plan.collect(&mut record);
            rows.scan(targets.as_mut_slice())?;
            drop(targets);
            result.push(record);
        }

        trace!(rows = result.len(), "probing scan complete");
        Ok(result)
    }

    /// Reflective materialization: scan targets are collected by walking
    /// the record's fields, skipping any field without the column
    /// capability. Column metadata is introspected once per type and cached
    /// in the registry; the per-row walk itself is generated at compile
    /// time by `field_walk!`.
    pub fn fetch_reflected<T, E>(&self, db: &E, query: &str) -> Result<Vec<T>>
    where
        T: FieldWalk + Default + 'static,
        E: Executor,
    {
        let plan = registry::reflected_plan::<T>();
        debug!(
            strategy = "reflective",
            query,
            columns = plan.column_names(),
            "scanning result set"
        );
        let mut rows = self.open(db, query)?;

        let mut result = Vec::new();
        while rows.advance()? {
            let mut record = T::default();
            let mut targets = record.walk_targets();
            rows.scan(targets.as_mut_slice())?;
            drop(targets);
            result.push(record);
        }

        trace!(rows = result.len(), "reflective scan complete");
        Ok(result)
    }

    /// Closure-driven walk: the callback is invoked once per row with the
    /// raw cursor and is responsible for allocating, assembling scan
    /// targets, decoding, and accumulating into its enclosing scope. The
    /// walker knows nothing about records. A callback error aborts the
    /// walk.
    pub fn for_each_row<'conn, E, F>(&self, db: &'conn E, query: &str, mut per_row: F) -> Result<()>
    where
        E: Executor,
        F: FnMut(&mut E::Rows<'conn>) -> Result<()>,
    {
        debug!(strategy = "walker", query, "walking result set");
        let mut rows = self.open(db, query)?;

        while rows.advance()? {
            per_row(&mut rows)?;
        }

        trace!("walk complete");
        Ok(())
    }

    fn open<'conn, E>(&self, db: &'conn E, query: &str) -> Result<E::Rows<'conn>>
    where
        E: Executor,
    {
        db.run_query(query)
            .wrap_err_with(|| format!("query execution failed: {query}"))
    }
}
