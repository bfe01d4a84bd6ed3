//! # Column Capability
//!
//! This module defines the per-field contract that makes a struct field
//! scannable: the [`Column`] trait describes how one field maps to one
//! result-set column, and the [`ScanTarget`] trait is the write side a row
//! cursor decodes through.
//!
//! ## Design
//!
//! A column cell owns its storage outright. `scan_target` hands out an
//! exclusive mutable reference into that storage, so the borrow checker
//! enforces the aliveness invariant for free: the pointer is valid exactly
//! as long as the owning record is, and no two capabilities can share a
//! cell. Exposing internal mutable state here is the point - generic decode
//! has to write through an opaque pointer without knowing the concrete
//! field type.
//!
//! ## Decode Semantics
//!
//! `ScanTarget` implementations match strictly on the value variant. The
//! only conversions performed are `Int` narrowing into `i32` (overflow is a
//! decode error) and `Int` 0/1 into `bool`, since executors commonly
//! surface booleans as integers. `Null` into a non-`Option` target is a
//! decode error; `Null` into an `Option` target stores `None`.

use crate::value::Value;
use eyre::{bail, Result};

/// Table descriptor a column capability points back at.
pub trait Table {
    /// Name of the table this column family belongs to.
    fn table_name(&self) -> &'static str;
}

/// Per-field contract describing how one struct field maps to one
/// result-set column.
pub trait Column {
    /// Name of the result-set column this field binds to.
    fn column_name(&self) -> &'static str;

    /// Whether this column is part of the primary key.
    fn is_primary_key(&self) -> bool;

    /// The owning table descriptor.
    fn table(&self) -> &'static dyn Table;

    /// Exclusive write-capable pointer into this field's storage.
    fn scan_target(&mut self) -> &mut dyn ScanTarget;
}

/// Metadata for one mapped column, as discovered by a field walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub primary_key: bool,
}

/// Write side of row decoding: a cursor pushes one [`Value`] through each
/// target, in column order.
pub trait ScanTarget {
    /// Writes the decoded column value into the underlying storage.
    fn scan(&mut self, value: Value) -> Result<()>;
}

impl ScanTarget for i64 {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Int(i) => {
                *self = i;
                Ok(())
            }
            other => bail!("expected INT, got {:?}", other),
        }
    }
}

impl ScanTarget for i32 {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Int(i) => {
                *self = i32::try_from(i)
                    .map_err(|_| eyre::eyre!("INT value {} overflows i32", i))?;
                Ok(())
            }
            other => bail!("expected INT, got {:?}", other),
        }
    }
}

impl ScanTarget for f64 {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Float(f) => {
                *self = f;
                Ok(())
            }
            other => bail!("expected FLOAT, got {:?}", other),
        }
    }
}

impl ScanTarget for bool {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Bool(b) => {
                *self = b;
                Ok(())
            }
            Value::Int(0) => {
                *self = false;
                Ok(())
            }
            Value::Int(1) => {
                *self = true;
                Ok(())
            }
            other => bail!("expected BOOL, got {:?}", other),
        }
    }
}

impl ScanTarget for String {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Text(s) => {
                *self = s;
                Ok(())
            }
            other => bail!("expected TEXT, got {:?}", other),
        }
    }
}

impl ScanTarget for Vec<u8> {
    fn scan(&mut self, value: Value) -> Result<()> {
        match value {
            Value::Blob(b) => {
                *self = b;
                Ok(())
            }
            other => bail!("expected BLOB, got {:?}", other),
        }
    }
}

impl<T> ScanTarget for Option<T>
where
    T: ScanTarget + Default,
{
    fn scan(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        inner.scan(value)?;
        *self = Some(inner);
        Ok(())
    }
}
