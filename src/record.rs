//! # Record Descriptor and Field Walking
//!
//! Two per-type contracts live here, one for each end of the
//! boilerplate/automation trade-off:
//!
//! - [`Record`] is the hand-authored descriptor: the implementer writes the
//!   column-name list and the scan-target list themselves and is responsible
//!   for keeping the two in lockstep. This is the fastest path - every
//!   dispatch resolves at compile time.
//! - [`FieldWalk`] is the generated walker: the `field_walk!` macro expands
//!   a field-to-pointer table from a struct's field list, probing each field
//!   for the [`Column`] capability and silently skipping fields that lack
//!   it. Non-mapped helper fields on a record are allowed on purpose.
//!
//! ## Field Probing
//!
//! The probe uses inherent-method preference to decide at compile time
//! whether a field participates in scanning: [`FieldProbe`] has an inherent
//! `collect` for `T: Column`, and the [`SkippedField`] fallback trait
//! supplies `collect` for everything else. Method resolution picks the
//! inherent one whenever it exists, so a `String` scratch field resolves to
//! the fallback and drops out of the walk without any annotation.

use crate::column::{Column, ColumnInfo, ScanTarget};
use crate::executor::Cursor;
use eyre::Result;
use smallvec::SmallVec;

/// Inline capacity for scan-target lists. Result sets wider than this still
/// work; the list spills to the heap.
const INLINE_TARGETS: usize = 16;

/// Ordered scan-target pointer list, one entry per mapped column.
pub type ScanTargets<'a> = SmallVec<[&'a mut dyn ScanTarget; INLINE_TARGETS]>;

/// Per-type descriptor aggregating column names and scan targets in
/// matching order.
pub trait Record {
    /// Comma-joined column names, in declaration order.
    fn column_names(&self) -> &'static str;

    /// Ordered scan-target pointers, one per declared column. Must match
    /// the ordering of [`Record::column_names`]; this is not validated.
    fn scan_targets(&mut self) -> ScanTargets<'_>;

    /// Decodes the cursor's current row directly into this record.
    fn scan_row<C>(&mut self, cursor: &mut C) -> Result<()>
    where
        C: Cursor,
        Self: Sized,
    {
        let mut targets = self.scan_targets();
        cursor.scan(targets.as_mut_slice())
    }
}

/// Generated field-to-pointer walker. Implemented via `field_walk!`, never
/// by hand.
pub trait FieldWalk {
    /// Scan-target pointers for every capability field, in field
    /// declaration order. Non-capability fields are skipped.
    fn walk_targets(&mut self) -> ScanTargets<'_>;

    /// Column metadata for every capability field, in field declaration
    /// order. Positionally matches [`FieldWalk::walk_targets`].
    fn walk_columns(&self) -> Vec<ColumnInfo>;
}

/// Mutable field probe used by `field_walk!` expansions.
///
/// For `T: Column` the inherent `collect` wins method resolution and yields
/// the field's scan target; otherwise the [`SkippedField`] fallback yields
/// `None`.
pub struct FieldProbe<'a, T>(pub &'a mut T);

impl<'a, T: Column> FieldProbe<'a, T> {
    pub fn collect(self) -> Option<&'a mut dyn ScanTarget> {
        Some(self.0.scan_target())
    }
}

/// Fallback for [`FieldProbe`] on fields without the column capability.
pub trait SkippedField<'a> {
    fn collect(self) -> Option<&'a mut dyn ScanTarget>;
}

impl<'a, T> SkippedField<'a> for FieldProbe<'a, T> {
    fn collect(self) -> Option<&'a mut dyn ScanTarget> {
        None
    }
}

/// Shared-reference field probe used by `field_walk!` expansions to gather
/// column metadata.
pub struct FieldMeta<'a, T>(pub &'a T);

impl<T: Column> FieldMeta<'_, T> {
    pub fn describe(self) -> Option<ColumnInfo> {
        Some(ColumnInfo {
            name: self.0.column_name(),
            primary_key: self.0.is_primary_key(),
        })
    }
}

/// Fallback for [`FieldMeta`] on fields without the column capability.
pub trait SkippedFieldMeta {
    fn describe(self) -> Option<ColumnInfo>;
}

impl<T> SkippedFieldMeta for FieldMeta<'_, T> {
    fn describe(self) -> Option<ColumnInfo> {
        None
    }
}
