//! # Capability Codegen Macros
//!
//! This module provides the declarative macros that generate per-table and
//! per-column boilerplate.
//!
//! ## table!
//!
//! Generates a unit-struct table descriptor implementing
//! [`Table`](crate::column::Table).
//!
//! ```ignore
//! table! {
//!     pub struct Jets => "jets";
//! }
//! ```
//!
//! ## column_cell!
//!
//! Generates a column cell: a newtype owning one field's storage, with
//! `get`/`set`/`into_inner` accessors and a
//! [`Column`](crate::column::Column) implementation binding it to a result
//! column.
//!
//! ```ignore
//! column_cell! {
//!     pub struct JetId(i64): column = "id", primary_key = true, table = Jets;
//!     pub struct JetName(String): column = "name", primary_key = false, table = Jets;
//! }
//! ```
//!
//! ## field_walk!
//!
//! Generates a [`FieldWalk`](crate::record::FieldWalk) implementation from
//! a struct's field list. Each listed field is probed for the column
//! capability at compile time; fields without it are silently skipped, so
//! helper fields can sit next to mapped cells.
//!
//! ```ignore
//! field_walk!(Jet { id, name, loaded_at });
//! ```

/// Generates a unit-struct table descriptor.
#[macro_export]
macro_rules! table {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $table:literal $(;)?) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::column::Table for $name {
            fn table_name(&self) -> &'static str {
                $table
            }
        }
    };
}

/// Generates column cells: storage newtypes with accessors and a
/// [`Column`](crate::column::Column) implementation each.
#[macro_export]
macro_rules! column_cell {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident($ty:ty): column = $col:literal, primary_key = $pk:literal, table = $table:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, PartialEq)]
            $vis struct $name {
                val: $ty,
            }

            impl $name {
                #[inline]
                pub fn get(&self) -> &$ty {
                    &self.val
                }

                #[inline]
                pub fn set(&mut self, val: $ty) {
                    self.val = val;
                }

                #[inline]
                pub fn into_inner(self) -> $ty {
                    self.val
                }
            }

            impl $crate::column::Column for $name {
                fn column_name(&self) -> &'static str {
                    $col
                }

                fn is_primary_key(&self) -> bool {
                    $pk
                }

                fn table(&self) -> &'static dyn $crate::column::Table {
                    &$table
                }

                fn scan_target(&mut self) -> &mut dyn $crate::column::ScanTarget {
                    &mut self.val
                }
            }
        )+
    };
}

/// Generates a [`FieldWalk`](crate::record::FieldWalk) implementation that
/// probes the listed fields in declaration order.
#[macro_export]
macro_rules! field_walk {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::record::FieldWalk for $ty {
            fn walk_targets(&mut self) -> $crate::record::ScanTargets<'_> {
                use $crate::record::SkippedField as _;

                let mut targets = $crate::record::ScanTargets::new();
                $(
                    if let Some(target) = $crate::record::FieldProbe(&mut self.$field).collect() {
                        targets.push(target);
                    }
                )+
                targets
            }

            fn walk_columns(&self) -> ::std::vec::Vec<$crate::column::ColumnInfo> {
                use $crate::record::SkippedFieldMeta as _;

                let mut columns = ::std::vec::Vec::new();
                $(
                    if let Some(info) = $crate::record::FieldMeta(&self.$field).describe() {
                        columns.push(info);
                    }
                )+
                columns
            }
        }
    };
}
