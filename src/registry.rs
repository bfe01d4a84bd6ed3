//! # Scan-Plan Registry
//!
//! Process-wide cache of per-type scan plans, keyed by `TypeId`. Two kinds
//! of plan live here:
//!
//! - **Descriptor plans** ([`ScanPlan`]): registered explicitly via
//!   [`register`] for types implementing [`Record`]. The probing
//!   materializer resolves these once per query invocation instead of
//!   re-checking the capability on every row.
//! - **Reflective plans** ([`ReflectedPlan`]): column metadata derived from
//!   a type's field walk. Built lazily on first use and cached, so the
//!   field layout of a record type is introspected once per process rather
//!   than once per row.
//!
//! ## Concurrency
//!
//! The maps are guarded by `parking_lot::RwLock` and inserts go through the
//! entry API, so concurrent registration of the same type is idempotent.
//! Plans are immutable once inserted and handed out behind `Arc`, so no
//! lock is held while rows are being scanned.

use crate::column::ColumnInfo;
use crate::record::{FieldWalk, Record, ScanTargets};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};

/// Monomorphized collector bridging from a type-erased record back to its
/// scan-target list.
pub type CollectFn = for<'a> fn(&'a mut dyn Any) -> ScanTargets<'a>;

/// Cached descriptor plan for one registered record type.
pub struct ScanPlan {
    column_names: &'static str,
    target_count: usize,
    collect: CollectFn,
}

impl ScanPlan {
    /// Comma-joined column names, as declared by the record type.
    pub fn column_names(&self) -> &'static str {
        self.column_names
    }

    /// Number of scan targets the plan produces per record.
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Collects the scan-target list from a record of the plan's type.
    pub fn collect<'a>(&self, record: &'a mut dyn Any) -> ScanTargets<'a> {
        (self.collect)(record)
    }
}

/// Cached reflective plan: column metadata derived from a field walk.
pub struct ReflectedPlan {
    columns: Vec<ColumnInfo>,
    column_names: String,
}

impl ReflectedPlan {
    /// Mapped columns in field declaration order.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    /// Comma-joined mapped column names.
    pub fn column_names(&self) -> &str {
        &self.column_names
    }

    /// Number of mapped fields, excluding skipped helper fields.
    pub fn target_count(&self) -> usize {
        self.columns.len()
    }
}

static DESCRIPTORS: LazyLock<RwLock<HashMap<TypeId, Arc<ScanPlan>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static REFLECTED: LazyLock<RwLock<HashMap<TypeId, Arc<ReflectedPlan>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

// Plans are stored under TypeId::of::<T>, so the downcast cannot fail for a
// plan fetched through plan_for::<T>.
fn collect_targets<T: Record + 'static>(record: &mut dyn Any) -> ScanTargets<'_> {
    record
        .downcast_mut::<T>()
        .expect("scan plan invoked with a mismatched record type")
        .scan_targets()
}

/// Registers a descriptor plan for `T`. Idempotent; later registrations of
/// the same type are no-ops.
pub fn register<T: Record + Default + 'static>() {
    let mut plans = DESCRIPTORS.write();
    plans.entry(TypeId::of::<T>()).or_insert_with(|| {
        let mut probe = T::default();
        let column_names = probe.column_names();
        let target_count = probe.scan_targets().len();
        Arc::new(ScanPlan {
            column_names,
            target_count,
            collect: collect_targets::<T>,
        })
    });
}

/// Whether a descriptor plan is registered for `T`.
pub fn is_registered<T: 'static>() -> bool {
    DESCRIPTORS.read().contains_key(&TypeId::of::<T>())
}

/// The descriptor plan for `T`, if one has been registered.
pub fn plan_for<T: 'static>() -> Option<Arc<ScanPlan>> {
    DESCRIPTORS.read().get(&TypeId::of::<T>()).cloned()
}

/// The reflective plan for `T`, building and caching it on first use.
///
/// Two threads may race to build the same plan; the entry API keeps the
/// first insert and the duplicate build is discarded.
pub fn reflected_plan<T: FieldWalk + Default + 'static>() -> Arc<ReflectedPlan> {
    if let Some(plan) = REFLECTED.read().get(&TypeId::of::<T>()) {
        return plan.clone();
    }

    let probe = T::default();
    let columns = probe.walk_columns();
    let column_names = columns
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(",");
    let plan = Arc::new(ReflectedPlan {
        columns,
        column_names,
    });

    REFLECTED
        .write()
        .entry(TypeId::of::<T>())
        .or_insert(plan)
        .clone()
}

/// Mapped-column metadata for a walkable type, from the cached reflective
/// plan. Lets callers assert their mapping instead of discovering a typo'd
/// column by silence.
pub fn columns_of<T: FieldWalk + Default + 'static>() -> Vec<ColumnInfo> {
    reflected_plan::<T>().columns().to_vec()
}
