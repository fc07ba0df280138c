//! Registration and resolution of tuned parameter sets.
//!
//! The database is a construct-once, read-many structure: a
//! [`DatabaseBuilder`] collects registrations on a single thread, `build()`
//! freezes them into an immutable [`Database`], and resolution afterwards is a
//! pure probe of at most four hierarchical keys. No mutation path exists after
//! `build()`, so concurrent reads need no synchronization.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::device::{DeviceKey, DevicePattern};
use crate::error::{DuplicateEntrySnafu, KindMismatchSnafu, NoMatchSnafu, Result};
use crate::kernel::{KernelKind, KernelOp, NumericWidth, Orientation};
use crate::params::{
    MatrixAxpyParams, MatrixProductParams, ParameterSet, ReductionParams, RowWiseReductionParams, VectorAxpyParams,
};

/// Orientation portion of a table key.
///
/// Matrix product is keyed by an operand pair, row-wise reduction by a single
/// flag, and the remaining kinds by unit. The label only feeds diagnostics.
pub(crate) trait OrientationKey: Copy + Eq + Hash + fmt::Debug {
    fn label(&self) -> String;
}

impl OrientationKey for () {
    fn label(&self) -> String {
        String::new()
    }
}

impl OrientationKey for Orientation {
    fn label(&self) -> String {
        format!(" ({self})")
    }
}

impl OrientationKey for (Orientation, Orientation) {
    fn label(&self) -> String {
        format!(" ({}, {})", self.0, self.1)
    }
}

/// One kernel kind's registrations, keyed by (pattern, width, orientation).
struct Table<P, O> {
    kind: KernelKind,
    entries: HashMap<(DevicePattern, NumericWidth, O), P>,
}

impl<P, O: OrientationKey> Table<P, O> {
    fn new(kind: KernelKind) -> Self {
        Self { kind, entries: HashMap::new() }
    }

    fn insert(&mut self, pattern: DevicePattern, width: NumericWidth, orientation: O, params: P) -> Result<()> {
        let key = (pattern, width, orientation);
        if self.entries.contains_key(&key) {
            return DuplicateEntrySnafu {
                kind: self.kind,
                pattern: key.0,
                width,
                orientation: orientation.label(),
            }
            .fail();
        }

        tracing::debug!(kind = %self.kind, pattern = %key.0, %width, orientation = ?orientation, "registered tuned entry");
        self.entries.insert(key, params);
        Ok(())
    }

    /// Probe the fallback chain, most specific pattern first.
    ///
    /// Width and orientation never fall back; only the device dimension
    /// degrades. The probe order is fixed, so the result is independent of
    /// table iteration order.
    fn lookup(&self, device: &DeviceKey, width: NumericWidth, orientation: O) -> Result<&P> {
        for (tier, pattern) in device.fallback_chain().into_iter().enumerate() {
            if let Some(params) = self.entries.get(&(pattern, width, orientation)) {
                tracing::debug!(kind = %self.kind, %device, %width, tier, "resolved tuned entry");
                return Ok(params);
            }
        }

        NoMatchSnafu { kind: self.kind, device: device.clone(), width, orientation: orientation.label() }.fail()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Collects registrations and freezes them into a [`Database`].
///
/// Registration fails fast: an invalid wildcard combination is unrepresentable
/// by [`DevicePattern`], parameter sets validate on construction, and a
/// duplicate key tuple is rejected here rather than silently overwritten.
pub struct DatabaseBuilder {
    db: Database,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self {
            db: Database {
                matrix_product: Table::new(KernelKind::MatrixProduct),
                row_wise_reduction: Table::new(KernelKind::RowWiseReduction),
                matrix_axpy: Table::new(KernelKind::MatrixAxpy),
                reduction: Table::new(KernelKind::Reduction),
                vector_axpy: Table::new(KernelKind::VectorAxpy),
            },
        }
    }

    /// Register a parameter set under the kernel op's table.
    ///
    /// The parameter-set variant must match the op's kind; the loader feeds
    /// heterogeneous catalog rows through this entry point.
    pub fn register(
        &mut self,
        op: KernelOp,
        pattern: DevicePattern,
        width: NumericWidth,
        params: ParameterSet,
    ) -> Result<()> {
        match (op, params) {
            (KernelOp::MatrixProduct { a, b }, ParameterSet::MatrixProduct(p)) => {
                self.register_matrix_product(pattern, width, (a, b), p)
            }
            (KernelOp::RowWiseReduction { a }, ParameterSet::RowWiseReduction(p)) => {
                self.register_row_wise_reduction(pattern, width, a, p)
            }
            (KernelOp::MatrixAxpy, ParameterSet::MatrixAxpy(p)) => self.register_matrix_axpy(pattern, width, p),
            (KernelOp::Reduction, ParameterSet::Reduction(p)) => self.register_reduction(pattern, width, p),
            (KernelOp::VectorAxpy, ParameterSet::VectorAxpy(p)) => self.register_vector_axpy(pattern, width, p),
            (op, params) => KindMismatchSnafu { expected: op.kind(), found: params.kind() }.fail(),
        }
    }

    pub fn register_matrix_product(
        &mut self,
        pattern: DevicePattern,
        width: NumericWidth,
        orientation: (Orientation, Orientation),
        params: MatrixProductParams,
    ) -> Result<()> {
        self.db.matrix_product.insert(pattern, width, orientation, params)
    }

    pub fn register_row_wise_reduction(
        &mut self,
        pattern: DevicePattern,
        width: NumericWidth,
        orientation: Orientation,
        params: RowWiseReductionParams,
    ) -> Result<()> {
        self.db.row_wise_reduction.insert(pattern, width, orientation, params)
    }

    pub fn register_matrix_axpy(
        &mut self,
        pattern: DevicePattern,
        width: NumericWidth,
        params: MatrixAxpyParams,
    ) -> Result<()> {
        self.db.matrix_axpy.insert(pattern, width, (), params)
    }

    pub fn register_reduction(
        &mut self,
        pattern: DevicePattern,
        width: NumericWidth,
        params: ReductionParams,
    ) -> Result<()> {
        self.db.reduction.insert(pattern, width, (), params)
    }

    pub fn register_vector_axpy(
        &mut self,
        pattern: DevicePattern,
        width: NumericWidth,
        params: VectorAxpyParams,
    ) -> Result<()> {
        self.db.vector_axpy.insert(pattern, width, (), params)
    }

    /// Freeze the collected registrations into an immutable database.
    pub fn build(self) -> Database {
        tracing::debug!(entries = self.db.len(), "tuning database built");
        self.db
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable database of tuned kernel parameters.
///
/// One table per kernel kind. Safe for unsynchronized concurrent reads once
/// built; there is no mutation or deletion path.
pub struct Database {
    matrix_product: Table<MatrixProductParams, (Orientation, Orientation)>,
    row_wise_reduction: Table<RowWiseReductionParams, Orientation>,
    matrix_axpy: Table<MatrixAxpyParams, ()>,
    reduction: Table<ReductionParams, ()>,
    vector_axpy: Table<VectorAxpyParams, ()>,
}

impl Database {
    /// Resolve the best-matching parameter set for a kernel op on a device.
    ///
    /// Matching degrades over the device dimension only, by decreasing
    /// specificity: exact model, architecture default, vendor class default,
    /// generic class default. The first matching tier wins.
    pub fn resolve(&self, op: KernelOp, device: &DeviceKey, width: NumericWidth) -> Result<ParameterSet> {
        match op {
            KernelOp::MatrixProduct { a, b } => {
                self.matrix_product(device, width, a, b).map(|p| ParameterSet::MatrixProduct(*p))
            }
            KernelOp::RowWiseReduction { a } => {
                self.row_wise_reduction(device, width, a).map(|p| ParameterSet::RowWiseReduction(*p))
            }
            KernelOp::MatrixAxpy => self.matrix_axpy(device, width).map(|p| ParameterSet::MatrixAxpy(*p)),
            KernelOp::Reduction => self.reduction(device, width).map(|p| ParameterSet::Reduction(*p)),
            KernelOp::VectorAxpy => self.vector_axpy(device, width).map(|p| ParameterSet::VectorAxpy(*p)),
        }
    }

    pub fn matrix_product(
        &self,
        device: &DeviceKey,
        width: NumericWidth,
        a: Orientation,
        b: Orientation,
    ) -> Result<&MatrixProductParams> {
        self.matrix_product.lookup(device, width, (a, b))
    }

    pub fn row_wise_reduction(
        &self,
        device: &DeviceKey,
        width: NumericWidth,
        a: Orientation,
    ) -> Result<&RowWiseReductionParams> {
        self.row_wise_reduction.lookup(device, width, a)
    }

    pub fn matrix_axpy(&self, device: &DeviceKey, width: NumericWidth) -> Result<&MatrixAxpyParams> {
        self.matrix_axpy.lookup(device, width, ())
    }

    pub fn reduction(&self, device: &DeviceKey, width: NumericWidth) -> Result<&ReductionParams> {
        self.reduction.lookup(device, width, ())
    }

    pub fn vector_axpy(&self, device: &DeviceKey, width: NumericWidth) -> Result<&VectorAxpyParams> {
        self.vector_axpy.lookup(device, width, ())
    }

    /// Total number of registered entries across all kernel kinds.
    pub fn len(&self) -> usize {
        self.matrix_product.len()
            + self.row_wise_reduction.len()
            + self.matrix_axpy.len()
            + self.reduction.len()
            + self.vector_axpy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
