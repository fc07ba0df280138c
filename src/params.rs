//! Per-kernel-kind tuned parameter sets.
//!
//! Each kernel kind has its own fixed tuple of tuning knobs. Construction
//! validates the knobs eagerly so a bad catalog row fails at registration
//! time, never inside a resolution query.

use snafu::ensure;

use crate::error::{InvalidParametersSnafu, KindMismatchSnafu, Result};
use crate::kernel::KernelKind;

/// How operand data is staged from memory into compute units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchPolicy {
    /// Read directly from global memory with contiguous accesses.
    FromGlobalContiguous,
    /// Read directly from global memory with strided accesses.
    FromGlobalStrided,
    /// Cooperatively stage tiles through local (shared) memory.
    FromLocal,
}

fn positive(kind: KernelKind, name: &'static str, value: usize) -> Result<()> {
    ensure!(value > 0, InvalidParametersSnafu { kind, reason: format!("{name} must be positive, got {value}") });
    Ok(())
}

fn power_of_two(kind: KernelKind, name: &'static str, value: usize) -> Result<()> {
    positive(kind, name, value)?;
    ensure!(
        value.is_power_of_two(),
        InvalidParametersSnafu { kind, reason: format!("{name} must be a power of two, got {value}") }
    );
    Ok(())
}

/// Kinds without local tile dimensions cannot stage through local memory.
fn no_local_fetch(kind: KernelKind, fetch: FetchPolicy) -> Result<()> {
    ensure!(
        fetch != FetchPolicy::FromLocal,
        InvalidParametersSnafu { kind, reason: "from-local fetch requires local tile dimensions, which this kernel kind does not carry".to_string() }
    );
    Ok(())
}

/// Tuning knobs for the dense matrix-product kernel.
///
/// The work decomposition is a `local_size0 x local_size1` work-group computing
/// an `ms x ns` register tile per item, stepping the contraction dimension in
/// chunks of `kl` with `ks`-wide unrolling. When either operand is fetched
/// through local memory, the group cooperatively loads tiles using a
/// `local_fetch0 x local_fetch1` item layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixProductParams {
    pub simd_width: usize,
    pub local_size0: usize,
    pub kl: usize,
    pub local_size1: usize,
    pub ms: usize,
    pub ks: usize,
    pub ns: usize,
    pub a_fetch: FetchPolicy,
    pub b_fetch: FetchPolicy,
    pub local_fetch0: usize,
    pub local_fetch1: usize,
}

impl MatrixProductParams {
    #[allow(clippy::too_many_arguments)] // mirrors the measured catalog row shape
    pub fn new(
        simd_width: usize,
        local_size0: usize,
        kl: usize,
        local_size1: usize,
        ms: usize,
        ks: usize,
        ns: usize,
        a_fetch: FetchPolicy,
        b_fetch: FetchPolicy,
        local_fetch0: usize,
        local_fetch1: usize,
    ) -> Result<Self> {
        const KIND: KernelKind = KernelKind::MatrixProduct;

        power_of_two(KIND, "simd_width", simd_width)?;
        positive(KIND, "local_size0", local_size0)?;
        positive(KIND, "kl", kl)?;
        positive(KIND, "local_size1", local_size1)?;
        positive(KIND, "ms", ms)?;
        positive(KIND, "ks", ks)?;
        positive(KIND, "ns", ns)?;

        let uses_local = a_fetch == FetchPolicy::FromLocal || b_fetch == FetchPolicy::FromLocal;
        if uses_local {
            positive(KIND, "local_fetch0", local_fetch0)?;
            positive(KIND, "local_fetch1", local_fetch1)?;
            // The cooperative load layout must cover the work-group exactly.
            ensure!(
                local_fetch0 * local_fetch1 == local_size0 * local_size1,
                InvalidParametersSnafu {
                    kind: KIND,
                    reason: format!(
                        "local fetch layout {local_fetch0}x{local_fetch1} does not cover work-group {local_size0}x{local_size1}"
                    ),
                }
            );
        } else {
            ensure!(
                local_fetch0 == 0 && local_fetch1 == 0,
                InvalidParametersSnafu {
                    kind: KIND,
                    reason: format!(
                        "local fetch dimensions {local_fetch0}x{local_fetch1} given without a from-local fetch policy"
                    ),
                }
            );
        }

        Ok(Self { simd_width, local_size0, kl, local_size1, ms, ks, ns, a_fetch, b_fetch, local_fetch0, local_fetch1 })
    }
}

/// Tuning knobs for the row-wise matrix reduction kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWiseReductionParams {
    pub simd_width: usize,
    pub local_size0: usize,
    pub local_size1: usize,
    pub num_groups: usize,
    pub fetch: FetchPolicy,
}

impl RowWiseReductionParams {
    pub fn new(
        simd_width: usize,
        local_size0: usize,
        local_size1: usize,
        num_groups: usize,
        fetch: FetchPolicy,
    ) -> Result<Self> {
        const KIND: KernelKind = KernelKind::RowWiseReduction;

        power_of_two(KIND, "simd_width", simd_width)?;
        positive(KIND, "local_size0", local_size0)?;
        positive(KIND, "local_size1", local_size1)?;
        positive(KIND, "num_groups", num_groups)?;
        no_local_fetch(KIND, fetch)?;

        Ok(Self { simd_width, local_size0, local_size1, num_groups, fetch })
    }
}

/// Tuning knobs for the elementwise matrix-axpy kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixAxpyParams {
    pub simd_width: usize,
    pub local_size0: usize,
    pub local_size1: usize,
    pub num_groups0: usize,
    pub num_groups1: usize,
    pub fetch: FetchPolicy,
}

impl MatrixAxpyParams {
    pub fn new(
        simd_width: usize,
        local_size0: usize,
        local_size1: usize,
        num_groups0: usize,
        num_groups1: usize,
        fetch: FetchPolicy,
    ) -> Result<Self> {
        const KIND: KernelKind = KernelKind::MatrixAxpy;

        power_of_two(KIND, "simd_width", simd_width)?;
        positive(KIND, "local_size0", local_size0)?;
        positive(KIND, "local_size1", local_size1)?;
        positive(KIND, "num_groups0", num_groups0)?;
        positive(KIND, "num_groups1", num_groups1)?;
        no_local_fetch(KIND, fetch)?;

        Ok(Self { simd_width, local_size0, local_size1, num_groups0, num_groups1, fetch })
    }
}

/// Tuning knobs for the scalar reduction kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionParams {
    pub simd_width: usize,
    pub group_size: usize,
    pub num_groups: usize,
    pub fetch: FetchPolicy,
}

impl ReductionParams {
    pub fn new(simd_width: usize, group_size: usize, num_groups: usize, fetch: FetchPolicy) -> Result<Self> {
        const KIND: KernelKind = KernelKind::Reduction;

        power_of_two(KIND, "simd_width", simd_width)?;
        positive(KIND, "group_size", group_size)?;
        positive(KIND, "num_groups", num_groups)?;
        no_local_fetch(KIND, fetch)?;

        Ok(Self { simd_width, group_size, num_groups, fetch })
    }
}

/// Tuning knobs for the elementwise vector-axpy kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorAxpyParams {
    pub simd_width: usize,
    pub group_size: usize,
    pub num_groups: usize,
    pub fetch: FetchPolicy,
}

impl VectorAxpyParams {
    pub fn new(simd_width: usize, group_size: usize, num_groups: usize, fetch: FetchPolicy) -> Result<Self> {
        const KIND: KernelKind = KernelKind::VectorAxpy;

        power_of_two(KIND, "simd_width", simd_width)?;
        positive(KIND, "group_size", group_size)?;
        positive(KIND, "num_groups", num_groups)?;
        no_local_fetch(KIND, fetch)?;

        Ok(Self { simd_width, group_size, num_groups, fetch })
    }
}

/// A tuned parameter set of any kernel kind.
///
/// The database partitions entries per kind, so a resolved value always holds
/// the variant matching the queried [`crate::KernelOp`]. The typed extractors
/// return a kind-mismatch error instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterSet {
    MatrixProduct(MatrixProductParams),
    RowWiseReduction(RowWiseReductionParams),
    MatrixAxpy(MatrixAxpyParams),
    Reduction(ReductionParams),
    VectorAxpy(VectorAxpyParams),
}

impl ParameterSet {
    pub const fn kind(&self) -> KernelKind {
        match self {
            Self::MatrixProduct(_) => KernelKind::MatrixProduct,
            Self::RowWiseReduction(_) => KernelKind::RowWiseReduction,
            Self::MatrixAxpy(_) => KernelKind::MatrixAxpy,
            Self::Reduction(_) => KernelKind::Reduction,
            Self::VectorAxpy(_) => KernelKind::VectorAxpy,
        }
    }

    pub fn matrix_product(&self) -> Result<&MatrixProductParams> {
        match self {
            Self::MatrixProduct(p) => Ok(p),
            _ => KindMismatchSnafu { expected: KernelKind::MatrixProduct, found: self.kind() }.fail(),
        }
    }

    pub fn row_wise_reduction(&self) -> Result<&RowWiseReductionParams> {
        match self {
            Self::RowWiseReduction(p) => Ok(p),
            _ => KindMismatchSnafu { expected: KernelKind::RowWiseReduction, found: self.kind() }.fail(),
        }
    }

    pub fn matrix_axpy(&self) -> Result<&MatrixAxpyParams> {
        match self {
            Self::MatrixAxpy(p) => Ok(p),
            _ => KindMismatchSnafu { expected: KernelKind::MatrixAxpy, found: self.kind() }.fail(),
        }
    }

    pub fn reduction(&self) -> Result<&ReductionParams> {
        match self {
            Self::Reduction(p) => Ok(p),
            _ => KindMismatchSnafu { expected: KernelKind::Reduction, found: self.kind() }.fail(),
        }
    }

    pub fn vector_axpy(&self) -> Result<&VectorAxpyParams> {
        match self {
            Self::VectorAxpy(p) => Ok(p),
            _ => KindMismatchSnafu { expected: KernelKind::VectorAxpy, found: self.kind() }.fail(),
        }
    }
}
