//! Kernel classification: operation kinds, element widths, operand orientation.

use std::fmt;

/// The category of compute kernel being tuned.
///
/// Each kind has its own parameter-set shape (see [`crate::params`]); the
/// database keeps one table per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KernelKind {
    /// Dense matrix-matrix product.
    MatrixProduct,
    /// Reduction along the rows of a matrix (matrix-vector product family).
    RowWiseReduction,
    /// Elementwise matrix update (alpha * A + B).
    MatrixAxpy,
    /// Full reduction of a vector to a scalar.
    Reduction,
    /// Elementwise vector update (alpha * x + y).
    VectorAxpy,
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatrixProduct => write!(f, "matrix_product"),
            Self::RowWiseReduction => write!(f, "row_wise_reduction"),
            Self::MatrixAxpy => write!(f, "matrix_axpy"),
            Self::Reduction => write!(f, "reduction"),
            Self::VectorAxpy => write!(f, "vector_axpy"),
        }
    }
}

/// Element size of the operand scalar type.
///
/// Tuning differs materially between single and double precision because of
/// memory bandwidth pressure, so the database never falls back across widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericWidth {
    /// 4-byte elements (single precision).
    Four,
    /// 8-byte elements (double precision).
    Eight,
}

impl NumericWidth {
    pub const fn bytes(&self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

impl fmt::Display for NumericWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.bytes())
    }
}

/// Storage layout of a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Transposed,
    NotTransposed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transposed => write!(f, "T"),
            Self::NotTransposed => write!(f, "N"),
        }
    }
}

/// A fully described kernel query: the kind plus the orientation flags that
/// apply to it.
///
/// Orientation is structural: matrix product carries one flag per operand,
/// row-wise reduction carries one, and the remaining kinds carry none. This
/// makes a query with the wrong number of flags unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KernelOp {
    MatrixProduct { a: Orientation, b: Orientation },
    RowWiseReduction { a: Orientation },
    MatrixAxpy,
    Reduction,
    VectorAxpy,
}

impl KernelOp {
    pub const fn kind(&self) -> KernelKind {
        match self {
            Self::MatrixProduct { .. } => KernelKind::MatrixProduct,
            Self::RowWiseReduction { .. } => KernelKind::RowWiseReduction,
            Self::MatrixAxpy => KernelKind::MatrixAxpy,
            Self::Reduction => KernelKind::Reduction,
            Self::VectorAxpy => KernelKind::VectorAxpy,
        }
    }
}

impl fmt::Display for KernelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatrixProduct { a, b } => write!(f, "matrix_product({a}, {b})"),
            Self::RowWiseReduction { a } => write!(f, "row_wise_reduction({a})"),
            other => write!(f, "{}", other.kind()),
        }
    }
}
