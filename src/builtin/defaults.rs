//! Generic per-class fallback entries.
//!
//! These conservative measurements cover hardware never explicitly profiled;
//! any exact or vendor-level entry takes precedence over them. One row exists
//! for every (kernel kind, width, orientation) combination on the GPU class,
//! which is what guarantees the resolution engine's completeness contract.

use strum::IntoEnumIterator;

use super::Row;
use crate::device::{DeviceClass, DevicePattern};
use crate::error::Result;
use crate::kernel::{KernelOp, NumericWidth, Orientation};
use crate::params::FetchPolicy::{FromGlobalContiguous, FromGlobalStrided, FromLocal};
use crate::params::{
    MatrixAxpyParams, MatrixProductParams, ParameterSet, ReductionParams, RowWiseReductionParams, VectorAxpyParams,
};

pub(super) fn rows() -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    for width in NumericWidth::iter() {
        let gpu = || DevicePattern::generic(DeviceClass::Gpu);

        // Fallback tiles are deliberately small; they fit every work-group
        // limit the catalog has encountered.
        let matrix_product = match width {
            NumericWidth::Four => MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromLocal, FromLocal, 8, 8)?,
            NumericWidth::Eight => MatrixProductParams::new(1, 8, 8, 8, 2, 2, 2, FromLocal, FromLocal, 8, 8)?,
        };
        for a in Orientation::iter() {
            for b in Orientation::iter() {
                rows.push(Row {
                    pattern: gpu(),
                    width,
                    op: KernelOp::MatrixProduct { a, b },
                    params: ParameterSet::MatrixProduct(matrix_product),
                });
            }
        }

        let row_wise = RowWiseReductionParams::new(1, 1, 256, 32, FromGlobalStrided)?;
        for a in Orientation::iter() {
            rows.push(Row {
                pattern: gpu(),
                width,
                op: KernelOp::RowWiseReduction { a },
                params: ParameterSet::RowWiseReduction(row_wise),
            });
        }

        rows.push(Row {
            pattern: gpu(),
            width,
            op: KernelOp::MatrixAxpy,
            params: ParameterSet::MatrixAxpy(MatrixAxpyParams::new(1, 16, 16, 16, 16, FromGlobalContiguous)?),
        });
        rows.push(Row {
            pattern: gpu(),
            width,
            op: KernelOp::Reduction,
            params: ParameterSet::Reduction(ReductionParams::new(1, 256, 256, FromGlobalStrided)?),
        });
        rows.push(Row {
            pattern: gpu(),
            width,
            op: KernelOp::VectorAxpy,
            params: ParameterSet::VectorAxpy(VectorAxpyParams::new(1, 128, 128, FromGlobalStrided)?),
        });
    }

    Ok(rows)
}
