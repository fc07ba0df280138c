//! AMD GPU entries.
//!
//! Exact rows exist for the northern_islands "Scrapper" at single precision;
//! the architecture rows cover other northern_islands models at double
//! precision, and the vendor rows catch AMD GPUs of unprofiled families.

use strum::IntoEnumIterator;

use super::Row;
use crate::device::{DeviceClass, DevicePattern, Vendor};
use crate::error::Result;
use crate::kernel::NumericWidth::{Eight, Four};
use crate::kernel::Orientation::{NotTransposed as N, Transposed as T};
use crate::kernel::{KernelOp, NumericWidth, Orientation};
use crate::params::FetchPolicy::{FromGlobalContiguous, FromGlobalStrided, FromLocal};
use crate::params::{
    MatrixAxpyParams, MatrixProductParams, ParameterSet, ReductionParams, RowWiseReductionParams, VectorAxpyParams,
};

pub(super) fn rows() -> Result<Vec<Row>> {
    let mut rows = class_defaults()?;
    rows.extend(northern_islands()?);
    rows.extend(scrapper()?);
    Ok(rows)
}

/// Vendor-level defaults, tuned around the 64-wide wavefront.
fn class_defaults() -> Result<Vec<Row>> {
    let amd = || DevicePattern::class_default(Vendor::Amd, DeviceClass::Gpu);
    let mut rows = Vec::new();

    for width in NumericWidth::iter() {
        let matrix_product = match width {
            Four => MatrixProductParams::new(1, 16, 8, 8, 2, 2, 4, FromLocal, FromLocal, 16, 8)?,
            Eight => MatrixProductParams::new(1, 8, 8, 16, 2, 2, 2, FromLocal, FromLocal, 8, 16)?,
        };
        for a in Orientation::iter() {
            for b in Orientation::iter() {
                rows.push(Row {
                    pattern: amd(),
                    width,
                    op: KernelOp::MatrixProduct { a, b },
                    params: ParameterSet::MatrixProduct(matrix_product),
                });
            }
        }

        let row_wise = match width {
            Four => RowWiseReductionParams::new(2, 4, 64, 128, FromGlobalStrided)?,
            Eight => RowWiseReductionParams::new(1, 8, 32, 64, FromGlobalStrided)?,
        };
        for a in Orientation::iter() {
            rows.push(Row {
                pattern: amd(),
                width,
                op: KernelOp::RowWiseReduction { a },
                params: ParameterSet::RowWiseReduction(row_wise),
            });
        }

        let (matrix_axpy, reduction, vector_axpy) = match width {
            Four => (
                MatrixAxpyParams::new(1, 32, 8, 32, 8, FromGlobalContiguous)?,
                ReductionParams::new(2, 128, 256, FromGlobalStrided)?,
                VectorAxpyParams::new(2, 64, 128, FromGlobalStrided)?,
            ),
            Eight => (
                MatrixAxpyParams::new(1, 64, 2, 64, 8, FromGlobalContiguous)?,
                ReductionParams::new(1, 128, 512, FromGlobalStrided)?,
                VectorAxpyParams::new(1, 64, 128, FromGlobalStrided)?,
            ),
        };
        rows.push(Row { pattern: amd(), width, op: KernelOp::MatrixAxpy, params: ParameterSet::MatrixAxpy(matrix_axpy) });
        rows.push(Row { pattern: amd(), width, op: KernelOp::Reduction, params: ParameterSet::Reduction(reduction) });
        rows.push(Row { pattern: amd(), width, op: KernelOp::VectorAxpy, params: ParameterSet::VectorAxpy(vector_axpy) });
    }

    Ok(rows)
}

/// northern_islands family defaults, double precision.
fn northern_islands() -> Result<Vec<Row>> {
    let ni = || DevicePattern::architecture_default(Vendor::Amd, DeviceClass::Gpu, "northern_islands");

    let rows = vec![
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::MatrixProduct { a: T, b: T },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 8, 8, 16, 2, 1, 2, FromLocal, FromLocal, 8, 16)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::MatrixProduct { a: T, b: N },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 8, 8, 16, 1, 2, 2, FromLocal, FromLocal, 16, 8)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::MatrixProduct { a: N, b: T },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(
                1, 16, 4, 8, 2, 1, 2, FromGlobalStrided, FromGlobalStrided, 0, 0,
            )?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::MatrixProduct { a: N, b: N },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 8, 16, 16, 2, 1, 2, FromLocal, FromLocal, 8, 16)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::RowWiseReduction { a: T },
            params: ParameterSet::RowWiseReduction(RowWiseReductionParams::new(2, 16, 8, 128, FromGlobalStrided)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::RowWiseReduction { a: N },
            params: ParameterSet::RowWiseReduction(RowWiseReductionParams::new(2, 64, 1, 32, FromGlobalStrided)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::MatrixAxpy,
            params: ParameterSet::MatrixAxpy(MatrixAxpyParams::new(1, 64, 1, 64, 8, FromGlobalContiguous)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::Reduction,
            params: ParameterSet::Reduction(ReductionParams::new(2, 128, 512, FromGlobalStrided)?),
        },
        Row {
            pattern: ni(),
            width: Eight,
            op: KernelOp::VectorAxpy,
            params: ParameterSet::VectorAxpy(VectorAxpyParams::new(2, 128, 64, FromGlobalStrided)?),
        },
    ];

    Ok(rows)
}

/// northern_islands "Scrapper", single precision.
fn scrapper() -> Result<Vec<Row>> {
    let dev = || DevicePattern::exact(Vendor::Amd, DeviceClass::Gpu, "northern_islands", "Scrapper");

    let rows = vec![
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::MatrixProduct { a: T, b: T },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 8, 16, 32, 2, 1, 2, FromLocal, FromLocal, 16, 16)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::MatrixProduct { a: T, b: N },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 8, 16, 8, 2, 2, 1, FromLocal, FromLocal, 8, 8)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::MatrixProduct { a: N, b: T },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(
                2, 32, 2, 4, 2, 1, 2, FromGlobalStrided, FromGlobalStrided, 0, 0,
            )?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::MatrixProduct { a: N, b: N },
            params: ParameterSet::MatrixProduct(MatrixProductParams::new(1, 16, 16, 8, 2, 1, 2, FromLocal, FromLocal, 8, 16)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::RowWiseReduction { a: T },
            params: ParameterSet::RowWiseReduction(RowWiseReductionParams::new(4, 8, 8, 256, FromGlobalStrided)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::RowWiseReduction { a: N },
            params: ParameterSet::RowWiseReduction(RowWiseReductionParams::new(4, 128, 1, 32, FromGlobalStrided)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::MatrixAxpy,
            params: ParameterSet::MatrixAxpy(MatrixAxpyParams::new(1, 128, 1, 64, 4, FromGlobalContiguous)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::Reduction,
            params: ParameterSet::Reduction(ReductionParams::new(2, 64, 1024, FromGlobalStrided)?),
        },
        Row {
            pattern: dev(),
            width: Four,
            op: KernelOp::VectorAxpy,
            params: ParameterSet::VectorAxpy(VectorAxpyParams::new(1, 256, 1, FromGlobalStrided)?),
        },
    ];

    Ok(rows)
}
