//! Built-in database of device-tuned kernel launch parameters.
//!
//! GPU linear-algebra kernels (matrix product, reductions, axpy-style elementwise
//! ops) perform well only with hand-tuned launch parameters: tile and work-group
//! sizes, unroll/vectorization factors, and the strategy used to stage operand
//! data into compute units. This crate holds a catalog of such measurements and
//! resolves the best-matching parameter set for a detected device.
//!
//! # Module Organization
//!
//! - [`kernel`] - Kernel kinds, numeric widths, operand orientation
//! - [`device`] - Device identity keys and wildcardable registration patterns
//! - [`params`] - Per-kernel-kind parameter sets and their validation
//! - [`database`] - Registration ([`DatabaseBuilder`]) and resolution ([`Database`])
//! - [`builtin`] - The compiled-in catalog and its loader
//!
//! # Resolution
//!
//! Queries match by decreasing device specificity: exact model, then
//! architecture default, then vendor class default, then generic class default.
//! Numeric width and operand orientation always match exactly; tuning differs
//! qualitatively across precision and layout, so there is no fallback there.
//!
//! ```
//! use tunedb::{builtin, DeviceClass, DeviceKey, KernelOp, NumericWidth, Orientation, Vendor};
//!
//! let device = DeviceKey::new(Vendor::Amd, DeviceClass::Gpu, "northern_islands", "Scrapper");
//! let op = KernelOp::MatrixProduct { a: Orientation::Transposed, b: Orientation::Transposed };
//! let params = builtin::database().resolve(op, &device, NumericWidth::Four).unwrap();
//! assert_eq!(params.kind(), tunedb::KernelKind::MatrixProduct);
//! ```

pub mod builtin;
pub mod database;
pub mod device;
pub mod error;
pub mod kernel;
pub mod params;


pub use database::{Database, DatabaseBuilder};
pub use device::{DeviceClass, DeviceKey, DevicePattern, Vendor};
pub use error::{Error, Result};
pub use kernel::{KernelKind, KernelOp, NumericWidth, Orientation};
pub use params::{
    FetchPolicy, MatrixAxpyParams, MatrixProductParams, ParameterSet, ReductionParams, RowWiseReductionParams,
    VectorAxpyParams,
};
