use crate::error::Error;
use crate::kernel::KernelKind;
use crate::params::FetchPolicy::{FromGlobalContiguous, FromGlobalStrided, FromLocal};
use crate::params::{
    MatrixAxpyParams, MatrixProductParams, ParameterSet, ReductionParams, RowWiseReductionParams, VectorAxpyParams,
};
use crate::test::sample_matrix_product;

#[test]
fn matrix_product_accepts_measured_row() {
    let p = sample_matrix_product();
    assert_eq!(p.simd_width, 1);
    assert_eq!((p.local_size0, p.kl, p.local_size1), (8, 16, 32));
    assert_eq!((p.ms, p.ks, p.ns), (2, 1, 2));
    assert_eq!((p.local_fetch0, p.local_fetch1), (16, 16));
}

#[test]
fn zero_tuning_field_rejected() {
    let err = VectorAxpyParams::new(1, 0, 128, FromGlobalStrided).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters { kind: KernelKind::VectorAxpy, .. }), "got {err:?}");

    assert!(ReductionParams::new(1, 256, 0, FromGlobalStrided).is_err());
    assert!(RowWiseReductionParams::new(1, 0, 256, 32, FromGlobalStrided).is_err());
    assert!(MatrixAxpyParams::new(1, 16, 16, 0, 16, FromGlobalContiguous).is_err());
    assert!(MatrixProductParams::new(1, 8, 0, 8, 4, 4, 4, FromLocal, FromLocal, 8, 8).is_err());
}

#[test]
fn simd_width_must_be_power_of_two() {
    assert!(VectorAxpyParams::new(3, 128, 128, FromGlobalStrided).is_err());
    assert!(VectorAxpyParams::new(0, 128, 128, FromGlobalStrided).is_err());
    assert!(VectorAxpyParams::new(4, 128, 128, FromGlobalStrided).is_ok());
}

#[test]
fn local_fetch_requires_local_policy() {
    // From-local staging with no local tile is inconsistent.
    let err = MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromLocal, FromLocal, 0, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters { kind: KernelKind::MatrixProduct, .. }), "got {err:?}");

    // And local tile dimensions without a from-local policy are dead weight.
    assert!(
        MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromGlobalStrided, FromGlobalStrided, 8, 8).is_err()
    );
    assert!(
        MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromGlobalStrided, FromGlobalStrided, 0, 0).is_ok()
    );
}

#[test]
fn local_fetch_layout_must_cover_work_group() {
    // 4x4 item layout cannot cooperatively load for an 8x8 work-group.
    assert!(MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromLocal, FromLocal, 4, 4).is_err());
    assert!(MatrixProductParams::new(1, 8, 8, 8, 4, 4, 4, FromLocal, FromLocal, 4, 16).is_ok());
}

#[test]
fn kinds_without_local_tiles_reject_local_fetch() {
    assert!(VectorAxpyParams::new(1, 128, 128, FromLocal).is_err());
    assert!(ReductionParams::new(1, 256, 256, FromLocal).is_err());
    assert!(RowWiseReductionParams::new(1, 1, 256, 32, FromLocal).is_err());
    assert!(MatrixAxpyParams::new(1, 16, 16, 16, 16, FromLocal).is_err());
}

#[test]
fn parameter_set_kind_and_extractors() {
    let set = ParameterSet::MatrixProduct(sample_matrix_product());
    assert_eq!(set.kind(), KernelKind::MatrixProduct);
    assert!(set.matrix_product().is_ok());

    let err = set.vector_axpy().unwrap_err();
    assert!(
        matches!(err, Error::KindMismatch { expected: KernelKind::VectorAxpy, found: KernelKind::MatrixProduct }),
        "got {err:?}"
    );
}
