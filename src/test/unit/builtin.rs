use strum::IntoEnumIterator;

use crate::builtin;
use crate::kernel::Orientation::{NotTransposed as N, Transposed as T};
use crate::kernel::{KernelKind, KernelOp, NumericWidth};
use crate::params::FetchPolicy;
use crate::test::scrapper;
use crate::{DeviceClass, DeviceKey, Vendor};

/// Every query shape a kernel kind admits.
fn ops_for(kind: KernelKind) -> Vec<KernelOp> {
    match kind {
        KernelKind::MatrixProduct => {
            [(T, T), (T, N), (N, T), (N, N)].into_iter().map(|(a, b)| KernelOp::MatrixProduct { a, b }).collect()
        }
        KernelKind::RowWiseReduction => vec![KernelOp::RowWiseReduction { a: T }, KernelOp::RowWiseReduction { a: N }],
        KernelKind::MatrixAxpy => vec![KernelOp::MatrixAxpy],
        KernelKind::Reduction => vec![KernelOp::Reduction],
        KernelKind::VectorAxpy => vec![KernelOp::VectorAxpy],
    }
}

#[test]
fn catalog_constructs() {
    let db = builtin::build().unwrap();
    assert!(!db.is_empty());
    assert_eq!(db.len(), builtin::database().len());
}

#[test]
fn every_kind_and_width_has_a_generic_gpu_default() {
    let db = builtin::database();
    // A GPU nothing in the catalog has ever profiled.
    let device = DeviceKey::new(Vendor::Intel, DeviceClass::Gpu, "xe_hpg", "A770");

    for kind in KernelKind::iter() {
        for width in NumericWidth::iter() {
            for op in ops_for(kind) {
                let resolved = db.resolve(op, &device, width);
                assert!(resolved.is_ok(), "missing default for {op} at {width}: {resolved:?}");
                assert_eq!(resolved.unwrap().kind(), kind);
            }
        }
    }
}

#[test]
fn completeness_is_a_gpu_contract_only() {
    let db = builtin::database();
    let cpu = DeviceKey::new(Vendor::Intel, DeviceClass::Cpu, "skylake", "i7-6700K");
    assert!(db.resolve(KernelOp::VectorAxpy, &cpu, NumericWidth::Four).is_err());
}

#[test]
fn scrapper_matrix_product_exact_rows() {
    let db = builtin::database();

    let tt = db.matrix_product(&scrapper(), NumericWidth::Four, T, T).unwrap();
    assert_eq!(tt.simd_width, 1);
    assert_eq!((tt.local_size0, tt.kl, tt.local_size1), (8, 16, 32));
    assert_eq!((tt.ms, tt.ks, tt.ns), (2, 1, 2));
    assert_eq!(tt.a_fetch, FetchPolicy::FromLocal);
    assert_eq!(tt.b_fetch, FetchPolicy::FromLocal);
    assert_eq!((tt.local_fetch0, tt.local_fetch1), (16, 16));

    // (T, N) was tuned separately and must not alias the (T, T) row.
    let tn = db.matrix_product(&scrapper(), NumericWidth::Four, T, N).unwrap();
    assert_eq!((tn.local_size0, tn.kl, tn.local_size1), (8, 16, 8));
    assert_eq!((tn.ms, tn.ks, tn.ns), (2, 2, 1));
    assert_ne!(tt, tn);

    // (N, T) stages straight from global memory, so no local tile.
    let nt = db.matrix_product(&scrapper(), NumericWidth::Four, N, T).unwrap();
    assert_eq!(nt.a_fetch, FetchPolicy::FromGlobalStrided);
    assert_eq!((nt.local_fetch0, nt.local_fetch1), (0, 0));
}

#[test]
fn scrapper_non_product_exact_rows() {
    let db = builtin::database();

    let rwt = db.row_wise_reduction(&scrapper(), NumericWidth::Four, T).unwrap();
    assert_eq!((rwt.simd_width, rwt.local_size0, rwt.local_size1, rwt.num_groups), (4, 8, 8, 256));

    let rwn = db.row_wise_reduction(&scrapper(), NumericWidth::Four, N).unwrap();
    assert_eq!((rwn.simd_width, rwn.local_size0, rwn.local_size1, rwn.num_groups), (4, 128, 1, 32));

    let ma = db.matrix_axpy(&scrapper(), NumericWidth::Four).unwrap();
    assert_eq!(
        (ma.simd_width, ma.local_size0, ma.local_size1, ma.num_groups0, ma.num_groups1),
        (1, 128, 1, 64, 4)
    );
    assert_eq!(ma.fetch, FetchPolicy::FromGlobalContiguous);

    let red = db.reduction(&scrapper(), NumericWidth::Four).unwrap();
    assert_eq!((red.simd_width, red.group_size, red.num_groups), (2, 64, 1024));

    let va = db.vector_axpy(&scrapper(), NumericWidth::Four).unwrap();
    assert_eq!((va.simd_width, va.group_size, va.num_groups), (1, 256, 1));
}

#[test]
fn scrapper_double_precision_uses_architecture_rows() {
    let db = builtin::database();

    // No exact 8B rows exist for Scrapper; queries land on the
    // northern_islands architecture defaults.
    let va = db.vector_axpy(&scrapper(), NumericWidth::Eight).unwrap();
    assert_eq!((va.simd_width, va.group_size, va.num_groups), (2, 128, 64));

    let sibling = DeviceKey::new(Vendor::Amd, DeviceClass::Gpu, "northern_islands", "Turks");
    assert_eq!(db.vector_axpy(&sibling, NumericWidth::Eight).unwrap(), va);
}

#[test]
fn unprofiled_amd_family_uses_class_rows() {
    let db = builtin::database();
    let device = DeviceKey::new(Vendor::Amd, DeviceClass::Gpu, "gcn", "Hawaii");

    let va = db.vector_axpy(&device, NumericWidth::Four).unwrap();
    assert_eq!((va.simd_width, va.group_size, va.num_groups), (2, 64, 128));
}
