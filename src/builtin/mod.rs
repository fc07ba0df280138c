//! The compiled-in tuning catalog.
//!
//! Every row is a constant baked into the library; nothing is loaded from
//! files or the network. Each device module contributes a flat list of rows
//! and [`build`] feeds them all through one registration loop, so the final
//! database contents do not depend on registration order.
//!
//! Completeness contract: [`defaults`] supplies a generic GPU entry for every
//! kernel kind and numeric width, so resolution for any GPU device key always
//! lands on tier four at worst.

mod amd;
mod defaults;

use once_cell::sync::Lazy;

use crate::database::{Database, DatabaseBuilder};
use crate::device::DevicePattern;
use crate::error::Result;
use crate::kernel::{KernelOp, NumericWidth};
use crate::params::ParameterSet;

/// One catalog row: where it applies, and what was measured.
pub(crate) struct Row {
    pub pattern: DevicePattern,
    pub width: NumericWidth,
    pub op: KernelOp,
    pub params: ParameterSet,
}

/// Construct a fresh database from the full builtin catalog.
///
/// Exposed separately from the [`database`] singleton so tests can build
/// independent instances and so construction failures surface as values.
pub fn build() -> Result<Database> {
    let mut builder = DatabaseBuilder::new();

    let mut rows = defaults::rows()?;
    rows.extend(amd::rows()?);

    for row in rows {
        builder.register(row.op, row.pattern, row.width, row.params)?;
    }

    Ok(builder.build())
}

static BUILTIN: Lazy<Database> = Lazy::new(|| match build() {
    Ok(db) => db,
    // A bad builtin row is a packaging defect; running with a partial table
    // would silently mistune every consumer.
    Err(e) => panic!("builtin tuning database failed to construct: {e}"),
});

/// Process-wide builtin database, constructed on first access.
pub fn database() -> &'static Database {
    &BUILTIN
}
