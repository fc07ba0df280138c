use snafu::Snafu;

use crate::device::{DeviceKey, DevicePattern};
use crate::kernel::{KernelKind, NumericWidth};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors of the tuning database.
///
/// All of these are detected eagerly against static data: the first two are
/// configuration defects that must abort database construction, the last one
/// is a data-completeness defect that a correctly populated catalog never
/// produces. None are transient and none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A parameter set violates its validity constraints.
    #[snafu(display("invalid {kind} parameters: {reason}"))]
    InvalidParameters { kind: KernelKind, reason: String },

    /// Two registrations collide on the same key tuple.
    #[snafu(display("duplicate {kind} entry for {pattern} at width {width}{orientation}"))]
    DuplicateEntry { kind: KernelKind, pattern: DevicePattern, width: NumericWidth, orientation: String },

    /// A parameter-set variant was paired with a different kernel kind.
    #[snafu(display("kernel kind mismatch: expected {expected}, found {found}"))]
    KindMismatch { expected: KernelKind, found: KernelKind },

    /// No registration matched at any fallback tier.
    #[snafu(display("no tuned {kind} parameters for {device} at width {width}{orientation}"))]
    NoMatch { kind: KernelKind, device: DeviceKey, width: NumericWidth, orientation: String },
}
