//! Device identity and wildcardable registration patterns.

use std::fmt;

/// Hardware vendor of a compute device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vendor {
    Amd,
    Nvidia,
    Intel,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amd => write!(f, "AMD"),
            Self::Nvidia => write!(f, "NVIDIA"),
            Self::Intel => write!(f, "Intel"),
        }
    }
}

/// Broad device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    Gpu,
    Cpu,
    Accelerator,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu => write!(f, "GPU"),
            Self::Cpu => write!(f, "CPU"),
            Self::Accelerator => write!(f, "Accelerator"),
        }
    }
}

/// Fully concrete identity of a detected compute device.
///
/// Produced by the device-discovery layer; every component is known at query
/// time. Registrations use [`DevicePattern`] instead, which may wildcard the
/// architecture, model, or vendor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceKey {
    pub vendor: Vendor,
    pub class: DeviceClass,
    pub architecture: String,
    pub model: String,
}

impl DeviceKey {
    pub fn new(vendor: Vendor, class: DeviceClass, architecture: impl Into<String>, model: impl Into<String>) -> Self {
        Self { vendor, class, architecture: architecture.into(), model: model.into() }
    }

    /// Candidate registration patterns for this device, most specific first.
    ///
    /// This is the fallback chain the resolution engine probes: exact model,
    /// architecture default, vendor class default, generic class default.
    pub(crate) fn fallback_chain(&self) -> [DevicePattern; 4] {
        [
            DevicePattern::exact(self.vendor, self.class, self.architecture.clone(), self.model.clone()),
            DevicePattern::architecture_default(self.vendor, self.class, self.architecture.clone()),
            DevicePattern::class_default(self.vendor, self.class),
            DevicePattern::generic(self.class),
        ]
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}/{}", self.vendor, self.class, self.architecture, self.model)
    }
}

/// Registration-side device key with wildcard support.
///
/// Wildcards are monotone by construction: a wildcard vendor implies wildcard
/// architecture and model, and a wildcard architecture implies a wildcard
/// model. Exactly the four specificity tiers of the fallback chain are
/// representable, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DevicePattern {
    /// Matches one concrete device model.
    Exact { vendor: Vendor, class: DeviceClass, architecture: String, model: String },
    /// Matches every model of one architecture family.
    ArchitectureDefault { vendor: Vendor, class: DeviceClass, architecture: String },
    /// Matches every device of one vendor and class ("this vendor's GPUs").
    ClassDefault { vendor: Vendor, class: DeviceClass },
    /// Matches every device of a class regardless of vendor ("any GPU").
    Generic { class: DeviceClass },
}

impl DevicePattern {
    pub fn exact(vendor: Vendor, class: DeviceClass, architecture: impl Into<String>, model: impl Into<String>) -> Self {
        Self::Exact { vendor, class, architecture: architecture.into(), model: model.into() }
    }

    pub fn architecture_default(vendor: Vendor, class: DeviceClass, architecture: impl Into<String>) -> Self {
        Self::ArchitectureDefault { vendor, class, architecture: architecture.into() }
    }

    pub const fn class_default(vendor: Vendor, class: DeviceClass) -> Self {
        Self::ClassDefault { vendor, class }
    }

    pub const fn generic(class: DeviceClass) -> Self {
        Self::Generic { class }
    }
}

impl fmt::Display for DevicePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { vendor, class, architecture, model } => {
                write!(f, "{vendor} {class} {architecture}/{model}")
            }
            Self::ArchitectureDefault { vendor, class, architecture } => {
                write!(f, "{vendor} {class} {architecture}/*")
            }
            Self::ClassDefault { vendor, class } => write!(f, "{vendor} {class} */*"),
            Self::Generic { class } => write!(f, "* {class} */*"),
        }
    }
}
