use std::fmt::{self, Display};

/// Whether the on-device engine can serve requests right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Availability {
    /// The engine is ready.
    Available,
    /// The platform has no on-device engine at all.
    PlatformNotSupported,
    /// The platform has an engine, but this OS version is too old.
    PlatformVersionNotSupported,
    /// The engine exists but the user has not enabled it.
    NotEnabled,
    /// This device cannot run the engine.
    DeviceNotEligible,
    /// The model assets are still downloading or warming up.
    ModelNotReady,
    /// The engine is unavailable for an unspecified reason.
    NotAvailableForOtherReasons,
}

impl Availability {
    /// Returns whether requests can be served.
    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            Availability::Available => "available",
            Availability::PlatformNotSupported => "platform not supported",
            Availability::PlatformVersionNotSupported => {
                "platform version not supported"
            }
            Availability::NotEnabled => "not enabled",
            Availability::DeviceNotEligible => "device not eligible",
            Availability::ModelNotReady => "model not ready",
            Availability::NotAvailableForOtherReasons => {
                "not available for other reasons"
            }
        };
        write!(f, "{desc}")
    }
}
