//! Registry options

/// Options controlling registry diagnostics.
///
/// Lookups behave identically under every option set; only logging changes.
/// Per-lookup `trace!` events are always emitted and left to the
/// subscriber's level filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Emit a `warn!` event when a raw value from the native side does not
    /// resolve (the table is likely older than the native library)
    pub warn_on_drift: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            warn_on_drift: true,
        }
    }
}

impl RegistryOptions {
    /// Options for callers that probe with values expected to be unknown.
    pub fn quiet() -> Self {
        Self {
            warn_on_drift: false,
        }
    }
}
