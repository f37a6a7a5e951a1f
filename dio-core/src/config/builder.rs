// ============================================================================
// dio-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for TrimOptions
//
// Fluent construction of TrimOptions. Every field starts from the defaults
// in the parent module, so callers only name what they change.

// ---- Internal crate imports ----
use super::TrimOptions;
use crate::processing::margin::CornerSampling;

/// Builder for creating TrimOptions instances.
///
/// # Examples
///
/// ```rust
/// use dio_core::config::TrimOptionsBuilder;
/// use dio_core::processing::margin::CornerSampling;
///
/// let options = TrimOptionsBuilder::new()
///     .stdmax(4.0)
///     .sampling(CornerSampling::Legacy)
///     .dry_run(true)
///     .build();
/// assert!(options.dry_run);
/// ```
#[derive(Debug, Clone)]
pub struct TrimOptionsBuilder {
    options: TrimOptions,
}

impl Default for TrimOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrimOptionsBuilder {
    /// Creates a new TrimOptionsBuilder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: TrimOptions::default(),
        }
    }

    /// Sets the homogeneity threshold.
    ///
    /// Negative values are clamped to 0.
    #[must_use]
    pub fn stdmax(mut self, stdmax: f64) -> Self {
        self.options.stdmax = stdmax.max(0.0);
        self
    }

    /// Sets the output file name prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    /// Sets whether the input file is removed after a successful trim.
    #[must_use]
    pub fn delete_original(mut self, delete: bool) -> Self {
        self.options.delete_original = delete;
        self
    }

    /// Sets whether to skip writing and removing files.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.options.dry_run = dry_run;
        self
    }

    /// Sets the corner sampling mode.
    #[must_use]
    pub fn sampling(mut self, sampling: CornerSampling) -> Self {
        self.options.sampling = sampling;
        self
    }

    /// Sets whether batches run in parallel.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    /// Builds the TrimOptions instance.
    #[must_use]
    pub fn build(self) -> TrimOptions {
        self.options
    }
}
