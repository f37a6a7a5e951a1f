//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of one subcommand. Commands
//! report per-file failures themselves and return a `BatchSummary`; only
//! errors that stop the whole command are returned as `Err`.

/// `dio imt`: crop homogeneous image margins.
pub mod trim;

/// `dio sil`: find silences in audio.
pub mod silence;

/// `dio ihash`: average hash of images.
pub mod hash;

/// `dio avatar`: square thumbnails of images.
pub mod avatar;

/// Per-command tally of processed and failed files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Counts one result.
    pub fn record<T, E>(&mut self, result: &Result<T, E>) {
        if result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_results() {
        let mut summary = BatchSummary::default();
        summary.record::<(), &str>(&Ok(()));
        summary.record::<(), &str>(&Err("bad"));
        summary.record::<(), &str>(&Ok(()));
        assert_eq!(summary, BatchSummary { succeeded: 2, failed: 1 });
        assert!(summary.has_failures());
    }
}
