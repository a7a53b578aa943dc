//! Search options, progress reporting and statistics.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a running search handed to the progress callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress<'a> {
    /// Candidates evaluated so far.
    pub candidates:    u64,
    /// Perfect rules kept so far.
    pub rules_found:   usize,
    /// Per-slot fraction of dimensions already passed.
    pub slot_progress: &'a [f32],
    /// Kept rules per label.
    pub distribution:  &'a [usize]
}

/// Progress callback type for mining.
///
/// Called every `report_every` candidates. Return `false` to cancel the
/// search.
pub type ProgressCallback = Box<dyn FnMut(&Progress<'_>) -> bool + Send>;

/// Options for a single mining run.
pub struct MineOptions {
    pub report_every:  u64,
    pub callback:      Option<ProgressCallback>,
    pub parallel_scan: bool
}

impl Default for MineOptions {
    fn default() -> Self {
        Self {
            report_every:  10,
            callback:      None,
            parallel_scan: false
        }
    }
}

impl core::fmt::Debug for MineOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MineOptions")
            .field("report_every", &self.report_every)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .field("parallel_scan", &self.parallel_scan)
            .finish()
    }
}

impl MineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many candidates pass between callback invocations.
    /// Zero disables reporting.
    #[must_use]
    pub fn report_every(mut self, n: u64) -> Self {
        self.report_every = n;
        self
    }

    /// Sets progress callback.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let opts = MineOptions::new().with_callback(|p| {
    ///     eprint!("\r{} candidates, {} rules", p.candidates, p.rules_found);
    ///     true
    /// });
    /// ```
    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Progress<'_>) -> bool + Send + 'static
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Scans training samples with rayon for each candidate.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn with_parallel_scan(mut self) -> Self {
        self.parallel_scan = true;
        self
    }
}

/// Summary of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MineStats {
    /// Candidates evaluated.
    pub candidates:   u64,
    /// Perfect rules kept.
    pub rules_found:  usize,
    /// Size of the full search space, `None` if it exceeds `u128`.
    pub search_space: Option<u128>
}
