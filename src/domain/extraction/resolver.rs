//! Probe-chain adapter resolution with process-lifetime memoization
//!
//! A dependency whose public shape is not contractually stable is wrapped in a
//! handle `H`. Each [`Probe`] inspects the handle for one known calling
//! convention and, if present, returns a normalized adapter `C`. The resolver
//! runs the probes in order exactly once and caches the outcome, success or
//! failure, for every later caller.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, error, info, warn};

/// One shape detector in a probe chain.
///
/// Probing must not invoke the dependency's real work; it only inspects
/// which entry points are exposed.
pub struct Probe<H: ?Sized, C> {
    name: &'static str,
    detect: fn(&H) -> Option<C>,
}

impl<H: ?Sized, C> Probe<H, C> {
    pub const fn new(name: &'static str, detect: fn(&H) -> Option<C>) -> Self {
        Self { name, detect }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Cached outcome of running a probe chain
#[derive(Clone)]
pub enum Resolution<C> {
    /// A probe matched; its adapter is used for the lifetime of the resolver
    Resolved { strategy: &'static str, adapter: C },
    /// No probe matched; the dependency is treated as unavailable
    Unavailable,
}

impl<C> fmt::Debug for Resolution<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { strategy, .. } => f
                .debug_struct("Resolved")
                .field("strategy", strategy)
                .finish_non_exhaustive(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// Resolves a dependency's calling convention at most once
pub struct AdapterResolver<H: ?Sized, C> {
    library: &'static str,
    handle: Arc<H>,
    probes: Vec<Probe<H, C>>,
    resolution: OnceCell<Resolution<C>>,
}

impl<H: ?Sized, C: Clone> AdapterResolver<H, C> {
    /// Create a resolver; no probe runs until first use
    pub fn new(library: &'static str, handle: Arc<H>, probes: Vec<Probe<H, C>>) -> Self {
        Self {
            library,
            handle,
            probes,
            resolution: OnceCell::new(),
        }
    }

    /// Name of the dependency this resolver fronts
    pub fn library(&self) -> &'static str {
        self.library
    }

    /// The normalized adapter, or `None` if the dependency is unavailable
    pub fn resolve(&self) -> Option<C> {
        match self.resolution() {
            Resolution::Resolved { adapter, .. } => Some(adapter.clone()),
            Resolution::Unavailable => None,
        }
    }

    /// Name of the winning probe, if any
    pub fn strategy(&self) -> Option<&'static str> {
        match self.resolution() {
            Resolution::Resolved { strategy, .. } => Some(*strategy),
            Resolution::Unavailable => None,
        }
    }

    /// Cached resolution; concurrent first callers block until one of them
    /// has finished probing and then all observe the same value.
    ///
    /// A probe that panics ends the chain as `Unavailable`, cached like any
    /// other outcome.
    pub fn resolution(&self) -> &Resolution<C> {
        self.resolution.get_or_init(|| {
            catch_unwind(AssertUnwindSafe(|| self.run_probes())).unwrap_or_else(|_| {
                error!(
                    library = self.library,
                    "Adapter detection panicked; library marked unavailable until restart"
                );
                Resolution::Unavailable
            })
        })
    }

    fn run_probes(&self) -> Resolution<C> {
        for probe in &self.probes {
            if let Some(adapter) = (probe.detect)(&*self.handle) {
                info!(
                    library = self.library,
                    strategy = probe.name,
                    "Resolved library calling convention"
                );

                return Resolution::Resolved {
                    strategy: probe.name,
                    adapter,
                };
            }

            debug!(
                library = self.library,
                strategy = probe.name,
                "Probe did not match"
            );
        }

        warn!(
            library = self.library,
            probes = self.probes.len(),
            "No probe matched; library marked unavailable until restart"
        );

        Resolution::Unavailable
    }
}

impl<H: ?Sized, C> fmt::Debug for AdapterResolver<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let probes: Vec<&str> = self.probes.iter().map(|p| p.name).collect();

        f.debug_struct("AdapterResolver")
            .field("library", &self.library)
            .field("probes", &probes)
            .field("resolution", &self.resolution.get())
            .finish()
    }
}
