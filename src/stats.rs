//! Aggregate counters fed by the correlation layer.

use crate::signature::{MemberSignature, Modifier};

/// The tiered compilation level of one compilation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationTier {
    /// C1 without profiling.
    Level1,
    /// C1 with invocation and back edge counters.
    Level2,
    /// C1 with full profiling.
    Level3,
    /// C2.
    Level4,
}

/// Running totals over the members and compilations seen in one log.
///
/// Pure accumulation, no parsing: the correlation layer feeds it finished
/// signatures and compilation events and reads the tallies back out for
/// reporting.
#[derive(Debug, Default, Clone)]
pub struct CompilationStats {
    modifier_counts: [u64; Modifier::ALL.len()],
    tier_counts: [u64; 4],
    osr_count: u64,
    native_wrapper_count: u64,
    method_count: u64,
    constructor_count: u64,
    static_initializer_count: u64,
    unidentified_count: u64,
    total_compile_time_ms: u64,
}

impl CompilationStats {
    /// An empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the modifiers and member kind of one compiled member.
    pub fn record_member(&mut self, signature: &MemberSignature) {
        for modifier in signature.modifiers() {
            self.modifier_counts[*modifier as usize] += 1;
        }
        if !signature.is_identified() {
            self.unidentified_count += 1;
        } else if signature.is_static_initializer() {
            self.static_initializer_count += 1;
        } else if signature.is_constructor() {
            self.constructor_count += 1;
        } else {
            self.method_count += 1;
        }
    }

    /// Records one compilation event at the given tier.
    pub fn record_compilation(&mut self, tier: CompilationTier) {
        self.tier_counts[tier as usize] += 1;
    }

    /// Records an on stack replacement compilation.
    pub fn record_osr(&mut self) {
        self.osr_count += 1;
    }

    /// Records a generated native wrapper.
    pub fn record_native_wrapper(&mut self) {
        self.native_wrapper_count += 1;
    }

    /// Accumulates the queue-to-install time of one compilation.
    pub fn record_compile_time(&mut self, millis: u64) {
        self.total_compile_time_ms += millis;
    }

    /// How many recorded members carried `modifier`.
    #[must_use]
    pub fn modifier_count(&self, modifier: Modifier) -> u64 {
        self.modifier_counts[modifier as usize]
    }

    /// How many compilations ran at `tier`.
    #[must_use]
    pub fn tier_count(&self, tier: CompilationTier) -> u64 {
        self.tier_counts[tier as usize]
    }

    /// How many on stack replacement compilations were recorded.
    #[must_use]
    pub fn osr_count(&self) -> u64 {
        self.osr_count
    }

    /// How many native wrappers were recorded.
    #[must_use]
    pub fn native_wrapper_count(&self) -> u64 {
        self.native_wrapper_count
    }

    /// How many plain methods were recorded.
    #[must_use]
    pub fn method_count(&self) -> u64 {
        self.method_count
    }

    /// How many constructors were recorded.
    #[must_use]
    pub fn constructor_count(&self) -> u64 {
        self.constructor_count
    }

    /// How many static initializers were recorded.
    #[must_use]
    pub fn static_initializer_count(&self) -> u64 {
        self.static_initializer_count
    }

    /// How many degraded signatures without a member name were recorded.
    #[must_use]
    pub fn unidentified_count(&self) -> u64 {
        self.unidentified_count
    }

    /// The accumulated compile time in milliseconds.
    #[must_use]
    pub fn total_compile_time_ms(&self) -> u64 {
        self.total_compile_time_ms
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
