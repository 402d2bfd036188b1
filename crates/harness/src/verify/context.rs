//! Test context: seeded randomness and assertion bookkeeping.
//!
//! Every test case receives its own `TestContext`. Draws come from a `StdRng` seeded with the
//! case seed, so a case replays exactly given the same seed. Assertions never abort the case:
//! each one bumps the total, bumps the pass count on success, and on failure logs the
//! message immediately and keeps it for the final report.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::error;

/// Lowest register index handed out by `random_reg` (x0 is hardwired).
pub const FIRST_RANDOM_REG: u32 = 1;
/// Highest register index handed out by `random_reg`.
pub const LAST_RANDOM_REG: u32 = 15;

/// Randomness and assertion tallies for one test case.
#[derive(Debug)]
pub struct TestContext {
    id: usize,
    name: String,
    seed: u64,
    rng: StdRng,
    passed: usize,
    total: usize,
    failures: Vec<String>,
}

impl TestContext {
    /// Creates the context for case number `id`, drawing from `seed`.
    pub fn new(id: usize, name: impl Into<String>, seed: u64) -> Self {
        Self {
            id,
            name: name.into(),
            seed,
            rng: StdRng::seed_from_u64(seed),
            passed: 0,
            total: 0,
            failures: Vec::new(),
        }
    }

    /// A uniformly distributed word.
    pub fn random_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// A uniformly distributed value in `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn random(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }

    /// A register index in `1..=15`.
    pub fn random_reg(&mut self) -> u32 {
        self.random(FIRST_RANDOM_REG, LAST_RANDOM_REG)
    }

    /// A register index in `1..=15` that is not in `exclude`.
    ///
    /// Draws until a value outside `exclude` comes up, so `exclude` must leave at least one
    /// index free.
    pub fn random_reg_exclude(&mut self, exclude: &[u32]) -> u32 {
        loop {
            let reg = self.random_reg();
            if !exclude.contains(&reg) {
                return reg;
            }
        }
    }

    /// Records one assertion.
    pub fn test_assert(&mut self, cond: bool, msg: impl AsRef<str>) {
        self.total += 1;
        if cond {
            self.passed += 1;
            return;
        }
        let msg = msg.as_ref();
        error!(
            test = self.id,
            name = %self.name,
            assertion = self.total,
            "assertion failed: {msg}"
        );
        self.failures.push(format!("assertion {} failed: {msg}", self.total));
    }

    /// Records an equality assertion with a generated message.
    ///
    /// The message reads `"<context>, expected <expected> but got <actual>"`.
    pub fn test_assert_eq<T>(&mut self, expected: T, actual: T, context: Option<&str>)
    where
        T: PartialEq + fmt::Display,
    {
        let prefix = context.map(|c| format!("{c}, ")).unwrap_or_default();
        let holds = expected == actual;
        self.test_assert(holds, format!("{prefix}expected {expected} but got {actual}"));
    }

    /// Case number, starting at 1.
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Case name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seed the PRNG was created from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Assertions that held.
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Assertions made.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Messages of the failed assertions, in order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Returns `true` if every assertion so far held.
    pub const fn is_passing(&self) -> bool {
        self.passed == self.total
    }
}
