//! Test case registry and execution.
//!
//! `TestRunner` owns a core factory and an ordered list of named cases. For each selected
//! case it builds a fresh `DesignHarness` and `TestContext`, runs the case, prints its report
//! line, and collects a `CaseOutcome`. A case that panics fails on its own; the harness is
//! dropped (finalizing the core) during unwinding and the run continues with the next case.
//!
//! Case `i` (0-based, counted over every registered case so filtering does not shift seeds)
//! draws from `run_seed + i`.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use crate::common::HarnessError;
use crate::config::HarnessConfig;
use crate::dut::SimulatedCore;
use crate::sim::DesignHarness;
use crate::verify::context::TestContext;
use crate::verify::report;

/// Body of a test case.
pub type CaseFn<C> = dyn Fn(&mut DesignHarness<C>, &mut TestContext);

/// A named test case.
pub struct TestCase<C: SimulatedCore> {
    name: String,
    run: Box<CaseFn<C>>,
}

impl<C: SimulatedCore> TestCase<C> {
    /// Wraps `run` under `name`.
    pub fn new(
        name: impl Into<String>,
        run: impl Fn(&mut DesignHarness<C>, &mut TestContext) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }

    /// Case name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C: SimulatedCore> fmt::Debug for TestCase<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Result of one executed case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Case number, starting at 1.
    pub id: usize,
    /// Case name.
    pub name: String,
    /// Seed the case drew from.
    pub seed: u64,
    /// Assertions that held.
    pub passed: usize,
    /// Assertions made.
    pub total: usize,
    /// Failed assertion messages.
    pub failures: Vec<String>,
}

impl CaseOutcome {
    fn from_context(ctx: &TestContext) -> Self {
        Self {
            id: ctx.id(),
            name: ctx.name().to_string(),
            seed: ctx.seed(),
            passed: ctx.passed(),
            total: ctx.total(),
            failures: ctx.failures().to_vec(),
        }
    }

    /// Returns `true` if every assertion held.
    pub const fn is_passing(&self) -> bool {
        self.passed == self.total
    }
}

/// Aggregate result of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Run seed.
    pub seed: u64,
    /// One outcome per executed case, in registration order.
    pub cases: Vec<CaseOutcome>,
}

impl RunSummary {
    /// Number of cases whose assertions all held.
    pub fn passed_cases(&self) -> usize {
        self.cases.iter().filter(|c| c.is_passing()).count()
    }

    /// Returns `true` if every executed case passed.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(CaseOutcome::is_passing)
    }
}

/// Registry of test cases run against fresh instances of one core type.
pub struct TestRunner<C: SimulatedCore> {
    factory: Box<dyn Fn() -> C>,
    cases: Vec<TestCase<C>>,
    config: HarnessConfig,
}

impl<C: SimulatedCore> fmt::Debug for TestRunner<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRunner")
            .field("cases", &self.cases)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: SimulatedCore + Default> TestRunner<C> {
    /// Creates a runner that builds each core with `C::default()`.
    pub fn with_default_core(config: HarnessConfig) -> Self {
        Self::new(config, C::default)
    }
}

impl<C: SimulatedCore> TestRunner<C> {
    /// Creates an empty runner; `factory` builds one core per case.
    pub fn new(config: HarnessConfig, factory: impl Fn() -> C + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            cases: Vec::new(),
            config,
        }
    }

    /// Registers a case.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        run: impl Fn(&mut DesignHarness<C>, &mut TestContext) + 'static,
    ) -> &mut Self {
        self.cases.push(TestCase::new(name, run));
        self
    }

    /// Registers prepared cases.
    pub fn extend(&mut self, cases: impl IntoIterator<Item = TestCase<C>>) -> &mut Self {
        self.cases.extend(cases);
        self
    }

    /// Registered cases, in order.
    pub fn cases(&self) -> &[TestCase<C>] {
        &self.cases
    }

    /// The configuration cases are run with.
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every case the filter selects and prints a report.
    ///
    /// # Errors
    ///
    /// Returns an error if a harness cannot be built for the configured device layout.
    /// Assertion failures and panics inside cases are reported in the summary instead.
    pub fn run(&self) -> Result<RunSummary, HarnessError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!(seed, cases = self.cases.len(), "starting test run");

        let mut outcomes = Vec::new();
        for (index, case) in self.cases.iter().enumerate() {
            if !self.config.selects(&case.name) {
                continue;
            }
            let outcome = self.run_case(index, case, seed.wrapping_add(index as u64))?;
            for line in report::case_lines(&outcome, self.config.colour) {
                println!("{line}");
            }
            outcomes.push(outcome);
        }

        let summary = RunSummary {
            seed,
            cases: outcomes,
        };
        println!("{}", report::summary_line(&summary, self.config.colour));
        info!(
            seed,
            passed = summary.passed_cases(),
            run = summary.cases.len(),
            "test run finished"
        );
        Ok(summary)
    }

    fn run_case(
        &self,
        index: usize,
        case: &TestCase<C>,
        seed: u64,
    ) -> Result<CaseOutcome, HarnessError> {
        let harness = DesignHarness::from_config((self.factory)(), &self.config)?;
        let mut ctx = TestContext::new(index + 1, case.name.as_str(), seed);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut sim = harness;
            (case.run)(&mut sim, &mut ctx);
        }));
        if let Err(payload) = result {
            let msg = panic_message(payload.as_ref());
            warn!(test = ctx.id(), name = %case.name, "test case panicked: {msg}");
            ctx.test_assert(false, format!("panicked: {msg}"));
        }
        Ok(CaseOutcome::from_context(&ctx))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
