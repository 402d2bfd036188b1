//! # Runner Tests
//!
//! Uses the recording core to observe that every case gets its own core, that every core
//! is finalized (even when its case panics), and that the built-in suite reports through
//! the same summary.

use std::cell::RefCell;
use std::rc::Rc;

use crate::common::harness::init_tracing;
use crate::common::mocks::core::{Event, EventLog, RecordingCore};
use rvharness_core::common::HarnessError;
use rvharness_core::dut::ReferenceCore;
use rvharness_core::soc::DeviceKind;
use rvharness_core::verify::{TestCase, suite};
use rvharness_core::{HarnessConfig, TestRunner};

fn recording_runner() -> (TestRunner<RecordingCore>, Rc<RefCell<Vec<EventLog>>>) {
    init_tracing();
    let logs: Rc<RefCell<Vec<EventLog>>> = Rc::default();
    let sink = Rc::clone(&logs);
    let config = HarnessConfig {
        seed: Some(9),
        colour: false,
        devices: vec![DeviceKind::Memory, DeviceKind::Null, DeviceKind::Null],
        ..HarnessConfig::default()
    };
    let runner = TestRunner::new(config, move || {
        let (core, log) = RecordingCore::new();
        sink.borrow_mut().push(log);
        core
    });
    (runner, logs)
}

#[test]
fn each_case_gets_a_fresh_finalized_core() {
    let (mut runner, logs) = recording_runner();
    let _ = runner
        .add("writes", |sim, ctx| {
            sim.write_register(1, 5);
            ctx.test_assert_eq(5, sim.read_register(1), None);
        })
        .add("sees fresh registers", |sim, ctx| {
            ctx.test_assert_eq(0, sim.read_register(1), Some("register carried over"));
        })
        .add("panics", |_, _| panic!("unreachable state"));

    let summary = runner.run().unwrap();
    assert_eq!(summary.passed_cases(), 2);
    assert_eq!(summary.cases[2].failures, ["assertion 1 failed: panicked: unreachable state"]);

    let logs = logs.borrow();
    assert_eq!(logs.len(), 3);
    for log in logs.iter() {
        assert_eq!(log.borrow().last(), Some(&Event::Finalize));
    }
}

#[test]
fn case_context_draws_from_run_seed_plus_index() {
    let (mut runner, _logs) = recording_runner();
    let drawn: Rc<RefCell<Vec<u64>>> = Rc::default();
    for name in ["a", "b", "c"] {
        let drawn = Rc::clone(&drawn);
        let _ = runner.add(name, move |_, ctx| drawn.borrow_mut().push(ctx.seed()));
    }
    let summary = runner.run().unwrap();
    assert_eq!(*drawn.borrow(), [9, 10, 11]);
    assert!(summary.all_passed());
    assert_eq!(summary.seed, 9);
}

#[test]
fn built_in_suite_passes_on_the_reference_core() {
    init_tracing();
    let config = HarnessConfig {
        seed: Some(2024),
        colour: false,
        ..HarnessConfig::default()
    };
    let trials = config.trials;
    let mut runner = TestRunner::<ReferenceCore>::with_default_core(config);
    let _ = runner.extend(suite::cases(trials));
    let summary = runner.run().unwrap();
    let failing: Vec<_> = summary.cases.iter().filter(|c| !c.is_passing()).collect();
    assert!(failing.is_empty(), "{failing:#?}");
    assert!(summary.cases.iter().all(|c| c.total > 0));
}

#[test]
fn filter_limits_the_suite() {
    let config = HarnessConfig {
        seed: Some(1),
        colour: false,
        filter: Some("branch".into()),
        trials: 2,
        ..HarnessConfig::default()
    };
    let mut runner = TestRunner::<ReferenceCore>::with_default_core(config);
    let _ = runner.extend(suite::cases(2));
    let summary = runner.run().unwrap();
    assert_eq!(summary.cases.len(), 6);
    assert!(summary.cases.iter().all(|c| c.name.starts_with("branch")));
}

#[test]
fn filtering_keeps_registration_seeds() {
    let mut runner = TestRunner::<ReferenceCore>::with_default_core(HarnessConfig {
        seed: Some(100),
        colour: false,
        filter: Some("second".into()),
        ..HarnessConfig::default()
    });
    let _ = runner.add("first", |_, _| {}).add("second", |_, _| {});
    let summary = runner.run().unwrap();

    assert_eq!(summary.cases.len(), 1);
    assert_eq!(summary.cases[0].id, 2);
    assert_eq!(summary.cases[0].seed, 101);
}

#[test]
fn bad_layout_aborts_the_run() {
    let mut runner = TestRunner::<ReferenceCore>::with_default_core(HarnessConfig {
        devices: Vec::new(),
        ..HarnessConfig::default()
    });
    let _ = runner.add("never runs", |_, _| {});
    assert!(matches!(runner.run(), Err(HarnessError::DeviceLayout { .. })));
}

#[test]
fn suite_case_names_are_unique() {
    let all = suite::cases::<ReferenceCore>(1);
    let mut names: Vec<_> = all.iter().map(TestCase::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), all.len());
}
