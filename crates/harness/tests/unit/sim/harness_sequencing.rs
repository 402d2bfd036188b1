//! # Harness Sequencing Tests
//!
//! Checks the exact order of calls the harness makes into a core: construction, reset with
//! the core's own polarity, the two half-cycles of every cycle, device evaluation after the
//! falling edge, and finalization on drop.

use crate::common::mocks::core::{Event, RecordingCore};
use pretty_assertions::assert_eq;
use rvharness_core::DesignHarness;
use rvharness_core::common::HarnessError;
use rvharness_core::soc::DeviceKind;

const LAYOUT: [DeviceKind; 3] = [DeviceKind::Memory, DeviceKind::Null, DeviceKind::Null];

#[test]
fn construction_asserts_reset_and_settles_with_clock_low() {
    let (core, log) = RecordingCore::new();
    let _sim = DesignHarness::new(core, &LAYOUT).unwrap();
    assert_eq!(
        *log.borrow(),
        [
            Event::Reset(true),
            Event::Clock(false),
            Event::Eval { clock: false, ready: false },
        ]
    );
}

#[test]
fn reset_runs_one_cycle_then_releases() {
    let (core, log) = RecordingCore::new();
    let mut sim = DesignHarness::new(core, &LAYOUT).unwrap();
    log.borrow_mut().clear();

    sim.reset();
    assert_eq!(
        *log.borrow(),
        [
            Event::Reset(true),
            Event::Clock(true),
            Event::Eval { clock: true, ready: false },
            Event::Clock(false),
            Event::Eval { clock: false, ready: false },
            Event::Reset(false),
            Event::Eval { clock: false, ready: true },
        ]
    );
    assert_eq!(sim.cycle_count(), 1);
}

#[test]
fn devices_evaluate_after_the_falling_edge() {
    let (core, log) = RecordingCore::new();
    let mut sim = DesignHarness::new(core, &LAYOUT).unwrap();
    log.borrow_mut().clear();

    sim.do_cycles(2);
    assert_eq!(
        *log.borrow(),
        [
            Event::Clock(true),
            Event::Eval { clock: true, ready: false },
            Event::Clock(false),
            Event::Eval { clock: false, ready: false },
            Event::Clock(true),
            Event::Eval { clock: true, ready: true },
            Event::Clock(false),
            Event::Eval { clock: false, ready: true },
        ]
    );
}

#[test]
fn dropping_the_harness_finalizes_the_core_once() {
    let (core, log) = RecordingCore::new();
    let sim = DesignHarness::new(core, &LAYOUT).unwrap();
    drop(sim);
    let finals = log.borrow().iter().filter(|e| **e == Event::Finalize).count();
    assert_eq!(finals, 1);
    assert_eq!(log.borrow().last(), Some(&Event::Finalize));
}

#[test]
fn register_peeks_reach_the_core() {
    let (core, _log) = RecordingCore::new();
    let mut sim = DesignHarness::new(core, &LAYOUT).unwrap();
    sim.write_register(2, 0xDEAD);
    assert_eq!(sim.read_register(2), 0xDEAD);
    assert_eq!(sim.disassemble(0x13), "0x00000013");
}

#[test]
fn layout_must_cover_every_slot() {
    let (core, log) = RecordingCore::new();
    let err = DesignHarness::new(core, &LAYOUT[..2]).unwrap_err();
    assert!(matches!(err, HarnessError::DeviceLayout { expected: 3, found: 2 }));
    // The core was dropped without a harness; nothing was driven.
    assert!(log.borrow().is_empty());
}

#[test]
fn pin_block_must_match_device_count() {
    let (core, log) = RecordingCore::with_slots(2);
    let err = DesignHarness::new(core, &LAYOUT).unwrap_err();
    assert!(matches!(err, HarnessError::BusSlots { expected: 3, found: 2 }));
    assert!(log.borrow().is_empty());
}
