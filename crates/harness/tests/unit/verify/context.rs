//! # Test Context Tests
//!
//! Seeded draws, register selection, and assertion bookkeeping.

use rvharness_core::TestContext;

#[test]
fn same_seed_same_draws() {
    let mut a = TestContext::new(1, "a", 7);
    let mut b = TestContext::new(2, "b", 7);
    for _ in 0..16 {
        assert_eq!(a.random_u32(), b.random_u32());
    }
}

#[test]
fn registers_skip_x0_and_exclusions() {
    let mut ctx = TestContext::new(1, "regs", 3);
    for _ in 0..200 {
        let r = ctx.random_reg_exclude(&[1, 2, 3]);
        assert!((4..=15).contains(&r));
    }
}

#[test]
fn failures_are_counted_not_fatal() {
    let mut ctx = TestContext::new(1, "tally", 0);
    ctx.test_assert(true, "fine");
    ctx.test_assert_eq(4u32, 5u32, Some("rd"));
    ctx.test_assert_eq(6u32, 6u32, None);
    assert_eq!((ctx.passed(), ctx.total()), (2, 3));
    assert!(!ctx.is_passing());
    assert_eq!(ctx.failures(), ["assertion 2 failed: rd, expected 4 but got 5"]);
}

#[test]
fn inclusive_range_hits_both_ends() {
    let mut ctx = TestContext::new(1, "range", 11);
    let draws: Vec<u32> = (0..200).map(|_| ctx.random(0, 1)).collect();
    assert!(draws.contains(&0) && draws.contains(&1));
}
