//! # Register File Tests

use rvharness_core::dut::gpr::Gpr;

#[test]
fn x0_is_hardwired() {
    let mut gpr = Gpr::<16>::new();
    gpr.write(0, 0xFFFF_FFFF);
    gpr.write(5, 7);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.read(5), 7);
}

#[test]
fn dump_lists_every_register() {
    let gpr = Gpr::<16>::new();
    let text = gpr.to_string();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("x15=0x00000000"));
}
