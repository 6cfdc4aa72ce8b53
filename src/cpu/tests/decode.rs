//! Exercises the instruction decode logic.
use super::*;

const INDX: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0xa, 0xb, 0xc, 0xd, 0xe, 0xf];

/// runs one arbitrary operation on a brand new machine with v0..vF = 0..F
/// returns the machine for inspection
fn run_single_op(op: &[u8]) -> Cpu {
    let mut cpu = load_program(op);
    cpu.v = INDX;
    cpu.step(&IDLE).unwrap(); // will panic on a decode fault
    cpu
}

#[rustfmt::skip]
mod sys {
    use super::*;
    #[test]                 fn cls()   { run_single_op(b"\x00\xe0"); }
    #[test] #[should_panic] fn u00fd() { run_single_op(b"\x00\xfd"); }
    #[test] #[should_panic] fn u0000() { run_single_op(b"\x00\x00"); }
}
#[rustfmt::skip]
mod jump {
    use super::*;
    #[test] fn aligned()   { assert_eq!(0x230, run_single_op(b"\x12\x30").pc); }
    #[test] fn unaligned() { assert_eq!(0x231, run_single_op(b"\x12\x31").pc); }
    #[test] #[should_panic] fn indexed() { run_single_op(b"\xb2\x30"); }
}
#[rustfmt::skip]
mod call {
    use super::*;
    #[test] fn aligned()   { assert_eq!(0x230, run_single_op(b"\x22\x30").pc); }
    #[test] fn unaligned() { assert_eq!(0x231, run_single_op(b"\x22\x31").pc); }
}
#[rustfmt::skip]
mod seb {
    use super::*;
    #[test] fn skip()    { assert_eq!(0x204, run_single_op(b"\x30\x00").pc); }
    #[test] fn no_skip() { assert_eq!(0x202, run_single_op(b"\x30\x01").pc); }
}
#[rustfmt::skip]
mod sneb {
    use super::*;
    #[test] fn skip()    { assert_eq!(0x204, run_single_op(b"\x40\x01").pc); }
    #[test] fn no_skip() { assert_eq!(0x202, run_single_op(b"\x40\x00").pc); }
}
#[rustfmt::skip]
mod se {
    use super::*;
    #[test] fn skip()    { assert_eq!(0x204, run_single_op(b"\x50\x00").pc); }
    #[test] fn no_skip() { assert_eq!(0x202, run_single_op(b"\x50\x10").pc); }
    #[test] #[should_panic] fn u5xy1() { run_single_op(b"\x5f\xf1"); }
    #[test] #[should_panic] fn u5xyf() { run_single_op(b"\x5f\xff"); }
}
#[rustfmt::skip]
mod alu {
    use super::*;
    #[test] fn movb() { assert_eq!(0x42, run_single_op(b"\x60\x42").v[0]); }
    #[test] fn addb() { assert_eq!(0x43, run_single_op(b"\x71\x42").v[1]); }
    #[test] fn mov()  { assert_eq!(0x0f, run_single_op(b"\x80\xf0").v[0]); }
    #[test] fn or()   { assert_eq!(0x03, run_single_op(b"\x81\x21").v[1]); }
    #[test] fn and()  { assert_eq!(0x02, run_single_op(b"\x83\x22").v[3]); }
    #[test] fn xor()  { assert_eq!(0x01, run_single_op(b"\x83\x23").v[3]); }
    #[test] fn add()  { assert_eq!(0x05, run_single_op(b"\x82\x34").v[2]); }
    #[test] fn sub()  { assert_eq!(0x02, run_single_op(b"\x85\x35").v[5]); }
    #[test] fn shr()  { assert_eq!(0x02, run_single_op(b"\x84\x06").v[4]); }
    #[test] fn bsub() { assert_eq!(0x04, run_single_op(b"\x83\x77").v[3]); }
    #[test] fn shl()  { assert_eq!(0x08, run_single_op(b"\x84\x0e").v[4]); }
    #[test] #[should_panic] fn u8xy8() { run_single_op(b"\x80\x08"); }
    #[test] #[should_panic] fn u8xyf() { run_single_op(b"\x80\x0f"); }
}
#[rustfmt::skip]
mod sne {
    use super::*;
    #[test] fn skip()    { assert_eq!(0x204, run_single_op(b"\x90\x10").pc); }
    #[test] fn no_skip() { assert_eq!(0x202, run_single_op(b"\x90\x00").pc); }
    #[test] #[should_panic] fn u9xy1() { run_single_op(b"\x90\x01"); }
}
#[rustfmt::skip]
mod index {
    use super::*;
    #[test] fn movi() { assert_eq!(0x2f0, run_single_op(b"\xa2\xf0").i); }
    #[test] fn addi() { assert_eq!(0x005, run_single_op(b"\xf5\x1e").i); }
}
#[rustfmt::skip]
mod rand {
    use super::*;
    #[test] fn masked() { assert_eq!(0, run_single_op(b"\xc0\x0f").v[0] & 0xf0); }
}
#[rustfmt::skip]
mod draw {
    use super::*;
    #[test] fn draws() { assert_ne!(0, run_single_op(b"\xd0\x15").screen.lit()); }
    #[test] #[should_panic] fn sprite_bad_i() {
        let mut cpu = load_program(b"\xd0\x15");
        cpu.i = 0xfff;
        cpu.step(&IDLE).unwrap();
    }
}
#[rustfmt::skip]
mod keys {
    use super::*;
    #[test] fn sek()  { assert_eq!(0x202, run_single_op(b"\xe0\x9e").pc); }
    #[test] fn snek() { assert_eq!(0x204, run_single_op(b"\xe0\xa1").pc); }
    #[test] #[should_panic] fn uex00() { run_single_op(b"\xe0\x00"); }
    #[test] #[should_panic] fn uexa2() { run_single_op(b"\xe0\xa2"); }
}
#[rustfmt::skip]
mod misc_f {
    use super::*;
    #[test] fn getdt() { assert_eq!(0x00, run_single_op(b"\xf0\x07").v[0]); }
    #[test] fn waitk() { assert_eq!(0x200, run_single_op(b"\xf0\x0a").pc); }
    #[test] fn setdt() { assert_eq!(0x05, run_single_op(b"\xf5\x15").delay); }
    #[test] fn movst() { assert_eq!(0x06, run_single_op(b"\xf6\x18").sound); }
    #[test] fn font()  { assert_eq!(0x19, run_single_op(b"\xf5\x29").i); }
    #[test] fn bcd()   { assert_eq!([0, 0, 7], run_single_op(b"\xf7\x33").mem[0..3]); }
    #[test] fn dmao()  { assert_eq!([0, 1, 2], run_single_op(b"\xf2\x55").mem[0..3]); }
    #[test] fn dmai()  { assert_eq!(0xf0, run_single_op(b"\xf0\x65").v[0]); }
    #[test] #[should_panic] fn ufx00() { run_single_op(b"\xf0\x00"); }
    #[test] #[should_panic] fn ufx75() { run_single_op(b"\xf0\x75"); }
}
