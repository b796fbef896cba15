#![no_main]
extern crate keycmp_constant_time;

use libfuzzer_sys::fuzz_target;

use keycmp_constant_time::{compare, memcmp};

fuzz_target!(|input: (&[u8], &[u8])| {
    let (a, b) = input;
    assert_eq!(memcmp(a, b), a == b);
    if a.len() == b.len() {
        assert_eq!(compare(a, b), a.cmp(b) as i32);
    }
});
