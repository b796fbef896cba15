#![no_main]
extern crate arbitrary;
extern crate keycmp;

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;

use keycmp::{order, Key32, KeyComparator};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub a: [u8; 32],
    pub b: [u8; 32],
    pub raw: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    let a = Key32::new(input.a);
    let b = Key32::new(input.b);

    assert!(a.ct_eq(&a));
    assert_eq!(a.ct_eq(&b), b.ct_eq(&a));
    assert_eq!(a.ct_eq(&b), input.a == input.b);

    let ab = a.compare(&b);
    assert_eq!(ab, Some(input.a.cmp(&input.b)));
    assert_eq!(ab.map(Ordering::reverse), b.compare(&a));

    let raw = &input.raw[..];
    assert_eq!(a.ct_eq(raw), input.a[..] == *raw);
    assert_eq!(
        a.compare(raw),
        Some(32.cmp(&raw.len()).then_with(|| input.a[..].cmp(raw)))
    );
    assert_eq!(order(raw, &input.a), order(&input.a, raw).reverse());
});
