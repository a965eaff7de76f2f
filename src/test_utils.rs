use std::ops::Range;

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::{Digit, Int, MOD};

// Values of up to 'len' digits, either sign. Leading zero digits are allowed in the
// raw vector so canonicalization is exercised too.
pub fn any_int(len: Range<usize>) -> impl Strategy<Value = Int> {
    (proptest::collection::vec(0..MOD, len), any::<bool>())
        .prop_map(|(digits, neg)| Int::from_le_digits(digits, if neg { -1 } else { 1 }).unwrap())
}

// The same value as a num-bigint reference integer.
pub fn to_ref(n: &Int) -> BigInt {
    let mag = n.digits().iter().rev()
        .fold(BigInt::from(0), |acc, &d: &Digit| acc * MOD + d);
    if n.sign() < 0 { -mag } else { mag }
}
