// Magnitude combinators.
// A magnitude is a little-endian sequence of digits in [0, MOD). None of these
// routines look at signs; the caller owns sign handling.

use crate::{Digit, MOD};

// (carry, digit) such that n == carry * MOD + digit.
pub fn divmod(n: Digit) -> (Digit, Digit) {
    (n / MOD, n % MOD)
}

// Floor-division flavour used by subtraction. A negative n yields a negative carry
// (the borrow) and a digit normalized into [0, MOD).
pub fn divmod_signed(n: i64) -> (i64, Digit) {
    let m = MOD as i64;
    (n.div_euclid(m), n.rem_euclid(m) as Digit)
}

// pops the most-significant zero digits.
pub fn trim(mag: &mut Vec<Digit>) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}

// the slice without its most-significant zero digits.
pub fn trimmed(mag: &[Digit]) -> &[Digit] {
    let len = mag.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    &mag[..len]
}

// Splits a magnitude at position 'at' into (lower, upper) parts, each trimmed.
// Splitting past the end yields the whole magnitude and an empty upper part.
pub fn split_digits(mag: &[Digit], at: usize) -> (&[Digit], &[Digit]) {
    let (lo, hi) = mag.split_at(at.min(mag.len()));
    (trimmed(lo), trimmed(hi))
}

// Magnitude ordering for trimmed sequences. Without leading zeros the length is a
// valid proxy for size; equal lengths compare from the most-significant digit down.
pub fn less(a: &[Digit], b: &[Digit]) -> bool {
    if a.len() != b.len() {
        return a.len() < b.len();
    }
    for (&x, &y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x < y;
        }
    }
    false
}

// a += b
pub fn add(a: &mut Vec<Digit>, b: &[Digit]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let mut carry: Digit = 0;
    for (x, &y) in a.iter_mut().zip(b.iter()) {
        (carry, *x) = divmod(carry + *x + y);
    }
    for x in a[b.len()..].iter_mut() {
        if carry == 0 {
            break;
        }
        (carry, *x) = divmod(carry + *x);
    }
    if carry > 0 {
        a.push(carry);
    }
}

// big -= small, where big >= small and big.len() >= small.len().
fn sub_smaller(big: &mut [Digit], small: &[Digit]) {
    let mut borrow: i64 = 0;
    for (x, &y) in big.iter_mut().zip(small.iter()) {
        (borrow, *x) = divmod_signed(borrow + *x as i64 - y as i64);
    }
    for x in big[small.len()..].iter_mut() {
        if borrow == 0 {
            break;
        }
        (borrow, *x) = divmod_signed(borrow + *x as i64);
    }
    debug_assert_eq!(borrow, 0, "mag::sub_smaller - minuend smaller than subtrahend");
}

// a = |a - b|, trimmed.
// Returns true when b was the larger magnitude, i.e. when the caller must flip the sign.
pub fn sub(a: &mut Vec<Digit>, b: &[Digit]) -> bool {
    let swapped = less(a, b);
    if swapped {
        let mut r = b.to_vec();
        sub_smaller(&mut r, a);
        *a = r;
    } else {
        sub_smaller(a, b);
    }
    trim(a);
    swapped
}

// Prepends k zero digits (multiplies by MOD^k). Zero stays empty.
pub fn shl(a: &mut Vec<Digit>, k: usize) {
    if a.is_empty() || k == 0 {
        return;
    }
    a.splice(0..0, std::iter::repeat(0).take(k));
}

// a * n for a single digit value n, in one carry-propagating sweep.
pub fn mul_digit(a: &[Digit], n: Digit) -> Vec<Digit> {
    debug_assert!(n < MOD);
    let mut carry: Digit = 0;
    let mut prod = Vec::with_capacity(a.len() + 1);
    for &d in a {
        let (c, digit) = divmod(carry + n * d);
        prod.push(digit);
        carry = c;
    }
    if carry > 0 {
        prod.push(carry);
    }
    trim(&mut prod);
    prod
}
