use std::cmp::max;
use std::ops::Mul;

use crate::{mag, Digit, Int, DIGIT_TABLE_LEN};

// Product of two single digits: (low digit, high digit).
fn single_digit_product(a: Digit, b: Digit) -> Int {
    let (hi, lo) = mag::divmod(a * b);
    Int::from_mag(vec![lo, hi])
}

// Recursive half-split on magnitudes. All four cross products are computed at
// every level; this is the quadratic baseline the other two strategies are measured against.
fn subdiv(a: &[Digit], b: &[Digit]) -> Int {
    if a.is_empty() || b.is_empty() {
        return Int::zero();
    }
    if a.len() == 1 && b.len() == 1 {
        return single_digit_product(a[0], b[0]);
    }
    let da = a.len() / 2;
    let db = b.len() / 2;
    let (x0, x1) = mag::split_digits(a, da);
    let (y0, y1) = mag::split_digits(b, db);

    let hi = subdiv(x1, y1);
    let hx = subdiv(x1, y0);
    let hy = subdiv(y1, x0);
    let lo = subdiv(x0, y0);

    let mut r = hi << (da + db);
    r += &(hx << da);
    r += &(hy << db);
    r += &lo;
    r
}

// Karatsuba on magnitudes: three sub-products per level instead of four.
fn karatsuba(a: &[Digit], b: &[Digit]) -> Int {
    if a.is_empty() || b.is_empty() {
        return Int::zero();
    }
    if a.len() == 1 && b.len() == 1 {
        return single_digit_product(a[0], b[0]);
    }
    // both operands split at a common position; the shorter one may have an empty upper half.
    let half = max(a.len(), b.len()) / 2;
    let (x0, x1) = mag::split_digits(a, half);
    let (y0, y1) = mag::split_digits(b, half);

    let hi = karatsuba(x1, y1);
    let lo = karatsuba(x0, y0);

    let mut sx = x0.to_vec();
    mag::add(&mut sx, x1);
    let mut sy = y0.to_vec();
    mag::add(&mut sy, y1);
    // (x0 + x1)(y0 + y1) - x1*y1 - x0*y0 == x0*y1 + x1*y0
    let mid = karatsuba(&sx, &sy) - &hi - &lo;

    let mut r = hi << (2 * half);
    r += &(mid << half);
    r += &lo;
    r
}

impl Int {
    /// Recursive half-split multiplication (four sub-products per level).
    pub fn mul_subdiv(&self, n2: &Int) -> Int {
        log::debug!("mul_subdiv - {} x {} digits", self.width(), n2.width());
        subdiv(&self.mag, &n2.mag).with_sign(self.sign * n2.sign)
    }

    /// Karatsuba multiplication (three sub-products per level).
    pub fn mul_karatsuba(&self, n2: &Int) -> Int {
        log::debug!("mul_karatsuba - {} x {} digits", self.width(), n2.width());
        karatsuba(&self.mag, &n2.mag).with_sign(self.sign * n2.sign)
    }

    /// Digit-table multiplication.
    ///
    /// Precomputes `self * n` for every digit value `n` in `[0, MOD)`, then sums the
    /// table rows selected by the digits of `n2`, each shifted into position. The table
    /// costs `O(MOD)` time and space up front, so this only pays off for small radices.
    pub fn mul_digit_table(&self, n2: &Int) -> Int {
        log::debug!("mul_digit_table - {} x {} digits", self.width(), n2.width());
        let table: Vec<Int> = (0..DIGIT_TABLE_LEN as Digit)
            .map(|n| Int::from_mag(mag::mul_digit(&self.mag, n)))
            .collect();
        log::trace!("mul_digit_table - built {} rows", table.len());
        let mut acc = Int::zero();
        for (i, &n) in n2.mag.iter().enumerate() {
            acc += &(&table[n as usize] << i);
        }
        acc.with_sign(self.sign * n2.sign)
    }
}

// '*' uses the digit table.
impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, n2: &Int) -> Int {
        self.mul_digit_table(n2)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, n2: Int) -> Int {
        self.mul_digit_table(&n2)
    }
}

/// The available multiplication strategies, for callers that compare them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Multiplier {
    Subdivision,
    Karatsuba,
    DigitTable,
}

impl Multiplier {
    pub const ALL: [Multiplier; 3] = [Multiplier::Subdivision, Multiplier::Karatsuba, Multiplier::DigitTable];

    pub fn name(&self) -> &'static str {
        match self {
            Multiplier::Subdivision => "Halving",
            Multiplier::Karatsuba => "Karatsuba",
            Multiplier::DigitTable => "Caching",
        }
    }

    pub fn apply(&self, x: &Int, y: &Int) -> Int {
        match self {
            Multiplier::Subdivision => x.mul_subdiv(y),
            Multiplier::Karatsuba => x.mul_karatsuba(y),
            Multiplier::DigitTable => x.mul_digit_table(y),
        }
    }
}
