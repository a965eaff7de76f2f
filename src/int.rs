use std::cmp::Ordering;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Neg, Shl, ShlAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::{mag, Digit, Error, Int, Result, MOD, SIGN_NEG, SIGN_POS, ZEROS};

impl Int {
    fn check_sign(sign: i32) -> Result<i32> {
        match sign {
            SIGN_POS | SIGN_NEG => Ok(sign),
            _ => Err(Error::InvalidSign(sign)),
        }
    }

    fn check_digit(d: i64) -> Result<Digit> {
        if d < 0 || d as u64 >= MOD {
            log::debug!("Int::check_digit - reject {d}");
            Err(Error::InvalidDigit { digit: d, radix: MOD })
        } else {
            Ok(d as Digit)
        }
    }

    fn valid(&self) {
        #[cfg(any(debug_assertions, release_test))]
        {
            assert!(self.sign == SIGN_POS || self.sign == SIGN_NEG, "Int::valid - invalid sign {}", self.sign);
            assert!(self.mag.last() != Some(&0), "Int::valid - leading zero digit");
            assert!(!self.mag.is_empty() || self.sign == SIGN_POS, "Int::valid - negative zero");
            assert!(self.mag.iter().all(|&d| d < MOD), "Int::valid - digit out of range");
        }
    }

    // Pops the most-significant zero digits; an empty magnitude is always positive.
    // Idempotent.
    pub(crate) fn canonicalize(&mut self) {
        mag::trim(&mut self.mag);
        if self.mag.is_empty() {
            self.sign = SIGN_POS;
        }
        self.valid();
    }

    // A non-negative value over the given little-endian digits; the building block of
    // every arithmetic result. Digits must already lie in [0, MOD).
    pub(crate) fn from_mag(mag: Vec<Digit>) -> Int {
        let mut n = Int { sign: SIGN_POS, mag };
        n.canonicalize();
        n
    }

    // Assigns the sign of a product computed on magnitudes. Zero stays positive.
    pub(crate) fn with_sign(mut self, sign: i32) -> Int {
        self.sign = sign;
        self.canonicalize();
        self
    }

    pub fn zero() -> Int {
        Int { sign: SIGN_POS, mag: vec![] }
    }

    pub fn one() -> Int {
        Int::from_mag(vec![1])
    }

    /// Builds a value from its digits, most-significant first.
    ///
    /// Fails with [`Error::InvalidDigit`] when a digit is outside `[0, MOD)` and with
    /// [`Error::InvalidSign`] when `sign` is neither `1` nor `-1`.
    pub fn from_be_digits<I: IntoIterator<Item = i64>>(parts: I, sign: i32) -> Result<Int> {
        let sign = Self::check_sign(sign)?;
        let mut le = parts.into_iter().map(Self::check_digit).collect::<Result<Vec<Digit>>>()?;
        le.reverse();
        Ok(Int::from_mag(le).with_sign(sign))
    }

    /// Builds a value from its digits, least-significant first.
    pub fn from_le_digits(digits: Vec<Digit>, sign: i32) -> Result<Int> {
        let sign = Self::check_sign(sign)?;
        if let Some(&d) = digits.iter().find(|&&d| d >= MOD) {
            return Err(Error::InvalidDigit { digit: d as i64, radix: MOD });
        }
        Ok(Int::from_mag(digits).with_sign(sign))
    }

    pub fn from_i64(v: i64) -> Int {
        let mut m = v.unsigned_abs();
        let mut digits = vec![];
        while m > 0 {
            digits.push(m % MOD);
            m /= MOD;
        }
        let sign = if v < 0 { SIGN_NEG } else { SIGN_POS };
        Int::from_mag(digits).with_sign(sign)
    }

    pub fn sign(&self) -> i32 {
        self.sign
    }

    // little-endian
    pub fn digits(&self) -> &[Digit] {
        &self.mag
    }

    pub fn width(&self) -> usize {
        self.mag.len()
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn abs(&self) -> Int {
        Int { sign: SIGN_POS, mag: self.mag.clone() }
    }

    // The single ordering primitive; equality and Ord are both derived from it.
    // A value is never less than itself. Differing signs decide on their own;
    // with equal signs the larger magnitude is the greater value, negative or not.
    pub fn less(&self, n2: &Int) -> bool {
        if std::ptr::eq(self, n2) {
            return false;
        }
        if self.sign != n2.sign {
            return self.sign < n2.sign;
        }
        mag::less(&self.mag, &n2.mag)
    }

    // sign-aware in-place addition: equal signs add magnitudes, differing signs subtract them.
    fn add_mut(&mut self, n2: &Int) {
        if self.sign == n2.sign {
            mag::add(&mut self.mag, &n2.mag);
        } else if mag::sub(&mut self.mag, &n2.mag) {
            self.sign = -self.sign;
        }
        self.canonicalize();
    }

    // mirror of add_mut: equal signs subtract magnitudes, differing signs add them.
    fn sub_mut(&mut self, n2: &Int) {
        if self.sign != n2.sign {
            mag::add(&mut self.mag, &n2.mag);
        } else if mag::sub(&mut self.mag, &n2.mag) {
            self.sign = -self.sign;
        }
        self.canonicalize();
    }

    /// Multiplies in place by `MOD^k` by prepending `k` zero digits.
    pub fn shl_digits_mut(&mut self, k: i64) -> Result<()> {
        let k = usize::try_from(k).map_err(|_| Error::InvalidShift(k))?;
        mag::shl(&mut self.mag, k);
        self.valid();
        Ok(())
    }

    pub fn shl_digits(&self, k: i64) -> Result<Int> {
        let mut r = self.clone();
        r.shl_digits_mut(k)?;
        Ok(r)
    }
}

impl std::fmt::Display for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.sign == SIGN_NEG {
            write!(f, "-")?;
        }
        for d in self.mag.iter().rev() {
            write!(f, "{:0width$}", d, width = ZEROS as usize)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Int {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Int(sign:{:+};mag:{:?};value:{})", self.sign, self.mag, self)
    }
}

impl FromStr for Int {
    type Err = Error;

    // Accepts the canonical display form: an optional '-' then decimal digits,
    // grouped into ZEROS-wide digits from the right.
    fn from_str(s: &str) -> Result<Int> {
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (SIGN_NEG, rest),
            None => (SIGN_POS, s),
        };
        if body.is_empty() || !body.bytes().all(|c| c.is_ascii_digit()) {
            log::debug!("Int::from_str - reject '{s}'");
            return Err(Error::InvalidFormat(s.to_string()));
        }
        let le: Vec<Digit> = body.as_bytes()
            .rchunks(ZEROS as usize)
            .map(|group| group.iter().fold(0, |acc: Digit, &c| acc * 10 + (c - b'0') as Digit))
            .collect();
        Int::from_le_digits(le, sign)
    }
}

impl PartialEq for Int {
    // equal iff neither is less than the other.
    fn eq(&self, n2: &Int) -> bool {
        !self.less(n2) && !n2.less(self)
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, n2: &Int) -> Option<Ordering> {
        Some(self.cmp(n2))
    }
}

impl Ord for Int {
    fn cmp(&self, n2: &Int) -> Ordering {
        if self.less(n2) {
            Ordering::Less
        } else if n2.less(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, n2: &Int) {
        self.add_mut(n2)
    }
}

impl AddAssign for Int {
    fn add_assign(&mut self, n2: Int) {
        self.add_mut(&n2)
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, n2: &Int) {
        self.sub_mut(n2)
    }
}

impl SubAssign for Int {
    fn sub_assign(&mut self, n2: Int) {
        self.sub_mut(&n2)
    }
}

impl ShlAssign<usize> for Int {
    fn shl_assign(&mut self, k: usize) {
        mag::shl(&mut self.mag, k);
        self.valid();
    }
}

// The binary operators work on a fresh copy of the left operand; a borrowed
// operand is never observably mutated.
impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, n2: &Int) -> Int {
        let mut r = self.clone();
        r.add_mut(n2);
        r
    }
}

impl Add<&Int> for Int {
    type Output = Int;

    fn add(mut self, n2: &Int) -> Int {
        self.add_mut(n2);
        self
    }
}

impl Add for Int {
    type Output = Int;

    fn add(mut self, n2: Int) -> Int {
        self.add_mut(&n2);
        self
    }
}

impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, n2: &Int) -> Int {
        let mut r = self.clone();
        r.sub_mut(n2);
        r
    }
}

impl Sub<&Int> for Int {
    type Output = Int;

    fn sub(mut self, n2: &Int) -> Int {
        self.sub_mut(n2);
        self
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(mut self, n2: Int) -> Int {
        self.sub_mut(&n2);
        self
    }
}

impl Shl<usize> for &Int {
    type Output = Int;

    fn shl(self, k: usize) -> Int {
        let mut r = self.clone();
        r <<= k;
        r
    }
}

impl Shl<usize> for Int {
    type Output = Int;

    fn shl(mut self, k: usize) -> Int {
        self <<= k;
        self
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        self.clone().with_sign(-self.sign)
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        let sign = -self.sign;
        self.with_sign(sign)
    }
}
