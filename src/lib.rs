use std::io::Write;
use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;

pub fn init_logger(is_test: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                     "{} [{}] - {}",
                     Local::now().format("%Y-%m-%dT%H:%M:%S"),
                     record.level(),
                     record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .is_test(is_test)
        .format_timestamp_secs()
        .try_init();
}

pub type Digit = u64;

// Width, in decimal places, of one digit group. Display pads every group to this width.
pub const ZEROS: u32 = 1;
// The radix. Every stored digit lies in [0, MOD).
pub const MOD: Digit = (10 as Digit).pow(ZEROS);
// One precomputed row per possible digit value; only practical for small radices.
pub const DIGIT_TABLE_LEN: usize = MOD as usize;

// MOD * MOD + MOD must fit in a Digit so single digit products and carries never overflow.
const _: () = assert!(MOD >= 2 && ZEROS <= 9);

pub const SIGN_POS: i32 = 1;
pub const SIGN_NEG: i32 = -1;

#[derive(Clone)]
pub struct Int {
    // sign = 1 for positive integers and for zero; -1 for negative integers.
    // Zero is never negative. This invariant is maintained by all operations.
    sign: i32,
    // The magnitude of the integer, least-significant digit first.
    // The most-significant digit is never zero; zero is the empty sequence.
    mag: Vec<Digit>,
}

pub mod error;
pub mod mag;
pub mod int;
pub mod mul;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use mul::Multiplier;
