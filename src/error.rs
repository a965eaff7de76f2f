#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid digit {digit}; expected a value in [0, {radix})")]
    InvalidDigit { digit: i64, radix: u64 },
    #[error("invalid sign {0}; expected 1 or -1")]
    InvalidSign(i32),
    #[error("invalid shift {0}; shift count must not be negative")]
    InvalidShift(i64),
    #[error("invalid integer literal '{0}'")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
