//! Arbitrary-precision signed decimal arithmetic
//!
//! This library provides a single type, [`Decimal`], an exact base-10 number
//! of unbounded magnitude and precision:
//!
//! - **Exact integer construction**: every `i64`/`u64` (and smaller) converts
//!   without loss
//! - **Exact decimal math**: add, subtract, multiply and compare never round
//! - **Literal parsing and canonical formatting**: `"123.45"`, `"-5e-3"`,
//!   `"1.7E+10"` all parse; formatting always round-trips to the same value
//! - **Truncating division**: non-terminating quotients are cut off after a
//!   configurable number of extra fractional digits
//! - **no_std compatible**: only requires `alloc`
//! - **Serde support**: string form for human-readable formats, raw parts for
//!   binary ones
//!
//! ## Example
//!
//! ```rust
//! use bigdec::Decimal;
//!
//! let price: Decimal = "123456789.7e+50".parse().unwrap();
//! assert_eq!(price.to_string(), "1234567897e+49");
//!
//! let q = Decimal::from(1000) / "0.2".parse().unwrap();
//! assert_eq!(q, Decimal::from(5000));
//!
//! let r = Decimal::from(-13) % Decimal::from(3);
//! assert_eq!(r, Decimal::from(-1));
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

extern crate alloc;

mod decimal;

pub use decimal::Decimal;

use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("\"{0}\" is not a valid decimal")]
    InvalidFormat(String),

    #[error("overflow: value too large to fit in an i64")]
    Overflow,

    #[error("underflow: value too small to fit in an i64")]
    Underflow,

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = core::result::Result<T, DecimalError>;
