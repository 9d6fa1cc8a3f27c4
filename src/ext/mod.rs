//! Conversions to and from other crates' types, each behind a feature of the same name.

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "jiff")]
mod jiff;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "time")]
mod time;
