#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod calendar;
mod checked;
mod error;
mod ext;
mod fmt;
pub mod layout;
mod smalltime;

pub use crate::error::Error;
pub use crate::smalltime::Smalltime;

#[cfg(test)]
fn random_data<T>(n: usize) -> std::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}
