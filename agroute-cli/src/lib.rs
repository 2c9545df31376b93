//! A crate which provides pragmatic json format, configuration and input validation on top of
//! `agroute-core`. The `agroute` binary exposes this functionality as command line interface.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub use agroute_core as core;

pub mod extensions;
pub mod format;
pub mod validation;
