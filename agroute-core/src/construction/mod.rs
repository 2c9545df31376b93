//! Contains logic to build candidate links between facilities of adjacent echelons.

mod synthesis;
pub use self::synthesis::*;
