//! Bouncii (workspace facade crate).
//!
//! Re-exports the member crates as `bouncii::{types, core, input, term}` and
//! hosts the [`driver`] loop that ties them together.

pub use bouncii_core as core;
pub use bouncii_input as input;
pub use bouncii_term as term;
pub use bouncii_types as types;

pub mod driver;

pub use driver::{Driver, Flow, Pacer, ThreadPacer};
