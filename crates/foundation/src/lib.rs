//! Geographic and time primitives shared by the content and journey crates.

pub mod math;
pub mod time;

pub use math::*;
pub use time::*;
