pub mod error;
pub mod lagrange;
mod macros;
pub mod prelude;
pub mod radix;
pub mod traits;

pub use num_bigint;
