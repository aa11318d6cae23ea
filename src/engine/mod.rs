//! Pure calculation engine
//!
//! Every function in here is a stateless mapping from explicit inputs to
//! a numeric output: no I/O, no caching, no ambient state. The canonical
//! internal unit is yearly; amounts are normalized before they are ever
//! summed, so iteration order cannot affect a result. Callers may invoke
//! anything here concurrently and recompute on every data change.

pub mod aggregate;
pub mod allocate;
pub mod breakdown;
pub mod normalize;

pub use breakdown::PersonBreakdown;
pub use normalize::normalize;
