//! Scale area, delay, energy and power of a circuit between VLSI process nodes.
//!
//! Area uses a table of ratios between technology sizes. Delay, energy and
//! power use per-node polynomials of the supply voltage.
pub mod node;
pub mod metric;
pub mod table;
pub mod convert;
pub mod error;
pub use error::*;
pub use convert::convert;
