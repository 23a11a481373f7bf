mod error;
mod area;
mod coefficient;

pub use error::*;
pub use area::*;
pub use coefficient::*;
