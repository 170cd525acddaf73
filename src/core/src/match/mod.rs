pub mod result;
pub mod selection;
pub mod squad;

pub use result::*;
pub use selection::*;
pub use squad::*;
