pub mod analyzer;
pub mod profile;
pub mod report;

pub use analyzer::*;
pub use profile::*;
pub use report::*;
