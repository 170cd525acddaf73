pub mod leadership;
pub mod selector;

pub use leadership::*;
pub use selector::*;
