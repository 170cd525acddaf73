pub mod club;
pub mod error;
pub mod pitch;
pub mod r#match;
pub mod utils;

pub use club::*;
pub use error::*;
pub use pitch::*;
pub use r#match::*;
pub use utils::*;
