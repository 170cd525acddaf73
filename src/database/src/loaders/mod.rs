mod pitch;
mod roster;

pub use pitch::*;
pub use roster::*;
