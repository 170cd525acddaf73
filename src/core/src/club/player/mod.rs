pub mod builder;
pub mod player;
pub mod role;
pub mod skills;

pub use builder::*;
pub use player::*;
pub use role::*;
pub use skills::*;
