mod admin;
mod custom;
mod fixed;
pub mod types;

pub use admin::*;
pub use custom::*;
pub use fixed::*;
