pub mod config;
pub mod store;
pub mod tools;
pub mod traits;

pub use config::Config;
pub use store::{InitSeed, StoreError, TaskUpdate, TrackMetadata, TrackStatus, TrackStore};
pub use tools::{ToolRegistry, register_conductor_tools};
pub use traits::*;
