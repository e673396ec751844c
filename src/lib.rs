pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod math;
pub mod renderer;
pub mod scenes;
pub mod scroll;
pub mod texture;
pub mod types;

pub use context::SceneContext;
