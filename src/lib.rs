use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod batch;
pub mod environment;
pub mod feed;
pub mod registry;
pub mod render;
pub mod transform;

#[derive(Debug, Error)]
pub enum EmojiInitError {
    #[error("failed to detect execution environment: {0}")]
    Environment(#[from] environment::EnvironmentError),
    #[error("failed to load emoji registry: {0}")]
    Registry(#[from] registry::RegistryError),
}

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub mod prelude {
    pub use crate::environment::Environment;
    pub use crate::feed::{Feed, Lines};
    pub use crate::registry::{Emoji, Registry, RegistryError};
    pub use crate::render::{Mode, RenderOptions, Renderer};
    pub use crate::transform::{self, Segment};
    pub use crate::EmojiInitError;

    pub use async_std::sync::Mutex;
    pub use std::sync::Arc;
}

#[cfg(not(target_arch = "wasm32"))]
mod server;
#[cfg(target_arch = "wasm32")]
mod client;

#[cfg(target_arch = "wasm32")]
pub use client::*;

#[cfg(not(target_arch = "wasm32"))]
pub use server::*;
