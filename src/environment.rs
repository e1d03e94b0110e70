use std::fmt;

use lazy_static::lazy_static;
use thiserror::Error;

/// Execution context the crate was loaded into. Exactly one downstream
/// implementation is bound to the crate surface per context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Client,
    Server,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("neither a client nor a server context is present")]
    Undetermined,
}

#[cfg(target_arch = "wasm32")]
pub fn is_client() -> bool {
    web_sys::window().is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_client() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub fn is_server() -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_server() -> bool {
    true
}

fn detect() -> Result<Environment, EnvironmentError> {
    match (is_client(), is_server()) {
        (true, false) => Ok(Environment::Client),
        (false, true) => Ok(Environment::Server),
        // wasm32 build running without a DOM (worker, non-browser host)
        _ => Err(EnvironmentError::Undetermined),
    }
}

lazy_static! {
    static ref DETECTED: Result<Environment, EnvironmentError> = detect();
}

impl Environment {
    /// Detected context for this process. Computed once, every later call
    /// observes the same value.
    pub fn detect() -> Result<Self, EnvironmentError> {
        DETECTED.clone()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Client => write!(f, "client"),
            Environment::Server => write!(f, "server"),
        }
    }
}
