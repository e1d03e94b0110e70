use serde::{Deserialize, Serialize};

use crate::registry::Registry;
use crate::transform;

/// What happens to recognized emoji in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Replace,
    Strip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub mode: Mode,
}

#[derive(Debug)]
pub struct Renderer<'r> {
    registry: &'r Registry,
    options: RenderOptions,
}

impl<'r> Renderer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, RenderOptions::default())
    }

    pub fn with_options(registry: &'r Registry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub(crate) fn transform(&self, text: &str) -> String {
        match self.options.mode {
            Mode::Replace => transform::replace(self.registry, text),
            Mode::Strip => transform::strip(self.registry, text),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod server;
#[cfg(target_arch = "wasm32")]
mod client;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mode_defaults_to_replace() {
        let renderer = Renderer::new(Registry::builtin());
        assert_eq!(Mode::Replace, renderer.options().mode);
        assert_eq!("🎉", renderer.transform(":tada:"));
    }

    #[test]
    fn strip_mode_removes_emoji() {
        let options = RenderOptions { mode: Mode::Strip };
        let renderer = Renderer::with_options(Registry::builtin(), options);
        assert_eq!("done ", renderer.transform("done :tada:🎉"));
    }

    #[test]
    fn mode_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Doc {
            mode: Mode,
        }

        let doc: Doc = toml::from_str(r#"mode = "strip""#).unwrap();
        assert_eq!(Mode::Strip, doc.mode);
    }
}
