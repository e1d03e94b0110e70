use core::future::Future;

use web_sys::{Document, HtmlElement};
use web_time::Instant;

use crate::environment::Environment;
use crate::feed::Feed;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::EmojiInitError;

fn init_platform() {
    console_error_panic_hook::set_once();
    console_log::init().expect("Failed to initialize console_log");
}

pub fn block_on<F: Future<Output = ()> + 'static>(fut: F) {
    wasm_bindgen_futures::spawn_local(fut);
}

/// Handle on the surrounding page that rendered messages are appended to.
pub struct Stage {
    pub document: Document,
    pub body: HtmlElement,
}

impl Stage {
    pub fn acquire() -> anyhow::Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| anyhow::anyhow!("Stage::acquire: no global `window` exists"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("Stage::acquire: window has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("Stage::acquire: document has no body"))?;

        Ok(Self { document, body })
    }
}

fn init_module(registry_src: &str) -> Result<(Environment, Registry), EmojiInitError> {
    let environment = Environment::detect()?;
    let registry = Registry::new(registry_src)?;
    Ok((environment, registry))
}

pub fn emoji_main<T: Feed>(registry_src: &'static str, mut feed: T) {
    init_platform();

    let start = Instant::now();
    let (environment, registry) =
        init_module(registry_src).expect("failed to initialize emoji module");
    log::info!(
        "emotext::client::emoji_main: registry {:?} ({} emoji) ready in {} context after {:?}",
        registry.name(),
        registry.len(),
        environment,
        start.elapsed(),
    );

    let stage = Stage::acquire().expect("no DOM stage available");

    block_on(async move {
        let renderer = Renderer::new(&registry);
        while let Some(message) = feed.next_message() {
            if let Err(err) = renderer.render_into(&stage, &message) {
                log::error!("emotext::client::emoji_main: failed to render message: {err:?}");
            }
        }
    });
}

#[cfg(test)]
mod test {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::init_module;
    use crate::environment::Environment;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_build_is_client() {
        assert_eq!(Ok(Environment::Client), Environment::detect());
    }

    #[wasm_bindgen_test]
    fn init_module_builds_registry() {
        let document = r#"
            [registry]
            name = "test"
        "#;

        let (environment, registry) = init_module(document).unwrap();
        assert_eq!("client", environment.to_string());
        assert_eq!("test", registry.name());
    }
}
