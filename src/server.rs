use core::future::Future;

use web_time::Instant;

use crate::environment::Environment;
use crate::feed::Feed;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::EmojiInitError;

fn init_platform() {
    env_logger::init();
}

pub fn block_on<F: Future<Output = ()> + 'static>(fut: F) {
    pollster::block_on(fut);
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
        "emotext::server::emoji_main: registry {:?} ({} emoji) ready in {} context after {:?}",
        registry.name(),
        registry.len(),
        environment,
        start.elapsed(),
    );

    block_on(async move {
        let renderer = Renderer::new(&registry);
        while let Some(message) = feed.next_message() {
            println!("{}", renderer.render_message(&message));
        }
    });
}
