use emotext::prelude::*;
use emotext_macros::emoji_main;

const LINES: [&str; 6] = [
    "welcome to the shoutbox :wave:",
    "deploy finished :rocket: :sparkles:",
    "coffee break :coffee:",
    "lgtm, ship it :shipit:",
    "that demo was :fire:",
    ":tada: see you next week",
];

#[derive(Debug, Default)]
pub struct Shoutbox {
    sent: usize,
}

impl Feed for Shoutbox {
    fn next_message(&mut self) -> Option<String> {
        let line = LINES.get(self.sent)?;
        self.sent += 1;
        log::debug!("shoutbox: sending line {}/{}", self.sent, LINES.len());
        Some((*line).to_owned())
    }
}

emoji_main! { "/res/shoutbox.toml", Shoutbox }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn feed_drains_every_line() {
        let mut feed = Shoutbox::default();
        let mut count = 0;
        while feed.next_message().is_some() {
            count += 1;
        }
        assert_eq!(LINES.len(), count);
    }

    #[test]
    fn demo_registry_covers_demo_shortcodes() {
        let registry = Registry::new(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/res/shoutbox.toml"
        )))
        .unwrap();

        for line in LINES {
            for segment in transform::parse(line) {
                if let Segment::Shortcode(name) = segment {
                    assert!(registry.lookup(name).is_some(), "missing {name:?}");
                }
            }
        }
    }
}
