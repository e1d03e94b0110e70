/// Source of messages for `emoji_main`. Implementations yield lines until
/// exhausted; the active environment module decides where rendered output
/// goes.
pub trait Feed: 'static {
    fn next_message(&mut self) -> Option<String>;
}

/// Feed over a fixed batch of lines, in order.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    lines: std::collections::VecDeque<String>,
}

impl Lines {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Feed for Lines {
    fn next_message(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
