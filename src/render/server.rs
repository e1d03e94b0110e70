use super::Renderer;

impl<'r> Renderer<'r> {
    /// Render a message to plain text for storage or notification delivery.
    pub fn render_message(&self, text: &str) -> String {
        let rendered = self.transform(text);
        log::trace!(
            "emotext::render::render_message: {} -> {} bytes",
            text.len(),
            rendered.len()
        );
        rendered
    }
}
