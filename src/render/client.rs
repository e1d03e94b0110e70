use wasm_bindgen::JsValue;

use super::{Mode, Renderer};
use crate::client::Stage;
use crate::transform::{self, Segment};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn js_err(context: &str, err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{context}: {err:?}")
}

impl<'r> Renderer<'r> {
    /// Render a message to HTML markup. Text is escaped; known shortcodes
    /// become emoji spans carrying the shortname as their title.
    pub fn render_message(&self, text: &str) -> String {
        if self.options().mode == Mode::Strip {
            return escape(&self.transform(text));
        }

        let mut out = String::with_capacity(text.len());
        for segment in transform::parse(text) {
            match segment {
                Segment::Text(t) => out.push_str(&escape(t)),
                Segment::Shortcode(name) => match self.registry().lookup(name) {
                    Some(emoji) => {
                        out.push_str("<span class=\"emoji\" title=\":");
                        out.push_str(&emoji.shortname);
                        out.push_str(":\">");
                        out.push_str(&emoji.glyph);
                        out.push_str("</span>");
                    }
                    None => {
                        out.push_str(&escape(&format!(":{name}:")));
                    }
                },
            }
        }
        out
    }

    /// Append a rendered message line to the stage's document body.
    pub fn render_into(&self, stage: &Stage, text: &str) -> anyhow::Result<()> {
        let line = stage
            .document
            .create_element("div")
            .map_err(|err| js_err("Renderer::render_into: failed to create line", err))?;
        if transform::is_emoji_only(self.registry(), text) {
            line.set_class_name("message big-emoji");
        } else {
            line.set_class_name("message");
        }

        if self.options().mode == Mode::Strip {
            line.set_text_content(Some(&self.transform(text)));
        } else {
            for segment in transform::parse(text) {
                match segment {
                    Segment::Text(t) => {
                        let node = stage.document.create_text_node(t);
                        line.append_child(&node).map_err(|err| {
                            js_err("Renderer::render_into: failed to append text", err)
                        })?;
                    }
                    Segment::Shortcode(name) => match self.registry().lookup(name) {
                        Some(emoji) => {
                            let span = stage.document.create_element("span").map_err(|err| {
                                js_err("Renderer::render_into: failed to create span", err)
                            })?;
                            span.set_class_name("emoji");
                            span.set_attribute("title", &format!(":{}:", emoji.shortname))
                                .map_err(|err| {
                                    js_err("Renderer::render_into: failed to set title", err)
                                })?;
                            span.set_text_content(Some(&emoji.glyph));
                            line.append_child(&span).map_err(|err| {
                                js_err("Renderer::render_into: failed to append span", err)
                            })?;
                        }
                        None => {
                            let node = stage.document.create_text_node(&format!(":{name}:"));
                            line.append_child(&node).map_err(|err| {
                                js_err("Renderer::render_into: failed to append text", err)
                            })?;
                        }
                    },
                }
            }
        }

        stage
            .body
            .append_child(&line)
            .map_err(|err| js_err("Renderer::render_into: failed to append line", err))?;
        Ok(())
    }
}
