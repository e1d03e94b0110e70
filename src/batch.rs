use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Registry;
use crate::render::{Mode, RenderOptions, Renderer};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("BatchJob::new: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("BatchJob::from_file: failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetadata {
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMessage {
    pub text: String,
}

/// Job files are TOML
/// The job block names the run and picks the transform mode
/// ("replace" or "strip", replace by default)
/// Each [[message]] block holds one line of text to process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchJob {
    pub job: BatchMetadata,
    #[serde(rename = "message", default)]
    pub messages: Vec<BatchMessage>,
}

impl BatchJob {
    pub fn new(data: impl AsRef<str>) -> Result<Self, BatchError> {
        Ok(toml::from_str(data.as_ref())?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let data = read_to_string(path)?;
        Self::new(data)
    }
}

/// Render every message in the job with its transform mode.
pub fn run(job: &BatchJob, registry: &Registry) -> Vec<String> {
    log::debug!(
        "emotext::batch::run: job {:?}, {} messages, mode {:?}",
        job.job.name,
        job.messages.len(),
        job.job.mode,
    );

    let options = RenderOptions { mode: job.job.mode };
    let renderer = Renderer::with_options(registry, options);

    job.messages
        .iter()
        .map(|message| renderer.render_message(&message.text))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn job_empty_string() {
        assert!(BatchJob::new("").is_err());
    }

    #[test]
    fn job_defaults_to_replace_mode() {
        let document = r#"
            [job]
            name = "test"
        "#;

        let job = BatchJob::new(document).unwrap();

        assert_eq!(Mode::Replace, job.job.mode);
        assert!(job.messages.is_empty());
    }

    #[test]
    fn job_runs_messages_in_order() {
        let document = r#"
            [job]
            name = "test"

            [[message]]
            text = "hello :wave:"

            [[message]]
            text = "bye :wave:"
        "#;

        let job = BatchJob::new(document).unwrap();
        let lines = run(&job, Registry::builtin());

        assert_eq!(vec!["hello 👋".to_owned(), "bye 👋".to_owned()], lines);
    }

    #[test]
    fn job_strip_mode() {
        let document = r#"
            [job]
            name = "test"
            mode = "strip"

            [[message]]
            text = "quiet :tada: please"
        "#;

        let job = BatchJob::new(document).unwrap();
        let lines = run(&job, Registry::builtin());

        assert_eq!(vec!["quiet  please".to_owned()], lines);
    }
}
