use crate::block_on;
use async_std::sync::RwLock;
use clap::{crate_version, Args, Command};
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    pub static ref ARGUMENTS: RwLock<Arguments> = RwLock::new(Arguments::default());
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Arguments {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub registry: Option<PathBuf>,
    pub batch: Option<PathBuf>,
    pub strip: bool,
}

#[derive(Args)]
#[clap(version, long_about = None)]
struct MyArgs {
    #[clap(long, action)]
    strip: bool,
    #[clap(long, short)]
    input: Option<PathBuf>,
    #[clap(long, short)]
    output: Option<PathBuf>,
    #[clap(long, short)]
    registry: Option<PathBuf>,
    #[clap(long, short, conflicts_with_all = ["input", "strip"])]
    batch: Option<PathBuf>,
}

pub fn parse_cli(name: &str, description: Option<&str>, author: Option<&str>) {
    let cmd = command(name, description, author);
    let matches = cmd.get_matches();

    let input: Option<PathBuf> = matches.get_one("input").cloned();
    let output: Option<PathBuf> = matches.get_one("output").cloned();
    let registry: Option<PathBuf> = matches.get_one("registry").cloned();
    let batch: Option<PathBuf> = matches.get_one("batch").cloned();

    let strip = if let Some(&f) = matches.get_one::<bool>("strip") {
        f
    } else {
        false
    };

    block_on(async move {
        let mut args = ARGUMENTS.write().await;
        *args = Arguments {
            input,
            output,
            registry,
            batch,
            strip,
        };
    });
}

pub fn command(name: &str, description: Option<&str>, author: Option<&str>) -> Command {
    let name = Box::leak(Box::new(name.to_owned()));
    let description = Box::leak(Box::new(description.map(ToOwned::to_owned)));
    let author = Box::leak(Box::new(author.map(ToOwned::to_owned)));

    let mut cmd = MyArgs::augment_args(
        Command::new(name.as_str())
            .bin_name(name.as_str())
            .version(crate_version!()),
    );

    if let Some(description) = description.as_ref().map(String::as_str) {
        cmd = cmd.about(description);
    }

    if let Some(author) = author.as_ref().map(String::as_str) {
        cmd = cmd.author(author);
    }

    cmd
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn command_accepts_transform_flags() {
        let cmd = command("emojify", Some("test"), None);
        let matches = cmd
            .try_get_matches_from(["emojify", "--strip", "-i", "in.txt", "-o", "out.txt"])
            .unwrap();

        assert!(matches.get_one::<bool>("strip").copied().unwrap());
        assert_eq!(
            Some(&PathBuf::from("in.txt")),
            matches.get_one::<PathBuf>("input")
        );
    }

    #[test]
    fn batch_conflicts_with_inline_transform() {
        let cmd = command("emojify", None, None);
        let result = cmd.try_get_matches_from(["emojify", "--batch", "job.toml", "--strip"]);
        assert!(result.is_err());
    }
}
