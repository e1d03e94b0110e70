use std::fs::{read_to_string, write};
use std::io::Read;
use std::path::Path;

use emotext::batch::{self, BatchJob};
use emotext::cli::{parse_cli, ARGUMENTS};
use emotext::registry::Registry;
use emotext::render::{Mode, RenderOptions, Renderer};

fn emit(output: Option<&Path>, lines: Vec<String>) {
    match output {
        Some(path) => {
            let mut data = lines.join("\n");
            data.push('\n');
            write(path, data).expect("failed to write output file");
        }
        None => {
            for line in lines {
                println!("{line}");
            }
        }
    }
}

fn main() {
    env_logger::init();
    parse_cli(
        "emojify",
        Some("Replace or strip emoji shortcodes in text"),
        None,
    );

    let args = pollster::block_on(async { ARGUMENTS.read().await.clone() });

    let custom;
    let registry = match args.registry {
        Some(ref path) => {
            custom = Registry::from_file(path).expect("failed to load registry file");
            &custom
        }
        None => Registry::builtin(),
    };

    if let Some(ref path) = args.batch {
        let job = BatchJob::from_file(path).expect("failed to load batch job");
        emit(args.output.as_deref(), batch::run(&job, registry));
        return;
    }

    let input = match args.input {
        Some(ref path) => read_to_string(path).expect("failed to read input file"),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .expect("failed to read stdin");
            buffer
        }
    };

    let mode = if args.strip { Mode::Strip } else { Mode::Replace };
    let renderer = Renderer::with_options(registry, RenderOptions { mode });
    let lines: Vec<String> = input
        .lines()
        .map(|line| renderer.render_message(line))
        .collect();
    emit(args.output.as_deref(), lines);
}
