// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use alphashift::cli::{Cli, RunOptions};
use alphashift::config::{load_config, Config};
use alphashift::observability::messages::pipeline::StageMetadataReported;
use alphashift::observability::messages::StructuredLog;
use alphashift::Pipeline;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", Cli::version_text());
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        tracing::debug!("run failed: {:?}", e);
        eprintln!("[error] {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let options = cli.resolve(config);

    let raw = read_input(&options)?;

    let pipeline = Pipeline::new(options.cipher);
    let output = pipeline.run(&raw);

    for (stage, metadata) in output.metadata.iter() {
        StageMetadataReported {
            stage: *stage,
            metadata,
        }
        .log();
    }

    write_output(&options, &output.text)
}

fn read_input(options: &RunOptions) -> Result<String> {
    let bytes = match &options.input {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read from stdin")?;
            buffer
        }
    };
    // invalid sequences become U+FFFD, which transliteration drops like any
    // other non-alphanumeric byte
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(options: &RunOptions, text: &str) -> Result<()> {
    match &options.output {
        Some(path) => write_file(path, text),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text).context("failed to write to stdout")?;
            handle.flush().context("failed to flush stdout")
        }
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, format!("{}\n", text))
        .with_context(|| format!("failed to write output file '{}'", path.display()))
}
