// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command line arguments and their resolution against a config file.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::Config;
use crate::pipeline::CipherRequest;

/// Encrypts/Decrypts input alphanumeric text using classical ciphers.
///
/// Input is transliterated to uppercase letters (digits are spelled out,
/// everything else is dropped) before any cipher is applied.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "alphashift", disable_version_flag = true)]
pub struct Cli {
    /// Read text to be processed from FILE (stdin if not supplied)
    #[arg(short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write processed text to FILE (stdout if not supplied)
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Encrypt with the Caesar cipher using KEY
    #[arg(short = 'e', long = "encrypt", value_name = "KEY", conflicts_with = "decrypt")]
    pub encrypt: Option<u64>,

    /// Decrypt with the Caesar cipher using KEY
    #[arg(short = 'd', long = "decrypt", value_name = "KEY")]
    pub decrypt: Option<u64>,

    /// Load defaults from a YAML or TOML config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub cipher: Option<CipherRequest>,
}

impl Cli {
    /// The cipher requested on the command line, if any.
    pub fn cipher_request(&self) -> Option<CipherRequest> {
        match (self.encrypt, self.decrypt) {
            (Some(key), _) => Some(CipherRequest::encrypt(key)),
            (None, Some(key)) => Some(CipherRequest::decrypt(key)),
            (None, None) => None,
        }
    }

    /// Merge flags over `config`. Each flag replaces the matching config value.
    ///
    /// Input and output may name the same file: the whole input is read
    /// before any output is written.
    pub fn resolve(&self, config: Config) -> RunOptions {
        RunOptions {
            input: self.input.clone().or(config.input),
            output: self.output.clone().or(config.output),
            cipher: self.cipher_request().or(config.cipher),
        }
    }

    /// Bare version number printed by `--version`.
    pub fn version_text() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::CipherMode;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_no_args() {
        let cli = parse_args(&["alphashift"]).unwrap();
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.cipher_request(), None);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_files_and_encrypt() {
        let cli = parse_args(&["alphashift", "-i", "in.txt", "-o", "out.txt", "-e", "3"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.cipher_request(), Some(CipherRequest::encrypt(3)));
    }

    #[test]
    fn test_decrypt_long_form() {
        let cli = parse_args(&["alphashift", "--decrypt", "29"]).unwrap();
        let request = cli.cipher_request().unwrap();
        assert_eq!(request.mode, CipherMode::Decrypt);
        assert_eq!(request.key, 29);
    }

    #[test]
    fn test_encrypt_and_decrypt_conflict() {
        let err = parse_args(&["alphashift", "-e", "3", "-d", "3"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_malformed_keys_rejected() {
        assert!(parse_args(&["alphashift", "-e", "three"]).is_err());
        assert!(parse_args(&["alphashift", "-e", "-3"]).is_err());
        assert!(parse_args(&["alphashift", "-d"]).is_err());
    }

    #[test]
    fn test_missing_filename_rejected() {
        assert!(parse_args(&["alphashift", "-i"]).is_err());
        assert!(parse_args(&["alphashift", "-o"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        assert!(parse_args(&["alphashift", "--version"]).unwrap().version);
        assert!(parse_args(&["alphashift", "-V"]).unwrap().version);
        assert!(!parse_args(&["alphashift"]).unwrap().version);
        assert_eq!(Cli::version_text(), "0.1.0");
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let err = parse_args(&["alphashift", "--frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse_args(&["alphashift", "-v"]).unwrap().log_filter(), "info");
        assert_eq!(parse_args(&["alphashift", "-vv"]).unwrap().log_filter(), "debug");
        assert_eq!(parse_args(&["alphashift", "-vvv"]).unwrap().log_filter(), "debug");
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            cipher: Some(CipherRequest::decrypt(5)),
            input: Some(PathBuf::from("config_in.txt")),
            output: Some(PathBuf::from("config_out.txt")),
        };
        let cli = parse_args(&["alphashift", "-e", "1", "-o", "flag_out.txt"]).unwrap();
        let options = cli.resolve(config);

        assert_eq!(options.cipher, Some(CipherRequest::encrypt(1)));
        assert_eq!(options.input, Some(PathBuf::from("config_in.txt")));
        assert_eq!(options.output, Some(PathBuf::from("flag_out.txt")));
    }

    #[test]
    fn test_config_cipher_used_when_no_flag() {
        let config = Config {
            cipher: Some(CipherRequest::decrypt(5)),
            ..Config::default()
        };
        let options = parse_args(&["alphashift"]).unwrap().resolve(config);
        assert_eq!(options.cipher, Some(CipherRequest::decrypt(5)));
    }

    #[test]
    fn test_resolve_allows_same_input_and_output() {
        let cli = parse_args(&["alphashift", "-i", "x.txt", "-o", "x.txt"]).unwrap();
        let options = cli.resolve(Config::default());
        assert_eq!(options.input, options.output);
    }
}
