// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cli;           // command line surface
pub mod config;        // config files
pub mod errors;        // error handling
pub mod observability;
pub mod pipeline;      // stage composition + `process`
pub mod processors;    // transliterate + caesar cipher
pub mod traits;        // processor abstraction

pub use pipeline::{process, CipherRequest, Pipeline};
pub use processors::CipherMode;
