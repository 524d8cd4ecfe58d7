// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline stages.
//!
//! - **transliterate**: letters to uppercase, digits to English words, drop the rest
//! - **caesar_cipher**: shift every letter by a fixed key, forward or backward

pub mod caesar_cipher;
pub mod transliterate;

pub use caesar_cipher::*;
pub use transliterate::*;
