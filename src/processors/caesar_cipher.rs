// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fmt;
use std::time::Instant;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::{Processor, ProcessorRequest, ProcessorResponse};

/// Number of letters the cipher wraps around.
pub const ALPHABET_LEN: u64 = 26;

/// Direction of the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherMode {
    Encrypt,
    Decrypt,
}

impl CipherMode {
    /// Signed alphabet offset for `key` in this direction, in `-25..=25`.
    pub fn offset(self, key: u64) -> i32 {
        let shift = (key % ALPHABET_LEN) as i32;
        match self {
            CipherMode::Encrypt => shift,
            CipherMode::Decrypt => -shift,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::Encrypt => "encrypt",
            CipherMode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a Caesar shift of `key` positions to `text`.
///
/// `text` must consist solely of uppercase letters `A`-`Z`, which is what
/// the transliteration stage produces. Any other character is an internal
/// invariant failure and panics.
///
/// ```
/// use alphashift::processors::{shift, CipherMode};
///
/// assert_eq!(shift("HELLO", 3, CipherMode::Encrypt), "KHOOR");
/// assert_eq!(shift("KHOOR", 3, CipherMode::Decrypt), "HELLO");
/// ```
pub fn shift(text: &str, key: u64, mode: CipherMode) -> String {
    let offset = mode.offset(key);
    text.chars().map(|letter| shift_letter(letter, offset)).collect()
}

fn shift_letter(letter: char, offset: i32) -> char {
    assert!(
        letter.is_ascii_uppercase(),
        "shift cipher received non-transliterated character {:?}",
        letter
    );
    let index = (letter as u8 - b'A') as i32;
    let shifted = (index + offset).rem_euclid(ALPHABET_LEN as i32);
    (b'A' + shifted as u8) as char
}

/// Pipeline stage applying a Caesar shift with a fixed key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipherProcessor {
    key: u64,
    mode: CipherMode,
}

impl CaesarCipherProcessor {
    pub fn new(key: u64, mode: CipherMode) -> Self {
        Self { key, mode }
    }
}

impl Processor for CaesarCipherProcessor {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            input_size: req.payload.len(),
        };

        let span = start_msg.span("processor_execution");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let output = shift(&req.payload, self.key, self.mode);

        ProcessorExecutionCompleted {
            processor_id: self.name(),
            input_size: start_msg.input_size,
            output_size: output.len(),
            duration: start_time.elapsed(),
        }
        .log();

        ProcessorResponse::new(output)
            .with_metadata("mode", self.mode)
            .with_metadata("effective_shift", self.key % ALPHABET_LEN)
    }

    fn name(&self) -> &'static str {
        "caesar_cipher"
    }
}
