// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::{Processor, ProcessorRequest, ProcessorResponse};

const UPPERCASE_LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// English names of the decimal digits, indexed by digit value.
const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Transliterate a single 8-bit character.
///
/// Letters map to their uppercase form, digits to their English name in
/// uppercase, and everything else to the empty string.
///
/// ```
/// use alphashift::processors::transliterate_byte;
///
/// assert_eq!(transliterate_byte(b'q'), "Q");
/// assert_eq!(transliterate_byte(b'7'), "SEVEN");
/// assert_eq!(transliterate_byte(b'!'), "");
/// ```
pub fn transliterate_byte(byte: u8) -> &'static str {
    match byte {
        b'a'..=b'z' => UPPERCASE_LETTERS[(byte - b'a') as usize],
        b'A'..=b'Z' => UPPERCASE_LETTERS[(byte - b'A') as usize],
        b'0'..=b'9' => DIGIT_WORDS[(byte - b'0') as usize],
        _ => "",
    }
}

/// Transliterate a single character. Anything outside ASCII is dropped.
pub fn transliterate_char(c: char) -> &'static str {
    if c.is_ascii() {
        transliterate_byte(c as u8)
    } else {
        ""
    }
}

/// Transliterate a whole string, preserving character order.
pub fn transliterate(text: &str) -> String {
    transliterate_bytes(text.as_bytes())
}

/// Transliterate raw bytes. Bytes of multi-byte UTF-8 sequences are never
/// ASCII, so this agrees with [`transliterate`] on any valid string.
pub fn transliterate_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        out.push_str(transliterate_byte(byte));
    }
    out
}

/// Pipeline stage that normalizes raw text into uppercase letters.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransliterateProcessor;

impl TransliterateProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for TransliterateProcessor {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse {
        let start_msg = ProcessorExecutionStarted {
            processor_id: self.name(),
            input_size: req.payload.len(),
        };

        let span = start_msg.span("processor_execution");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        let mut dropped = 0usize;
        let mut digits = 0usize;
        for byte in req.payload.bytes() {
            if byte.is_ascii_digit() {
                digits += 1;
            } else if !byte.is_ascii_alphabetic() {
                dropped += 1;
            }
        }

        let output = transliterate(&req.payload);

        ProcessorExecutionCompleted {
            processor_id: self.name(),
            input_size: start_msg.input_size,
            output_size: output.len(),
            duration: start_time.elapsed(),
        }
        .log();

        ProcessorResponse::new(output)
            .with_metadata("input_bytes", req.payload.len())
            .with_metadata("dropped_bytes", dropped)
            .with_metadata("digits_expanded", digits)
    }

    fn name(&self) -> &'static str {
        "transliterate"
    }
}
