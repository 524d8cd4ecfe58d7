// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Composition of the transliteration and cipher stages.
//!
//! ```text
//! raw text → transliterate → [caesar_cipher] → final text
//! ```
//!
//! The transliteration stage always runs first, so the cipher stage only
//! ever sees uppercase letters.

use serde::Deserialize;
use std::time::Instant;

use crate::observability::messages::pipeline::{PipelineCompleted, PipelineStarted};
use crate::observability::messages::StructuredLog;
use crate::processors::{CaesarCipherProcessor, CipherMode, TransliterateProcessor};
use crate::traits::{Processor, ProcessorMetadata, ProcessorRequest};

/// Request to run the cipher stage with a given key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CipherRequest {
    pub key: u64,
    pub mode: CipherMode,
}

impl CipherRequest {
    pub fn encrypt(key: u64) -> Self {
        Self {
            key,
            mode: CipherMode::Encrypt,
        }
    }

    pub fn decrypt(key: u64) -> Self {
        Self {
            key,
            mode: CipherMode::Decrypt,
        }
    }
}

/// Metadata from each stage of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineMetadata(pub Vec<(&'static str, ProcessorMetadata)>);

impl PipelineMetadata {
    /// Metadata reported by the named stage, if it ran.
    pub fn get(&self, stage: &str) -> Option<&ProcessorMetadata> {
        self.0
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, metadata)| metadata)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, ProcessorMetadata)> {
        self.0.iter()
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub text: String,
    pub metadata: PipelineMetadata,
}

/// Ordered list of stages applied to the input text.
pub struct Pipeline {
    stages: Vec<Box<dyn Processor>>,
}

impl Pipeline {
    /// Build the pipeline for an optional cipher request.
    pub fn new(cipher: Option<CipherRequest>) -> Self {
        let mut stages: Vec<Box<dyn Processor>> = Vec::with_capacity(2);
        stages.push(Box::new(TransliterateProcessor::new()));
        if let Some(request) = cipher {
            stages.push(Box::new(CaesarCipherProcessor::new(request.key, request.mode)));
        }
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order, feeding each one the previous payload.
    pub fn run(&self, raw: &str) -> PipelineOutput {
        let start_msg = PipelineStarted {
            stage_count: self.stages.len(),
            input_size: raw.len(),
        };
        let span = start_msg.span("pipeline_run");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut payload = raw.to_string();
        let mut metadata = PipelineMetadata::default();

        for stage in &self.stages {
            let response = stage.process(ProcessorRequest::new(payload));
            metadata.0.push((stage.name(), response.metadata));
            payload = response.payload;
        }

        PipelineCompleted {
            stage_count: self.stages.len(),
            output_size: payload.len(),
            duration: start_time.elapsed(),
        }
        .log();

        PipelineOutput {
            text: payload,
            metadata,
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Transliterate `raw` and, when requested, apply the Caesar cipher.
///
/// This is a pure text-to-text transform with no I/O.
///
/// ```
/// use alphashift::pipeline::{process, CipherRequest};
///
/// assert_eq!(process("a1b2", None), "AONEBTWO");
/// assert_eq!(process("Hello", Some(CipherRequest::encrypt(3))), "KHOOR");
/// ```
pub fn process(raw: &str, request: Option<CipherRequest>) -> String {
    Pipeline::new(request).run(raw).text
}
