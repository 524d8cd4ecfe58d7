// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

/// Input handed to a single pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorRequest {
    pub payload: String,
}

impl ProcessorRequest {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Key/value facts a stage reports about the work it just did.
pub type ProcessorMetadata = BTreeMap<String, String>;

/// Output of a single pipeline stage: the next payload plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorResponse {
    pub payload: String,
    pub metadata: ProcessorMetadata,
}

impl ProcessorResponse {
    pub fn new(payload: String) -> Self {
        Self {
            payload,
            metadata: ProcessorMetadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl ToString) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }
}

/// A text-to-text stage of the pipeline.
///
/// Implementations are pure: the same request always yields the same
/// response, and no stage holds mutable state between calls.
pub trait Processor: Send + Sync {
    fn process(&self, req: ProcessorRequest) -> ProcessorResponse;

    fn name(&self) -> &'static str;
}
