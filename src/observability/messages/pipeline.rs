// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline runs and configuration loading.

use crate::observability::messages::StructuredLog;
use crate::traits::ProcessorMetadata;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Operational event
pub struct PipelineStarted {
    pub stage_count: usize,
    pub input_size: usize,
}

impl Display for PipelineStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline with {} stages: input_size={} bytes",
            self.stage_count, self.input_size
        )
    }
}

impl StructuredLog for PipelineStarted {
    fn log(&self) {
        tracing::info!(
            stage_count = self.stage_count,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            stage_count = self.stage_count,
            input_size = self.input_size,
        )
    }
}

/// Pipeline run completed.
///
/// # Log Level
/// `info!` - Operational event
pub struct PipelineCompleted {
    pub stage_count: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline completed: {} stages, output={} bytes in {:?}",
            self.stage_count, self.output_size, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::info!(
            stage_count = self.stage_count,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            stage_count = self.stage_count,
            output_size = self.output_size,
        )
    }
}

/// Metadata reported by one stage after a run.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct StageMetadataReported<'a> {
    pub stage: &'a str,
    pub metadata: &'a ProcessorMetadata,
}

impl Display for StageMetadataReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stage '{}' metadata:", self.stage)?;
        for (key, value) in self.metadata {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

impl StructuredLog for StageMetadataReported<'_> {
    fn log(&self) {
        tracing::debug!(stage = self.stage, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("stage_metadata", span_name = name, stage = self.stage)
    }
}

/// Configuration file loaded.
///
/// # Log Level
/// `info!` - Operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub format: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} configuration from '{}'",
            self.format,
            self.path.display()
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            format = self.format,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = %self.path.display(),
            format = self.format,
        )
    }
}
