// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `pipeline` - Pipeline run lifecycle and configuration loading
//! * `processor` - Processor execution lifecycle
//!
//! # Usage Pattern
//!
//! ```rust
//! use alphashift::observability::messages::pipeline::PipelineStarted;
//! use alphashift::observability::messages::StructuredLog;
//!
//! let msg = PipelineStarted {
//!     stage_count: 2,
//!     input_size: 11,
//! };
//!
//! let span = msg.span("pipeline_run");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod pipeline;
pub mod processor;

/// A message that knows how to emit itself as a structured `tracing` event.
pub trait StructuredLog {
    /// Emit the event at the message's log level, with its fields attached.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
