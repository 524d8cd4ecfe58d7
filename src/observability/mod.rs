// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display` implementation
//! so that log text is defined in one place instead of being scattered through
//! the pipeline as format strings.
//!
//! Messages are organized by subsystem:
//! * `messages::pipeline` - Pipeline run lifecycle and configuration events
//! * `messages::processor` - Per-stage execution events
//!
//! # Usage
//!
//! ```rust
//! use alphashift::observability::messages::processor::ProcessorExecutionStarted;
//!
//! let msg = ProcessorExecutionStarted {
//!     processor_id: "transliterate",
//!     input_size: 17,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
