pub mod processor;

pub use processor::{Processor, ProcessorMetadata, ProcessorRequest, ProcessorResponse};
