pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod registry;
pub mod report;
pub mod source;
pub mod treatment;

pub use error::{CompletionErrorKind, Error};
pub use registry::{CaseEntry, CaseRegistry};
pub use treatment::NegativeTreatment;
