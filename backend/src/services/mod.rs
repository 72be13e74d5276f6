pub mod llm;

pub use llm::{NameGenerationService, NameGenerationServiceImpl};
