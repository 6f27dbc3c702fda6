// Interview audio analysis: staged upload → media completion → AudioAnalysis.

pub mod analysis;
pub mod handlers;
pub mod prompts;
