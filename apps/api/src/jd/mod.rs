// Job description generation: free-text completion, title taken from the first line.

pub mod generator;
pub mod handlers;
pub mod prompts;
