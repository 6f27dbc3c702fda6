// Technical quiz: question generation and answer evaluation.

pub mod evaluator;
pub mod generator;
pub mod handlers;
pub mod prompts;
