// CV screening: document extraction → prompt → completion → MatchAssessment.

pub mod handlers;
pub mod prompts;
pub mod screening;
