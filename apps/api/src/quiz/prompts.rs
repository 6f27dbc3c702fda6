// Prompt constants for quiz generation and evaluation.

use crate::llm_client::prompts::{render, JSON_OUTPUT_INSTRUCTION};
use crate::models::quiz::UserAnswer;

/// Replace: {num_questions}, {role}, {skill_level}, {json_instruction}
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate {num_questions} technical interview questions for a {role} position at {skill_level} level.

For each question, provide:
1. The question itself
2. A concise model answer
3. Difficulty level (easy/medium/hard)
4. Topic/skill being tested

Format as JSON array:
```json
[
    {
        "question": "question text",
        "answer": "model answer",
        "difficulty": "easy/medium/hard",
        "topic": "topic name"
    }
]
```

Return exactly {num_questions} objects. Make questions practical, relevant, and appropriate for the skill level.
{json_instruction}"#;

/// Replace: {answers}, {json_instruction}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are a senior technical interviewer. Evaluate the candidate's answers to the following questions.

{answers}

Judge correctness, depth and clarity across all answers, then provide:
1. An overall score (0-100)
2. How confident the candidate appears (High, Medium or Low)
3. Constructive feedback covering the strongest and weakest answers

Respond in the following JSON format:
```json
{
    "score": 80,
    "confidence_level": "Medium",
    "feedback": "your feedback here"
}
```

"score" is an integer from 0 to 100. "confidence_level" is exactly one of "High", "Medium", "Low".
{json_instruction}"#;

pub fn build_quiz_prompt(role: &str, skill_level: &str, num_questions: u32) -> String {
    let count = num_questions.to_string();
    render(
        QUIZ_PROMPT_TEMPLATE,
        &[
            ("num_questions", &count),
            ("role", role),
            ("skill_level", skill_level),
            ("json_instruction", JSON_OUTPUT_INSTRUCTION),
        ],
    )
}

pub fn build_evaluation_prompt(answers: &[UserAnswer]) -> String {
    let answers = answers
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let answer = if a.answer.trim().is_empty() {
                "(no answer given)"
            } else {
                a.answer.trim()
            };
            format!("Question {}: {}\nAnswer {}: {}", i + 1, a.question.trim(), i + 1, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    render(
        EVALUATION_PROMPT_TEMPLATE,
        &[("answers", &answers), ("json_instruction", JSON_OUTPUT_INSTRUCTION)],
    )
}
