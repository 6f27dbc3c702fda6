// Prompt constants for CV screening.

use crate::llm_client::prompts::{render, JSON_OUTPUT_INSTRUCTION};

/// Replace: {jd_text}, {cv_text}, {json_instruction}
pub const SCREEN_PROMPT_TEMPLATE: &str = r#"You are an expert HR recruiter. Analyze the following CV against the job description and provide:

1. A match score (0-100) based on skills, experience, and qualifications
2. Top 3-5 strengths (what makes this candidate a good fit)
3. Top 3-5 gaps (what's missing or weak)
4. Your confidence in this assessment (High, Medium or Low) and why
5. A brief recommendation (hire/interview/reject with reasoning)

Job Description:
{jd_text}

Candidate CV:
{cv_text}

Provide your analysis in the following JSON format:
```json
{
    "match_score": 75,
    "strengths": ["strength1", "strength2"],
    "gaps": ["gap1", "gap2"],
    "confidence_level": "High",
    "confidence_analysis": "why you are or are not confident in this assessment",
    "recommendation": "your recommendation here"
}
```

"match_score" is an integer from 0 to 100. "confidence_level" is exactly one of "High", "Medium", "Low".
{json_instruction}"#;

pub fn build_screen_prompt(cv_text: &str, jd_text: &str) -> String {
    render(
        SCREEN_PROMPT_TEMPLATE,
        &[
            ("jd_text", jd_text),
            ("cv_text", cv_text),
            ("json_instruction", JSON_OUTPUT_INSTRUCTION),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::MatchAssessment;
    use crate::normalizer::Structured;

    #[test]
    fn test_example_shows_every_required_key() {
        for name in MatchAssessment::SHAPE.field_names() {
            assert!(
                SCREEN_PROMPT_TEMPLATE.contains(&format!("\"{name}\":")),
                "prompt example is missing {name}"
            );
        }
    }

    #[test]
    fn test_prompt_embeds_documents() {
        let prompt = build_screen_prompt("CV: 5 years of Rust", "JD: Rust engineer");
        assert!(prompt.contains("Job Description:\nJD: Rust engineer\n"));
        assert!(prompt.contains("Candidate CV:\nCV: 5 years of Rust\n"));
        assert!(prompt.ends_with(JSON_OUTPUT_INSTRUCTION));
    }

    #[test]
    fn test_documents_containing_placeholders_are_not_expanded() {
        let prompt = build_screen_prompt("{jd_text}", "JD");
        assert!(prompt.contains("Candidate CV:\n{jd_text}\n"));
    }
}
