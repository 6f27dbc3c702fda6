// Prompt constants for interview audio analysis.

use crate::llm_client::prompts::JSON_OUTPUT_INSTRUCTION;

/// Sent together with the recording as an inline media part.
pub const AUDIO_ANALYSIS_PROMPT: &str = r#"You are an interview coach. The attached audio is a candidate answering an interview question.

1. Transcribe what the candidate says
2. Rate how confident the candidate sounds (0-100)
3. Classify the confidence as High, Medium or Low
4. Describe the tone in one or two words (e.g. Calm, Nervous, Enthusiastic)
5. Summarize the answer and how it was delivered in 2-3 sentences

Respond in the following JSON format:
```json
{
    "confidence_score": 70,
    "confidence_level": "Medium",
    "tone": "Calm",
    "summary": "short summary of content and delivery",
    "transcription": "verbatim transcription"
}
```

"confidence_score" is an integer from 0 to 100. "confidence_level" is exactly one of "High", "Medium", "Low"."#;

pub fn build_audio_prompt() -> String {
    format!("{AUDIO_ANALYSIS_PROMPT}\n{JSON_OUTPUT_INSTRUCTION}")
}
