// Prompt constants for job description generation.

use crate::llm_client::prompts::render;

/// Replace: {company_info}, {role}, {skills}, {experience_level}
pub const JD_PROMPT_TEMPLATE: &str = r#"Generate a professional job description{company_info} for the following role:

Role: {role}
Required Skills: {skills}
Experience Level: {experience_level}

Please provide:
1. A clear job title
2. Job summary (2-3 sentences)
3. Key responsibilities (5-7 bullet points)
4. Required qualifications
5. Preferred qualifications
6. Benefits (if applicable)

Start your answer with the job title on its own line.
Make it professional, unbiased, and attractive to candidates. Format it in a clean, readable way."#;

/// Renders the generation prompt. Inputs are expected to be validated already.
pub fn build_jd_prompt(
    role: &str,
    skills: &[String],
    experience_level: &str,
    company_type: Option<&str>,
) -> String {
    let company_info = company_type
        .map(|c| format!(" for a {c} company"))
        .unwrap_or_default();
    let skills = skills.join(", ");
    render(
        JD_PROMPT_TEMPLATE,
        &[
            ("company_info", &company_info),
            ("role", role),
            ("skills", &skills),
            ("experience_level", experience_level),
        ],
    )
}
