// Shared prompt fragments.
// Each feature module defines its own prompts.rs alongside its handlers.
// This file contains cross-cutting fragments and the placeholder renderer.

/// Appended to every prompt whose completion is parsed as JSON.
pub const JSON_OUTPUT_INSTRUCTION: &str = "\
Respond with the JSON only. \
Use exactly the keys shown in the example above, with no extra keys. \
Do NOT include explanations before or after the JSON.";

/// Substitutes `{name}` placeholders in a template.
///
/// Substitution is single-pass over the template, so placeholder-like text inside
/// a value (a CV that literally contains `{jd_text}`) is never expanded again.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let matched = after.find('}').and_then(|end| {
            let name = &after[..end];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });
        match matched {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
