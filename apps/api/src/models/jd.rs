use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JdRequest {
    pub role: String,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub company_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JdResponse {
    pub title: String,
    pub job_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_request_deserializes_without_company_type() {
        let req: JdRequest = serde_json::from_str(
            r#"{"role": "Backend Engineer", "skills": ["Rust"], "experience_level": "senior"}"#,
        )
        .unwrap();
        assert_eq!(req.experience_level, ExperienceLevel::Senior);
        assert!(req.company_type.is_none());
    }

    #[test]
    fn test_unknown_experience_level_rejected() {
        let result = serde_json::from_str::<JdRequest>(
            r#"{"role": "x", "skills": ["y"], "experience_level": "principal"}"#,
        );
        assert!(result.is_err());
    }
}
