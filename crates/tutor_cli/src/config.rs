//! CLI configuration file (`tutor_config.toml`), loaded from the working
//! directory when present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tutor_didactic::ExplanationLevel;
use tutor_engine::{TutorOptions, VerificationDetail};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub explanation_level: String,
    pub include_verification_in_steps: bool,
    pub include_conceptual_connections: bool,
    pub include_alternative_methods: bool,
    pub include_error_prevention: bool,
    pub include_common_mistakes: bool,
    pub include_pedagogical_notes: bool,
    pub verification_detail: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            explanation_level: "intermediate".to_string(),
            include_verification_in_steps: false,
            include_conceptual_connections: true,
            include_alternative_methods: true,
            include_error_prevention: true,
            include_common_mistakes: true,
            include_pedagogical_notes: true,
            verification_detail: "basic".to_string(),
        }
    }
}

pub fn parse_level(name: &str) -> Option<ExplanationLevel> {
    match name {
        "basic" => Some(ExplanationLevel::Basic),
        "intermediate" => Some(ExplanationLevel::Intermediate),
        "detailed" => Some(ExplanationLevel::Detailed),
        "scaffolded" => Some(ExplanationLevel::Scaffolded),
        _ => None,
    }
}

impl CliConfig {
    pub fn load() -> Self {
        let path = Path::new("tutor_config.toml");
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Error parsing config file: {e}. Using defaults."),
                },
                Err(e) => eprintln!("Error reading config file: {e}. Using defaults."),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create("tutor_config.toml")?;
        file.write_all(content.as_bytes())
    }

    pub fn to_options(&self) -> TutorOptions {
        TutorOptions {
            explanation_level: parse_level(&self.explanation_level)
                .unwrap_or(ExplanationLevel::Intermediate),
            include_verification_in_steps: self.include_verification_in_steps,
            include_conceptual_connections: self.include_conceptual_connections,
            include_alternative_methods: self.include_alternative_methods,
            include_error_prevention: self.include_error_prevention,
            include_common_mistakes: self.include_common_mistakes,
            include_pedagogical_notes: self.include_pedagogical_notes,
            verification_detail: match self.verification_detail.as_str() {
                "detailed" => VerificationDetail::Detailed,
                _ => VerificationDetail::Basic,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.explanation_level, "intermediate");
        assert!(back.include_conceptual_connections);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("scaffolded"), Some(ExplanationLevel::Scaffolded));
        assert_eq!(parse_level("nope"), None);
    }
}
