//! Construction-time configuration for a [`Tutor`](crate::Tutor)
//! instance. Frozen at construction; per-call overrides do not exist.

use tutor_didactic::{ExplanationLevel, SynthesisOptions};

/// How much of the verification report the sections include.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationDetail {
    /// Confidence and summary only.
    #[default]
    Basic,
    /// Confidence, summary, and every individual check line.
    Detailed,
}

/// Workbook generation options.
#[derive(Clone, Debug)]
pub struct TutorOptions {
    pub explanation_level: ExplanationLevel,
    /// Append a verification step to the synthesized trace.
    pub include_verification_in_steps: bool,
    /// Insert bridges between adjacent steps (pipeline stage 3).
    pub include_conceptual_connections: bool,
    /// Emit the alternative-methods section.
    pub include_alternative_methods: bool,
    /// Run the error-prevention pass (pipeline stage 4).
    pub include_error_prevention: bool,
    /// Add the common-mistake rows to the analysis section.
    pub include_common_mistakes: bool,
    /// Emit the pedagogical-notes section.
    pub include_pedagogical_notes: bool,
    pub verification_detail: VerificationDetail,
}

impl Default for TutorOptions {
    fn default() -> Self {
        Self {
            explanation_level: ExplanationLevel::default(),
            include_verification_in_steps: false,
            include_conceptual_connections: true,
            include_alternative_methods: true,
            include_error_prevention: true,
            include_common_mistakes: true,
            include_pedagogical_notes: true,
            verification_detail: VerificationDetail::default(),
        }
    }
}

impl TutorOptions {
    /// Minimal output: base steps only, no enrichment, no extras.
    pub fn basic() -> Self {
        Self {
            explanation_level: ExplanationLevel::Basic,
            include_verification_in_steps: false,
            include_conceptual_connections: false,
            include_alternative_methods: false,
            include_error_prevention: false,
            include_common_mistakes: false,
            include_pedagogical_notes: false,
            verification_detail: VerificationDetail::Basic,
        }
    }

    /// Everything on, scaffolded vocabulary, detailed verification.
    pub fn scaffolded() -> Self {
        Self {
            explanation_level: ExplanationLevel::Scaffolded,
            include_verification_in_steps: true,
            include_conceptual_connections: true,
            include_alternative_methods: true,
            include_error_prevention: true,
            include_common_mistakes: true,
            include_pedagogical_notes: true,
            verification_detail: VerificationDetail::Detailed,
        }
    }

    /// Bridge the construction-time options down to the pipeline's view.
    pub fn to_synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            level: self.explanation_level,
            conceptual_connections: self.include_conceptual_connections,
            error_prevention: self.include_error_prevention,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_preset_disables_everything() {
        let options = TutorOptions::basic();
        let synthesis = options.to_synthesis_options();
        assert_eq!(synthesis.level, ExplanationLevel::Basic);
        assert!(!synthesis.conceptual_connections);
        assert!(!synthesis.error_prevention);
    }

    #[test]
    fn test_scaffolded_preset_enables_everything() {
        let options = TutorOptions::scaffolded();
        let synthesis = options.to_synthesis_options();
        assert_eq!(synthesis.level, ExplanationLevel::Scaffolded);
        assert!(synthesis.conceptual_connections);
        assert!(synthesis.error_prevention);
    }
}
