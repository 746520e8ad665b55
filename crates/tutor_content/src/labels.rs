//! Step labels shared between the base-step generators and the
//! lookup-keyed content tables.

pub const STATE_FORMULA: &str = "state-formula";
pub const SUBSTITUTE: &str = "substitute";
pub const COMPUTE: &str = "compute";
pub const RESULT: &str = "result";

pub const IDENTIFY_RESTRICTIONS: &str = "identify-restrictions";
pub const FACTOR: &str = "factor";
pub const CANCEL: &str = "cancel";
pub const FIND_LCD: &str = "find-lcd";
pub const COMBINE: &str = "combine";
pub const FIND_CANDIDATES: &str = "find-candidates";
pub const CHECK_EXTRANEOUS: &str = "check-extraneous";
pub const ANALYZE_DEGREES: &str = "analyze-degrees";
pub const STATE_SOLUTION: &str = "state-solution";
pub const REPORT_MISSING: &str = "report-missing";
pub const CHECK_FEASIBILITY: &str = "check-feasibility";
