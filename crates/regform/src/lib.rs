// regform - registration form validation
// Submission and blur handlers over the shared rule evaluator

pub mod blur;
pub mod config;
pub mod outcome;
pub mod snapshot;
pub mod submit;
pub mod surface;

pub use blur::blur;
pub use config::{Config, LabelConfig, MessageConfig};
pub use outcome::{FieldError, FormOutcome, Notice};
pub use snapshot::{Field, FormSnapshot};
pub use submit::{submit, validate};
pub use surface::{FormSurface, Submission, SubmitEvent};

// Re-export the rule layer
pub use regform_rules as rules;
pub use regform_rules::{evaluate, evaluate_named, FieldId};
