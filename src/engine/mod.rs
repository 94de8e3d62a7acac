//! Validation engine module.
//!
//! Provides check orchestration, result aggregation, card synthesis, and the
//! validator that ties them together.

pub mod orchestrator;
pub mod result;
pub mod synth;
pub mod validator;
