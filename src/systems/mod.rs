//! Systems - per-particle behaviour
//!
//! `particle` holds the body itself plus its force and collision rules.
//! The system-level orchestration lives in `crate::simulation`.

pub mod particle;
