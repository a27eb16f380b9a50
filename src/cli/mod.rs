//! CLI subcommand implementations for the portal binary.

pub mod doctor;
pub mod registry_cmd;
pub mod screenshots_cmd;
