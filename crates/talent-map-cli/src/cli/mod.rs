//! CLI subcommand implementations for the talent-map binary.

pub mod generate_cmd;
pub mod output;
