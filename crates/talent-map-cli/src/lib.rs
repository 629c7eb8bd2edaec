//! Talent Map command-line front end.

pub mod cli;
