//! Roster input: delimited text → rows → normalized [`Person`] records.

pub mod normalize;
pub mod table;

pub use normalize::{normalize_rows, person_from_row, CompanyFilter, Person, UNKNOWN_NAME};
pub use table::{parse_table, read_input, Row};
