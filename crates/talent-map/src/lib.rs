//! Talent Map core: turn a flat people export into a location → department → tier org chart.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. [`roster`] reads delimited text into rows and normalizes each row into a [`Person`].
//! 2. [`aggregate`] groups people by resolved location ([`geo`]) and classifies each
//!    title into a department and a seniority tier ([`classify`]).
//! 3. [`render`] embeds the resulting [`TalentMap`] into a self-contained HTML page.
//!
//! Every lookup table is compiled in and immutable; the same input always produces
//! byte-identical output.

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod geo;
pub mod render;
pub mod roster;

pub use aggregate::{build_talent_map, LocationSummary, Summary, TalentMap};
pub use classify::{infer_department, infer_tier, Tier};
pub use error::{Error, Result};
pub use geo::{resolve_location, ResolvedLocation};
pub use roster::{CompanyFilter, Person};
