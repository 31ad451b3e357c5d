//! Java `.properties` reading and writing
//!
//! A sibling of the CSV parser with its own line grammar. The two share only
//! the backslash escape helpers in [`crate::util::escape`].

mod model;
mod parser;

pub use model::Properties;
pub use parser::{parse_properties, serialize_properties};
