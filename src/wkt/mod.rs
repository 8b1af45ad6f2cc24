//! Well-Known Text codec

mod parser;
mod writer;

pub use parser::parse_wkt;
pub use writer::format_wkt;
