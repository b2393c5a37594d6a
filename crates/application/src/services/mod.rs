pub mod line_normalizer;

pub use line_normalizer::{normalize, parse_list_line, ParsedEntry};
