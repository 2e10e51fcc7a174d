mod parser;
mod serializer;

pub use parser::{Directive, parse_line, parse_transcript};
pub use serializer::write_transcript;
