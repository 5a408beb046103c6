//! Reading documents and writing evaluated output.

mod md;
mod parser;
mod writer;

pub use md::{write_markdown, write_markdown_content};
pub use parser::{MAX_SHEET_FILE_BYTES, parse_sheet, parse_sheet_content, split_row};
pub use writer::write_tsv;
