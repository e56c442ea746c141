mod error;
mod formatters;
mod oneline;

pub use error::FormatError;
pub use formatters::{format_all, format_json, format_table, parse_json, PrintFormat};
pub use oneline::{format_oneline, parse_oneline, parse_ticket};
