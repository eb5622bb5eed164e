pub mod bullpen;
pub mod extractor;
pub mod ordering;

pub use bullpen::{parse_bullpen_ids, resolve_bullpen_ids, usage_link_id};
pub use extractor::{extract, extract_row, identifier_from_href, parse_handedness, parse_number};
pub use ordering::{separate_starters_and_bullpen, sort_by_number};
