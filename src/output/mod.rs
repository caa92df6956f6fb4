mod format;
mod json;
mod table;

pub(crate) use json::shelf_json;
pub(crate) use table::{ShelfTableOptions, print_shelf_tables};
