pub(crate) mod date;
pub(crate) mod jq;

pub(crate) use date::format_added;
pub(crate) use jq::filter_json;
