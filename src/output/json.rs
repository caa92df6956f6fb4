use literal_shelf::Shelf;

/// Pretty JSON in the shape the site template reads
pub(crate) fn shelf_json(shelf: &Shelf) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(shelf)
}
