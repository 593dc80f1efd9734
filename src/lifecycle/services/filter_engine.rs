use crate::lifecycle::policies::Searchable;

/// Accessor returning one searchable text field of a record
pub type FieldAccessor<T> = fn(&T) -> &str;

/// Returns the records where any designated field contains `query`,
/// ignoring case.
///
/// The query is matched literally: surrounding whitespace is part of the
/// substring. An empty query keeps every record. Relative order is preserved.
///
/// # Arguments
/// * `records` - Collection to search
/// * `query` - Free-text search string
/// * `fields` - Accessors naming the searchable fields of `T`
pub fn filter<'a, T>(records: &'a [T], query: &str, fields: &[FieldAccessor<T>]) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_any(*record, &needle, fields))
        .collect()
}

/// Filters with the searchable fields registered for the record type
pub fn filter_searchable<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter(records, query, T::search_fields())
}

fn matches_any<T>(record: &T, needle: &str, fields: &[FieldAccessor<T>]) -> bool {
    fields
        .iter()
        .any(|field| field(record).to_lowercase().contains(needle))
}
