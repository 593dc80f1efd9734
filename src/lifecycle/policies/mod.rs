mod search_fields;

pub use search_fields::Searchable;
