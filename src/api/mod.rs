pub mod autocomplete;
pub mod categories;
pub mod fields;
pub mod search;
