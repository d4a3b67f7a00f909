//! Pure read-only query operations over loaded contacts.

pub mod ops;

pub use ops::{
    filter_by_city, filter_by_phone_prefix, group_count_by_city, search_by_name, sorted_by_name,
    unique_cities,
};
