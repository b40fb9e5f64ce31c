//! Implementations of the DataFrame extension traits

mod summary;
