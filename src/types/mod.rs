//! Assorted types, not elsewhere classified.

pub mod err;
