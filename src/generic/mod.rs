//! Generic structures, independent of the rest of the library.

pub mod minimal_pcg;
