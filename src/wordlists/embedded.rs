//! Embedded word lists
//!
//! Vocabulary, solution pool and commonness scores compiled in at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/commonness.rs"));
