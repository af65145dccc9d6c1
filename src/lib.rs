// src/lib.rs
//
// Facade over tripmap-core so the demos can use `tripmap_rs::prelude::*`.

pub use tripmap_core::*;
