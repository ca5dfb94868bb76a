#![forbid(unsafe_code)]

//! Domain core of the FluentMind quiz app: challenge model, catalog,
//! answer matching, and the pure progress/achievement derivation engine.

pub mod achievements;
pub mod answer;
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod model;
pub mod stats;

pub use catalog::Catalog;
pub use error::Error;
