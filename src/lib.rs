//! Diagnostic scan of a spreadsheet's first worksheet: shape, sampled rows,
//! non-null / non-zero counts for the money and discount columns, and the
//! full column listing.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
