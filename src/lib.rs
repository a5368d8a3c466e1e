//! NYC short-term rental price predictor.
//!
//! A listing entered in the form is encoded into the exact feature row a
//! previously trained regression model expects, then scored once.

pub mod app;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod responses;
pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;
