//! Domain types for the property portfolio service.
//!
//! Everything here is storage- and transport-agnostic: the portfolio and
//! contact schemas (with their validation rules), pagination arithmetic,
//! and the contact workflow's outcome types.

pub mod contact;
pub mod error;
pub mod pagination;
pub mod portfolio;
pub mod types;
