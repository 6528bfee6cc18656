//! Request handlers.
//!
//! Each submodule provides the async handler functions for one area of the
//! API. Handlers delegate to `folio_db` / `folio_mail` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod diagnostics;
pub mod meta;
pub mod portfolio;
