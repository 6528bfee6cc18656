//! Read-side repositories over the document collections.

pub mod portfolio_repo;

pub use portfolio_repo::PortfolioRepo;
