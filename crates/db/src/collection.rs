//! Static mapping from entity type to storage collection.

use folio_core::contact::ContactMessage;
use folio_core::portfolio::PortfolioItem;
use serde::Serialize;

/// A named collection of documents. Each variant maps to one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    PortfolioItem,
    ContactMessage,
}

impl Collection {
    /// Every collection the service owns.
    pub const ALL: [Collection; 2] = [Self::PortfolioItem, Self::ContactMessage];

    /// Table name backing this collection.
    pub fn name(self) -> &'static str {
        match self {
            Self::PortfolioItem => "portfolioitem",
            Self::ContactMessage => "contactmessage",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that is stored as a document in a fixed collection.
pub trait Document: Serialize + Sync {
    const COLLECTION: Collection;
}

impl Document for PortfolioItem {
    const COLLECTION: Collection = Collection::PortfolioItem;
}

impl Document for ContactMessage {
    const COLLECTION: Collection = Collection::ContactMessage;
}
