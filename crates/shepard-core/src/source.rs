use async_trait::async_trait;

use crate::{error::Error, registry::CaseEntry};

/// Produces the full text of an opinion for a registry entry.
///
/// The real implementation fetches from the scholar site; tests
/// substitute a deterministic stand-in.
#[async_trait]
pub trait OpinionSource: Send + Sync {
    async fn fetch_opinion(&self, case: &CaseEntry) -> Result<String, Error>;
}
