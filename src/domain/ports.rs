use crate::domain::model::FunFact;
use async_trait::async_trait;

/// Source of descriptive facts about a number.
///
/// Implementations must be total: every failure is reported as
/// [`FunFact::Fallback`] instead of an error.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn lookup(&self, number: i64) -> FunFact;
}
