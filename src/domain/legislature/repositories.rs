use super::entities::{Bill, MemberOfParliament};
use crate::domain::errors::FetchResult;

/// Интерфейс для чтения парламентских данных
///
/// One implementation talks to the real API over HTTP; tests substitute
/// deterministic fakes to drive the load state machine.
#[allow(async_fn_in_trait)]
pub trait LegislatureRepository {
    /// Fetch the full bill collection
    async fn fetch_bills(&self) -> FetchResult<Vec<Bill>>;

    /// Fetch the full member-of-parliament collection
    async fn fetch_mps(&self) -> FetchResult<Vec<MemberOfParliament>>;
}
