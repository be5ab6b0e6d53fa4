use crate::domain::errors::{AppError, FetchResult};
use crate::domain::legislature::{
    Bill, MemberOfParliament, PartyTally, PartyTallyService,
    repositories::LegislatureRepository,
};
use crate::domain::logging::{LogComponent, get_logger};
use futures::future;
use serde::Serialize;

/// DTO - полный результат одной загрузки
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub bills: Vec<Bill>,
    pub mps: Vec<MemberOfParliament>,
    pub tally: PartyTally,
}

/// View state machine: `Loading -> {Ready, Failed}`, both terminal
/// for the lifetime of the view. No retry, no refresh, no cancellation.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(DashboardSnapshot),
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// Use Case: Загрузка данных парламента
///
/// Issues both collection fetches concurrently and joins them before any
/// state is surfaced. `future::join` (not a short-circuiting `try_join`)
/// keeps the loading phase open until the slower request settles too.
pub struct LoadDashboardUseCase<R: LegislatureRepository> {
    repository: R,
    tally_service: PartyTallyService,
}

impl<R: LegislatureRepository> LoadDashboardUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, tally_service: PartyTallyService::new() }
    }

    /// Fetch both collections, aggregate the tally, validate the invariant.
    /// A failure on either side discards all partial results.
    pub async fn execute(&self) -> FetchResult<DashboardSnapshot> {
        let (bills_result, mps_result) =
            future::join(self.repository.fetch_bills(), self.repository.fetch_mps()).await;

        let bills = bills_result?;
        let mps = mps_result?;

        let tally = self.tally_service.tally_members(&mps);
        if !self.tally_service.validate_tally(&tally, &mps) {
            return Err(AppError::Validation(
                "party tally does not cover the member collection".to_string(),
            ));
        }

        get_logger().info(
            LogComponent::Application("LoadDashboard"),
            &format!(
                "✅ Snapshot ready: {} bills, {} MPs, {} parties",
                bills.len(),
                mps.len(),
                tally.party_count()
            ),
        );

        Ok(DashboardSnapshot { bills, mps, tally })
    }

    /// Settle the view state exactly once after both requests finish
    pub async fn settle(&self) -> LoadState {
        match self.execute().await {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(error) => {
                get_logger().error(
                    LogComponent::Application("LoadDashboard"),
                    &format!("❌ Dashboard load failed: {}", error),
                );
                LoadState::Failed(error.to_string())
            }
        }
    }
}
