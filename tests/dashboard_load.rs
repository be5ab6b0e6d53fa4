use commons_dashboard_wasm::application::{LoadDashboardUseCase, LoadState};
use commons_dashboard_wasm::domain::errors::AppError;
use commons_dashboard_wasm::domain::legislature::repositories::LegislatureRepository;
use commons_dashboard_wasm::domain::legislature::{
    BilingualTitle, Bill, LegisinfoId, MemberOfParliament, PartyAffiliation, RidingAffiliation,
};
use futures::executor::block_on;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Settles only on its second poll, standing in for the slower of two
/// in-flight requests.
#[derive(Default)]
struct SettleLater {
    polled: bool,
}

impl Future for SettleLater {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.polled {
            Poll::Ready(())
        } else {
            self.polled = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

struct FakeRepository {
    bills: Result<Vec<Bill>, AppError>,
    mps: Result<Vec<MemberOfParliament>, AppError>,
    delay_mps: bool,
}

impl LegislatureRepository for FakeRepository {
    async fn fetch_bills(&self) -> Result<Vec<Bill>, AppError> {
        self.bills.clone()
    }

    async fn fetch_mps(&self) -> Result<Vec<MemberOfParliament>, AppError> {
        if self.delay_mps {
            SettleLater::default().await;
        }
        self.mps.clone()
    }
}

fn bill(number: &str, id: u64) -> Bill {
    Bill {
        session: "44-1".to_string(),
        legisinfo_id: LegisinfoId::from(id),
        introduced: "2023-11-09".to_string(),
        name: BilingualTitle::new(format!("An Act {number}"), format!("Loi {number}")),
        number: number.to_string(),
        url: String::new(),
    }
}

fn mp(name: &str, party: &str) -> MemberOfParliament {
    MemberOfParliament {
        name: name.to_string(),
        url: String::new(),
        current_party: PartyAffiliation::new(party),
        current_riding: RidingAffiliation::new("Somewhere", "ON"),
        image: String::new(),
    }
}

#[test]
fn settles_ready_only_after_both_requests_finish() {
    let repository = FakeRepository {
        bills: Ok(vec![bill("C-56", 1), bill("C-64", 2)]),
        mps: Ok(vec![mp("Jane Smith", "Liberal"), mp("Ann Lee", "Liberal"), mp("Gord Hill", "NDP")]),
        delay_mps: true,
    };

    let state = block_on(LoadDashboardUseCase::new(repository).settle());

    match state {
        LoadState::Ready(snapshot) => {
            assert_eq!(snapshot.bills.len(), 2);
            assert_eq!(snapshot.mps.len(), 3);
            assert_eq!(snapshot.tally.total(), 3);
            assert_eq!(snapshot.tally.count_for("Liberal"), 2);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn member_failure_discards_loaded_bills() {
    let repository = FakeRepository {
        bills: Ok(vec![bill("C-56", 1)]),
        mps: Err(AppError::Http { status: 500 }),
        delay_mps: true,
    };

    let state = block_on(LoadDashboardUseCase::new(repository).settle());

    match state {
        LoadState::Failed(message) => assert!(message.contains("500")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn bill_failure_blocks_the_whole_view() {
    let repository = FakeRepository {
        bills: Err(AppError::Network("connection refused".to_string())),
        mps: Ok(vec![mp("Jane Smith", "Liberal")]),
        delay_mps: true,
    };

    let state = block_on(LoadDashboardUseCase::new(repository).settle());

    match state {
        LoadState::Failed(message) => assert!(message.contains("connection refused")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn empty_member_collection_is_a_valid_snapshot() {
    let repository = FakeRepository {
        bills: Ok(Vec::new()),
        mps: Ok(Vec::new()),
        delay_mps: false,
    };

    let state = block_on(LoadDashboardUseCase::new(repository).settle());

    match state {
        LoadState::Ready(snapshot) => {
            assert!(snapshot.tally.is_empty());
            assert_eq!(snapshot.tally.total(), 0);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn settled_states_are_terminal() {
    assert!(!LoadState::Loading.is_settled());
    assert!(LoadState::Failed("boom".to_string()).is_settled());
}
