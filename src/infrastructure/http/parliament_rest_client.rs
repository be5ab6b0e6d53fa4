use crate::domain::errors::{AppError, FetchResult};
use crate::domain::legislature::{Bill, LegisinfoId, MemberOfParliament};
use crate::domain::logging::{LogComponent, get_logger};
use gloo_net::http::Request;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default backend address; there is no environment configuration layer
pub const DEFAULT_API_BASE: &str = "http://localhost:1500/api";

/// Envelope for `GET /bills`
#[derive(Debug, Deserialize)]
pub struct BillsEnvelope {
    pub bills: Vec<Bill>,
}

/// Envelope for `GET /mps`
#[derive(Debug, Deserialize)]
pub struct MpsEnvelope {
    #[serde(rename = "MPs")]
    pub mps: Vec<MemberOfParliament>,
}

/// Envelope for `GET /bills/{id}`
#[derive(Debug, Deserialize)]
pub struct BillEnvelope {
    pub bill: Bill,
}

/// Envelope for `GET /mps/{name}`
#[derive(Debug, Deserialize)]
pub struct MpEnvelope {
    #[serde(rename = "MP")]
    pub mp: MemberOfParliament,
}

/// Simple REST client for the parliament API
pub struct ParliamentRestClient {
    base_url: String,
}

impl ParliamentRestClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    pub fn mps_url(&self) -> String {
        format!("{}/mps", self.base_url)
    }

    pub fn bill_url(&self, id: LegisinfoId) -> String {
        format!("{}/bills/{}", self.base_url, id)
    }

    pub fn mp_url(&self, name: &str) -> String {
        format!("{}/mps/{}", self.base_url, urlencoding::encode(name))
    }

    /// Fetch the full bill collection
    pub async fn fetch_bills(&self) -> FetchResult<Vec<Bill>> {
        let envelope: BillsEnvelope = self.fetch_json(self.bills_url()).await?;
        get_logger().info(
            LogComponent::Infrastructure("ParliamentAPI"),
            &format!("✅ Loaded {} bills", envelope.bills.len()),
        );
        Ok(envelope.bills)
    }

    /// Fetch the full member-of-parliament collection
    pub async fn fetch_mps(&self) -> FetchResult<Vec<MemberOfParliament>> {
        let envelope: MpsEnvelope = self.fetch_json(self.mps_url()).await?;
        get_logger().info(
            LogComponent::Infrastructure("ParliamentAPI"),
            &format!("✅ Loaded {} MPs", envelope.mps.len()),
        );
        Ok(envelope.mps)
    }

    /// Fetch a single bill by its LEGISinfo id
    pub async fn fetch_bill(&self, id: LegisinfoId) -> FetchResult<Bill> {
        let envelope: BillEnvelope = self.fetch_json(self.bill_url(id)).await?;
        Ok(envelope.bill)
    }

    /// Fetch a single member by name
    pub async fn fetch_mp(&self, name: &str) -> FetchResult<MemberOfParliament> {
        let envelope: MpEnvelope = self.fetch_json(self.mp_url(name)).await?;
        Ok(envelope.mp)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> FetchResult<T> {
        get_logger().info(
            LogComponent::Infrastructure("ParliamentAPI"),
            &format!("📡 GET {url}"),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("{e:?}")))?;

        if !response.ok() {
            return Err(AppError::Http { status: response.status() });
        }

        response.json::<T>().await.map_err(|e| AppError::Decode(format!("{e:?}")))
    }
}

impl Default for ParliamentRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::domain::legislature::repositories::LegislatureRepository for ParliamentRestClient {
    async fn fetch_bills(&self) -> FetchResult<Vec<Bill>> {
        ParliamentRestClient::fetch_bills(self).await
    }

    async fn fetch_mps(&self) -> FetchResult<Vec<MemberOfParliament>> {
        ParliamentRestClient::fetch_mps(self).await
    }
}
