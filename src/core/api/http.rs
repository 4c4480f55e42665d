use std::sync::RwLock;

use reqwest::{Client, Method, RequestBuilder, header};
use serde::{Serialize, de::DeserializeOwned, de::IgnoredAny};
use tracing::debug;

use crate::{
    config::Config,
    core::api::{ApiError, MarketplaceApi},
    models::{
        AuthResponse, BidCreateBody, CreatedBid, CreatedJob, DashboardStats, Job, JobCategory,
        JobCreateBody, JobResponse, JobsResponse, LoginRequest, RegisterRequest, User, WalletInfo,
    },
};

/// [`MarketplaceApi`] over HTTP with reqwest.
#[derive(Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpApi {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match self.token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    fn jobs_request(&self, category: Option<JobCategory>) -> RequestBuilder {
        let builder = self.request(Method::GET, "/api/jobs");
        match category {
            Some(category) => builder.query(&[("category", category.as_str())]),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "api response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }
}

impl MarketplaceApi for HttpApi {
    fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/login", &request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/register", &request).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.get("/api/user/profile").await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/dashboard/stats").await
    }

    async fn jobs(&self, category: Option<JobCategory>) -> Result<Vec<Job>, ApiError> {
        let response: JobsResponse = Self::send(self.jobs_request(category)).await?;
        Ok(response.jobs)
    }

    async fn job(&self, job_id: &str) -> Result<Job, ApiError> {
        let response: JobResponse = self.get(&format!("/api/jobs/{}", job_id)).await?;
        Ok(response.job)
    }

    async fn create_job(&self, body: JobCreateBody) -> Result<CreatedJob, ApiError> {
        self.post("/api/jobs", &body).await
    }

    async fn place_bid(&self, body: BidCreateBody) -> Result<CreatedBid, ApiError> {
        self.post(&format!("/api/jobs/{}/bids", body.job_id), &body)
            .await
    }

    async fn select_bid(&self, job_id: &str, bid_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/jobs/{}/select-bid/{}", job_id, bid_id);
        let _: IgnoredAny = Self::send(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    async fn wallet(&self) -> Result<WalletInfo, ApiError> {
        self.get("/api/wallet").await
    }
}
