mod error;
mod http;

use std::future::Future;

pub use error::{ApiError, UNKNOWN_ERROR};
pub use http::HttpApi;

use crate::models::{
    AuthResponse, BidCreateBody, CreatedBid, CreatedJob, DashboardStats, Job, JobCategory,
    JobCreateBody, LoginRequest, RegisterRequest, User, WalletInfo,
};

/// The remote marketplace API. Business rules live on the other side of this trait.
pub trait MarketplaceApi: Send + Sync + 'static {
    /// Attach (or detach, with `None`) the bearer token sent with every later request.
    fn set_token(&self, token: Option<String>);

    fn login(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> + Send;

    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> + Send;

    fn profile(&self) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ApiError>> + Send;

    /// `category` is forwarded to the server as-is; filtering happens there.
    fn jobs(
        &self,
        category: Option<JobCategory>,
    ) -> impl Future<Output = Result<Vec<Job>, ApiError>> + Send;

    fn job(&self, job_id: &str) -> impl Future<Output = Result<Job, ApiError>> + Send;

    fn create_job(
        &self,
        body: JobCreateBody,
    ) -> impl Future<Output = Result<CreatedJob, ApiError>> + Send;

    fn place_bid(
        &self,
        body: BidCreateBody,
    ) -> impl Future<Output = Result<CreatedBid, ApiError>> + Send;

    fn select_bid(
        &self,
        job_id: &str,
        bid_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn wallet(&self) -> impl Future<Output = Result<WalletInfo, ApiError>> + Send;
}
