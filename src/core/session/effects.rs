//! Async halves of the controller operations.
//!
//! Each effect owns what it needs (so it can run detached, e.g. as a GUI task),
//! talks to the API and the token store, and resolves to a single [`Event`].
//! Nothing here touches [`AppState`](super::AppState).

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    core::{
        api::MarketplaceApi,
        session::{
            requests::Ticket,
            state::{Action, Event},
        },
        store::TokenStore,
    },
    models::{
        AuthResponse, BidCreateBody, DashboardStats, JobCategory, JobCreateBody, LoginRequest,
        RegisterRequest,
    },
};

/// Shared handles to the remote API and the local token store.
#[derive(Debug)]
pub struct Services<A, S> {
    pub api: Arc<A>,
    pub store: Arc<S>,
}

impl<A, S> Clone for Services<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
        }
    }
}

impl<A: MarketplaceApi, S: TokenStore> Services<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Arc::new(api),
            store: Arc::new(store),
        }
    }

    async fn stats_or_none(&self) -> Option<DashboardStats> {
        match self.api.dashboard_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(error = %e, "failed to fetch dashboard stats");
                None
            }
        }
    }

    /// Persist and attach a fresh token, then load statistics for the new session.
    async fn authenticate(&self, auth: AuthResponse) -> Event {
        let AuthResponse { token, user } = auth;
        if let Err(e) = self.store.save_token(&token).await {
            warn!(error = %e, "failed to persist auth token");
        }
        self.api.set_token(Some(token.clone()));
        let stats = self.stats_or_none().await;
        info!(user_id = %user.id, role = ?user.role, "signed in");
        Event::Authenticated { token, user, stats }
    }

    /// Detach the token from the API client and remove it from the store.
    pub async fn forget_token(&self) {
        self.api.set_token(None);
        if let Err(e) = self.store.clear_token().await {
            warn!(error = %e, "failed to clear stored auth token");
        }
    }
}

pub async fn login<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    request: LoginRequest,
) -> Event {
    match services.api.login(request).await {
        Ok(auth) => services.authenticate(auth).await,
        Err(e) => {
            warn!(error = %e, "login failed");
            Event::ActionFailed {
                ticket,
                action: Action::Login,
                message: e.user_message().to_string(),
            }
        }
    }
}

pub async fn register<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    request: RegisterRequest,
) -> Event {
    match services.api.register(request).await {
        Ok(auth) => services.authenticate(auth).await,
        Err(e) => {
            warn!(error = %e, "registration failed");
            Event::ActionFailed {
                ticket,
                action: Action::Register,
                message: e.user_message().to_string(),
            }
        }
    }
}

/// Attach the stored token and confirm it with a profile fetch.
/// Any failure discards the token without telling the user.
pub async fn restore_session<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
) -> Event {
    let token = match services.store.load_token().await {
        Ok(Some(token)) => token,
        Ok(None) => return Event::NoStoredSession { ticket },
        Err(e) => {
            warn!(error = %e, "failed to read stored auth token");
            return Event::NoStoredSession { ticket };
        }
    };

    services.api.set_token(Some(token.clone()));
    match services.api.profile().await {
        Ok(user) => {
            let stats = services.stats_or_none().await;
            info!(user_id = %user.id, "session restored");
            Event::SessionRestored {
                ticket,
                token,
                user,
                stats,
            }
        }
        Err(e) => {
            debug!(error = %e, "discarding stored auth token");
            services.forget_token().await;
            Event::SessionRestoreFailed { ticket }
        }
    }
}

pub async fn fetch_user_stats<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
) -> Event {
    match services.api.dashboard_stats().await {
        Ok(stats) => Event::StatsLoaded { ticket, stats },
        Err(e) => {
            warn!(error = %e, "failed to fetch dashboard stats");
            Event::FetchFailed { ticket }
        }
    }
}

pub async fn fetch_jobs<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    category: Option<JobCategory>,
) -> Event {
    match services.api.jobs(category).await {
        Ok(jobs) => {
            debug!(count = jobs.len(), ?category, "jobs fetched");
            Event::JobsLoaded {
                ticket,
                category,
                jobs,
            }
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch jobs");
            Event::FetchFailed { ticket }
        }
    }
}

pub async fn fetch_wallet_info<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
) -> Event {
    match services.api.wallet().await {
        Ok(wallet) => Event::WalletLoaded { ticket, wallet },
        Err(e) => {
            warn!(error = %e, "failed to fetch wallet info");
            Event::FetchFailed { ticket }
        }
    }
}

pub async fn view_job_details<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    job_id: String,
) -> Event {
    match services.api.job(&job_id).await {
        Ok(job) => Event::JobOpened { ticket, job },
        Err(e) => {
            warn!(error = %e, %job_id, "failed to fetch job details");
            Event::JobOpenFailed {
                ticket,
                message: e.user_message().to_string(),
            }
        }
    }
}

pub async fn create_job<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    body: JobCreateBody,
) -> Event {
    match services.api.create_job(body).await {
        Ok(created) => Event::JobCreated {
            ticket,
            job_id: created.job_id,
        },
        Err(e) => {
            warn!(error = %e, "failed to create job");
            Event::ActionFailed {
                ticket,
                action: Action::CreateJob,
                message: e.user_message().to_string(),
            }
        }
    }
}

pub async fn place_bid<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    body: BidCreateBody,
) -> Event {
    let job_id = body.job_id.clone();
    match services.api.place_bid(body).await {
        Ok(created) => {
            debug!(bid_id = %created.bid_id, %job_id, "bid accepted by server");
            Event::BidPlaced { ticket, job_id }
        }
        Err(e) => {
            warn!(error = %e, %job_id, "failed to place bid");
            Event::ActionFailed {
                ticket,
                action: Action::PlaceBid,
                message: e.user_message().to_string(),
            }
        }
    }
}

/// Select the bid, then reload the job so the view shows the server's result.
pub async fn select_bid<A: MarketplaceApi, S: TokenStore>(
    services: Services<A, S>,
    ticket: Ticket,
    details: Ticket,
    job_id: String,
    bid_id: String,
) -> Event {
    let result = async {
        services.api.select_bid(&job_id, &bid_id).await?;
        services.api.job(&job_id).await
    }
    .await;
    match result {
        Ok(job) => Event::BidSelected {
            ticket,
            details,
            job,
        },
        Err(e) => {
            warn!(error = %e, %job_id, %bid_id, "failed to select bid");
            Event::ActionFailed {
                ticket,
                action: Action::SelectBid,
                message: e.user_message().to_string(),
            }
        }
    }
}
