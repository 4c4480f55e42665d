use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use woiya::{
    ApiError, MarketplaceApi,
    models::{
        AuthResponse, Bid, BidCreateBody, CreatedBid, CreatedJob, DashboardStats, Job,
        JobCategory, JobCreateBody, JobStatus, LoginRequest, ProviderStats, RegisterRequest, Role,
        SeekerStats, Transaction, User, WalletInfo,
    },
};

pub const PASSWORD: &str = "secret123";
pub const SEEKER_EMAIL: &str = "siti@example.com";
pub const PROVIDER_EMAIL: &str = "budi@example.com";
pub const OTHER_SEEKER_EMAIL: &str = "rina@example.com";

/// Id of the seeded open pet care job posted by the seeker.
pub const OPEN_JOB: &str = "job-open";
/// Id of the seeded courier job that already has a provider.
pub const TAKEN_JOB: &str = "job-taken";

fn server(status: u16, detail: &str) -> ApiError {
    ApiError::Server {
        status,
        detail: Some(detail.to_string()),
    }
}

fn unauthorized(detail: &str) -> ApiError {
    ApiError::Unauthorized {
        detail: Some(detail.to_string()),
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

#[derive(Debug, Default)]
struct Market {
    users: Vec<(User, String)>,
    /// token -> user id
    sessions: HashMap<String, String>,
    current_token: Option<String>,
    jobs: Vec<Job>,
    transactions: Vec<Transaction>,
    calls: Vec<String>,
}

impl Market {
    fn current_user(&self) -> Result<User, ApiError> {
        let user_id = self
            .current_token
            .as_ref()
            .and_then(|token| self.sessions.get(token))
            .ok_or_else(|| unauthorized("Invalid token"))?;
        self.users
            .iter()
            .map(|(user, _)| user)
            .find(|user| &user.id == user_id)
            .cloned()
            .ok_or_else(|| unauthorized("User not found"))
    }

    fn issue_token(&mut self, user_id: &str) -> String {
        let token = new_id("token");
        self.sessions.insert(token.clone(), user_id.to_string());
        token
    }

    fn job_mut(&mut self, job_id: &str) -> Result<&mut Job, ApiError> {
        self.jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or_else(|| server(404, "Job not found"))
    }
}

/// In-process stand-in for the marketplace backend, enforcing its business rules.
#[derive(Debug, Default)]
pub struct FakeMarketplace {
    market: Mutex<Market>,
}

impl FakeMarketplace {
    /// A seeker, a second seeker and a provider, plus one open and one taken job.
    pub fn seeded() -> Self {
        let fake = Self::default();
        {
            let mut market = fake.market();
            let seeker = make_user("u-seeker", "Siti Rahma", SEEKER_EMAIL, Role::Seeker, 500_000);
            let other = make_user("u-other", "Rina Putri", OTHER_SEEKER_EMAIL, Role::Seeker, 0);
            let provider = make_user("u-provider", "Budi Santoso", PROVIDER_EMAIL, Role::Provider, 75_000);
            for user in [seeker, other, provider] {
                market.users.push((user, PASSWORD.to_string()));
            }

            market.jobs.push(make_job(OPEN_JOB, "u-seeker", JobCategory::PetCare, JobStatus::Open));
            let mut taken = make_job(TAKEN_JOB, "u-seeker", JobCategory::Courier, JobStatus::InProgress);
            taken.selected_bid_id = Some("bid-seeded".to_string());
            market.jobs.push(taken);

            market.transactions.push(Transaction {
                id: "tx-1".to_string(),
                amount: 150_000,
                payer_id: Some("u-seeker".to_string()),
                receiver_id: Some("u-provider".to_string()),
                job_id: Some(TAKEN_JOB.to_string()),
                status: Some("completed".to_string()),
                payment_method: Some("wallet".to_string()),
            });
        }
        fake
    }

    fn market(&self) -> MutexGuard<'_, Market> {
        self.market
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Log the user in on the server side only, as if a token were left from an earlier run.
    pub fn token_for(&self, email: &str) -> String {
        let mut market = self.market();
        let user_id = market
            .users
            .iter()
            .find(|(user, _)| user.email == email)
            .map(|(user, _)| user.id.clone())
            .expect("unknown test user");
        market.issue_token(&user_id)
    }

    /// Every request received so far, e.g. `"GET /jobs?category=perawatan_hewan"`.
    pub fn calls(&self) -> Vec<String> {
        self.market().calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn current_token(&self) -> Option<String> {
        self.market().current_token.clone()
    }

    pub fn stored_job(&self, job_id: &str) -> Option<Job> {
        self.market()
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
    }

    fn record(&self, call: impl Into<String>) -> MutexGuard<'_, Market> {
        let mut market = self.market();
        market.calls.push(call.into());
        market
    }
}

impl MarketplaceApi for FakeMarketplace {
    fn set_token(&self, token: Option<String>) {
        self.market().current_token = token;
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let mut market = self.record("POST /auth/login");
        let user = market
            .users
            .iter()
            .find(|(user, password)| user.email == request.email && *password == request.password)
            .map(|(user, _)| user.clone())
            .ok_or_else(|| unauthorized("Invalid credentials"))?;
        let token = market.issue_token(&user.id);
        Ok(AuthResponse { token, user })
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let mut market = self.record("POST /auth/register");
        if market.users.iter().any(|(user, _)| user.email == request.email) {
            return Err(server(400, "Email already registered"));
        }
        let mut user = make_user(
            &new_id("u"),
            &request.full_name,
            &request.email,
            request.role,
            0,
        );
        user.phone = Some(request.phone);
        market.users.push((user.clone(), request.password));
        let token = market.issue_token(&user.id);
        Ok(AuthResponse { token, user })
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.record("GET /user/profile").current_user()
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let market = self.record("GET /dashboard/stats");
        let user = market.current_user()?;
        let stats = match user.role {
            Role::Seeker => {
                let mine: Vec<&Job> = market
                    .jobs
                    .iter()
                    .filter(|job| job.creator_id.as_deref() == Some(user.id.as_str()))
                    .collect();
                DashboardStats::Seeker(SeekerStats {
                    total_jobs: mine.len() as u64,
                    active_jobs: mine.iter().filter(|job| job.status != JobStatus::Completed).count()
                        as u64,
                    completed_jobs: mine.iter().filter(|job| job.status == JobStatus::Completed).count()
                        as u64,
                    wallet_balance: user.wallet_balance,
                })
            }
            Role::Provider => {
                let bids: Vec<&Bid> = market
                    .jobs
                    .iter()
                    .flat_map(|job| job.bids.iter())
                    .filter(|bid| bid.bidder_id.as_deref() == Some(user.id.as_str()))
                    .collect();
                DashboardStats::Provider(ProviderStats {
                    total_bids: bids.len() as u64,
                    selected_bids: bids.iter().filter(|bid| bid.is_selected).count() as u64,
                    total_earnings: 0,
                    wallet_balance: user.wallet_balance,
                    rating: 4.5,
                })
            }
        };
        Ok(stats)
    }

    async fn jobs(&self, category: Option<JobCategory>) -> Result<Vec<Job>, ApiError> {
        let call = match category {
            Some(category) => format!("GET /jobs?category={}", category.as_str()),
            None => "GET /jobs".to_string(),
        };
        let market = self.record(call);
        market.current_user()?;
        Ok(market
            .jobs
            .iter()
            .filter(|job| category.is_none_or(|category| job.category == category))
            .cloned()
            .collect())
    }

    async fn job(&self, job_id: &str) -> Result<Job, ApiError> {
        let mut market = self.record(format!("GET /jobs/{}", job_id));
        market.current_user()?;
        market.job_mut(job_id).map(|job| job.clone())
    }

    async fn create_job(&self, body: JobCreateBody) -> Result<CreatedJob, ApiError> {
        let mut market = self.record("POST /jobs");
        let user = market.current_user()?;
        if user.role != Role::Seeker {
            return Err(server(403, "Only service seekers can create jobs"));
        }
        let job_id = new_id("job");
        let mut job = make_job(&job_id, &user.id, body.category, JobStatus::Open);
        job.title = body.title;
        job.description = body.description;
        job.budget_min = body.budget_min;
        job.budget_max = body.budget_max;
        job.address = body.address;
        job.deadline = Some(body.deadline);
        job.requirements = body.requirements;
        market.jobs.push(job.clone());
        Ok(CreatedJob {
            job_id,
            job: Some(job),
        })
    }

    async fn place_bid(&self, body: BidCreateBody) -> Result<CreatedBid, ApiError> {
        let mut market = self.record(format!("POST /bids {}", body.job_id));
        let user = market.current_user()?;
        if user.role != Role::Provider {
            return Err(server(403, "Only service providers can place bids"));
        }
        let job = market.job_mut(&body.job_id)?;
        if !job.is_open() {
            return Err(server(400, "Job is not open for bidding"));
        }
        if job.bids.iter().any(|bid| bid.bidder_id.as_deref() == Some(user.id.as_str())) {
            return Err(server(400, "You have already placed a bid on this job"));
        }
        let bid_id = new_id("bid");
        job.bids.push(Bid {
            id: bid_id.clone(),
            amount: body.amount,
            message: body.message,
            completion_time: body.completion_time,
            bidder_id: Some(user.id.clone()),
            bidder_name: Some(user.full_name.clone()),
            bidder_rating: user.rating,
            is_selected: false,
        });
        job.bids_count += 1;
        Ok(CreatedBid { bid_id })
    }

    async fn select_bid(&self, job_id: &str, bid_id: &str) -> Result<(), ApiError> {
        let mut market = self.record(format!("POST /jobs/{}/select-bid/{}", job_id, bid_id));
        let user = market.current_user()?;
        let job = market.job_mut(job_id)?;
        if job.creator_id.as_deref() != Some(user.id.as_str()) {
            return Err(server(403, "Only the job creator can select a bid"));
        }
        let bid = job
            .bids
            .iter_mut()
            .find(|bid| bid.id == bid_id)
            .ok_or_else(|| server(404, "Bid not found"))?;
        bid.is_selected = true;
        job.selected_bid_id = Some(bid_id.to_string());
        job.status = JobStatus::InProgress;
        Ok(())
    }

    async fn wallet(&self) -> Result<WalletInfo, ApiError> {
        let market = self.record("GET /wallet");
        let user = market.current_user()?;
        Ok(WalletInfo {
            balance: user.wallet_balance,
            recent_transactions: market
                .transactions
                .iter()
                .filter(|tx| {
                    tx.payer_id.as_deref() == Some(user.id.as_str())
                        || tx.receiver_id.as_deref() == Some(user.id.as_str())
                })
                .cloned()
                .collect(),
        })
    }
}

pub fn make_user(id: &str, full_name: &str, email: &str, role: Role, wallet_balance: i64) -> User {
    User {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        role,
        wallet_balance,
        phone: None,
        rating: None,
    }
}

pub fn make_job(id: &str, creator_id: &str, category: JobCategory, status: JobStatus) -> Job {
    Job {
        id: id.to_string(),
        title: format!("Job {}", id),
        description: "Test job".to_string(),
        category,
        budget_min: 50_000,
        budget_max: 100_000,
        address: "Jl. Thamrin 10".to_string(),
        deadline: None,
        requirements: vec![],
        status,
        creator_id: Some(creator_id.to_string()),
        creator_name: None,
        selected_bid_id: None,
        bids_count: 0,
        bids: vec![],
    }
}
