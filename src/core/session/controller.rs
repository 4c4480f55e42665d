use crate::{
    core::{
        api::MarketplaceApi,
        session::{
            effects::{self, Services},
            form::{self, BidForm, JobForm, RegisterForm},
            requests::Slot,
            state::{Action, AppState, Event, NavError, Page},
        },
        store::TokenStore,
    },
    models::{JobCategory, PaymentMethod},
};

/// Owns the [`AppState`] and runs each operation to completion before returning.
///
/// This is the sequential driver used by the command line and the tests; the GUI
/// runs the same effects as detached tasks and applies their events itself.
#[derive(Debug)]
pub struct Controller<A, S> {
    state: AppState,
    services: Services<A, S>,
}

impl<A: MarketplaceApi, S: TokenStore> Controller<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self::with_services(Services::new(api, store))
    }

    pub fn with_services(services: Services<A, S>) -> Self {
        Self {
            state: AppState::default(),
            services,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn services(&self) -> &Services<A, S> {
        &self.services
    }

    pub async fn restore_session(&mut self) {
        let ticket = self.state.begin_restore();
        let event = effects::restore_session(self.services.clone(), ticket).await;
        self.state.apply(event);
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        match form::login_request(email, password) {
            Ok(request) => {
                let ticket = self.state.begin_action();
                let event = effects::login(self.services.clone(), ticket, request).await;
                self.state.apply(event);
            }
            Err(e) => self.state.fail(Action::Login, &e.to_string()),
        }
    }

    pub async fn register(&mut self, form: &RegisterForm) {
        match form.to_request() {
            Ok(request) => {
                let ticket = self.state.begin_action();
                let event = effects::register(self.services.clone(), ticket, request).await;
                self.state.apply(event);
            }
            Err(e) => self.state.fail(Action::Register, &e.to_string()),
        }
    }

    pub async fn logout(&mut self) {
        self.state.logout();
        self.services.forget_token().await;
    }

    pub async fn fetch_user_stats(&mut self) {
        let ticket = self.state.begin(Slot::Stats);
        let event = effects::fetch_user_stats(self.services.clone(), ticket).await;
        self.state.apply(event);
    }

    pub async fn fetch_jobs(&mut self, category: Option<JobCategory>) {
        let ticket = self.state.begin(Slot::Jobs);
        let event = effects::fetch_jobs(self.services.clone(), ticket, category).await;
        self.state.apply(event);
    }

    pub async fn fetch_wallet_info(&mut self) {
        let ticket = self.state.begin(Slot::Wallet);
        let event = effects::fetch_wallet_info(self.services.clone(), ticket).await;
        self.state.apply(event);
    }

    /// Fetch the job first; the view switches only once it is in state.
    pub async fn view_job_details(&mut self, job_id: &str) {
        let ticket = self.state.begin(Slot::JobDetails);
        let event =
            effects::view_job_details(self.services.clone(), ticket, job_id.to_string()).await;
        self.state.apply(event);
    }

    pub async fn create_job(&mut self, form: &JobForm) {
        match form.to_body_local() {
            Ok(body) => {
                let ticket = self.state.begin_action();
                let event = effects::create_job(self.services.clone(), ticket, body).await;
                let created = matches!(event, Event::JobCreated { .. });
                self.state.apply(event);
                if created && self.state.page == Page::Jobs {
                    self.fetch_jobs(self.state.job_filter).await;
                }
            }
            Err(e) => self.state.fail(Action::CreateJob, &e.to_string()),
        }
    }

    pub async fn place_bid(&mut self, job_id: &str, form: &BidForm) {
        let body = match form.to_body(job_id) {
            Ok(body) => body,
            Err(e) => return self.state.fail(Action::PlaceBid, &e.to_string()),
        };
        let ticket = self.state.begin_action();
        let event = effects::place_bid(self.services.clone(), ticket, body).await;
        let placed = matches!(event, Event::BidPlaced { .. });
        self.state.apply(event);
        if placed {
            self.fetch_jobs(self.state.job_filter).await;
        }
    }

    pub async fn select_bid(&mut self, job_id: &str, bid_id: &str) {
        let ticket = self.state.begin_action();
        let details = self.state.begin(Slot::JobDetails);
        let event = effects::select_bid(
            self.services.clone(),
            ticket,
            details,
            job_id.to_string(),
            bid_id.to_string(),
        )
        .await;
        self.state.apply(event);
    }

    /// Switch views and run the read the new page needs.
    pub async fn navigate(&mut self, page: Page) -> Result<(), NavError> {
        self.state.navigate(page)?;
        match page.on_enter() {
            Some(Slot::Stats) => self.fetch_user_stats().await,
            Some(Slot::Jobs) => self.fetch_jobs(self.state.job_filter).await,
            Some(Slot::Wallet) => self.fetch_wallet_info().await,
            _ => {}
        }
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.state.dismiss_notice();
    }

    pub fn start_payment(&mut self, method: PaymentMethod) {
        self.state.start_payment(method);
    }
}
