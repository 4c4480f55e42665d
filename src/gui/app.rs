use iced::{Element, Task, Theme};
use tracing::debug;

use crate::{
    core::{
        api::HttpApi,
        session::{Action, AppState, Event, Page, Services, Slot, effects, login_request},
        store::SqliteTokenStore,
    },
    gui::{
        Message,
        screens::{Request, ScreenData},
        widgets::layout,
    },
    models::JobCategory,
};

type AppServices = Services<HttpApi, SqliteTokenStore>;

pub struct WoiyaApp {
    state: AppState,
    services: AppServices,
    screen: ScreenData,
}

impl WoiyaApp {
    /// Start on the home view and check for a stored session in the background.
    pub fn boot(services: AppServices) -> (Self, Task<Message>) {
        let mut state = AppState::default();
        let ticket = state.begin_restore();
        let screen = ScreenData::for_page(state.page);
        let task = Task::perform(
            effects::restore_session(services.clone(), ticket),
            Message::Applied,
        );
        (
            Self {
                state,
                services,
                screen,
            },
            task,
        )
    }

    pub fn title(&self) -> String {
        format!("WOIYA - {}", self.state.page)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Request(request) => self.perform(request),
            Message::Applied(event) => {
                let refetch_jobs = matches!(
                    event,
                    Event::BidPlaced { .. } | Event::JobCreated { .. }
                );
                self.state.apply(event);
                self.sync_screen();
                if refetch_jobs && self.state.page == Page::Jobs {
                    self.fetch_jobs(self.state.job_filter)
                } else {
                    Task::none()
                }
            }
            Message::Logout => {
                self.state.logout();
                self.sync_screen();
                let services = self.services.clone();
                Task::future(async move { services.forget_token().await }).discard()
            }
            Message::DismissNotice => {
                self.state.dismiss_notice();
                Task::none()
            }
            screen_message => self.screen.update(screen_message, &self.state),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        layout(&self.state, self.screen.view(&self.state))
    }

    fn perform(&mut self, request: Request) -> Task<Message> {
        let services = self.services.clone();
        match request {
            Request::Navigate(page) => match self.state.navigate(page) {
                Ok(()) => {
                    self.sync_screen();
                    self.enter(page)
                }
                Err(e) => {
                    debug!(%page, error = %e, "navigation refused");
                    Task::none()
                }
            },
            Request::Login { email, password } => match login_request(&email, &password) {
                Ok(request) => {
                    let ticket = self.state.begin_action();
                    Task::perform(effects::login(services, ticket, request), Message::Applied)
                }
                Err(e) => self.refuse(Action::Login, &e.to_string()),
            },
            Request::Register(form) => match form.to_request() {
                Ok(request) => {
                    let ticket = self.state.begin_action();
                    Task::perform(effects::register(services, ticket, request), Message::Applied)
                }
                Err(e) => self.refuse(Action::Register, &e.to_string()),
            },
            Request::FetchJobs(category) => self.fetch_jobs(category),
            Request::ViewJob(job_id) => {
                let ticket = self.state.begin(Slot::JobDetails);
                Task::perform(
                    effects::view_job_details(services, ticket, job_id),
                    Message::Applied,
                )
            }
            Request::CreateJob(form) => match form.to_body_local() {
                Ok(body) => {
                    let ticket = self.state.begin_action();
                    Task::perform(effects::create_job(services, ticket, body), Message::Applied)
                }
                Err(e) => self.refuse(Action::CreateJob, &e.to_string()),
            },
            Request::PlaceBid { job_id, form } => match form.to_body(&job_id) {
                Ok(body) => {
                    let ticket = self.state.begin_action();
                    Task::perform(effects::place_bid(services, ticket, body), Message::Applied)
                }
                Err(e) => self.refuse(Action::PlaceBid, &e.to_string()),
            },
            Request::SelectBid { job_id, bid_id } => {
                let ticket = self.state.begin_action();
                let details = self.state.begin(Slot::JobDetails);
                Task::perform(
                    effects::select_bid(services, ticket, details, job_id, bid_id),
                    Message::Applied,
                )
            }
            Request::StartPayment(method) => {
                self.state.start_payment(method);
                Task::none()
            }
        }
    }

    fn refuse(&mut self, action: Action, message: &str) -> Task<Message> {
        self.state.fail(action, message);
        Task::none()
    }

    /// The read a page needs when it becomes visible.
    fn enter(&mut self, page: Page) -> Task<Message> {
        let services = self.services.clone();
        match page.on_enter() {
            Some(Slot::Stats) => {
                let ticket = self.state.begin(Slot::Stats);
                Task::perform(
                    effects::fetch_user_stats(services, ticket),
                    Message::Applied,
                )
            }
            Some(Slot::Jobs) => self.fetch_jobs(self.state.job_filter),
            Some(Slot::Wallet) => {
                let ticket = self.state.begin(Slot::Wallet);
                Task::perform(
                    effects::fetch_wallet_info(services, ticket),
                    Message::Applied,
                )
            }
            _ => Task::none(),
        }
    }

    fn fetch_jobs(&mut self, category: Option<JobCategory>) -> Task<Message> {
        let ticket = self.state.begin(Slot::Jobs);
        Task::perform(
            effects::fetch_jobs(self.services.clone(), ticket, category),
            Message::Applied,
        )
    }

    /// Swap in a fresh screen when the state moved to another page.
    fn sync_screen(&mut self) {
        if self.screen.page() != self.state.page {
            self.screen = ScreenData::for_page(self.state.page);
        }
    }
}
