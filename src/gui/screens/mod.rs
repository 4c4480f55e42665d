pub mod create_job;
pub mod dashboard;
pub mod home;
pub mod job_details;
pub mod jobs;
pub mod login;
pub mod register;
pub mod wallet;

use iced::{Element, Task};

use crate::{
    core::session::{AppState, BidForm, JobForm, Page, RegisterForm},
    gui::Message,
    models::{JobCategory, PaymentMethod},
};

/// Something a screen asks the application to do on its behalf.
#[derive(Debug, Clone)]
pub enum Request {
    Navigate(Page),
    Login { email: String, password: String },
    Register(RegisterForm),
    FetchJobs(Option<JobCategory>),
    ViewJob(String),
    CreateJob(JobForm),
    PlaceBid { job_id: String, form: BidForm },
    SelectBid { job_id: String, bid_id: String },
    StartPayment(PaymentMethod),
}

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(Request),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ScreenMessage<Self>>;
}

/// The screen on display, with whatever the user has typed into it.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    Login(login::LoginScreen),
    Register(register::RegisterScreen),
    Dashboard(dashboard::DashboardScreen),
    Jobs(jobs::JobsScreen),
    CreateJob(create_job::CreateJobScreen),
    Wallet(wallet::WalletScreen),
    JobDetails(job_details::JobDetailsScreen),
}

impl ScreenData {
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Home => ScreenData::Home(home::HomeScreen),
            Page::Login => ScreenData::Login(login::LoginScreen::default()),
            Page::Register => ScreenData::Register(register::RegisterScreen::default()),
            Page::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen),
            Page::Jobs => ScreenData::Jobs(jobs::JobsScreen::default()),
            Page::CreateJob => ScreenData::CreateJob(create_job::CreateJobScreen::default()),
            Page::Wallet => ScreenData::Wallet(wallet::WalletScreen),
            Page::JobDetails => ScreenData::JobDetails(job_details::JobDetailsScreen),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            ScreenData::Home(_) => Page::Home,
            ScreenData::Login(_) => Page::Login,
            ScreenData::Register(_) => Page::Register,
            ScreenData::Dashboard(_) => Page::Dashboard,
            ScreenData::Jobs(_) => Page::Jobs,
            ScreenData::CreateJob(_) => Page::CreateJob,
            ScreenData::Wallet(_) => Page::Wallet,
            ScreenData::JobDetails(_) => Page::JobDetails,
        }
    }

    pub fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        match self {
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
            ScreenData::Login(screen) => screen.view(state).map(Message::Login),
            ScreenData::Register(screen) => screen.view(state).map(Message::Register),
            ScreenData::Dashboard(screen) => screen.view(state).map(Message::Dashboard),
            ScreenData::Jobs(screen) => screen.view(state).map(Message::Jobs),
            ScreenData::CreateJob(screen) => screen.view(state).map(Message::CreateJob),
            ScreenData::Wallet(screen) => screen.view(state).map(Message::Wallet),
            ScreenData::JobDetails(screen) => screen.view(state).map(Message::JobDetails),
        }
    }

    /// Route a screen message to the screen it belongs to. Requests bubble up as
    /// [`Message::Request`]; messages for a screen no longer shown are dropped.
    pub fn update(&mut self, message: Message, state: &AppState) -> Task<Message> {
        match (self, message) {
            (ScreenData::Login(screen), Message::Login(msg)) => {
                forward(screen, msg, state, Message::Login)
            }
            (ScreenData::Register(screen), Message::Register(msg)) => {
                forward(screen, msg, state, Message::Register)
            }
            (ScreenData::Jobs(screen), Message::Jobs(msg)) => {
                forward(screen, msg, state, Message::Jobs)
            }
            (ScreenData::CreateJob(screen), Message::CreateJob(msg)) => {
                forward(screen, msg, state, Message::CreateJob)
            }
            (ScreenData::Home(screen), Message::Home(msg)) => {
                forward(screen, msg, state, Message::Home)
            }
            (ScreenData::Dashboard(screen), Message::Dashboard(msg)) => {
                forward(screen, msg, state, Message::Dashboard)
            }
            (ScreenData::Wallet(screen), Message::Wallet(msg)) => {
                forward(screen, msg, state, Message::Wallet)
            }
            (ScreenData::JobDetails(screen), Message::JobDetails(msg)) => {
                forward(screen, msg, state, Message::JobDetails)
            }
            _ => Task::none(),
        }
    }
}

fn forward<S: Screen + 'static>(
    screen: &mut S,
    message: ScreenMessage<S>,
    state: &AppState,
    wrap: fn(ScreenMessage<S>) -> Message,
) -> Task<Message>
where
    S::Message: Send,
{
    match message {
        ScreenMessage::ScreenMessage(msg) => screen.update(msg, state).map(wrap),
        ScreenMessage::ParentMessage(request) => Task::done(Message::Request(request)),
    }
}
