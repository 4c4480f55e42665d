use crate::{
    core::session::Event,
    gui::screens::{
        Request, ScreenMessage, create_job::CreateJobScreen, dashboard::DashboardScreen,
        home::HomeScreen, job_details::JobDetailsScreen, jobs::JobsScreen, login::LoginScreen,
        register::RegisterScreen, wallet::WalletScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    Home(ScreenMessage<HomeScreen>),
    Login(ScreenMessage<LoginScreen>),
    Register(ScreenMessage<RegisterScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    Jobs(ScreenMessage<JobsScreen>),
    CreateJob(ScreenMessage<CreateJobScreen>),
    Wallet(ScreenMessage<WalletScreen>),
    JobDetails(ScreenMessage<JobDetailsScreen>),
    /// A screen or the header asked for an operation.
    Request(Request),
    /// An effect finished.
    Applied(Event),
    Logout,
    DismissNotice,
}
