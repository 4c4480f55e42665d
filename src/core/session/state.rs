use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{
    core::session::requests::{RequestTracker, Slot, Ticket},
    models::{DashboardStats, Job, JobCategory, PaymentMethod, Role, User, WalletInfo},
};

/// The fixed set of views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Jobs,
    CreateJob,
    Wallet,
    JobDetails,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Jobs,
        Page::CreateJob,
        Page::Wallet,
        Page::JobDetails,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Jobs => "jobs",
            Page::CreateJob => "create-job",
            Page::Wallet => "wallet",
            Page::JobDetails => "job-details",
        }
    }

    pub fn requires_user(self) -> bool {
        !matches!(self, Page::Home | Page::Login | Page::Register)
    }

    /// Read request a page issues when it is entered.
    pub fn on_enter(self) -> Option<Slot> {
        match self {
            Page::Dashboard => Some(Slot::Stats),
            Page::Jobs => Some(Slot::Jobs),
            Page::Wallet => Some(Slot::Wallet),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown page: {}", s))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    #[error("Please log in first")]
    LoginRequired,
    #[error("No job has been loaded yet")]
    JobNotLoaded,
    #[error("Only service seekers can post jobs")]
    SeekersOnly,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// The single pending user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// User actions whose failure is reported with a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
    LoadJob,
    CreateJob,
    PlaceBid,
    SelectBid,
}

impl Action {
    fn failure_text(self, message: &str) -> String {
        let prefix = match self {
            Action::Login => "Login failed",
            Action::Register => "Registration failed",
            Action::LoadJob => return "Failed to load job details".to_string(),
            Action::CreateJob => "Failed to create job",
            Action::PlaceBid => "Failed to place bid",
            Action::SelectBid => "Failed to select bid",
        };
        format!("{}: {}", prefix, message)
    }
}

/// Outcome of an effect, applied to [`AppState`] by [`AppState::apply`].
#[derive(Debug, Clone)]
pub enum Event {
    Authenticated {
        token: String,
        user: User,
        stats: Option<DashboardStats>,
    },
    SessionRestored {
        ticket: Ticket,
        token: String,
        user: User,
        stats: Option<DashboardStats>,
    },
    SessionRestoreFailed {
        ticket: Ticket,
    },
    NoStoredSession {
        ticket: Ticket,
    },
    StatsLoaded {
        ticket: Ticket,
        stats: DashboardStats,
    },
    JobsLoaded {
        ticket: Ticket,
        category: Option<JobCategory>,
        jobs: Vec<Job>,
    },
    WalletLoaded {
        ticket: Ticket,
        wallet: WalletInfo,
    },
    /// A read failed; prior state is kept.
    FetchFailed {
        ticket: Ticket,
    },
    JobOpened {
        ticket: Ticket,
        job: Job,
    },
    JobOpenFailed {
        ticket: Ticket,
        message: String,
    },
    // User actions carry the session ticket from `begin_action`.
    JobCreated {
        ticket: Ticket,
        job_id: String,
    },
    BidPlaced {
        ticket: Ticket,
        job_id: String,
    },
    BidSelected {
        ticket: Ticket,
        /// Reload of the job, dropped if another job was opened meanwhile.
        details: Ticket,
        job: Job,
    },
    ActionFailed {
        ticket: Ticket,
        action: Action,
        message: String,
    },
}

/// All client state. Mutated only through the methods below.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,
    pub page: Page,
    pub selected_job: Option<Job>,
    /// `None` until the first successful fetch.
    pub jobs: Option<Vec<Job>>,
    pub job_filter: Option<JobCategory>,
    pub wallet: Option<WalletInfo>,
    pub stats: Option<DashboardStats>,
    pub notice: Option<Notice>,
    /// A stored token is being checked; auth forms stay disabled meanwhile.
    pub restoring: bool,
    requests: RequestTracker,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            page: Page::Home,
            selected_job: None,
            jobs: None,
            job_filter: None,
            wallet: None,
            stats: None,
            notice: None,
            restoring: false,
            requests: RequestTracker::default(),
        }
    }
}

impl AppState {
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// Move to `page` if its preconditions hold; otherwise the view stays put.
    pub fn navigate(&mut self, page: Page) -> Result<(), NavError> {
        if page.requires_user() && !self.session.is_authenticated() {
            return Err(NavError::LoginRequired);
        }
        match page {
            Page::JobDetails if self.selected_job.is_none() => return Err(NavError::JobNotLoaded),
            Page::CreateJob if self.role() != Some(Role::Seeker) => {
                return Err(NavError::SeekersOnly);
            }
            _ => {}
        }
        self.page = page;
        Ok(())
    }

    /// Issue a ticket for a read of `slot`, superseding any request still in flight.
    pub fn begin(&mut self, slot: Slot) -> Ticket {
        self.requests.issue(slot)
    }

    pub fn begin_restore(&mut self) -> Ticket {
        self.restoring = true;
        self.requests.issue(Slot::Profile)
    }

    /// Ticket for a user action. Every action of one session shares it, so logout
    /// or a new login drops whatever is still in flight.
    pub fn begin_action(&mut self) -> Ticket {
        self.requests.current(Slot::Session)
    }

    pub fn logout(&mut self) {
        self.session = Session::default();
        self.clear_loaded();
        self.page = Page::Home;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn fail(&mut self, action: Action, message: &str) {
        self.notify(Notice::error(action.failure_text(message)));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn start_payment(&mut self, method: PaymentMethod) {
        self.notify(Notice::info(format!(
            "Redirecting to {} payment gateway...",
            method.label()
        )));
    }

    pub fn can_create_job(&self) -> bool {
        self.role() == Some(Role::Seeker)
    }

    pub fn can_bid_on(&self, job: &Job) -> bool {
        self.role() == Some(Role::Provider) && job.is_open()
    }

    pub fn can_select_bid(&self, job: &Job) -> bool {
        self.user()
            .is_some_and(|user| job.is_created_by(user))
            && job.selected_bid_id.is_none()
            && job.is_open()
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Authenticated { token, user, stats } => {
                self.start_session(token, user, stats);
            }
            Event::SessionRestored {
                ticket,
                token,
                user,
                stats,
            } => {
                self.restoring = false;
                if self.accept(ticket) {
                    self.start_session(token, user, stats);
                }
            }
            Event::SessionRestoreFailed { ticket } => {
                self.restoring = false;
                if self.accept(ticket) {
                    self.session = Session::default();
                }
            }
            Event::NoStoredSession { .. } => {
                self.restoring = false;
            }
            Event::StatsLoaded { ticket, stats } => {
                if self.accept(ticket) {
                    self.stats = Some(stats);
                }
            }
            Event::JobsLoaded {
                ticket,
                category,
                jobs,
            } => {
                if self.accept(ticket) {
                    self.job_filter = category;
                    self.jobs = Some(jobs);
                }
            }
            Event::WalletLoaded { ticket, wallet } => {
                if self.accept(ticket) {
                    self.wallet = Some(wallet);
                }
            }
            Event::FetchFailed { .. } => {}
            Event::JobOpened { ticket, job } => {
                if self.accept(ticket) {
                    self.selected_job = Some(job);
                    self.page = Page::JobDetails;
                }
            }
            Event::JobOpenFailed { ticket, message } => {
                if self.accept(ticket) {
                    self.fail(Action::LoadJob, &message);
                }
            }
            Event::JobCreated { ticket, job_id } => {
                debug!(%job_id, "job created");
                if self.accept(ticket) {
                    self.notify(Notice::info("Job created successfully"));
                    self.page = Page::Jobs;
                }
            }
            Event::BidPlaced { ticket, job_id } => {
                debug!(%job_id, "bid placed");
                if self.accept(ticket) {
                    self.notify(Notice::info("Bid placed successfully"));
                }
            }
            Event::BidSelected {
                ticket,
                details,
                job,
            } => {
                if self.accept(ticket) {
                    self.notify(Notice::info("Bid selected successfully"));
                    if self.accept(details) {
                        self.selected_job = Some(job);
                    }
                }
            }
            Event::ActionFailed {
                ticket,
                action,
                message,
            } => {
                if self.accept(ticket) {
                    self.fail(action, &message);
                }
            }
        }
    }

    fn accept(&self, ticket: Ticket) -> bool {
        let current = self.requests.is_current(ticket);
        if !current {
            debug!(slot = ?ticket.slot(), "dropping superseded response");
        }
        current
    }

    fn start_session(&mut self, token: String, user: User, stats: Option<DashboardStats>) {
        self.clear_loaded();
        self.session = Session {
            user: Some(user),
            token: Some(token),
        };
        self.stats = stats;
        self.page = Page::Dashboard;
    }

    /// Drop everything fetched under the current session and orphan in-flight reads.
    fn clear_loaded(&mut self) {
        self.selected_job = None;
        self.jobs = None;
        self.job_filter = None;
        self.wallet = None;
        self.stats = None;
        self.requests.invalidate_all();
    }
}
