//! Session & view controller: client state, the operations that change it, and the
//! async effects behind those operations.

mod controller;
pub mod effects;
mod form;
mod requests;
mod state;

pub use controller::Controller;
pub use effects::Services;
pub use form::{BidForm, FormError, JobForm, RegisterForm, login_request, normalize_deadline};
pub use requests::{Slot, Ticket};
pub use state::{Action, AppState, Event, NavError, Notice, NoticeKind, Page, Session};
