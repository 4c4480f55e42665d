#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from woiya for tests
pub use woiya::{
    AppState, Controller, MemoryTokenStore, NavError, Notice, NoticeKind, Page, TokenStore,
    core::session::{BidForm, JobForm, RegisterForm},
    models::{DashboardStats, JobCategory, JobStatus, Role},
};

pub type TestController = Controller<FakeMarketplace, MemoryTokenStore>;

/// Controller over the seeded fake backend with an empty token store.
pub fn new_controller() -> TestController {
    Controller::new(FakeMarketplace::seeded(), MemoryTokenStore::default())
}

pub async fn logged_in(email: &str) -> TestController {
    let mut controller = new_controller();
    controller.login(email, PASSWORD).await;
    assert!(
        controller.state().session.is_authenticated(),
        "login as {} failed: {:?}",
        email,
        controller.state().notice
    );
    controller
}

pub fn api(controller: &TestController) -> &FakeMarketplace {
    &controller.services().api
}

pub async fn stored_token(controller: &TestController) -> Option<String> {
    controller
        .services()
        .store
        .load_token()
        .await
        .expect("Failed to read token store")
}

pub fn job_form(title: &str, budget_min: &str, budget_max: &str) -> JobForm {
    JobForm {
        title: title.to_string(),
        description: "Need help moving boxes".to_string(),
        category: JobCategory::DailyAssistant,
        budget_min: budget_min.to_string(),
        budget_max: budget_max.to_string(),
        address: "Jl. Merdeka 5".to_string(),
        deadline: "2026-12-01T09:00:00Z".to_string(),
        requirements: vec!["Strong back".to_string(), String::new()],
    }
}

pub fn bid_form(amount: &str) -> BidForm {
    BidForm {
        amount: amount.to_string(),
        message: "I can do it tomorrow".to_string(),
        completion_time: "1 day".to_string(),
    }
}
