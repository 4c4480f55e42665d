//! Integration tests for jobs, bids and job details.
//!
//! Tests cover:
//! - Category filtering forwarded to the server
//! - Posting jobs, including client-side validation
//! - Bidding rules enforced by the server
//! - Viewing a job and selecting a bid

mod common;

use std::sync::Arc;

use woiya::{MarketplaceApi, core::session::Services};

use common::*;

#[tokio::test]
async fn test_category_filter_is_passed_through() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;

    controller.fetch_jobs(Some(JobCategory::PetCare)).await;

    let fake = api(&controller);
    let query = format!("GET /jobs?category={}", JobCategory::PetCare.as_str());
    assert_eq!(fake.count_calls(&query), 1);
    let state = controller.state();
    assert_eq!(state.job_filter, Some(JobCategory::PetCare));
    let jobs = state.jobs.as_ref().expect("jobs should be loaded");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, OPEN_JOB);
    Ok(())
}

#[tokio::test]
async fn test_failed_filtered_fetch_keeps_filter_and_list() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    controller.fetch_jobs(None).await;
    let before = controller.state().jobs.clone();
    assert_eq!(before.as_ref().map(Vec::len), Some(2));

    // Server now rejects every request
    api(&controller).set_token(None);
    controller.fetch_jobs(Some(JobCategory::PetCare)).await;

    let state = controller.state();
    assert_eq!(state.job_filter, None);
    assert_eq!(state.jobs, before);
    assert!(state.notice.is_none());
    Ok(())
}

#[tokio::test]
async fn test_entering_jobs_page_fetches_all() -> anyhow::Result<()> {
    let mut controller = logged_in(SEEKER_EMAIL).await;

    controller.navigate(Page::Jobs).await?;

    assert_eq!(controller.state().page, Page::Jobs);
    assert_eq!(api(&controller).count_calls("GET /jobs"), 1);
    assert_eq!(controller.state().jobs.as_ref().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_provider_bids_on_open_job() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    controller.navigate(Page::Jobs).await?;

    controller.place_bid(OPEN_JOB, &bid_form("80000")).await;

    let state = controller.state();
    assert_eq!(state.notice, Some(Notice::info("Bid placed successfully")));
    // The list is refetched after a successful bid
    assert_eq!(api(&controller).count_calls("GET /jobs"), 2);
    let job = state
        .jobs
        .as_ref()
        .and_then(|jobs| jobs.iter().find(|job| job.id == OPEN_JOB))
        .expect("open job listed");
    assert_eq!(job.bids_count, 1);
    Ok(())
}

#[tokio::test]
async fn test_bid_on_taken_job_is_rejected() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    controller.navigate(Page::Jobs).await?;
    let before = controller.state().jobs.clone();

    controller.place_bid(TAKEN_JOB, &bid_form("80000")).await;

    assert_eq!(
        controller.state().notice,
        Some(Notice::error("Failed to place bid: Job is not open for bidding"))
    );
    assert_eq!(api(&controller).count_calls("GET /jobs"), 1);
    assert_eq!(controller.state().jobs, before);
    Ok(())
}

#[tokio::test]
async fn test_second_bid_on_same_job_is_rejected() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    controller.place_bid(OPEN_JOB, &bid_form("80000")).await;
    controller.dismiss_notice();

    controller.place_bid(OPEN_JOB, &bid_form("70000")).await;

    assert_eq!(
        controller.state().notice,
        Some(Notice::error(
            "Failed to place bid: You have already placed a bid on this job"
        ))
    );
    Ok(())
}

#[tokio::test]
async fn test_zero_bid_is_not_sent() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;

    controller.place_bid(OPEN_JOB, &bid_form("0")).await;

    assert_eq!(api(&controller).count_calls("POST /bids"), 0);
    assert_eq!(
        controller.state().notice,
        Some(Notice::error("Failed to place bid: Amount must be greater than zero"))
    );
    Ok(())
}

#[tokio::test]
async fn test_seeker_posts_job() -> anyhow::Result<()> {
    let mut controller = logged_in(SEEKER_EMAIL).await;
    controller.navigate(Page::CreateJob).await?;

    controller
        .create_job(&job_form("Help me move", "100000", "200000"))
        .await;

    let state = controller.state();
    assert_eq!(state.notice, Some(Notice::info("Job created successfully")));
    assert_eq!(state.page, Page::Jobs);
    let created = state
        .jobs
        .as_ref()
        .and_then(|jobs| jobs.iter().find(|job| job.title == "Help me move"))
        .expect("new job listed after refetch");
    assert_eq!(created.budget_min, 100_000);
    assert_eq!(created.requirements, vec!["Strong back".to_string()]);
    assert_eq!(created.deadline.as_deref(), Some("2026-12-01T09:00:00Z"));
    Ok(())
}

#[tokio::test]
async fn test_inverted_budget_is_rejected_before_sending() -> anyhow::Result<()> {
    let mut controller = logged_in(SEEKER_EMAIL).await;
    controller.navigate(Page::CreateJob).await?;

    controller
        .create_job(&job_form("Help me move", "300000", "200000"))
        .await;

    assert_eq!(api(&controller).count_calls("POST /jobs"), 0);
    assert_eq!(
        controller.state().notice,
        Some(Notice::error(
            "Failed to create job: Minimum budget cannot exceed maximum budget"
        ))
    );
    assert_eq!(controller.state().page, Page::CreateJob);
    Ok(())
}

#[tokio::test]
async fn test_rejected_job_from_jobs_page_skips_refetch() -> anyhow::Result<()> {
    let mut controller = logged_in(SEEKER_EMAIL).await;
    controller.navigate(Page::Jobs).await?;
    api(&controller).set_token(None);

    controller
        .create_job(&job_form("Help me move", "100000", "200000"))
        .await;

    assert_eq!(
        controller.state().notice,
        Some(Notice::error("Failed to create job: Invalid token"))
    );
    assert_eq!(api(&controller).count_calls("GET /jobs"), 1);
    Ok(())
}

#[tokio::test]
async fn test_provider_cannot_open_create_job() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;

    assert_eq!(
        controller.navigate(Page::CreateJob).await,
        Err(NavError::SeekersOnly)
    );
    assert_eq!(controller.state().page, Page::Dashboard);
    Ok(())
}

#[tokio::test]
async fn test_job_details_needs_a_loaded_job() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    assert_eq!(
        controller.navigate(Page::JobDetails).await,
        Err(NavError::JobNotLoaded)
    );

    controller.view_job_details(OPEN_JOB).await;

    let state = controller.state();
    assert_eq!(state.page, Page::JobDetails);
    assert_eq!(state.selected_job.as_ref().map(|job| job.id.as_str()), Some(OPEN_JOB));
    Ok(())
}

#[tokio::test]
async fn test_missing_job_keeps_current_view() -> anyhow::Result<()> {
    let mut controller = logged_in(PROVIDER_EMAIL).await;
    controller.navigate(Page::Jobs).await?;

    controller.view_job_details("no-such-job").await;

    let state = controller.state();
    assert_eq!(state.page, Page::Jobs);
    assert!(state.selected_job.is_none());
    assert_eq!(state.notice, Some(Notice::error("Failed to load job details")));
    Ok(())
}

fn sharing(fake: &Arc<FakeMarketplace>) -> TestController {
    Controller::with_services(Services {
        api: fake.clone(),
        store: Arc::new(MemoryTokenStore::default()),
    })
}

#[tokio::test]
async fn test_creator_selects_bid() -> anyhow::Result<()> {
    let fake = Arc::new(FakeMarketplace::seeded());

    let mut provider = sharing(&fake);
    provider.login(PROVIDER_EMAIL, PASSWORD).await;
    provider.place_bid(OPEN_JOB, &bid_form("90000")).await;
    let bid_id = fake.stored_job(OPEN_JOB).expect("seeded job").bids[0].id.clone();

    let mut seeker = sharing(&fake);
    seeker.login(SEEKER_EMAIL, PASSWORD).await;
    seeker.view_job_details(OPEN_JOB).await;
    let job = seeker.state().selected_job.clone().expect("job loaded");
    assert!(seeker.state().can_select_bid(&job));

    seeker.select_bid(OPEN_JOB, &bid_id).await;

    let state = seeker.state();
    assert_eq!(state.notice, Some(Notice::info("Bid selected successfully")));
    let job = state.selected_job.as_ref().expect("job reloaded");
    assert_eq!(job.selected_bid_id.as_deref(), Some(bid_id.as_str()));
    assert_eq!(job.status, JobStatus::InProgress);
    assert!(job.bids[0].is_selected);
    assert!(!state.can_select_bid(job));
    Ok(())
}

#[tokio::test]
async fn test_only_creator_may_select_bid() -> anyhow::Result<()> {
    let fake = Arc::new(FakeMarketplace::seeded());

    let mut provider = sharing(&fake);
    provider.login(PROVIDER_EMAIL, PASSWORD).await;
    provider.place_bid(OPEN_JOB, &bid_form("90000")).await;
    let bid_id = fake.stored_job(OPEN_JOB).expect("seeded job").bids[0].id.clone();

    let mut other = sharing(&fake);
    other.login(OTHER_SEEKER_EMAIL, PASSWORD).await;
    other.view_job_details(OPEN_JOB).await;
    let job = other.state().selected_job.clone().expect("job loaded");
    assert!(!other.state().can_select_bid(&job));

    other.select_bid(OPEN_JOB, &bid_id).await;

    assert_eq!(
        other.state().notice,
        Some(Notice::error(
            "Failed to select bid: Only the job creator can select a bid"
        ))
    );
    assert!(fake.stored_job(OPEN_JOB).expect("seeded job").selected_bid_id.is_none());
    Ok(())
}
