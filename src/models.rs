//! Wire types shared by the API client, the session state and the views.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default job location (Jakarta) attached to every job created from this client.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint {
    lat: -6.2088,
    lng: 106.8456,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Posts jobs and picks bids.
    #[serde(rename = "pencari_jasa", alias = "seeker")]
    Seeker,
    /// Bids on open jobs.
    #[serde(rename = "penyedia_jasa", alias = "provider")]
    Provider,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Seeker, Role::Provider];

    pub fn label(self) -> &'static str {
        match self {
            Role::Seeker => "Service seeker",
            Role::Provider => "Service provider",
        }
    }

    /// Label of the jobs page as seen by this role.
    pub fn jobs_label(self) -> &'static str {
        match self {
            Role::Seeker => "My jobs",
            Role::Provider => "Find jobs",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pencari_jasa" | "seeker" => Ok(Role::Seeker),
            "penyedia_jasa" | "provider" => Ok(Role::Provider),
            other => Err(anyhow::anyhow!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub wallet_balance: i64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "courier_logistik")]
    Courier,
    #[serde(rename = "perbaikan_rumah")]
    HomeRepair,
    #[serde(rename = "asisten_harian")]
    DailyAssistant,
    #[serde(rename = "perawatan_hewan")]
    PetCare,
    #[serde(rename = "edukasi_belajar")]
    Education,
    #[serde(rename = "acara_kreatif")]
    Events,
}

impl JobCategory {
    pub const ALL: [JobCategory; 6] = [
        JobCategory::Courier,
        JobCategory::HomeRepair,
        JobCategory::DailyAssistant,
        JobCategory::PetCare,
        JobCategory::Education,
        JobCategory::Events,
    ];

    /// Value used on the wire and in the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            JobCategory::Courier => "courier_logistik",
            JobCategory::HomeRepair => "perbaikan_rumah",
            JobCategory::DailyAssistant => "asisten_harian",
            JobCategory::PetCare => "perawatan_hewan",
            JobCategory::Education => "edukasi_belajar",
            JobCategory::Events => "acara_kreatif",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobCategory::Courier => "Courier & logistics",
            JobCategory::HomeRepair => "Home repair",
            JobCategory::DailyAssistant => "Daily assistant",
            JobCategory::PetCare => "Pet care",
            JobCategory::Education => "Education & tutoring",
            JobCategory::Events => "Events & creative",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for JobCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        JobCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown job category: {}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => JobStatus::Open,
            "in_progress" => JobStatus::InProgress,
            "completed" => JobStatus::Completed,
            "cancelled" => JobStatus::Cancelled,
            _ => JobStatus::Other(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        match value {
            JobStatus::Open => "open".to_string(),
            JobStatus::InProgress => "in_progress".to_string(),
            JobStatus::Completed => "completed".to_string(),
            JobStatus::Cancelled => "cancelled".to_string(),
            JobStatus::Other(other) => other,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Open => f.write_str("open"),
            JobStatus::InProgress => f.write_str("in progress"),
            JobStatus::Completed => f.write_str("completed"),
            JobStatus::Cancelled => f.write_str("cancelled"),
            JobStatus::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub completion_time: String,
    #[serde(default)]
    pub bidder_id: Option<String>,
    #[serde(default)]
    pub bidder_name: Option<String>,
    #[serde(default)]
    pub bidder_rating: Option<f64>,
    #[serde(default)]
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: JobCategory,
    pub budget_min: i64,
    pub budget_max: i64,
    #[serde(default)]
    pub address: String,
    /// Server timestamp, kept verbatim for display.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub selected_bid_id: Option<String>,
    #[serde(default)]
    pub bids_count: u32,
    #[serde(default)]
    pub bids: Vec<Bid>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    pub fn is_created_by(&self, user: &User) -> bool {
        self.creator_id.as_deref() == Some(user.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    pub amount: i64,
    #[serde(default)]
    pub payer_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Transaction {
    /// Whether this transaction left the given user's wallet.
    pub fn is_outgoing_for(&self, user_id: &str) -> bool {
        self.payer_id.as_deref() == Some(user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub balance: i64,
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerStats {
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub completed_jobs: u64,
    #[serde(default)]
    pub wallet_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStats {
    pub total_bids: u64,
    pub selected_bids: u64,
    pub total_earnings: i64,
    #[serde(default)]
    pub wallet_balance: i64,
    #[serde(default)]
    pub rating: f64,
}

/// Dashboard statistics, tagged by the role they were computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum DashboardStats {
    #[serde(rename = "pencari_jasa")]
    Seeker(SeekerStats),
    #[serde(rename = "penyedia_jasa")]
    Provider(ProviderStats),
}

impl DashboardStats {
    pub fn role(&self) -> Role {
        match self {
            DashboardStats::Seeker(_) => Role::Seeker,
            DashboardStats::Provider(_) => Role::Provider,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    GoPay,
    Ovo,
    VirtualAccount,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::GoPay,
        PaymentMethod::Ovo,
        PaymentMethod::VirtualAccount,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::GoPay => "GoPay",
            PaymentMethod::Ovo => "OVO",
            PaymentMethod::VirtualAccount => "Virtual Account",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Body of `POST /api/jobs`, produced by [`crate::core::session::JobForm`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCreateBody {
    pub title: String,
    pub description: String,
    pub category: JobCategory,
    pub budget_min: i64,
    pub budget_max: i64,
    pub location: GeoPoint,
    pub address: String,
    /// RFC 3339, UTC.
    pub deadline: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidCreateBody {
    pub job_id: String,
    pub amount: i64,
    pub message: String,
    pub completion_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedJob {
    pub job_id: String,
    #[serde(default)]
    pub job: Option<Job>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBid {
    pub bid_id: String,
}

/// Formats an amount as Indonesian rupiah, e.g. `Rp 1.250.000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp {}", sign, grouped)
}
