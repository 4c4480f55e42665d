//! Client-side collection and validation of the request bodies users type in.

use thiserror::Error;
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::models::{
    BidCreateBody, DEFAULT_LOCATION, JobCategory, JobCreateBody, LoginRequest, RegisterRequest,
    Role,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("Minimum budget cannot exceed maximum budget")]
    BudgetRange,

    #[error("Deadline must look like YYYY-MM-DDTHH:MM")]
    InvalidDeadline,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn whole_number(value: &str, field: &'static str) -> Result<i64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing(field));
    }
    trimmed.parse().map_err(|_| FormError::NotANumber(field))
}

pub fn login_request(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    if password.is_empty() {
        return Err(FormError::Missing("Password"));
    }
    Ok(LoginRequest {
        email: required(email, "Email")?,
        password: password.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role: Role::Seeker,
        }
    }
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, FormError> {
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(RegisterRequest {
            full_name: required(&self.full_name, "Full name")?,
            email: required(&self.email, "Email")?,
            phone: required(&self.phone, "Phone")?,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub category: JobCategory,
    pub budget_min: String,
    pub budget_max: String,
    pub address: String,
    /// `YYYY-MM-DDTHH:MM` in local time, or a full RFC 3339 timestamp.
    pub deadline: String,
    pub requirements: Vec<String>,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: JobCategory::Courier,
            budget_min: String::new(),
            budget_max: String::new(),
            address: String::new(),
            deadline: String::new(),
            requirements: vec![String::new()],
        }
    }
}

impl JobForm {
    /// Builds the request body, interpreting a local deadline with the machine's offset.
    pub fn to_body_local(&self) -> Result<JobCreateBody, FormError> {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        self.to_body(offset)
    }

    pub fn to_body(&self, offset: UtcOffset) -> Result<JobCreateBody, FormError> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let budget_min = whole_number(&self.budget_min, "Minimum budget")?;
        let budget_max = whole_number(&self.budget_max, "Maximum budget")?;
        if budget_min < 0 {
            return Err(FormError::Negative("Minimum budget"));
        }
        if budget_min > budget_max {
            return Err(FormError::BudgetRange);
        }
        let address = required(&self.address, "Address")?;
        let deadline = normalize_deadline(&self.deadline, offset)?;

        Ok(JobCreateBody {
            title,
            description,
            category: self.category,
            budget_min,
            budget_max,
            location: DEFAULT_LOCATION,
            address,
            deadline,
            requirements: self
                .requirements
                .iter()
                .map(|requirement| requirement.trim())
                .filter(|requirement| !requirement.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Converts the typed deadline to an RFC 3339 timestamp in UTC.
pub fn normalize_deadline(value: &str, offset: UtcOffset) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing("Deadline"));
    }

    let moment = match OffsetDateTime::parse(value, &Rfc3339) {
        Ok(moment) => moment,
        Err(_) => PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        )
        .or_else(|_| {
            PrimitiveDateTime::parse(
                value,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
            )
        })
        .map_err(|_| FormError::InvalidDeadline)?
        .assume_offset(offset),
    };

    moment
        .to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .map_err(|_| FormError::InvalidDeadline)
}

#[derive(Debug, Clone, Default)]
pub struct BidForm {
    pub amount: String,
    pub message: String,
    pub completion_time: String,
}

impl BidForm {
    pub fn to_body(&self, job_id: &str) -> Result<BidCreateBody, FormError> {
        let amount = whole_number(&self.amount, "Amount")?;
        if amount <= 0 {
            return Err(FormError::NotPositive("Amount"));
        }
        Ok(BidCreateBody {
            job_id: job_id.to_string(),
            amount,
            message: required(&self.message, "Message")?,
            completion_time: required(&self.completion_time, "Completion time")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::offset;

    use super::*;

    fn filled_job_form() -> JobForm {
        JobForm {
            title: " Fix the sink ".to_string(),
            description: "Kitchen sink leaks".to_string(),
            category: JobCategory::HomeRepair,
            budget_min: "100000".to_string(),
            budget_max: " 250000".to_string(),
            address: "Jl. Sudirman 1".to_string(),
            deadline: "2026-11-01T14:30".to_string(),
            requirements: vec!["Own tools".to_string(), "   ".to_string(), String::new()],
        }
    }

    #[test]
    fn job_body_coerces_and_normalizes() {
        let body = filled_job_form().to_body(offset!(+7)).unwrap();
        assert_eq!(body.title, "Fix the sink");
        assert_eq!(body.budget_min, 100_000);
        assert_eq!(body.budget_max, 250_000);
        assert_eq!(body.location, DEFAULT_LOCATION);
        assert_eq!(body.deadline, "2026-11-01T07:30:00Z");
        assert_eq!(body.requirements, vec!["Own tools".to_string()]);
    }

    #[test]
    fn inverted_budget_is_rejected() {
        let mut form = filled_job_form();
        form.budget_min = "300000".to_string();
        assert_eq!(form.to_body(UtcOffset::UTC), Err(FormError::BudgetRange));
    }

    #[test]
    fn non_numeric_budget_is_rejected() {
        let mut form = filled_job_form();
        form.budget_max = "lots".to_string();
        assert_eq!(
            form.to_body(UtcOffset::UTC),
            Err(FormError::NotANumber("Maximum budget"))
        );
    }

    #[test]
    fn blank_title_is_missing() {
        let mut form = filled_job_form();
        form.title = "  ".to_string();
        assert_eq!(form.to_body(UtcOffset::UTC), Err(FormError::Missing("Title")));
    }

    #[test]
    fn deadline_accepts_rfc3339_and_rejects_garbage() {
        assert_eq!(
            normalize_deadline("2026-11-01T10:00:00+02:00", UtcOffset::UTC).unwrap(),
            "2026-11-01T08:00:00Z"
        );
        assert_eq!(
            normalize_deadline("next tuesday", UtcOffset::UTC),
            Err(FormError::InvalidDeadline)
        );
    }

    #[test]
    fn bid_requires_positive_amount() {
        let form = BidForm {
            amount: "0".to_string(),
            message: "I can do it".to_string(),
            completion_time: "2 days".to_string(),
        };
        assert_eq!(form.to_body("job-1"), Err(FormError::NotPositive("Amount")));

        let form = BidForm {
            amount: "150000".to_string(),
            ..form
        };
        let body = form.to_body("job-1").unwrap();
        assert_eq!(body.job_id, "job-1");
        assert_eq!(body.amount, 150_000);
    }

    #[test]
    fn register_requires_every_field() {
        let form = RegisterForm {
            full_name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            phone: String::new(),
            password: "pw".to_string(),
            role: Role::Provider,
        };
        assert_eq!(form.to_request().unwrap_err(), FormError::Missing("Phone"));
    }
}
