//! Enquiry Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact/enquiry form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    /// Tour the enquiry refers to, when sent from a tour page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<String>,
    pub created_at: i64,
}

/// Create enquiry payload (public form)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnquiryCreate {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
    pub tour_id: Option<String>,
}
