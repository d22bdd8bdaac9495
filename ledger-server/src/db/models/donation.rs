//! Donation Model
//!
//! Same lax contract as expenses: caller-supplied id, no required fields.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Donation document as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub donation_id: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub donor: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Donation creation payload (wire shape).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationCreate {
    pub id: Option<f64>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub donor: Option<String>,
    pub purpose: Option<String>,
}

/// Wire representation of a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationResponse {
    pub id: Option<f64>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub donor: Option<String>,
    pub purpose: Option<String>,
}

impl From<Donation> for DonationResponse {
    fn from(d: Donation) -> Self {
        Self {
            id: d.donation_id,
            date: d.date,
            amount: d.amount,
            donor: d.donor,
            purpose: d.purpose,
        }
    }
}
