//! Member Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// One recorded contribution tied to a week, embedded in the member document.
///
/// Payments have no independent identity; their order in the list is their
/// entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: String,
    pub amount: f64,
    pub week: String,
}

/// Member document as stored.
///
/// `member_id` is the sequential, human-readable identifier exposed to
/// clients as `id`; the record id stays store-internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub member_id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub join_date: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Member creation payload. `id` is never client-supplied.
///
/// Every field is optional at the wire level; the repository decides which
/// absences are validation errors and which get defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<String>,
    pub photo_url: Option<String>,
    pub payments: Option<Vec<Payment>>,
}

/// Member update payload.
///
/// `payments` is accepted for wire compatibility but never applied: the
/// stored payment history always survives a generic update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<String>,
    pub photo_url: Option<String>,
    pub payments: Option<Vec<Payment>>,
}

/// Wire representation of a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub join_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub payments: Vec<Payment>,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self {
            id: m.member_id,
            name: m.name,
            phone: m.phone,
            address: m.address,
            join_date: m.join_date,
            photo_url: m.photo_url,
            payments: m.payments,
        }
    }
}
