//! Database Models

pub mod donation;
pub mod expense;
pub mod member;

// Re-exports
pub use donation::{Donation, DonationCreate, DonationResponse};
pub use expense::{Expense, ExpenseCreate, ExpenseResponse};
pub use member::{Member, MemberCreate, MemberResponse, MemberUpdate, Payment};
