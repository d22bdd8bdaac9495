//! Donation Repository
//!
//! Identical contract to expenses: lax create, unsorted-by-contract list,
//! delete-by-id as a no-op when absent.

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Donation, DonationCreate};

const TABLE: &str = "donation";

#[derive(Clone)]
pub struct DonationRepository {
    base: BaseRepository,
}

impl DonationRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all donations, lowest id first.
    pub async fn find_all(&self) -> RepoResult<Vec<Donation>> {
        self.base
            .run(async {
                let donations: Vec<Donation> = self
                    .base
                    .db()
                    .query("SELECT * FROM donation ORDER BY donation_id ASC")
                    .await?
                    .take(0)?;
                Ok(donations)
            })
            .await
    }

    /// Store the record as given.
    pub async fn create(&self, data: DonationCreate) -> RepoResult<Donation> {
        self.base
            .run(async {
                let donation = Donation {
                    id: None,
                    donation_id: data.id,
                    date: data.date,
                    amount: data.amount,
                    donor: data.donor,
                    purpose: data.purpose,
                };
                let created: Option<Donation> =
                    self.base.db().create(TABLE).content(donation).await?;
                created.ok_or_else(|| RepoError::Database("Failed to create donation".into()))
            })
            .await
    }

    /// Delete every record whose id matches; absent ids are a no-op.
    pub async fn delete(&self, donation_id: f64) -> RepoResult<()> {
        self.base
            .run(async {
                self.base
                    .db()
                    .query("DELETE donation WHERE donation_id = $donation_id")
                    .bind(("donation_id", donation_id))
                    .await?
                    .check()?;
                Ok(())
            })
            .await
    }
}
