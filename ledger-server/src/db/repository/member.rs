//! Member Repository
//!
//! Sequential id assignment, field normalization, and the
//! payment-preservation rule live here.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use tracing::debug;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Member, MemberCreate, MemberUpdate, Payment};
use crate::utils::{time, validation};

const TABLE: &str = "member";

#[derive(Clone)]
pub struct MemberRepository {
    base: BaseRepository,
}

#[derive(Debug, Deserialize)]
struct MemberIdRow {
    member_id: i64,
}

impl MemberRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all members, ordered by member id for a deterministic listing.
    pub async fn find_all(&self) -> RepoResult<Vec<Member>> {
        self.base
            .run(async {
                let members: Vec<Member> = self
                    .base
                    .db()
                    .query("SELECT * FROM member ORDER BY member_id ASC")
                    .await?
                    .take(0)?;
                Ok(members)
            })
            .await
    }

    /// Find a member by its sequential id.
    pub async fn find_by_id(&self, member_id: i64) -> RepoResult<Option<Member>> {
        self.base
            .run(async {
                let mut result = self
                    .base
                    .db()
                    .query("SELECT * FROM member WHERE member_id = $member_id LIMIT 1")
                    .bind(("member_id", member_id))
                    .await?;
                let members: Vec<Member> = result.take(0)?;
                Ok(members.into_iter().next())
            })
            .await
    }

    /// Next sequential id: one past the current maximum, 1 when the
    /// collection is empty.
    ///
    /// Read-max-then-insert is not transactionally isolated: two concurrent
    /// creates can observe the same maximum. The unique index on `member_id`
    /// rejects the loser, which surfaces as [`RepoError::Duplicate`].
    async fn next_member_id(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT member_id FROM member ORDER BY member_id DESC LIMIT 1")
            .await?;
        let rows: Vec<MemberIdRow> = result.take(0)?;
        Ok(rows.first().map(|r| r.member_id).unwrap_or(0) + 1)
    }

    /// Create a member from a candidate payload; the id is assigned here,
    /// never taken from the caller.
    pub async fn create(&self, data: MemberCreate) -> RepoResult<Member> {
        self.base
            .run(async {
                let name = validation::non_blank(data.name.as_deref())
                    .ok_or_else(|| RepoError::Validation("name is required".into()))?;
                let phone = validation::non_blank(data.phone.as_deref())
                    .ok_or_else(|| RepoError::Validation("phone is required".into()))?;
                let payments = data.payments.unwrap_or_default();
                validate_payments(&payments)?;

                let member = Member {
                    id: None,
                    member_id: self.next_member_id().await?,
                    name,
                    phone,
                    address: validation::trimmed_or_empty(data.address.as_deref()),
                    join_date: validation::non_blank(data.join_date.as_deref())
                        .unwrap_or_else(time::today),
                    photo_url: validation::trimmed(data.photo_url.as_deref()),
                    payments,
                };

                let created: Option<Member> =
                    self.base.db().create(TABLE).content(member).await?;
                created.ok_or_else(|| RepoError::Database("Failed to create member".into()))
            })
            .await
    }

    /// Update a member in place.
    ///
    /// The stored `payments` sequence always survives: payment history is
    /// managed by a narrower path than the generic update, so whatever the
    /// caller sent for `payments` is dropped.
    pub async fn update(&self, member_id: i64, data: MemberUpdate) -> RepoResult<Member> {
        let existing = self
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("member {member_id} not found")))?;

        let name = validation::non_blank(data.name.as_deref())
            .ok_or_else(|| RepoError::Validation("name is required".into()))?;
        let phone = validation::non_blank(data.phone.as_deref())
            .ok_or_else(|| RepoError::Validation("phone is required".into()))?;
        if data.payments.is_some() {
            debug!(member_id, "payments in update payload ignored");
        }

        let record_id = existing
            .id
            .clone()
            .ok_or_else(|| RepoError::Database(format!("member {member_id} has no record id")))?;

        let updated = Member {
            id: None,
            member_id,
            name,
            phone,
            address: validation::trimmed_or_empty(data.address.as_deref()),
            join_date: validation::non_blank(data.join_date.as_deref())
                .unwrap_or_else(time::today),
            photo_url: validation::trimmed(data.photo_url.as_deref()),
            payments: existing.payments,
        };

        self.base
            .run(async {
                let saved: Option<Member> =
                    self.base.db().update(record_id).content(updated).await?;
                saved.ok_or_else(|| RepoError::NotFound(format!("member {member_id} not found")))
            })
            .await
    }

    /// Delete a member by id. Returns whether a record was removed.
    pub async fn delete(&self, member_id: i64) -> RepoResult<bool> {
        self.base
            .run(async {
                let mut result = self
                    .base
                    .db()
                    .query("DELETE member WHERE member_id = $member_id RETURN BEFORE")
                    .bind(("member_id", member_id))
                    .await?;
                let deleted: Vec<Member> = result.take(0)?;
                Ok(!deleted.is_empty())
            })
            .await
    }
}

fn validate_payments(payments: &[Payment]) -> RepoResult<()> {
    for p in payments {
        if p.amount < 0.0 {
            return Err(RepoError::Validation(format!(
                "payment amount must be >= 0, got {}",
                p.amount
            )));
        }
    }
    Ok(())
}
