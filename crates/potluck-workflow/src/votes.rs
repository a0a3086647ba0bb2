//! The vote tally: ballots, counts and top-K selection.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use potluck_core::Tally;
use potluck_core::dish::{name_key, names_match};
use potluck_core::policy::{DuplicatePolicy, VotePolicy};
use potluck_core::validation;
use potluck_storage::{Collection, Store};

use crate::error::{Result, StoreResultExt, WorkflowError};
use crate::records::{ballot_row, ballot_voter, vote_from_record, vote_row};
use crate::registry::DishRegistry;

/// Outcome of one ballot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteReceipt {
    /// Dish names that received a vote, in the registry's spelling.
    pub counted: Vec<String>,
    /// Names that matched no proposed dish.
    pub ignored: Vec<String>,
}

/// Records ballots against the persisted tally.
pub struct VoteBox<'a> {
    store: &'a dyn Store,
    policy: VotePolicy,
}

impl<'a> VoteBox<'a> {
    pub fn new(store: &'a dyn Store, policy: VotePolicy) -> Self {
        Self { store, policy }
    }

    /// Adds one vote to each selected dish.
    ///
    /// Names are de-duplicated ignoring case, so a ballot counts at most once
    /// per dish. The tally is read, incremented in memory and written back in
    /// full; a concurrent ballot between the read and the rewrite is lost.
    ///
    /// Under [`VotePolicy::OncePerVoter`] the ballot row is recorded before
    /// the tally is touched, so a failed ballot write counts nothing. The
    /// `has_voted` check and that append are separate round trips: two
    /// concurrent submissions from the same voter can both pass the check.
    pub fn submit<S: AsRef<str>>(&self, voter: &str, selected: &[S]) -> Result<VoteReceipt> {
        let once = self.policy == VotePolicy::OncePerVoter;
        if once && self.has_voted(voter)? {
            return Err(WorkflowError::AlreadyVoted {
                voter: voter.to_owned(),
            });
        }

        let dishes = DishRegistry::new(self.store, DuplicatePolicy::Allow).list()?;

        let mut receipt = VoteReceipt::default();
        let mut seen: Vec<String> = Vec::new();
        for raw in selected {
            let Some(name) = validation::required(raw.as_ref()) else {
                continue;
            };
            let key = name_key(name);
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            match dishes.iter().find(|d| d.matches(name)) {
                Some(dish) => receipt.counted.push(dish.name.clone()),
                None => {
                    warn!(name, "ignoring vote for unknown dish");
                    receipt.ignored.push(name.to_owned());
                }
            }
        }

        if receipt.counted.is_empty() {
            return Ok(receipt);
        }

        let mut tally = self.load()?;
        for name in &receipt.counted {
            tally.increment(name);
        }

        if once {
            self.store
                .append_row(Collection::Ballots, &ballot_row(voter, Utc::now()))
                .during("record ballot")?;
        }

        let rows: Vec<Vec<String>> = tally
            .entries()
            .iter()
            .map(|(name, count)| vote_row(name, *count))
            .collect();
        self.store
            .rewrite(Collection::Votes, &rows)
            .during("write votes")?;

        info!(voter, counted = receipt.counted.len(), "ballot submitted");
        Ok(receipt)
    }

    /// Loads the persisted tally.
    pub fn load(&self) -> Result<Tally> {
        let records = self
            .store
            .read_rows(Collection::Votes)
            .during("read votes")?;
        let entries = records
            .iter()
            .map(vote_from_record)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Tally::from_entries(entries))
    }

    /// Every voted dish with its count, highest first.
    pub fn ranking(&self) -> Result<Vec<(String, u32)>> {
        Ok(self.load()?.ranking())
    }

    /// Names of the `k` most-voted dishes; ties keep first-vote order.
    pub fn top_k(&self, k: usize) -> Result<Vec<String>> {
        Ok(self.load()?.top_k(k))
    }

    /// Whether `voter` has a recorded ballot.
    pub fn has_voted(&self, voter: &str) -> Result<bool> {
        let records = self
            .store
            .read_rows(Collection::Ballots)
            .during("read ballots")?;
        for record in &records {
            if names_match(ballot_voter(record)?, voter) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
