//! Candidate listings and index selection for bulk copy.
//!
//! Candidates are sorted by name and addressed by their 0-based position in
//! that order. A selection that does not name two distinct, in-range indices
//! is answered with the listing instead of an error.

use serde::{Deserialize, Serialize};
use tradescout_types::{
    AccessLevel, Authorizer, Exchange, GatedEntity, MarketView, Seller, UserId,
};

/// One row of a listing: `(index) : name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub index: usize,
    pub name: String,
}

impl std::fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) : {}", self.index, self.name)
    }
}

/// Number the given names in order.
pub fn listing<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<ListingEntry> {
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| ListingEntry {
            index,
            name: name.to_string(),
        })
        .collect()
}

/// Sellers on which `requester` is an owner, sorted by name.
pub fn owned_sellers<'w, W, A>(world: &'w W, authorizer: &A, requester: UserId) -> Vec<&'w Seller>
where
    W: MarketView,
    A: Authorizer + ?Sized,
{
    let mut owned: Vec<&Seller> = world
        .sellers()
        .filter(|s| authorizer.is_authorized(GatedEntity::Seller(s), requester, AccessLevel::Owner))
        .collect();
    owned.sort_by(|a, b| a.name.cmp(&b.name));
    owned
}

/// Exchanges on which `requester` has full access, sorted by name.
pub fn manageable_exchanges<'w, W, A>(
    world: &'w W,
    authorizer: &A,
    requester: UserId,
) -> Vec<&'w Exchange>
where
    W: MarketView,
    A: Authorizer + ?Sized,
{
    let mut manageable: Vec<&Exchange> = world
        .exchanges()
        .filter(|e| {
            authorizer.is_authorized(GatedEntity::Exchange(e), requester, AccessLevel::FullAccess)
        })
        .collect();
    manageable.sort_by(|a, b| a.name.cmp(&b.name));
    manageable
}

/// A validated (source, target) pair of listing indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub source: usize,
    pub target: usize,
}

impl Selection {
    /// Valid iff both indices are present, non-negative, below `len` and
    /// distinct.
    #[must_use]
    pub fn resolve(source: Option<i64>, target: Option<i64>, len: usize) -> Option<Self> {
        let in_range = |index: Option<i64>| {
            index
                .and_then(|i| usize::try_from(i).ok())
                .filter(|&i| i < len)
        };
        let source = in_range(source)?;
        let target = in_range(target)?;
        (source != target).then_some(Self { source, target })
    }
}
