//! Access model and the authorization seam.
//!
//! The query and copy crates never decide authorization themselves: they ask
//! an injected [`Authorizer`] for a yes/no verdict per
//! (entity, requester, access level). [`AccessListAuthorizer`] is the
//! provided implementation, reading the [`AccessList`] stored on each entity.

use serde::{Deserialize, Serialize};

use crate::{Exchange, Seller, UserId};

/// Access levels, weakest first. A higher level implies every lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AccessLevel {
    /// May transact with the entity.
    Consumer,
    /// May configure the entity.
    FullAccess,
    /// Owns the entity.
    Owner,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consumer => write!(f, "CONSUMER"),
            Self::FullAccess => write!(f, "FULL_ACCESS"),
            Self::Owner => write!(f, "OWNER"),
        }
    }
}

/// Who may do what with an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessList {
    #[serde(default)]
    pub owners: Vec<UserId>,
    #[serde(default)]
    pub full_access: Vec<UserId>,
    #[serde(default)]
    pub consumers: Vec<UserId>,
    /// Everyone is a consumer.
    #[serde(default)]
    pub public_consumer: bool,
}

impl AccessList {
    /// Open to every consumer, owned by `owner`.
    #[must_use]
    pub fn public(owner: UserId) -> Self {
        Self {
            owners: vec![owner],
            full_access: Vec::new(),
            consumers: Vec::new(),
            public_consumer: true,
        }
    }

    /// Highest level granted to `user`, if any.
    #[must_use]
    pub fn level_for(&self, user: UserId) -> Option<AccessLevel> {
        if self.owners.contains(&user) {
            Some(AccessLevel::Owner)
        } else if self.full_access.contains(&user) {
            Some(AccessLevel::FullAccess)
        } else if self.public_consumer || self.consumers.contains(&user) {
            Some(AccessLevel::Consumer)
        } else {
            None
        }
    }

    #[must_use]
    pub fn grants(&self, user: UserId, level: AccessLevel) -> bool {
        self.level_for(user).is_some_and(|granted| granted >= level)
    }
}

/// An entity subject to authorization.
#[derive(Debug, Clone, Copy)]
pub enum GatedEntity<'a> {
    Seller(&'a Seller),
    Exchange(&'a Exchange),
}

impl GatedEntity<'_> {
    #[must_use]
    pub fn access(&self) -> &AccessList {
        match self {
            Self::Seller(s) => &s.access,
            Self::Exchange(e) => &e.access,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Seller(s) => &s.name,
            Self::Exchange(e) => &e.name,
        }
    }
}

/// Authorization verdicts, injected into the query and copy operations.
pub trait Authorizer {
    fn is_authorized(&self, entity: GatedEntity<'_>, requester: UserId, level: AccessLevel) -> bool;
}

impl<A: Authorizer + ?Sized> Authorizer for &A {
    fn is_authorized(&self, entity: GatedEntity<'_>, requester: UserId, level: AccessLevel) -> bool {
        (**self).is_authorized(entity, requester, level)
    }
}

/// Authorizer backed by each entity's own [`AccessList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessListAuthorizer;

impl Authorizer for AccessListAuthorizer {
    fn is_authorized(&self, entity: GatedEntity<'_>, requester: UserId, level: AccessLevel) -> bool {
        entity.access().grants(requester, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(AccessLevel::Consumer < AccessLevel::FullAccess);
        assert!(AccessLevel::FullAccess < AccessLevel::Owner);
    }

    #[test]
    fn owner_implies_everything() {
        let owner = UserId::new();
        let list = AccessList {
            owners: vec![owner],
            ..AccessList::default()
        };
        assert!(list.grants(owner, AccessLevel::Consumer));
        assert!(list.grants(owner, AccessLevel::FullAccess));
        assert!(list.grants(owner, AccessLevel::Owner));
    }

    #[test]
    fn consumer_cannot_configure() {
        let user = UserId::new();
        let list = AccessList {
            consumers: vec![user],
            ..AccessList::default()
        };
        assert!(list.grants(user, AccessLevel::Consumer));
        assert!(!list.grants(user, AccessLevel::FullAccess));
    }

    #[test]
    fn stranger_has_no_access_unless_public() {
        let stranger = UserId::new();
        let private = AccessList::default();
        assert_eq!(private.level_for(stranger), None);

        let public = AccessList::public(UserId::new());
        assert_eq!(public.level_for(stranger), Some(AccessLevel::Consumer));
        assert!(!public.grants(stranger, AccessLevel::FullAccess));
    }
}
