//! The visibility-scoped profile model.
//!
//! A [`Profile`] is a user-like record whose fields are partitioned into
//! four visibility scopes, each a free-form JSON sub-document. The scope
//! wire keys are part of the contract with the backend's per-field
//! visibility model and must not be altered.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::ProfileError;

/// A free-form JSON sub-document holding one scope's fields.
pub type ScopeDoc = serde_json::Map<String, Value>;

/// Reserved key under which the profile identifier is serialized when
/// credentials/identity inclusion is requested.
pub const USERNAME_KEY: &str = "username";

/// The four visibility partitions of a profile's fields.
///
/// The enumeration is closed: every scope maps to exactly one reserved
/// wire key, and the mapping is exhaustive, so a missing case is a
/// compile-time rather than runtime concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible only to the owning user.
    Private,
    /// Visible to the user's friends.
    Friends,
    /// Visible to any registered user.
    Registered,
    /// Visible to anonymous users.
    Public,
}

impl Visibility {
    /// All scopes, in wire-emission order.
    pub const ALL: [Self; 4] = [Self::Private, Self::Friends, Self::Registered, Self::Public];

    /// The reserved JSON key for this scope.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Private => "visibleByTheUser",
            Self::Friends => "visibleByFriends",
            Self::Registered => "visibleByRegisteredUsers",
            Self::Public => "visibleByAnonymousUsers",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Visibility {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.wire_name() == s)
            .ok_or_else(|| ProfileError::unknown_scope(s))
    }
}

/// A user-like record with four visibility-scoped JSON sub-documents.
///
/// The identifier is immutable for the lifetime of the value; the scope
/// documents are mutable through [`Profile::scope_mut`]. All four scopes
/// exist after construction, defaulting to empty objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    username: String,
    private_data: ScopeDoc,
    friends_data: ScopeDoc,
    registered_data: ScopeDoc,
    public_data: ScopeDoc,
}

impl Profile {
    /// Create a profile with all scopes empty.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            private_data: ScopeDoc::new(),
            friends_data: ScopeDoc::new(),
            registered_data: ScopeDoc::new(),
            public_data: ScopeDoc::new(),
        }
    }

    /// Decode a profile from a raw JSON body.
    ///
    /// Each of the four reserved scope keys defaults to an empty object
    /// when absent. The identifier always comes from the `username`
    /// argument, never from the body.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::MalformedScope`] if a scope key is present
    /// but does not hold a JSON object.
    pub fn from_json(username: impl Into<String>, body: &ScopeDoc) -> Result<Self, ProfileError> {
        Ok(Self {
            username: username.into(),
            private_data: Self::scope_from(body, Visibility::Private)?,
            friends_data: Self::scope_from(body, Visibility::Friends)?,
            registered_data: Self::scope_from(body, Visibility::Registered)?,
            public_data: Self::scope_from(body, Visibility::Public)?,
        })
    }

    fn scope_from(body: &ScopeDoc, visibility: Visibility) -> Result<ScopeDoc, ProfileError> {
        match body.get(visibility.wire_name()) {
            None => Ok(ScopeDoc::new()),
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => Err(ProfileError::malformed_scope(visibility.wire_name())),
        }
    }

    /// The profile's immutable logical identifier.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The sub-document for the requested scope.
    #[must_use]
    pub fn scope(&self, visibility: Visibility) -> &ScopeDoc {
        match visibility {
            Visibility::Private => &self.private_data,
            Visibility::Friends => &self.friends_data,
            Visibility::Registered => &self.registered_data,
            Visibility::Public => &self.public_data,
        }
    }

    /// Mutable access to the sub-document for the requested scope.
    #[must_use]
    pub fn scope_mut(&mut self, visibility: Visibility) -> &mut ScopeDoc {
        match visibility {
            Visibility::Private => &mut self.private_data,
            Visibility::Friends => &mut self.friends_data,
            Visibility::Registered => &mut self.registered_data,
            Visibility::Public => &mut self.public_data,
        }
    }

    /// Encode this profile as a JSON object.
    ///
    /// All four scope keys are always emitted, even when empty. The
    /// identifier is emitted under [`USERNAME_KEY`] only when
    /// `include_username` is set.
    #[must_use]
    pub fn to_json(&self, include_username: bool) -> Value {
        let mut object = ScopeDoc::new();
        if include_username {
            object.insert(
                USERNAME_KEY.to_owned(),
                Value::String(self.username.clone()),
            );
        }
        for visibility in Visibility::ALL {
            object.insert(
                visibility.wire_name().to_owned(),
                Value::Object(self.scope(visibility).clone()),
            );
        }
        Value::Object(object)
    }
}

/// The default public encoding includes the identifier.
impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json(true).serialize(serializer)
    }
}
