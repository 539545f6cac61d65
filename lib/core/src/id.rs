//! Opaque identifier types.
//!
//! Identifiers in this system are minted elsewhere (SharePoint unique ids,
//! Graph search hit ids, App Service user ids). They are carried verbatim and
//! never parsed, so each newtype is a thin wrapper around a `String` that
//! keeps the different kinds from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate a strongly-typed opaque string identifier.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier issued by an external system.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique id of a cited document (the SharePoint list item unique id).
    CitationId
);

define_id!(
    /// Id of a single hit in a Graph search response.
    HitId
);

define_id!(
    /// User id reported by the App Service authentication token store.
    UserId
);
