//! Strongly-typed identifiers, one newtype per aggregate kind.

/// Opaque identifier backed by a string value.
///
/// Equality, ordering and hashing follow the underlying string. Each
/// aggregate declares its own newtype through [`define_id!`](crate::define_id)
/// so the compiler prevents cross-aggregate id mix-ups.
pub trait Identifier:
    Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync
{
    fn value(&self) -> &str;
}

/// Declare an identifier newtype for an aggregate.
///
/// Generates `unique()` (fresh UUIDv4-backed value) and `from(raw)` (wrap an
/// existing value, never fails - resolution happens at the gateway).
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new opaque identifier.
            pub fn unique() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Wrap an existing raw value.
            pub fn from(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl $crate::shared::domain::identifier::Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
