//! Data models
//!
//! Records owned by the storefront persistence layer. JSON field names are
//! camelCase, matching the persisted container layout. Orders reference
//! products by id; no record holds a pointer to another.

/// Declares a closed enum whose wire form is a fixed label.
///
/// Serde uses the label verbatim. `ALL`, `as_str`, `Display` and a
/// case-insensitive `FromStr` cover query strings and CSV.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Wire label
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::models::UnknownLabel {
                        kind: stringify!($name),
                        value: wanted.to_string(),
                    })
            }
        }
    };
}

pub mod customer;
pub mod order;
pub mod price_update;
pub mod product;
pub mod settings;
pub mod shopping_list;

// Re-exports
pub use customer::*;
pub use order::*;
pub use price_update::*;
pub use product::*;
pub use settings::*;
pub use shopping_list::*;

/// A label that names no variant of the target enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}
