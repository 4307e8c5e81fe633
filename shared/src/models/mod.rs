//! Data models
//!
//! Shared between admin-server and the console frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL), timestamps are Unix millis.

/// Implements `as_str`, `Display` and `FromStr` for a wire-string enum.
///
/// The string form is the same SCREAMING_SNAKE_CASE used by serde and the
/// database enum type, so query parameters parse identically to JSON bodies.
macro_rules! wire_enum {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(format!(
                        "invalid {} '{}', expected one of: {}",
                        stringify!($ty),
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

pub mod attendance;
pub mod business_partner;
pub mod contract;
pub mod employee;
pub mod order;
pub mod payslip;
pub mod store;

// Re-exports
pub use attendance::*;
pub use business_partner::*;
pub use contract::*;
pub use employee::*;
pub use order::*;
pub use payslip::*;
pub use store::*;
