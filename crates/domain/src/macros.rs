//! Macro for implementing Display and FromStr for unit-variant enums
//!
//! Used for values that cross a text boundary: availability answers stored in
//! SQLite, share channel tags coming from the view layer, and configuration
//! switches read from environment variables.
//!
//! # Example
//!
//! ```rust
//! use datevote_domain::impl_text_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Answer {
//!     Yes,
//!     No,
//! }
//!
//! impl_text_conversions!(Answer {
//!     Yes => "yes",
//!     No => "no",
//! });
//!
//! assert_eq!(Answer::Yes.to_string(), "yes");
//! assert_eq!("NO".parse::<Answer>().unwrap(), Answer::No);
//! ```

/// Implements Display and FromStr traits for unit-variant enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively and trims surrounding whitespace
#[macro_export]
macro_rules! impl_text_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
