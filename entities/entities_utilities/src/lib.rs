//! Entities Layer: Utilities
//!
//! Provides utility value types:
//! - Base-12 integers (`Twelve`)
//! - Digit/character mapping for the base-12 alphabet
//!
//! A `Twelve` stores its digits in an `entities_data_handling::ByteBuffer`,
//! least-significant digit first. Arithmetic round-trips through `u64`.
//!
//! ```rust
//! use entities_utilities::Twelve;
//!
//! let a = Twelve::parse("A5").unwrap();
//! let b = Twelve::parse("17B").unwrap();
//! assert_eq!(a.add(&b).unwrap().to_text(), "264");
//! assert_eq!(b.sub(&a).unwrap().to_text(), "96");
//! assert!(a.sub(&b).is_err());
//! ```

pub mod digit;
pub mod twelve;

pub use twelve::{Twelve, TwelveError, BASE, MAX_DIGITS};
