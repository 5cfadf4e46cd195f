//! Negotiation core module.
//!
//! Value tuples, header tokenizing, match strategies and the per-header
//! negotiators.
//!
//! # Examples
//!
//! ```rust
//! use conneg::negotiation::header::parse_header;
//! use conneg::negotiation::{ValueTuple, perform_language_negotiation};
//!
//! let available = vec![ValueTuple::new("en"), ValueTuple::new("de")];
//! let chosen = perform_language_negotiation(&parse_header("de, en;q=0.5"), &available);
//! assert_eq!(chosen.unwrap().value, "de");
//! ```

pub use conneg_negotiation::*;
