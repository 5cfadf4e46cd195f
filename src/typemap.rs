//! Typemap module.
//!
//! Parsing of Apache-style type maps and selection among their variants.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "typemap")]
//! use conneg::typemap::{Typemap, TypeMapEntry};
//! ```

#[cfg(feature = "typemap")]
pub use conneg_typemap::*;
