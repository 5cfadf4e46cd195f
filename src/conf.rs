//! Settings module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "conf")]
//! use conneg::conf::{NegotiationSettings, SettingsError};
//! ```

#[cfg(feature = "conf")]
pub use conneg_conf::*;
