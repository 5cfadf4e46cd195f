//! # Conneg Typemap
//!
//! Apache-style typemaps: a declarative list of a resource's representation
//! variants, each with its own negotiation headers.
//!
//! ## Examples
//!
//! ```
//! use conneg_negotiation::header::parse_header;
//! use conneg_typemap::{ClientHeaders, Typemap, WhitelistMap};
//!
//! let typemap = Typemap::parse(
//!     "URI: doc\n\n\
//!      URI: doc.html\nContent-Type: text/html\n\n\
//!      URI: doc.pdf\nContent-Type: application/pdf\n",
//! );
//!
//! let mut client = ClientHeaders::new();
//! client.insert("accept".to_string(), parse_header("application/pdf, text/html;q=0.5"));
//!
//! // Filter-only: the first acceptable variant in declaration order wins
//! let chosen = typemap.negotiate(&client, &WhitelistMap::new()).unwrap();
//! assert_eq!(chosen.uri, "doc.html");
//! ```

pub mod entry;
pub mod error;
pub mod negotiation;
pub mod parser;

pub use entry::{CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_TYPE, TypeMapEntry};
pub use error::{TypemapError, TypemapResult};
pub use negotiation::{ACCEPT, ClientHeaders, WhitelistMap, client_headers, perform_typemap_negotiation};
pub use parser::{Typemap, parse_typemap};
