// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Parser
//!
//! Splits the plain-text body of an email into fragments and works out
//! which of them are new content and which are quoted replies or
//! signatures. Both top-posted and bottom-posted replies are handled
//! without relying on client-specific "reply above this line" markers.
//!
//! Recognized conventions:
//!
//! - quoted lines starting with `>`, introduced by `On <date>, <author> wrote:`
//!   (also when the client wrapped that header over several lines)
//! - signatures opened by `--`, `__`, `-Name` or `Sent from my <device>`
//! - Outlook-style dividers made of underscores
//!
//! Fragments below the lowest piece of original content that are quoted,
//! signatures, or blank are hidden.
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::{extract_visible_text, parse};
//!
//! let body = "Sounds good.\n\nOn Tue, Mar 1, 2011 at 9:00 AM, Bob wrote:\n> Lunch?";
//! let email = parse(body);
//!
//! assert_eq!(email.fragments().len(), 2);
//! assert!(email.fragments()[1].is_quoted());
//! assert_eq!(extract_visible_text(body), "Sounds good.");
//! ```

mod error;
mod normalize;
mod parser;
mod patterns;
mod types;

pub use error::{ParseError, Result};
pub use normalize::normalize;
pub use parser::{extract_visible_text, parse};
pub use patterns::*;
pub use types::*;
