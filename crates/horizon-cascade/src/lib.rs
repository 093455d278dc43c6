//! Responsive value expansion for CSS stylesheets.
//!
//! `horizon-cascade` rewrites declarations that use the embedded
//! `media-value(...)` expression into one declaration per media query:
//!
//! ```text
//! .root {
//!   padding: media-value(case: "(max-width: 599px)" as: "25px", else: "50px");
//! }
//! ```
//!
//! becomes
//!
//! ```text
//! .root {
//!   padding: 50px;
//! }
//!
//! @media (max-width: 599px) {
//!   .root {
//!     padding: 25px;
//!   }
//! }
//! ```
//!
//! The crate is organized around three pieces:
//!
//! - **Template parsing** ([`parse_property`]): recognizes calls embedded
//!   in free-form value text and splits the value into ordered segments
//! - **Expansion** ([`expand`]): reduces the segments of one value into a
//!   per-condition result map, with exhaustiveness checking across
//!   multiple calls in the same value
//! - **Recording store** ([`PathMap`]): collects rewrites keyed by tree
//!   path and replays them in an order that never invalidates pending
//!   positions
//!
//! [`expand_stylesheet`] wires the three against a
//! [`horizon_cascade_tree::StyleSheet`]; [`prepare_value_at_rules`] is a
//! small companion pass for CSS-modules `@value` preludes.
//!
//! All passes are synchronous and single-threaded; to process several
//! stylesheets concurrently, give each one its own tree.
//!
//! # Example
//!
//! ```
//! use horizon_cascade::expand_stylesheet;
//! use horizon_cascade_tree::StyleSheet;
//!
//! let mut sheet = StyleSheet::parse(
//!     r#".root { padding: media-value(case: "(max-width: 599px)" as: "25px", else: "50px"); }"#,
//! )?;
//! expand_stylesheet(&mut sheet)?;
//! println!("{}", sheet.to_css());
//! # Ok::<(), horizon_cascade::Error>(())
//! ```
//!
//! Logging goes through the `tracing` crate; install a subscriber (for
//! example `tracing_subscriber::fmt::init()`) in the host to see it.

pub mod expand;
pub mod parser;
pub mod prep;
pub mod record;
pub mod template;
pub mod transform;

mod error;

pub use error::{Error, Result};
pub use expand::{ConditionKey, ResolvedValues, expand};
pub use parser::parse_property;
pub use prep::prepare_value_at_rules;
pub use record::PathMap;
pub use template::{Case, PropertyTemplate, ResponsiveValue, Segment};
pub use transform::expand_stylesheet;
