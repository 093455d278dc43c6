//! Parsed shape of a responsive property value.
//!
//! All types borrow from the property value they were parsed out of;
//! nothing is copied until expansion produces owned per-condition text.

/// One `case: <query> as: <value>` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case<'a> {
    /// The media query string, quotes stripped, escapes verbatim.
    pub media: &'a str,
    /// The value used when the query applies.
    pub value: &'a str,
}

/// A single recognized `media-value(...)` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponsiveValue<'a> {
    /// Case clauses in source order. Duplicate queries are legal; a later
    /// entry overwrites an earlier one during expansion.
    pub cases: Vec<Case<'a>>,
    /// The `else:` clause, when present. An empty string still counts as
    /// present.
    pub default: Option<&'a str>,
}

/// One atomic piece of a property value, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal passthrough text.
    Text(&'a str),
    /// A recognized call.
    Value(ResponsiveValue<'a>),
}

/// The outcome of parsing one property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTemplate<'a> {
    /// No call present; the declaration is left untouched.
    Plain,
    /// At least one call; the segments cover the whole value text.
    Responsive(Vec<Segment<'a>>),
}
