//! Expansion of parsed segments into per-condition property values.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::template::Segment;

/// A key in the expansion result map.
///
/// The [`ConditionKey::Default`] variant is the distinguished "no query
/// matched" key; being its own enum variant, it can never collide with a
/// media query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionKey {
    /// No media query matched; the `else` value applies.
    Default,
    /// A specific media query string.
    Media(String),
}

impl ConditionKey {
    /// Create a media-query key.
    pub fn media(query: impl Into<String>) -> Self {
        Self::Media(query.into())
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionKey::Default => f.write_str("default"),
            ConditionKey::Media(query) => f.write_str(query),
        }
    }
}

/// Fully resolved values keyed by condition.
///
/// Iteration order is first-seen order: the default key first when
/// present, then media keys in first-occurrence order.
pub type ResolvedValues = IndexMap<ConditionKey, String>;

#[derive(Default)]
struct Accumulator<'a> {
    text: String,
    slots: HashMap<usize, &'a str>,
}

/// Expand the segments of one property value into per-condition text.
///
/// Every condition key used anywhere in the property gets one entry whose
/// value is the whole property text with each call replaced by that key's
/// value (falling back to the call's `else` value). The default key is
/// present exactly when at least one call specifies an `else` clause.
///
/// Fails when a condition key has no value for some call and no default is
/// available — with several calls in one property, every query used by one
/// call must be covered by the others.
///
/// # Example
///
/// ```
/// use horizon_cascade::{ConditionKey, Segment, ResponsiveValue, Case, expand};
///
/// let segments = [
///     Segment::Text("solid "),
///     Segment::Value(ResponsiveValue {
///         cases: vec![Case { media: "a", value: "15px" }],
///         default: Some("10px"),
///     }),
/// ];
/// let resolved = expand(&segments)?;
/// assert_eq!(resolved[&ConditionKey::Default], "solid 10px");
/// assert_eq!(resolved[&ConditionKey::media("a")], "solid 15px");
/// # Ok::<(), horizon_cascade::Error>(())
/// ```
pub fn expand(segments: &[Segment<'_>]) -> Result<ResolvedValues> {
    let mut accumulators: IndexMap<ConditionKey, Accumulator<'_>> = IndexMap::new();
    accumulators.insert(ConditionKey::Default, Accumulator::default());
    let mut default_specified = false;

    // Registration pass: one accumulator per condition key, holding the
    // value each call supplies at its segment slot.
    for (slot, segment) in segments.iter().enumerate() {
        let Segment::Value(value) = segment else {
            continue;
        };

        if let Some(default) = value.default {
            if let Some(accumulator) = accumulators.get_mut(&ConditionKey::Default) {
                accumulator.slots.insert(slot, default);
            }
            // Presence counts, truthiness does not: `else: ""` is a
            // specified default.
            default_specified = true;
        }
        for case in &value.cases {
            accumulators
                .entry(ConditionKey::media(case.media))
                .or_default()
                .slots
                .insert(slot, case.value);
        }
    }

    if !default_specified {
        accumulators.shift_remove(&ConditionKey::Default);
    }

    // Snapshot the default slots so every accumulator can fall back to
    // them while being filled.
    let default_slots: HashMap<usize, &str> = accumulators
        .get(&ConditionKey::Default)
        .map(|accumulator| accumulator.slots.clone())
        .unwrap_or_default();

    // Resolution pass: concatenate text and per-slot values for every key.
    for (key, accumulator) in accumulators.iter_mut() {
        for (slot, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Text(text) => accumulator.text.push_str(text),
                Segment::Value(_) => {
                    let resolved = match accumulator.slots.get(&slot) {
                        Some(value) => Some(*value),
                        None if default_specified => default_slots.get(&slot).copied(),
                        None => None,
                    };
                    let Some(resolved) = resolved else {
                        return Err(Error::non_exhaustive(key.clone()));
                    };
                    accumulator.text.push_str(resolved);
                }
            }
        }
    }

    Ok(accumulators
        .into_iter()
        .map(|(key, accumulator)| (key, accumulator.text))
        .collect())
}
