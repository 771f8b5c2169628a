//! Answer validators shared by the flow catalogs.

use std::sync::LazyLock;

use regex::Regex;

use crate::flow::{Validator, leading_integer};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Something other than whitespace.
pub fn non_empty() -> Validator {
    Validator::new("non_empty", |input| !input.trim().is_empty())
}

/// Loose email shape: `something@something.something`.
pub fn email() -> Validator {
    Validator::new("email", |input| EMAIL.is_match(input))
}

/// More than `min` characters once trimmed.
pub fn longer_than(min: usize) -> Validator {
    Validator::new("longer_than", move |input| input.trim().chars().count() > min)
}

/// Leading integer between 0 and 100 inclusive.
pub fn percentage() -> Validator {
    Validator::new("percentage", |input| {
        leading_integer(input).is_some_and(|n| (0..=100).contains(&n))
    })
}
