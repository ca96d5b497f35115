//! `MM:SS:CC` rendering of elapsed time.

use serde::{Deserialize, Serialize};

/// Formats milliseconds as `MM:SS:CC`.
///
/// `CC` is hundredths of a second. Every field is zero-padded to two
/// digits and minutes wrap at 60; there is no hour field.
pub fn format_elapsed(ms: u64) -> String {
    let centis = (ms % 1_000) / 10;
    let seconds = (ms / 1_000) % 60;
    let minutes = (ms / 60_000) % 60;
    format!("{:02}:{:02}:{:02}", minutes, seconds, centis)
}

/// Elapsed milliseconds that display as `MM:SS:CC`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::From,
)]
pub struct Elapsed(pub u64);

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_elapsed(self.0))
    }
}
