//! The nine grahas that rule Vimshottari periods.
//!
//! Chart output uses the English names; the Sanskrit forms are kept for
//! the CLI and for log lines.

use std::fmt;

/// A Vedic graha. Discriminants follow the traditional weekday order with
/// the two nodes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

// (sanskrit, english), indexed by discriminant.
const GRAHA_NAMES: [(&str, &str); 9] = [
    ("Surya", "Sun"),
    ("Chandra", "Moon"),
    ("Mangal", "Mars"),
    ("Buddh", "Mercury"),
    ("Guru", "Jupiter"),
    ("Shukra", "Venus"),
    ("Shani", "Saturn"),
    ("Rahu", "Rahu"),
    ("Ketu", "Ketu"),
];

pub const ALL_GRAHAS: [Graha; 9] = {
    use Graha::*;
    [Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu]
};

impl Graha {
    pub const fn name(self) -> &'static str {
        GRAHA_NAMES[self as usize].0
    }

    pub const fn english_name(self) -> &'static str {
        GRAHA_NAMES[self as usize].1
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}
