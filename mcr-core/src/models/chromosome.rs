use std::cmp::Ordering;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Chromosome name used to partition features.
///
/// Equality and hashing use the name as written. Ordering is natural:
/// an optional `chr` prefix is ignored and numbered chromosomes sort
/// numerically before named ones, so `chr2 < chr10 < chrX`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Chromosome {
    name: String,
}

impl Chromosome {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Chromosome { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn sort_key(&self) -> (u8, u32, &str) {
        let stripped = strip_chr_prefix(&self.name);
        match stripped.parse::<u32>() {
            Ok(number) => (0, number, stripped),
            Err(_) => (1, 0, stripped),
        }
    }
}

fn strip_chr_prefix(name: &str) -> &str {
    match name.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &name[3..],
        _ => name,
    }
}

impl Ord for Chromosome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Chromosome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Chromosome {
    fn from(value: &str) -> Self {
        Chromosome::new(value)
    }
}

impl From<String> for Chromosome {
    fn from(value: String) -> Self {
        Chromosome::new(value)
    }
}

impl AsRef<str> for Chromosome {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
