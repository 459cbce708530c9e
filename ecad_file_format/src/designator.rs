use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Reference designator of a placed part, e.g. `C1` or `U3`.
///
/// Ordering is "natural" and ignores case, so `C2 < C10` and `c1` sorts next to `C1`.
/// When two designators only differ in case, the raw strings decide, which keeps the order
/// total and consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Designator(pub String);

impl Designator {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Designator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Designator {
    fn from(value: &str) -> Self {
        Designator(value.to_string())
    }
}

impl Ord for Designator {
    fn cmp(&self, other: &Self) -> Ordering {
        natord::compare_ignore_case(&self.0, &other.0).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Designator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
