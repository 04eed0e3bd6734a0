use std::fmt::{Display, Formatter};

/// Calendar date addressing one day's rate document.
///
/// Deliberately unvalidated: the remote service is the authority on which
/// dates exist, so out-of-range components are forwarded to it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl RateDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl Display for RateDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
