//! Domain Value Objects
//!
//! The booking status state machine, the temporal listing keyword, and
//! pagination.

use std::str::FromStr;

/// Status of a booking
///
/// ```text
///         create()
///   [none] ───────► Waiting ──approve()──► Approved
///                      └───────reject()──► Rejected
/// ```
///
/// Approved and Rejected are both stable end states. Transitions are decided
/// by [`BookingStatus::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Resolve the owner's decision against the current status.
    ///
    /// Returns the new status, or `None` when the booking already holds the
    /// requested status. Re-requesting the held status is an error at the
    /// service layer, never a silent no-op.
    pub fn decide(self, approve: bool) -> Option<BookingStatus> {
        let target = if approve {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        (self != target).then_some(target)
    }

    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Temporal listing keyword
///
/// The fixed vocabulary accepted by the listing operations. `Waiting` and
/// `Rejected` select by status; `Future`, `Past` and `Current` classify
/// against "now" at call time; `All` applies no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl FromStr for BookingState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(()),
        }
    }
}

/// Offset/limit pair applied after filtering and ordering
///
/// Raw query parameters are validated at the HTTP layer; by the time a
/// `Page` exists its limit is positive. A zero limit is a caller contract
/// violation and fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: u64,
    limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        assert!(limit > 0, "page limit must be positive");
        Self { offset, limit }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
