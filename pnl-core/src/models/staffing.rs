use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Residency status of a worker, which selects the statutory employer
/// contribution rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidencyStatus {
    Resident,
    NonResident,
}

impl ResidencyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::NonResident => "non-resident",
        }
    }
}

/// One employee on the roster.
///
/// `monthly_salary` is the contracted salary plus fixed allowance; the
/// employer's statutory contribution is derived from it, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub monthly_salary: Decimal,
    pub residency: ResidencyStatus,
}

/// An ordered, caller-owned collection of staff members.
///
/// Duplicates are allowed. Mutation happens only through [`add`] and
/// [`remove`]; both degrade to no-ops on invalid input rather than failing,
/// matching how the roster behaves in an interactive session.
///
/// [`add`]: StaffRoster::add
/// [`remove`]: StaffRoster::remove
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRoster {
    #[serde(default)]
    members: Vec<StaffMember>,
}

impl StaffRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends a member. Returns `false` (and leaves the roster untouched)
    /// when the name is empty or whitespace-only.
    pub fn add(&mut self, member: StaffMember) -> bool {
        if member.name.trim().is_empty() {
            warn!("ignoring roster entry with empty name");
            return false;
        }
        debug!(name = %member.name, "roster member added");
        self.members.push(member);
        true
    }

    /// Removes and returns the member at `index`, or `None` when the index
    /// is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<StaffMember> {
        if index >= self.members.len() {
            warn!(index, len = self.members.len(), "roster index out of bounds");
            return None;
        }
        let member = self.members.remove(index);
        debug!(name = %member.name, "roster member removed");
        Some(member)
    }
}

/// The three historical staffing shapes, unified behind one selector.
///
/// Costing lives in [`crate::calculations::staffing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StaffingPlan {
    /// Fixed headcount on a single flat salary.
    FlatHeadcount {
        headcount: u32,
        monthly_salary: Decimal,
    },
    /// Salaried full-timers plus hourly part-timers.
    TieredHoursBased {
        full_time_count: u32,
        full_time_salary: Decimal,
        part_time_count: u32,
        part_time_hours_per_day: Decimal,
        part_time_hourly_rate: Decimal,
    },
    /// Named members with statutory contributions.
    Roster(StaffRoster),
}
