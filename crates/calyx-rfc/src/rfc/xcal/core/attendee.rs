//! Attendees and their participation parameters (RFC 5545 §3.2).

use std::fmt;

use super::ContactReference;

/// Participation status (`PARTSTAT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticipationStatus {
    #[default]
    NeedsAction,
    Accepted,
    Declined,
    Tentative,
    Delegated,
    InProcess,
    Completed,
}

impl ParticipationStatus {
    /// Returns the wire token for this status.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::NeedsAction => "NEEDS-ACTION",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Tentative => "TENTATIVE",
            Self::Delegated => "DELEGATED",
            Self::InProcess => "IN-PROCESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parses a wire token. Matching is exact; there is no fallback.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NEEDS-ACTION" => Some(Self::NeedsAction),
            "ACCEPTED" => Some(Self::Accepted),
            "DECLINED" => Some(Self::Declined),
            "TENTATIVE" => Some(Self::Tentative),
            "DELEGATED" => Some(Self::Delegated),
            "IN-PROCESS" => Some(Self::InProcess),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Participation role (`ROLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Required,
    Optional,
    NonParticipant,
    Chair,
}

impl Role {
    /// Returns the wire token for this role.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Required => "REQ-PARTICIPANT",
            Self::Optional => "OPT-PARTICIPANT",
            Self::NonParticipant => "NON-PARTICIPANT",
            Self::Chair => "CHAIR",
        }
    }

    /// Parses a wire token. Matching is exact; there is no fallback.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "REQ-PARTICIPANT" => Some(Self::Required),
            "OPT-PARTICIPANT" => Some(Self::Optional),
            "NON-PARTICIPANT" => Some(Self::NonParticipant),
            "CHAIR" => Some(Self::Chair),
            _ => None,
        }
    }
}

/// Calendar user type (`CUTYPE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarUserType {
    #[default]
    Individual,
    Group,
    Resource,
    Room,
    Unknown,
}

impl CalendarUserType {
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Group => "GROUP",
            Self::Resource => "RESOURCE",
            Self::Room => "ROOM",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "INDIVIDUAL" => Some(Self::Individual),
            "GROUP" => Some(Self::Group),
            "RESOURCE" => Some(Self::Resource),
            "ROOM" => Some(Self::Room),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl fmt::Display for CalendarUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// A participant attached to an event or to-do.
///
/// Delegation lists are kept exactly as set, whatever the participation
/// status; consistency between delegator and delegate is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    contact: ContactReference,
    role: Role,
    part_stat: ParticipationStatus,
    rsvp: bool,
    cutype: CalendarUserType,
    delegated_to: Vec<ContactReference>,
    delegated_from: Vec<ContactReference>,
}

impl Attendee {
    #[must_use]
    pub fn new(contact: ContactReference) -> Self {
        Self {
            contact,
            role: Role::default(),
            part_stat: ParticipationStatus::default(),
            rsvp: false,
            cutype: CalendarUserType::default(),
            delegated_to: Vec::new(),
            delegated_from: Vec::new(),
        }
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactReference {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: ContactReference) {
        self.contact = contact;
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    #[must_use]
    pub const fn part_stat(&self) -> ParticipationStatus {
        self.part_stat
    }

    pub fn set_part_stat(&mut self, part_stat: ParticipationStatus) {
        self.part_stat = part_stat;
    }

    /// Whether a reply is expected from this attendee.
    #[must_use]
    pub const fn rsvp(&self) -> bool {
        self.rsvp
    }

    pub fn set_rsvp(&mut self, rsvp: bool) {
        self.rsvp = rsvp;
    }

    #[must_use]
    pub const fn cutype(&self) -> CalendarUserType {
        self.cutype
    }

    pub fn set_cutype(&mut self, cutype: CalendarUserType) {
        self.cutype = cutype;
    }

    /// People this attendee handed participation to.
    #[must_use]
    pub fn delegated_to(&self) -> &[ContactReference] {
        &self.delegated_to
    }

    /// Replaces the delegation targets with a copy of `delegates`.
    pub fn set_delegated_to(&mut self, delegates: &[ContactReference]) {
        self.delegated_to = delegates.to_vec();
    }

    pub fn add_delegated_to(&mut self, delegate: ContactReference) {
        self.delegated_to.push(delegate);
    }

    /// People who handed participation to this attendee.
    #[must_use]
    pub fn delegated_from(&self) -> &[ContactReference] {
        &self.delegated_from
    }

    /// Replaces the delegation sources with a copy of `delegators`.
    pub fn set_delegated_from(&mut self, delegators: &[ContactReference]) {
        self.delegated_from = delegators.to_vec();
    }

    pub fn add_delegated_from(&mut self, delegator: ContactReference) {
        self.delegated_from.push(delegator);
    }
}
