//! Bracket data models: participants, matches, rounds, and formats.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::errors::{BracketError, BracketResult};

/// Sentinel display name for the absent opponent in an uneven pairing.
pub const BYE_NAME: &str = "BYE";

/// Default number of entrants per free-for-all group match.
pub const DEFAULT_GROUP_CAPACITY: usize = 8;

/// A tournament entrant.
///
/// A participant carries only identifying attributes; standings, scores,
/// and results live with the caller. The sentinel [`Participant::bye`]
/// stands in for a missing opponent and must never count toward standings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub display_name: String,
    pub avatar: Option<String>,
    pub contact: Option<String>,
}

impl Participant {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar: None,
            contact: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// The sentinel opponent for byes. Carries no identity.
    pub fn bye() -> Self {
        Self::new(BYE_NAME)
    }

    pub fn is_bye(&self) -> bool {
        self.display_name == BYE_NAME && self.avatar.is_none() && self.contact.is_none()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_name.fmt(f)
    }
}

/// A single contest within a round.
///
/// Duel sides and group entrant lists may be undetermined (`None` sides,
/// empty entrants) when the match is filled from an earlier round's
/// results.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Match {
    /// A 1v1 pairing with an ordered top/bottom pair.
    Duel {
        top: Option<Participant>,
        bottom: Option<Participant>,
    },
    /// A multi-player group with a fixed entrant capacity.
    Group {
        entrants: Vec<Participant>,
        capacity: usize,
    },
}

impl Match {
    pub fn duel(top: Participant, bottom: Participant) -> Self {
        Self::Duel {
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// A duel whose sides are decided by an earlier round.
    pub fn pending_duel() -> Self {
        Self::Duel {
            top: None,
            bottom: None,
        }
    }

    pub fn group(entrants: Vec<Participant>, capacity: usize) -> Self {
        Self::Group { entrants, capacity }
    }

    /// A group filled from an earlier phase's winners.
    pub fn pending_group(capacity: usize) -> Self {
        Self::Group {
            entrants: Vec::new(),
            capacity,
        }
    }

    /// All participants currently assigned to this match.
    pub fn participants(&self) -> Vec<&Participant> {
        match self {
            Self::Duel { top, bottom } => top.iter().chain(bottom.iter()).collect(),
            Self::Group { entrants, .. } => entrants.iter().collect(),
        }
    }

    /// Whether one side of this match is the bye sentinel. Standings
    /// collaborators filter these out of win/loss tallies.
    pub fn involves_bye(&self) -> bool {
        self.participants().iter().any(|p| p.is_bye())
    }

    /// Whether this match still waits on an earlier round's results.
    pub fn is_pending(&self) -> bool {
        match self {
            Self::Duel { top, bottom } => top.is_none() || bottom.is_none(),
            Self::Group { entrants, .. } => entrants.is_empty(),
        }
    }
}

/// An ordered sequence of matches with a human-readable label.
///
/// Rounds are produced in play order: round 1 first, the final last.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Round {
    pub label: String,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(label: impl Into<String>, matches: Vec<Match>) -> Self {
        Self {
            label: label.into(),
            matches,
        }
    }
}

/// Tournament format
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Every participant plays every other participant exactly once.
    RoundRobin,
    /// Participants compete in multi-player groups.
    FreeForAll,
    /// Single elimination; losers are out.
    Elimination,
}

impl FromStr for Format {
    type Err = BracketError;

    fn from_str(s: &str) -> BracketResult<Self> {
        match s {
            "round-robin" => Ok(Self::RoundRobin),
            "free-for-all" => Ok(Self::FreeForAll),
            "elimination" => Ok(Self::Elimination),
            other => Err(BracketError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::RoundRobin => "round-robin",
            Self::FreeForAll => "free-for-all",
            Self::Elimination => "elimination",
        };
        write!(f, "{repr}")
    }
}

/// Free-for-all configuration
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FreeForAllConfig {
    /// Maximum entrants per group match.
    pub group_capacity: usize,
}

impl Default for FreeForAllConfig {
    fn default() -> Self {
        Self {
            group_capacity: DEFAULT_GROUP_CAPACITY,
        }
    }
}

impl FreeForAllConfig {
    pub fn new(group_capacity: usize) -> Self {
        Self { group_capacity }
    }

    /// Validate configuration
    pub fn validate(&self) -> BracketResult<()> {
        if self.group_capacity == 0 {
            return Err(BracketError::InvalidGroupCapacity(self.group_capacity));
        }
        Ok(())
    }
}

/// The full ordered round sequence for one tournament instance.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Bracket {
    pub format: Format,
    pub rounds: Vec<Round>,
}

impl Bracket {
    /// Generate a bracket for the given roster and format using the
    /// default (input-order) seeding.
    pub fn generate(
        participant_count: usize,
        participants: &[Participant],
        format: Format,
    ) -> BracketResult<Self> {
        let rounds = super::generator::generate_rounds(participant_count, participants, format)?;
        Ok(Self { format, rounds })
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
