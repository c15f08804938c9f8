use core::str::FromStr;

use serde::{Deserialize, Serialize};

use hotelchain_core::DomainError;

/// Closed set of room kinds a hotel can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomKind {
    Single,
    Double,
    Suite,
    Deluxe,
    Penthouse,
}

impl RoomKind {
    pub const ALL: [RoomKind; 5] = [
        RoomKind::Single,
        RoomKind::Double,
        RoomKind::Suite,
        RoomKind::Deluxe,
        RoomKind::Penthouse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::Single => "SINGLE",
            RoomKind::Double => "DOUBLE",
            RoomKind::Suite => "SUITE",
            RoomKind::Deluxe => "DELUXE",
            RoomKind::Penthouse => "PENTHOUSE",
        }
    }
}

impl core::fmt::Display for RoomKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown room kind {s:?}")))
    }
}
