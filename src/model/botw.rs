use crate::model::idol::Idol;

/// Per-guild election state, stored as a string in `guild_settings.state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotwState {
    /// Nominations are open; an announcement-day tick may pick a winner.
    Default,
    /// A winner was announced and is waiting for the winner-day role handover.
    WinnerChosen,
    /// The next announcement-day tick is skipped, then state resets.
    Skip,
}

impl BotwState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::WinnerChosen => "WINNER_CHOSEN",
            Self::Skip => "SKIP",
        }
    }

    /// Parses a stored state string. `None` means the row is corrupt; the
    /// caller decides whether to log or reset it.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DEFAULT" => Some(Self::Default),
            "WINNER_CHOSEN" => Some(Self::WinnerChosen),
            "SKIP" => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Result of a nomination attempt that did not fail outright.
///
/// `SuggestMatch` and `RequiresOverride` ask the command front-end to get an
/// answer from the member (bounded at 60 seconds) before retrying with
/// `accept_as_is` or calling the override operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NominateOutcome {
    /// The nomination was stored.
    Added(Idol),
    /// A close catalog/history match exists; confirm before storing.
    SuggestMatch { candidate: Idol },
    /// The member already has a nomination; confirm the replacement.
    RequiresOverride { current: Idol },
}
