use std::fmt;
use crate::config::enums::tracker_selection::TrackerSelection;

impl fmt::Display for TrackerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerSelection::first_reachable => write!(f, "first_reachable"),
            TrackerSelection::last_attempt => write!(f, "last_attempt"),
        }
    }
}

impl TrackerSelection {
    pub fn stops_at_first_success(&self) -> bool {
        matches!(self, TrackerSelection::first_reachable)
    }
}
