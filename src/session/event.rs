use std::str::FromStr;

use thiserror::Error;

use crate::coord::LatLng;
use crate::marker::MarkerRole;

/// Emitted by the map surface when the user lets go of a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    DragEnd { role: MarkerRole, position: LatLng },
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not read drag event from {input:?}: {reason}")]
pub struct EventParseError {
    pub input: String,
    pub reason: String,
}

impl FromStr for DragEvent {
    type Err = EventParseError;

    /// Format is: `<source|target> <lat> <lng>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| EventParseError {
            input: s.to_string(),
            reason,
        };

        let mut parts = s.split_whitespace();
        let (Some(role), Some(lat), Some(lng), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected `<source|target> <lat> <lng>`".to_string()));
        };

        let role = MarkerRole::from_str(&role.to_ascii_lowercase())
            .map_err(|_| invalid(format!("unknown marker {role:?}")))?;
        let position = format!("{lat},{lng}")
            .parse::<LatLng>()
            .map_err(|err| invalid(err.to_string()))?;

        Ok(DragEvent::DragEnd { role, position })
    }
}
