//! Card faces and flip directions

use serde::{Deserialize, Serialize};

/// Which face of the card is (or is becoming) visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn is_front(&self) -> bool {
        matches!(self, Face::Front)
    }

    /// The other face
    pub fn flipped(&self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Driver value at which this face lies flat toward the viewer
    pub fn resting_progress(&self) -> f32 {
        match self {
            Face::Front => 0.0,
            Face::Back => 1.0,
        }
    }
}

/// Which way the departing face turns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    /// Departing face sweeps toward negative angles
    Left,
    /// Departing face sweeps toward positive angles
    Right,
}

impl FlipDirection {
    /// Direction for a gesture that started on the right (`true`) or left
    /// (`false`) side. A gesture from the right pushes the card to the left.
    pub fn from_origin(is_right_origin: bool) -> Self {
        if is_right_origin {
            FlipDirection::Left
        } else {
            FlipDirection::Right
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            FlipDirection::Left => -1.0,
            FlipDirection::Right => 1.0,
        }
    }
}
