//! Pointer events
//!
//! The subset of host input events a flip card reacts to: presses, releases
//! and drags. Coordinates are in the same layout space as the widget bounds.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    /// Drag event (pointer down + move)
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer up or cancel after drag)
    pub const DRAG_END: EventType = 7;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    /// Incremental movement since the previous drag event
    Drag {
        x: f32,
        y: f32,
        delta_x: f32,
        delta_y: f32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            data,
            timestamp: 0,
        }
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_DOWN, EventData::Pointer { x, y })
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::new(event_types::POINTER_UP, EventData::Pointer { x, y })
    }

    /// Drag by a delta. The position is left at the origin; recognizers that
    /// only care about deltas ignore it.
    pub fn drag(delta_x: f32, delta_y: f32) -> Self {
        Self::new(
            event_types::DRAG,
            EventData::Drag {
                x: 0.0,
                y: 0.0,
                delta_x,
                delta_y,
            },
        )
    }

    pub fn drag_end() -> Self {
        Self::new(event_types::DRAG_END, EventData::None)
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Pointer position, if the event carries one
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y } | EventData::Drag { x, y, .. } => Some((x, y)),
            EventData::None => None,
        }
    }
}
