//! Map module - fixed-capacity room slots
//!
//! The map owns every room. It is created with a number of slots, all empty,
//! and then filled from a room layout. The layout is configuration data and is
//! not derived from the slot count: a layout shorter than the capacity leaves
//! trailing slots empty, a longer one is cut off at the capacity.

use tracing::{debug, warn};

use crate::level::Level;
use crate::rng::SimpleRng;
use crate::room::Room;
use crate::types::RoomSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    slots: Vec<Option<Room>>,
}

impl Map {
    /// Create a map with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Set up a map: allocate `room_count` slots, then create and render one
    /// room per `layout` entry, in order.
    pub fn setup(
        room_count: usize,
        layout: &[RoomSpec],
        rng: &mut SimpleRng,
        level: &mut Level,
    ) -> Self {
        let mut map = Self::with_capacity(room_count);

        if layout.len() > room_count {
            warn!(
                capacity = room_count,
                layout = layout.len(),
                "room layout exceeds map capacity; extra rooms dropped"
            );
        }

        for (slot, spec) in map.slots.iter_mut().zip(layout) {
            let room = Room::create(*spec, rng);
            room.render(level);
            *slot = Some(room);
        }

        debug!(capacity = map.capacity(), rooms = map.len(), "map set up");
        map
    }

    /// Number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The room in slot `index`, if the slot exists and is occupied.
    pub fn slot(&self, index: usize) -> Option<&Room> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied slots in order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.slots.iter().flatten()
    }

    /// Re-stamp every room onto `level`. Empty slots are skipped.
    pub fn render(&self, level: &mut Level) {
        for room in self.rooms() {
            room.render(level);
        }
    }
}
