use std::ops::{Deref, DerefMut};

use crate::mountain::{Obstacle, Supply};

/// Food may dip to this value when entering a stop; any lower and the move fails.
pub const FOOD_FLOOR: i32 = -1;

/// The hiker's inventory while walking down the mountain.
///
/// A single `Traveler` is shared by the whole search and mutated in place;
/// branch points wrap it in a [`Checkpoint`] so whatever a subtree does to it
/// is undone when the subtree is left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Traveler {
    food: i32,
    axes: i32,
    rafts: i32,
}

impl Traveler {
    /// A traveler carrying nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A traveler starting with the given inventory.
    pub fn with_supplies(food: i32, axes: i32, rafts: i32) -> Self {
        Self { food, axes, rafts }
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn axes(&self) -> i32 {
        self.axes
    }

    pub fn rafts(&self) -> i32 {
        self.rafts
    }

    /// Eats one unit of food for the edge just walked.
    /// Returns `false` if that pushes food below [`FOOD_FLOOR`].
    /// Counters saturate at the `i32` bounds.
    pub fn consume_food(&mut self) -> bool {
        self.food = self.food.saturating_sub(1);
        self.food >= FOOD_FLOOR
    }

    /// Picks up every supply at a stop. Duplicates count.
    pub fn collect(&mut self, supplies: &[Supply]) {
        for supply in supplies {
            match supply {
                Supply::Food => self.food = self.food.saturating_add(1),
                Supply::Axe => self.axes = self.axes.saturating_add(1),
                Supply::Raft => self.rafts = self.rafts.saturating_add(1),
            }
        }
    }

    /// Tries to get past one obstacle, spending the matching tool.
    pub fn clear_obstacle(&mut self, obstacle: Obstacle) -> bool {
        let tool = match obstacle {
            Obstacle::River => &mut self.rafts,
            Obstacle::FallenTree => &mut self.axes,
        };
        if *tool <= 0 {
            return false;
        }
        *tool -= 1;
        true
    }

    /// Tries every obstacle in order and stops at the first one that blocks.
    /// Tools spent before the blocking obstacle stay spent.
    pub fn clear_obstacles(&mut self, obstacles: &[Obstacle]) -> bool {
        obstacles.iter().all(|&obstacle| self.clear_obstacle(obstacle))
    }

    /// Saves the current inventory and returns a guard that puts it back on drop.
    pub fn checkpoint(&mut self) -> Checkpoint<'_> {
        let saved = *self;
        Checkpoint {
            traveler: self,
            saved,
        }
    }
}

/// Scoped save point for a [`Traveler`].
///
/// Derefs to the traveler so it can be handed straight to the next level of
/// the search. Dropping it restores the inventory captured when it was taken,
/// whichever way the inner search returned.
pub struct Checkpoint<'t> {
    traveler: &'t mut Traveler,
    saved: Traveler,
}

impl Deref for Checkpoint<'_> {
    type Target = Traveler;

    fn deref(&self) -> &Traveler {
        self.traveler
    }
}

impl DerefMut for Checkpoint<'_> {
    fn deref_mut(&mut self) -> &mut Traveler {
        self.traveler
    }
}

impl Drop for Checkpoint<'_> {
    fn drop(&mut self) {
        *self.traveler = self.saved;
    }
}
