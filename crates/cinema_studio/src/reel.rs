//! The in-memory list of captured shots.

use cinema_core::GeneratedShot;
use std::collections::VecDeque;
use uuid::Uuid;

/// Captured shots, newest first.
///
/// The reel owns its shots outright; deleting or clearing drops them.
#[derive(Debug, Clone, Default)]
pub struct ShotReel {
    shots: VecDeque<GeneratedShot>,
}

impl ShotReel {
    /// An empty reel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a shot at the front of the reel and returns it.
    pub fn add(&mut self, shot: GeneratedShot) -> &GeneratedShot {
        self.shots.push_front(shot);
        &self.shots[0]
    }

    /// Removes the shot with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        match self.shots.iter().position(|shot| *shot.id() == id) {
            Some(index) => self.shots.remove(index).is_some(),
            None => false,
        }
    }

    /// Drops every shot.
    pub fn clear(&mut self) {
        self.shots.clear();
    }

    /// Shot with `id`, if still on the reel.
    pub fn get(&self, id: Uuid) -> Option<&GeneratedShot> {
        self.shots.iter().find(|shot| *shot.id() == id)
    }

    /// Most recent shot.
    pub fn latest(&self) -> Option<&GeneratedShot> {
        self.shots.front()
    }

    /// Shots, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedShot> {
        self.shots.iter()
    }

    /// Number of shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Whether the reel is empty.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShotReel {
    type Item = &'a GeneratedShot;
    type IntoIter = std::collections::vec_deque::Iter<'a, GeneratedShot>;

    fn into_iter(self) -> Self::IntoIter {
        self.shots.iter()
    }
}
