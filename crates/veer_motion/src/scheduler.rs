//! Motion scheduler
//!
//! Owns every registered channel set and advances them each frame.
//! Callers with their own frame loop call [`MotionScheduler::tick`]
//! directly; hosts without one can wrap the scheduler in a
//! [`crate::ticker::FrameTicker`].

use crate::channel_set::ChannelSet;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct ChannelSetId;
}

/// Registry of channel sets, ticked once per frame
pub struct MotionScheduler {
    sets: SlotMap<ChannelSetId, ChannelSet>,
    target_fps: u32,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self {
            sets: SlotMap::with_key(),
            target_fps: 60,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Register a channel set; the returned id is the element's handle.
    ///
    /// Remove the set when the owning element is detached, otherwise it
    /// keeps getting ticked for as long as the scheduler lives.
    pub fn add_set(&mut self, set: ChannelSet) -> ChannelSetId {
        self.sets.insert(set)
    }

    pub fn get_set(&self, id: ChannelSetId) -> Option<&ChannelSet> {
        self.sets.get(id)
    }

    pub fn get_set_mut(&mut self, id: ChannelSetId) -> Option<&mut ChannelSet> {
        self.sets.get_mut(id)
    }

    pub fn remove_set(&mut self, id: ChannelSetId) -> Option<ChannelSet> {
        self.sets.remove(id)
    }

    /// Advance every channel in every set by one tick
    pub fn tick(&mut self) {
        for (_, set) in self.sets.iter_mut() {
            set.step_all();
        }
    }

    /// Whether any channel is still settling
    pub fn has_active_animations(&self) -> bool {
        self.sets.iter().any(|(_, s)| !s.is_settled())
    }

    pub fn sets_iter(&self) -> impl Iterator<Item = (ChannelSetId, &ChannelSet)> {
        self.sets.iter()
    }

    pub fn sets_iter_mut(&mut self) -> impl Iterator<Item = (ChannelSetId, &mut ChannelSet)> {
        self.sets.iter_mut()
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
