//! Named channel groups
//!
//! A [`ChannelSet`] holds the channels belonging to one element
//! instance (e.g. `rotate_x`/`rotate_y`/`scale` for a tilting card).
//! Channels in a set share a tick driver and nothing else; there is no
//! cross-channel coupling.

use crate::spring::Channel;
use smallvec::SmallVec;

/// Channels owned by a single element, keyed by name
///
/// Backed by a small inline vector; the expected cardinality is a
/// handful of channels per element.
#[derive(Clone, Debug, Default)]
pub struct ChannelSet {
    channels: SmallVec<[(&'static str, Channel); 4]>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_channel(mut self, name: &'static str, channel: Channel) -> Self {
        self.insert(name, channel);
        self
    }

    /// Insert a channel, replacing any existing channel with this name
    pub fn insert(&mut self, name: &'static str, channel: Channel) {
        if let Some(slot) = self.channels.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = channel;
        } else {
            self.channels.push((name, channel));
        }
    }

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    pub fn channel_mut(&mut self, name: &str) -> Option<&mut Channel> {
        self.channels
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    /// Update a channel's target; returns false if the name is unknown
    pub fn set_target(&mut self, name: &str, target: f32) -> bool {
        match self.channel_mut(name) {
            Some(channel) => {
                channel.set_target(target);
                true
            }
            None => false,
        }
    }

    /// Current value of a channel
    pub fn value(&self, name: &str) -> Option<f32> {
        self.channel(name).map(Channel::value)
    }

    /// Advance every channel by one tick
    pub fn step_all(&mut self) {
        for (_, channel) in self.channels.iter_mut() {
            channel.step();
        }
    }

    /// Whether every channel has converged
    pub fn is_settled(&self) -> bool {
        self.channels.iter().all(|(_, c)| c.is_settled())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Channel)> {
        self.channels.iter().map(|(n, c)| (*n, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringConfig;

    fn tilt_set() -> ChannelSet {
        ChannelSet::new()
            .with_channel("rotate_x", Channel::new(SpringConfig::damped(), 0.0))
            .with_channel("rotate_y", Channel::new(SpringConfig::damped(), 0.0))
            .with_channel("scale", Channel::new(SpringConfig::smooth(), 1.0))
    }

    #[test]
    fn test_insert_and_lookup() {
        let set = tilt_set();
        assert_eq!(set.len(), 3);
        assert_eq!(set.value("scale"), Some(1.0));
        assert_eq!(set.value("rotate_x"), Some(0.0));
        assert_eq!(set.value("missing"), None);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut set = tilt_set();
        set.insert("scale", Channel::new(SpringConfig::smooth(), 2.0));
        assert_eq!(set.len(), 3);
        assert_eq!(set.value("scale"), Some(2.0));
    }

    #[test]
    fn test_set_target_and_step_all() {
        let mut set = tilt_set();
        assert!(set.set_target("scale", 1.05));
        assert!(!set.set_target("nope", 1.0));
        assert!(!set.is_settled());

        for _ in 0..500 {
            set.step_all();
        }
        assert!(set.is_settled());
        assert_eq!(set.value("scale"), Some(1.05));
        // Untouched channels stay at rest
        assert_eq!(set.value("rotate_x"), Some(0.0));
    }
}
