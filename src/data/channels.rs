//! Channel identity, display order and visibility.

use std::collections::HashMap;

/// Numeric identifier of an input channel (e.g. a thermocouple input).
pub type ChannelId = u32;

/// One configured channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    /// Position in the configured list; selects the palette colour.
    pub color_index: usize,
}

/// The active channels in display order, plus per-id visibility flags.
///
/// Visibility flags outlive [`configure`](Self::configure): a channel id that
/// comes back in a later run keeps whatever the user chose for it.
#[derive(Debug, Clone, Default)]
pub struct ChannelSet {
    channels: Vec<Channel>,
    visibility: HashMap<ChannelId, bool>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active channel list. Colours follow list order; duplicate
    /// ids after the first occurrence are ignored.
    pub fn configure<S: AsRef<str>>(&mut self, channels: &[(ChannelId, S)]) {
        self.channels.clear();
        for (id, name) in channels {
            if self.contains(*id) {
                log::warn!("duplicate channel id {id} ignored");
                continue;
            }
            self.visibility.entry(*id).or_insert(true);
            self.channels.push(Channel {
                id: *id,
                name: name.as_ref().to_string(),
                color_index: self.channels.len(),
            });
        }
    }

    pub fn contains(&self, id: ChannelId) -> bool {
        self.channels.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Channels in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }

    /// Visible channels in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Channel> + '_ {
        self.channels.iter().filter(|c| self.is_visible(c.id))
    }

    pub fn ids(&self) -> Vec<ChannelId> {
        self.channels.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Unknown ids are visible by default.
    pub fn is_visible(&self, id: ChannelId) -> bool {
        self.visibility.get(&id).copied().unwrap_or(true)
    }

    pub fn set_visible(&mut self, id: ChannelId, visible: bool) {
        self.visibility.insert(id, visible);
    }
}
