//! Voice clip lists for dialogue playback.
//!
//! Each dialogue entry references a list of clips by id; when the entry
//! is typed out, clips are drawn from its list uniformly at random.

use rand::Rng;

/// Handle into the [`VoiceRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceListId(pub usize);

/// An authored set of interchangeable voice clips, read-only at runtime
#[derive(Debug, Clone)]
pub struct VoiceList {
    pub name: String,
    clips: Vec<String>,
}

impl VoiceList {
    pub fn new(name: impl Into<String>, clips: Vec<String>) -> Self {
        Self {
            name: name.into(),
            clips,
        }
    }

    /// Pick a clip path uniformly at random.
    ///
    /// An empty list is an authoring error: reported, and no clip is
    /// returned rather than drawing from an invalid range.
    pub fn pick_random(&self) -> Option<&str> {
        if self.clips.is_empty() {
            log::error!("voice list '{}' has no clips", self.name);
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.clips.len());
        Some(&self.clips[index])
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// All voice lists of the loaded level, addressed by [`VoiceListId`]
#[derive(Debug, Default)]
pub struct VoiceRegistry {
    lists: Vec<VoiceList>,
}

impl VoiceRegistry {
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    pub fn add(&mut self, list: VoiceList) -> VoiceListId {
        self.lists.push(list);
        VoiceListId(self.lists.len() - 1)
    }

    pub fn get(&self, id: VoiceListId) -> Option<&VoiceList> {
        let list = self.lists.get(id.0);
        if list.is_none() {
            log::error!("unknown voice list id {}", id.0);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
