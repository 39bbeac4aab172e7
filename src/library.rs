//! Resource symbol table.
//!
//! A [`ResourceLibrary`] maps human-readable keys to [`ResourceId`]s and to the
//! texture or action registered under each key. Effects only ever hold ids;
//! the library is consulted when a tile is drawn or entered.

use std::collections::HashMap;
use std::fmt;

use crate::error::ActionInvocationFailure;
use crate::map::ResourceId;

/// A host-supplied action handler, invoked with no arguments.
pub type Action = Box<dyn Fn()>;

/// A value registered in the library.
pub enum Resource {
    /// Location of a texture, opaque to the engine.
    Texture(String),
    /// A callback to run when the pawn enters a tile.
    Action(Action),
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Texture(url) => f.debug_tuple("Texture").field(url).finish(),
            Resource::Action(_) => f.write_str("Action(..)"),
        }
    }
}

/// Symbol table from string keys to resources.
///
/// Ids are assigned from 1 upward the first time a key is seen and never
/// change afterwards. A key can be known (interned) without a resource
/// registered behind it yet.
#[derive(Debug, Default)]
pub struct ResourceLibrary {
    ids: HashMap<String, ResourceId>,
    /// Slot `n` holds the entry for id `n + 1`.
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    key: String,
    resource: Option<Resource>,
}

impl ResourceLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(id: ResourceId) -> Option<usize> {
        usize::try_from(id.get()).ok()?.checked_sub(1)
    }

    fn entry(&self, id: ResourceId) -> Option<&Entry> {
        self.entries.get(Self::slot(id)?)
    }

    /// Get the id for `key`, assigning a fresh one if the key is new.
    ///
    /// Does not register a resource.
    pub fn intern(&mut self, key: &str) -> ResourceId {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }
        let raw = u32::try_from(self.entries.len() + 1).unwrap_or(u32::MAX);
        let id = ResourceId::new(raw);
        self.ids.insert(key.to_string(), id);
        self.entries.push(Entry {
            key: key.to_string(),
            resource: None,
        });
        id
    }

    /// Register a resource under `key`, replacing any previous value.
    pub fn insert(&mut self, key: &str, resource: Resource) -> ResourceId {
        let id = self.intern(key);
        if let Some(entry) = Self::slot(id).and_then(|idx| self.entries.get_mut(idx)) {
            entry.resource = Some(resource);
        }
        id
    }

    /// Register a texture location under `key`.
    pub fn insert_texture(&mut self, key: &str, url: impl Into<String>) -> ResourceId {
        self.insert(key, Resource::Texture(url.into()))
    }

    /// Register an action handler under `key`.
    pub fn insert_action(&mut self, key: &str, action: impl Fn() + 'static) -> ResourceId {
        self.insert(key, Resource::Action(Box::new(action)))
    }

    /// Resolve a key to its id.
    ///
    /// Returns `None` unless a resource is registered under `key`. Use
    /// [`ResourceLibrary::id_of`] to look up keys that are only interned.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ResourceId> {
        let id = self.id_of(key)?;
        self.resource(id).map(|_| id)
    }

    /// Resolve a key to its id, registered or merely interned.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<ResourceId> {
        self.ids.get(key).copied()
    }

    /// The key behind an id.
    #[must_use]
    pub fn key(&self, id: ResourceId) -> Option<&str> {
        self.entry(id).map(|entry| entry.key.as_str())
    }

    /// The resource registered behind an id.
    #[must_use]
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.entry(id)?.resource.as_ref()
    }

    /// The texture location behind an id, if it is a texture.
    #[must_use]
    pub fn texture(&self, id: ResourceId) -> Option<&str> {
        match self.resource(id)? {
            Resource::Texture(url) => Some(url),
            Resource::Action(_) => None,
        }
    }

    /// Check if an action handler is registered behind an id.
    #[must_use]
    pub fn is_action(&self, id: ResourceId) -> bool {
        matches!(self.resource(id), Some(Resource::Action(_)))
    }

    /// Run the action handler registered behind an id.
    ///
    /// # Errors
    ///
    /// Returns [`ActionInvocationFailure`] if no action is registered for `id`,
    /// including when a texture is registered there instead.
    pub fn invoke(&self, id: ResourceId) -> Result<(), ActionInvocationFailure> {
        match self.resource(id) {
            Some(Resource::Action(action)) => {
                action();
                Ok(())
            }
            _ => Err(ActionInvocationFailure {
                action: id,
                key: self.key(id).map(str::to_string),
            }),
        }
    }

    /// Number of known keys, registered or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every known key with its id, in id order.
    pub fn keys(&self) -> impl Iterator<Item = (ResourceId, &str)> {
        self.entries.iter().enumerate().map(|(idx, entry)| {
            let raw = u32::try_from(idx + 1).unwrap_or(u32::MAX);
            (ResourceId::new(raw), entry.key.as_str())
        })
    }
}
