//! Kind-keyed registry of component constructors
//!
//! [`ComponentRegistry`] is the default [`ComponentFactory`]: a plain map
//! from [`ContentKind`] to the constructor that builds components for it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::split::{SplitError, SplitResult};

use super::{ComponentConstructor, ComponentFactory, ContentDescriptor, ContentKind};

/// Registry mapping content kinds to component constructors.
#[derive(Default, Clone)]
pub struct ComponentRegistry {
    constructors: HashMap<ContentKind, Arc<dyn ComponentConstructor>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for a kind, replacing any previous one.
    ///
    /// Returns true if a constructor was already registered for the kind.
    pub fn register<C>(&mut self, kind: impl Into<ContentKind>, constructor: C) -> bool
    where
        C: ComponentConstructor + 'static,
    {
        let kind = kind.into();
        tracing::debug!(kind = %kind, "Registering component constructor");
        self.constructors
            .insert(kind, Arc::new(constructor))
            .is_some()
    }

    /// Builder-style variant of [`ComponentRegistry::register`].
    #[must_use]
    pub fn with<C>(mut self, kind: impl Into<ContentKind>, constructor: C) -> Self
    where
        C: ComponentConstructor + 'static,
    {
        self.register(kind, constructor);
        self
    }

    /// Removes the constructor for a kind. Returns true if one was removed.
    pub fn unregister(&mut self, kind: &ContentKind) -> bool {
        self.constructors.remove(kind).is_some()
    }

    /// Returns true if a constructor is registered for the kind.
    #[must_use]
    pub fn contains(&self, kind: &ContentKind) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Returns the registered kinds in sorted order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ContentKind> {
        let mut kinds: Vec<_> = self.constructors.keys().cloned().collect();
        kinds.sort();
        kinds
    }

    /// Returns the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl ComponentFactory for ComponentRegistry {
    fn resolve(
        &self,
        descriptor: &ContentDescriptor,
    ) -> SplitResult<Arc<dyn ComponentConstructor>> {
        self.constructors
            .get(&descriptor.kind)
            .cloned()
            .ok_or_else(|| SplitError::NoHandler {
                kind: descriptor.kind.clone(),
            })
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
