//! Content descriptors and the pair the host displays
//!
//! A descriptor identifies what a pane shows. Descriptors are compared by
//! value through [`ContentDescriptor::matches`], never by identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a piece of content, used to look up its component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKind(String);

impl ContentKind {
    /// Creates a content kind from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the kind name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identifies the content shown in one pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    /// Kind used to resolve the component.
    pub kind: ContentKind,
    /// Resource the component loads, typically a path or URI.
    pub resource: String,
    /// Optional display label; ignored by [`ContentDescriptor::matches`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ContentDescriptor {
    /// Creates a descriptor without a label.
    #[must_use]
    pub fn new(kind: impl Into<ContentKind>, resource: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            resource: resource.into(),
            label: None,
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns true if both descriptors identify the same content.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.kind == other.kind && self.resource == other.resource
    }
}

impl fmt::Display for ContentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.resource)
    }
}

/// The two descriptors shown side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorPair {
    /// Content of the master (end-edge) pane.
    pub master: ContentDescriptor,
    /// Content of the detail (start-edge) pane.
    pub detail: ContentDescriptor,
}

impl DescriptorPair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(master: ContentDescriptor, detail: ContentDescriptor) -> Self {
        Self { master, detail }
    }

    /// Returns true if both sides match the other pair.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.master.matches(&other.master) && self.detail.matches(&other.detail)
    }
}

impl fmt::Display for DescriptorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.detail, self.master)
    }
}

/// Options delivered with an input to the child components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputOptions {
    /// Do not move focus to the master pane after new children are committed.
    #[serde(default)]
    pub preserve_focus: bool,
    /// Request that the content stays open when the shell recycles panes.
    #[serde(default)]
    pub pinned: bool,
}

impl InputOptions {
    /// Options that leave focus where it is.
    #[must_use]
    pub const fn preserving_focus() -> Self {
        Self {
            preserve_focus: true,
            pinned: false,
        }
    }
}
