//! Child component abstractions
//!
//! The split host never looks inside the components it hosts. It talks to
//! them through [`PaneComponent`], creates them through a
//! [`ComponentConstructor`] and finds constructors through a
//! [`ComponentFactory`].
//!
//! # Module Structure
//!
//! - `descriptor` - Content descriptors (`ContentKind`, `ContentDescriptor`, `DescriptorPair`)
//! - `registry` - Kind-keyed constructor registry (`ComponentRegistry`)

mod descriptor;
mod registry;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::split::{ControlHandle, GroupPosition, PaneContainer, Region, SplitResult};

pub use descriptor::{ContentDescriptor, ContentKind, DescriptorPair, InputOptions};
pub use registry::ComponentRegistry;

/// Errors raised by child components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// The component could not load its content.
    #[error("failed to load content: {0}")]
    Load(String),

    /// The component does not accept this content.
    #[error("unsupported content: {0}")]
    Unsupported(String),

    /// Any other component failure.
    #[error("{0}")]
    Other(String),
}

/// Result type alias for component operations.
pub type ComponentResult<T> = std::result::Result<T, ComponentError>;

/// A child view hosted in one pane.
///
/// Methods take `&self` so that the host can hand out shared references
/// and await `set_input` without holding its own lock. Implementations must
/// not call back into the host from these methods.
#[async_trait]
pub trait PaneComponent: Send + Sync {
    /// Attaches the component to its container.
    fn attach(&self, container: &PaneContainer);

    /// Delivers the content to show.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be loaded.
    async fn set_input(
        &self,
        descriptor: &ContentDescriptor,
        options: &InputOptions,
    ) -> ComponentResult<()>;

    /// Applies a new absolutely positioned region.
    fn resize(&self, region: Region);

    /// Shows or hides the component.
    fn set_visible(&self, visible: bool, position: Option<GroupPosition>);

    /// Moves keyboard focus into the component.
    fn focus(&self);

    /// Releases the component. Called exactly once by the host.
    fn dispose(&self);

    /// Returns the control exposed to the shell.
    fn control(&self) -> ControlHandle;
}

/// Creates component instances for one content kind.
#[async_trait]
pub trait ComponentConstructor: Send + Sync {
    /// Instantiates a new component.
    ///
    /// # Errors
    ///
    /// Returns an error if the component cannot be created.
    async fn instantiate(&self) -> ComponentResult<Arc<dyn PaneComponent>>;
}

#[async_trait]
impl<F, Fut> ComponentConstructor for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ComponentResult<Arc<dyn PaneComponent>>> + Send,
{
    async fn instantiate(&self) -> ComponentResult<Arc<dyn PaneComponent>> {
        (self)().await
    }
}

/// Resolves the constructor able to show a descriptor.
pub trait ComponentFactory: Send + Sync {
    /// Returns the constructor for the descriptor's kind.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::NoHandler` if nothing is registered for the kind.
    fn resolve(&self, descriptor: &ContentDescriptor)
    -> SplitResult<Arc<dyn ComponentConstructor>>;
}
