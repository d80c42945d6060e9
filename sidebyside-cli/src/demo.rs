//! In-memory demo components for the `open` command.
//!
//! Each demo component validates its resource for its kind and logs every
//! call it receives. Nothing is rendered.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use sidebyside_core::component::{
    ComponentError, ComponentRegistry, ComponentResult, ContentDescriptor, InputOptions,
    PaneComponent,
};
use sidebyside_core::split::{ControlHandle, GroupPosition, PaneContainer, Region};
use tracing::{debug, info};

/// Kinds registered in the demo registry.
pub const DEMO_KINDS: [&str; 3] = ["text", "diff", "image"];

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// Builds a registry with one demo constructor per kind in [`DEMO_KINDS`].
pub fn demo_registry() -> ComponentRegistry {
    DEMO_KINDS
        .iter()
        .fold(ComponentRegistry::new(), |registry, &kind| {
            registry.with(kind, move || async move {
                let component: Arc<dyn PaneComponent> = Arc::new(DemoComponent::new(kind));
                Ok::<_, ComponentError>(component)
            })
        })
}

/// Checks that a resource can be shown by a kind.
fn validate(kind: &str, resource: &str) -> ComponentResult<()> {
    match kind {
        "diff" => match resource.split_once("..") {
            Some((left, right)) if !left.is_empty() && !right.is_empty() => Ok(()),
            _ => Err(ComponentError::Unsupported(format!(
                "diff expects left..right, got '{resource}'"
            ))),
        },
        "image" => {
            let extension = Path::new(resource)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase);
            match extension {
                Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
                _ => Err(ComponentError::Unsupported(format!(
                    "'{resource}' is not an image"
                ))),
            }
        }
        _ => Ok(()),
    }
}

struct DemoComponent {
    kind: &'static str,
    control: ControlHandle,
    resource: Mutex<Option<String>>,
}

impl DemoComponent {
    fn new(kind: &'static str) -> Self {
        let control = ControlHandle::new();
        debug!(kind, control = %control, "Demo component created");
        Self {
            kind,
            control,
            resource: Mutex::new(None),
        }
    }

    fn resource(&self) -> Option<String> {
        self.resource
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PaneComponent for DemoComponent {
    fn attach(&self, container: &PaneContainer) {
        debug!(kind = self.kind, container = %container.id, side = %container.side, "Attached");
    }

    async fn set_input(
        &self,
        descriptor: &ContentDescriptor,
        options: &InputOptions,
    ) -> ComponentResult<()> {
        validate(self.kind, &descriptor.resource)?;
        info!(
            kind = self.kind,
            resource = %descriptor.resource,
            pinned = options.pinned,
            "Showing content"
        );
        *self.resource.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(descriptor.resource.clone());
        Ok(())
    }

    fn resize(&self, region: Region) {
        debug!(kind = self.kind, region = %region, "Resized");
    }

    fn set_visible(&self, visible: bool, position: Option<GroupPosition>) {
        debug!(
            kind = self.kind,
            visible,
            position = ?position,
            "Visibility changed"
        );
    }

    fn focus(&self) {
        debug!(kind = self.kind, resource = ?self.resource(), "Focused");
    }

    fn dispose(&self) {
        debug!(kind = self.kind, resource = ?self.resource(), "Disposed");
    }

    fn control(&self) -> ControlHandle {
        self.control
    }
}
