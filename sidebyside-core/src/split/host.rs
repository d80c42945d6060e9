//! Side-by-side host: lifecycle state machine and layout propagation
//!
//! [`SplitPaneHost`] owns the divider and both pane slots. It decides
//! whether a new input can be delivered to the existing children or whether
//! they must be torn down and recreated, runs the two child creations
//! concurrently and commits their result only while it is still current.
//!
//! # Lifecycle
//!
//! ```text
//!            set_input (no match)             both created
//!   Empty ─────────────────────────▶ Creating ─────────────▶ Ready
//!     ▲                                 │  ▲                   │
//!     │        creation failed          │  │  set_input        │
//!     ├─────────────────────────────────┘  └── (no match) ─────┤
//!     │                       clear_input / dispose            │
//!     └────────────────────────────────────────────────────────┘
//! ```
//!
//! Every accepted `set_input` bumps a generation counter. A creation whose
//! captured generation no longer equals the host's is discarded and its
//! components disposed before anyone sees them.
//!
//! The host state lives behind a mutex that is never held across an
//! `.await`. Old children are disposed and fresh containers opened in the
//! same critical section that starts a creation.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{Instrument, debug, info, warn};

use crate::component::{
    ComponentFactory, ComponentRegistry, ContentDescriptor, DescriptorPair, InputOptions,
    PaneComponent,
};
use crate::config::SplitSettings;
use crate::tracing::span_names;

use super::divider::Divider;
use super::error::{InputOutcome, SplitError, SplitResult};
use super::geometry::{SplitRegions, compute_regions};
use super::slot::{PaneContainer, PaneSlot};
use super::types::{ContainerId, ControlHandle, Dimension, GroupPosition, HostPhase, PaneSide, Region};

/// Dual-pane host shown to the surrounding shell.
///
/// The handle is cheap to clone; clones share the same state, which lets a
/// shell start a new `set_input` while an earlier one is still awaiting.
///
/// # Example
///
/// ```
/// use sidebyside_core::component::ComponentRegistry;
/// use sidebyside_core::config::SplitSettings;
/// use sidebyside_core::split::{Dimension, HostPhase, Region, SplitPaneHost};
///
/// let host = SplitPaneHost::with_registry(ComponentRegistry::new(), &SplitSettings::default());
/// host.create(Region::new(0, 0, 800, 600)).unwrap();
/// host.layout(Dimension::new(800, 600));
///
/// assert_eq!(host.phase(), HostPhase::Empty);
/// assert_eq!(host.divider_offset(), 220);
/// assert_eq!(host.drag_divider(50), 270);
/// ```
#[derive(Clone)]
pub struct SplitPaneHost {
    state: Arc<Mutex<HostState>>,
    factory: Arc<dyn ComponentFactory>,
}

struct HostState {
    settings: SplitSettings,
    divider: Divider,
    detail: PaneSlot,
    master: PaneSlot,
    input: Option<DescriptorPair>,
    generation: u64,
    phase: HostPhase,
    parent: Option<Region>,
    dimension: Option<Dimension>,
    visible: bool,
    position: Option<GroupPosition>,
    disposed: bool,
}

/// What a `set_input` call decided to do while holding the lock.
enum InputPlan {
    Reuse {
        generation: u64,
        detail: Arc<dyn PaneComponent>,
        master: Arc<dyn PaneComponent>,
    },
    Create {
        generation: u64,
        detail: PaneContainer,
        master: PaneContainer,
    },
}

impl SplitPaneHost {
    /// Creates a host resolving components through `factory`.
    #[must_use]
    pub fn new(factory: Arc<dyn ComponentFactory>, settings: &SplitSettings) -> Self {
        let state = HostState {
            settings: settings.clone(),
            divider: Divider::new(settings.min_offset),
            detail: PaneSlot::new(PaneSide::Detail),
            master: PaneSlot::new(PaneSide::Master),
            input: None,
            generation: 0,
            phase: HostPhase::Empty,
            parent: None,
            dimension: None,
            visible: false,
            position: None,
            disposed: false,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            factory,
        }
    }

    /// Creates a host backed by a [`ComponentRegistry`].
    #[must_use]
    pub fn with_registry(registry: ComponentRegistry, settings: &SplitSettings) -> Self {
        Self::new(Arc::new(registry), settings)
    }

    /// One-time setup inside the parent region.
    ///
    /// Initializes the divider for the parent's width at the configured
    /// initial offset.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::HostDisposed` if the host was disposed.
    pub fn create(&self, parent: Region) -> SplitResult<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        if state.disposed {
            return Err(SplitError::HostDisposed);
        }
        if state.parent.is_some() {
            debug!("Split host created again, re-initializing divider");
        }
        state.parent = Some(parent);
        let initial = state.settings.effective_initial_offset();
        state.divider.initialize(parent.width, initial);
        debug!(
            parent = %parent,
            offset = state.divider.offset(),
            "Split host created"
        );
        Ok(())
    }

    /// Assigns the pair of contents to display.
    ///
    /// If the pair matches the current one the existing children receive it
    /// directly. Otherwise both children are disposed, two new ones are
    /// created concurrently and committed if no newer input arrived in the
    /// meantime.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not usable, if no component is
    /// registered for one of the descriptors, or if a component fails to
    /// instantiate or to accept its input. Any component that was created
    /// for a failed call is disposed before the error is returned.
    pub async fn set_input(
        &self,
        pair: DescriptorPair,
        options: InputOptions,
    ) -> SplitResult<InputOutcome> {
        let span = crate::trace_operation!(
            span_names::SPLIT_SET_INPUT,
            detail = %pair.detail,
            master = %pair.master
        );
        self.run_input(pair, options).instrument(span).await
    }

    async fn run_input(
        &self,
        pair: DescriptorPair,
        options: InputOptions,
    ) -> SplitResult<InputOutcome> {
        match self.plan_input(&pair)? {
            InputPlan::Reuse {
                generation,
                detail,
                master,
            } => {
                self.deliver_to_existing(generation, &pair, &options, detail, master)
                    .await
            }
            InputPlan::Create {
                generation,
                detail,
                master,
            } => {
                let factory = self.factory.as_ref();
                let (detail, master) = futures::join!(
                    create_child(factory, PaneSide::Detail, &pair.detail, detail, &options)
                        .instrument(crate::trace_operation_debug!(
                            span_names::SPLIT_CREATE_CHILD,
                            side = %PaneSide::Detail
                        )),
                    create_child(factory, PaneSide::Master, &pair.master, master, &options)
                        .instrument(crate::trace_operation_debug!(
                            span_names::SPLIT_CREATE_CHILD,
                            side = %PaneSide::Master
                        )),
                );
                self.commit(generation, &options, detail, master)
            }
        }
    }

    /// Disposes both children and forgets the current input.
    pub fn clear_input(&self) {
        let mut state = self.lock();
        if state.disposed {
            return;
        }
        state.generation += 1;
        state.teardown();
        state.input = None;
        debug!(generation = state.generation, "Split input cleared");
    }

    /// Shows or hides both children.
    ///
    /// The value is remembered and applied to children committed later.
    pub fn set_visible(&self, visible: bool, position: Option<GroupPosition>) {
        let mut state = self.lock();
        state.visible = visible;
        state.position = position;
        state.apply_visibility();
    }

    /// Lays both children out inside a container of the given size.
    ///
    /// The dimension is remembered even while no children exist.
    pub fn layout(&self, dimension: Dimension) {
        let _span =
            crate::trace_operation_debug!(span_names::SPLIT_LAYOUT, dimension = %dimension)
                .entered();
        let mut state = self.lock();
        if state.disposed {
            return;
        }
        state.dimension = Some(dimension);
        state.divider.set_total_length(dimension.width);
        state.apply_layout();
    }

    /// Moves the divider by a drag delta and re-lays out on change.
    ///
    /// Returns the resulting offset.
    pub fn drag_divider(&self, delta: i32) -> u32 {
        let mut state = self.lock();
        if state.divider.drag(delta) {
            state.apply_layout();
        }
        state.divider.offset()
    }

    /// Moves the divider to the centre of the container.
    ///
    /// Returns the resulting offset.
    pub fn reset_divider(&self) -> u32 {
        let mut state = self.lock();
        if state.divider.reset() {
            state.apply_layout();
        }
        state.divider.offset()
    }

    /// Returns the current divider offset.
    #[must_use]
    pub fn divider_offset(&self) -> u32 {
        self.lock().divider.offset()
    }

    /// Subscribes to divider offset changes.
    #[must_use]
    pub fn subscribe_divider(&self) -> watch::Receiver<u32> {
        self.lock().divider.subscribe()
    }

    /// Focuses the master child, if present.
    pub fn focus(&self) {
        self.lock().master.focus();
    }

    /// Returns the master child's control while the host is ready.
    #[must_use]
    pub fn active_component(&self) -> Option<ControlHandle> {
        let state = self.lock();
        if state.phase == HostPhase::Ready {
            state.master.control()
        } else {
            None
        }
    }

    /// Returns the master component while the host is ready.
    #[must_use]
    pub fn master_component(&self) -> Option<Arc<dyn PaneComponent>> {
        let state = self.lock();
        (state.phase == HostPhase::Ready)
            .then(|| state.master.component())
            .flatten()
    }

    /// Returns the detail component while the host is ready.
    #[must_use]
    pub fn detail_component(&self) -> Option<Arc<dyn PaneComponent>> {
        let state = self.lock();
        (state.phase == HostPhase::Ready)
            .then(|| state.detail.component())
            .flatten()
    }

    /// Returns the regions last applied to the children.
    #[must_use]
    pub fn regions(&self) -> Option<SplitRegions> {
        let state = self.lock();
        Some(SplitRegions {
            detail: state.detail.region()?,
            master: state.master.region()?,
        })
    }

    /// Returns the ids of the open detail and master containers.
    #[must_use]
    pub fn container_ids(&self) -> Option<(ContainerId, ContainerId)> {
        let state = self.lock();
        Some((state.detail.container()?.id, state.master.container()?.id))
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> HostPhase {
        self.lock().phase
    }

    /// Returns the current input pair.
    #[must_use]
    pub fn input(&self) -> Option<DescriptorPair> {
        self.lock().input.clone()
    }

    /// Returns the current generation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Returns the last dimension passed to [`SplitPaneHost::layout`].
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> {
        self.lock().dimension
    }

    /// Returns true once [`SplitPaneHost::dispose`] was called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Tears down both children, their containers and the divider state.
    ///
    /// Safe to call more than once.
    pub fn dispose(&self) {
        let mut state = self.lock();
        if state.disposed {
            return;
        }
        state.generation += 1;
        state.teardown();
        state.input = None;
        state.parent = None;
        state.disposed = true;
        debug!("Split host disposed");
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        let state = self.lock();
        !state.disposed && state.generation == generation
    }

    fn plan_input(&self, pair: &DescriptorPair) -> SplitResult<InputPlan> {
        let mut guard = self.lock();
        let state = &mut *guard;
        if state.disposed {
            return Err(SplitError::HostDisposed);
        }
        if state.parent.is_none() {
            return Err(SplitError::NotCreated);
        }

        state.generation += 1;
        let generation = state.generation;

        let matches = state.input.as_ref().is_some_and(|current| current.matches(pair));
        if matches
            && state.phase == HostPhase::Ready
            && let (Some(detail), Some(master)) = (state.detail.component(), state.master.component())
        {
            state.input = Some(pair.clone());
            return Ok(InputPlan::Reuse {
                generation,
                detail,
                master,
            });
        }

        state.teardown();
        state.input = Some(pair.clone());
        state.phase = HostPhase::Creating;
        let detail = state.detail.open_container();
        let master = state.master.open_container();
        debug!(generation, "Recreating side-by-side children");

        Ok(InputPlan::Create {
            generation,
            detail,
            master,
        })
    }

    async fn deliver_to_existing(
        &self,
        generation: u64,
        pair: &DescriptorPair,
        options: &InputOptions,
        detail: Arc<dyn PaneComponent>,
        master: Arc<dyn PaneComponent>,
    ) -> SplitResult<InputOutcome> {
        debug!(generation, "Input matches current pair, reusing children");

        for (side, component, descriptor) in [
            (PaneSide::Detail, &detail, &pair.detail),
            (PaneSide::Master, &master, &pair.master),
        ] {
            let delivered = component.set_input(descriptor, options).await;
            if !self.is_current(generation) {
                if let Err(error) = delivered {
                    debug!(
                        generation,
                        side = %side,
                        error = %error,
                        "Ignoring failure of superseded reuse"
                    );
                }
                return Ok(InputOutcome::Superseded);
            }
            delivered.map_err(|source| SplitError::ChildSetInput { side, source })?;
        }

        Ok(InputOutcome::Reused)
    }

    fn commit(
        &self,
        generation: u64,
        options: &InputOptions,
        detail: SplitResult<Arc<dyn PaneComponent>>,
        master: SplitResult<Arc<dyn PaneComponent>>,
    ) -> SplitResult<InputOutcome> {
        let mut guard = self.lock();
        let state = &mut *guard;

        if state.disposed || state.generation != generation {
            debug!(
                generation,
                current = state.generation,
                "Discarding superseded child creation"
            );
            discard(detail);
            discard(master);
            return Ok(InputOutcome::Superseded);
        }

        match (detail, master) {
            (Ok(detail), Ok(master)) => {
                state.detail.install(detail);
                state.master.install(master);
                state.phase = HostPhase::Ready;
                state.apply_visibility();
                if state.visible && !options.preserve_focus {
                    state.master.focus();
                }
                let regions = state.apply_layout();
                info!(
                    generation,
                    laid_out = regions.is_some(),
                    "Committed side-by-side children"
                );
                Ok(InputOutcome::Committed)
            }
            (Err(error), other) | (other, Err(error)) => {
                discard(other);
                state.teardown();
                state.input = None;
                warn!(generation, error = %error, "Side-by-side child creation failed");
                Err(error)
            }
        }
    }
}

impl HostState {
    /// Disposes both children and closes their containers.
    fn teardown(&mut self) {
        let detail = self.detail.dispose();
        let master = self.master.dispose();
        if detail || master {
            debug!(detail, master, "Disposed side-by-side children");
        }
        self.phase = HostPhase::Empty;
    }

    fn apply_visibility(&self) {
        self.detail.set_visible(self.visible, self.position);
        self.master.set_visible(self.visible, self.position);
    }

    fn apply_layout(&mut self) -> Option<SplitRegions> {
        if self.phase != HostPhase::Ready || !self.master.is_occupied() {
            return None;
        }
        let dimension = self.dimension?;
        let regions = compute_regions(dimension, self.divider.offset());
        debug_assert_eq!(regions.total_width(), dimension.width);
        self.detail.resize(regions.detail);
        self.master.resize(regions.master);
        Some(regions)
    }
}

impl fmt::Debug for SplitPaneHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("SplitPaneHost")
            .field("phase", &state.phase)
            .field("generation", &state.generation)
            .field("input", &state.input)
            .field("offset", &state.divider.offset())
            .field("detail", &state.detail)
            .field("master", &state.master)
            .finish_non_exhaustive()
    }
}

/// Resolves, instantiates, attaches and feeds one child component.
async fn create_child(
    factory: &dyn ComponentFactory,
    side: PaneSide,
    descriptor: &ContentDescriptor,
    container: PaneContainer,
    options: &InputOptions,
) -> SplitResult<Arc<dyn PaneComponent>> {
    let constructor = factory.resolve(descriptor)?;
    let component = constructor
        .instantiate()
        .await
        .map_err(|source| SplitError::Instantiate { side, source })?;

    component.attach(&container);
    if let Err(source) = component.set_input(descriptor, options).await {
        component.dispose();
        return Err(SplitError::ChildSetInput { side, source });
    }
    Ok(component)
}

/// Disposes a created component that will never be committed.
fn discard(result: SplitResult<Arc<dyn PaneComponent>>) {
    if let Ok(component) = result {
        component.dispose();
    }
}
