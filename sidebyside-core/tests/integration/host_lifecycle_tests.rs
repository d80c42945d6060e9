//! Integration tests for the host lifecycle state machine
//!
//! These tests cover reuse versus recreation, failure handling, layout
//! propagation and disposal of `SplitPaneHost`.

use crate::common::{BROKEN, Event, Harness, pair, text, wait_until};
use sidebyside_core::component::{ContentDescriptor, DescriptorPair, InputOptions};
use sidebyside_core::config::SplitSettings;
use sidebyside_core::split::{
    Dimension, GroupPosition, HostPhase, InputOutcome, PaneSide, Region, SplitError,
    SplitPaneHost,
};

// ========== Creation and Geometry ==========

/// Tests the 800x600 scenario with the default minimum offset
#[tokio::test]
async fn first_input_creates_and_lays_out_both_children() {
    let harness = Harness::new();
    let host = harness.host();

    let outcome = host
        .set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    assert_eq!(outcome, InputOutcome::Committed);
    assert_eq!(host.phase(), HostPhase::Ready);
    assert_eq!(harness.journal.created(), 2);

    let regions = host.regions().expect("regions after commit");
    assert_eq!(regions.detail, Region::new(0, 0, 220, 600));
    assert_eq!(regions.master, Region::new(220, 0, 580, 600));

    let master = harness.journal.components_for("a.txt")[0];
    let detail = harness.journal.components_for("b.txt")[0];
    assert!(
        harness
            .journal
            .events_for(detail)
            .contains(&Event::Resized(detail, Region::new(0, 0, 220, 600)))
    );
    assert!(
        harness
            .journal
            .events_for(master)
            .contains(&Event::Resized(master, Region::new(220, 0, 580, 600)))
    );
}

/// Tests that dragging the divider re-lays out the children
#[tokio::test]
async fn dragging_divider_resizes_children() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    assert_eq!(host.drag_divider(50), 270);

    let regions = host.regions().expect("regions");
    assert_eq!(regions.detail.width, 270);
    assert_eq!(regions.master.width, 530);
    assert_eq!(regions.master.left, 270);
}

/// Tests that a layout received before the children exist is applied on commit
#[tokio::test]
async fn layout_before_creation_is_remembered() {
    let harness = Harness::new();
    let host = SplitPaneHost::with_registry(harness.registry(), &SplitSettings::default());
    host.create(Region::new(0, 0, 1000, 500)).expect("create");
    host.layout(Dimension::new(1000, 500));
    assert!(host.regions().is_none());

    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    let regions = host.regions().expect("regions");
    assert_eq!(regions.detail, Region::new(0, 0, 220, 500));
    assert_eq!(regions.master, Region::new(220, 0, 780, 500));
}

/// Tests that shrinking the container clamps the divider and resizes
#[tokio::test]
async fn shrinking_container_clamps_divider() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");
    host.drag_divider(300);
    assert_eq!(host.divider_offset(), 520);

    host.layout(Dimension::new(600, 400));

    assert_eq!(host.divider_offset(), 380);
    let regions = host.regions().expect("regions");
    assert_eq!(regions.detail.width + regions.master.width, 600);
    assert_eq!(regions.master.height, 400);
}

/// Tests that the configured initial offset is used on create
#[tokio::test]
async fn configured_initial_offset_is_applied() {
    let harness = Harness::new();
    let settings = SplitSettings::with_min_offset(100).initial_offset(300);
    let host = SplitPaneHost::with_registry(harness.registry(), &settings);
    host.create(Region::new(0, 0, 800, 600)).expect("create");
    assert_eq!(host.divider_offset(), 300);

    assert_eq!(host.drag_divider(-1000), 100);
    assert_eq!(host.drag_divider(10_000), 700);
}

// ========== Reuse ==========

/// Tests that a matching input is delivered to the existing children
#[tokio::test]
async fn matching_input_reuses_children() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");
    let control = host.active_component();

    let outcome = host
        .set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("second");

    assert_eq!(outcome, InputOutcome::Reused);
    assert_eq!(harness.journal.created(), 2);
    assert_eq!(harness.journal.disposed(), 0);
    assert_eq!(harness.journal.components_for("a.txt").len(), 1);
    assert_eq!(
        harness
            .journal
            .count(|e| matches!(e, Event::SetInput(_, r) if r == "a.txt")),
        2
    );
    assert_eq!(host.active_component(), control);
}

/// Tests that descriptors are compared by value, ignoring labels
#[tokio::test]
async fn relabelled_input_still_matches() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");

    let relabelled = DescriptorPair::new(
        text("a.txt").with_label("A"),
        text("b.txt").with_label("B"),
    );
    let outcome = host
        .set_input(relabelled.clone(), InputOptions::default())
        .await
        .expect("second");

    assert!(outcome.is_reused());
    assert_eq!(host.input(), Some(relabelled));
}

/// Tests that a slow reuse keeps the existing pair in place
#[tokio::test]
async fn slow_reuse_keeps_children() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");

    let detail = harness.journal.components_for("b.txt")[0];
    harness.gates.hold("b.txt");
    let pending = {
        let host = host.clone();
        tokio::spawn(async move {
            host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
                .await
        })
    };
    wait_until(|| host.generation() == 2).await;
    harness.gates.release("b.txt");

    let outcome = pending.await.expect("task").expect("reuse");
    assert!(outcome.is_reused());
    assert!(!harness.journal.was_disposed(detail));
    assert_eq!(host.phase(), HostPhase::Ready);
}

/// Tests that a child rejecting a reused input keeps the pair in place
#[tokio::test]
async fn failed_reuse_keeps_children() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");
    let regions = host.regions();
    let active = host.active_component();
    assert!(active.is_some());

    harness.gates.fail_next("b.txt");
    let err = host
        .set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect_err("rejected reuse");

    assert!(matches!(
        err,
        SplitError::ChildSetInput {
            side: PaneSide::Detail,
            ..
        }
    ));
    assert_eq!(harness.journal.created(), 2);
    assert_eq!(harness.journal.disposed(), 0);
    assert_eq!(host.regions(), regions);
    assert_eq!(host.active_component(), active);
    assert_eq!(host.phase(), HostPhase::Ready);
}

// ========== Recreation ==========

/// Tests that a non-matching input disposes the old pair before creating the new one
#[tokio::test]
async fn non_matching_input_recreates_children() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");
    let old_master = harness.journal.components_for("a.txt")[0];
    let old_detail = harness.journal.components_for("b.txt")[0];
    let old_containers = host.container_ids().expect("containers");

    let outcome = host
        .set_input(pair("c.txt", "d.txt"), InputOptions::default())
        .await
        .expect("second");

    assert_eq!(outcome, InputOutcome::Committed);
    assert_eq!(harness.journal.disposed(), 2);
    assert!(harness.journal.was_disposed(old_master));
    assert!(harness.journal.was_disposed(old_detail));

    let last_dispose = harness
        .journal
        .events()
        .iter()
        .rposition(|e| matches!(e, Event::Disposed(_)))
        .expect("dispose recorded");
    let first_new = harness
        .journal
        .position(|e| matches!(e, Event::Created(id) if *id > old_master.max(old_detail)))
        .expect("new component created");
    assert!(last_dispose < first_new);

    let new_containers = host.container_ids().expect("containers");
    assert_ne!(old_containers.0, new_containers.0);
    assert_ne!(old_containers.1, new_containers.1);
}

/// Tests that the divider offset survives recreation
#[tokio::test]
async fn divider_offset_survives_recreation() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");
    host.drag_divider(50);

    host.set_input(pair("c.txt", "d.txt"), InputOptions::default())
        .await
        .expect("second");

    assert_eq!(host.divider_offset(), 270);
    let regions = host.regions().expect("regions");
    assert_eq!(regions.detail.width, 270);
    assert_eq!(regions.master.width, 530);
}

/// Tests that new children are attached to the freshly opened containers
#[tokio::test]
async fn children_attach_to_current_containers() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    let (detail_container, master_container) = host.container_ids().expect("containers");
    let master = harness.journal.components_for("a.txt")[0];
    let detail = harness.journal.components_for("b.txt")[0];
    assert!(
        harness
            .journal
            .events_for(master)
            .contains(&Event::Attached(master, master_container))
    );
    assert!(
        harness
            .journal
            .events_for(detail)
            .contains(&Event::Attached(detail, detail_container))
    );
}

// ========== Failures ==========

/// Tests that an unregistered kind fails and leaves nothing behind
#[tokio::test]
async fn missing_handler_fails_and_disposes_sibling() {
    let harness = Harness::new();
    let host = harness.host();
    let input = DescriptorPair::new(ContentDescriptor::new("hex", "blob.bin"), text("b.txt"));

    let err = host
        .set_input(input, InputOptions::default())
        .await
        .expect_err("no handler");

    assert!(matches!(err, SplitError::NoHandler { ref kind } if kind.as_str() == "hex"));
    assert_eq!(host.phase(), HostPhase::Empty);
    assert!(host.input().is_none());
    assert!(host.container_ids().is_none());

    let detail = harness.journal.components_for("b.txt")[0];
    assert!(harness.journal.was_disposed(detail));
    assert!(!harness.journal.was_shown(detail));
}

/// Tests that a child rejecting its input fails the whole call
#[tokio::test]
async fn child_set_input_failure_is_surfaced() {
    let harness = Harness::new();
    let host = harness.host();

    let err = host
        .set_input(pair("a.txt", BROKEN), InputOptions::default())
        .await
        .expect_err("broken detail");

    assert!(matches!(
        err,
        SplitError::ChildSetInput {
            side: PaneSide::Detail,
            ..
        }
    ));
    assert_eq!(harness.journal.created(), 2);
    assert_eq!(harness.journal.disposed(), 2);
    assert!(host.active_component().is_none());
}

/// Tests that a failing constructor reports an instantiate error
#[tokio::test]
async fn constructor_failure_is_surfaced() {
    let harness = Harness::new();
    let host = harness.host();
    let input = DescriptorPair::new(ContentDescriptor::new("crash", "x"), text("b.txt"));

    let err = host
        .set_input(input, InputOptions::default())
        .await
        .expect_err("crash");

    assert_eq!(err.side(), Some(PaneSide::Master));
    assert_eq!(harness.journal.created(), harness.journal.disposed());
}

/// Tests that a failed recreation leaves the host empty and usable
#[tokio::test]
async fn host_recovers_after_failure() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("first");
    host.set_input(pair(BROKEN, "b.txt"), InputOptions::default())
        .await
        .expect_err("broken master");
    assert_eq!(host.phase(), HostPhase::Empty);

    let outcome = host
        .set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("third");

    assert!(outcome.is_committed());
    assert_eq!(host.phase(), HostPhase::Ready);
}

/// Tests that set_input requires create
#[tokio::test]
async fn set_input_before_create_fails() {
    let harness = Harness::new();
    let host = SplitPaneHost::with_registry(harness.registry(), &SplitSettings::default());

    let err = host
        .set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect_err("not created");

    assert_eq!(err, SplitError::NotCreated);
    assert_eq!(host.generation(), 0);
    assert_eq!(harness.journal.created(), 0);
}

// ========== Visibility, Focus, Clear, Dispose ==========

/// Tests that focus and the active component target the master child
#[tokio::test]
async fn focus_targets_master() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::preserving_focus())
        .await
        .expect("set_input");
    let master = harness.journal.components_for("a.txt")[0];
    let detail = harness.journal.components_for("b.txt")[0];
    assert_eq!(harness.journal.count(|e| matches!(e, Event::Focused(_))), 0);

    host.focus();

    assert!(harness.journal.events_for(master).contains(&Event::Focused(master)));
    assert!(!harness.journal.events_for(detail).contains(&Event::Focused(detail)));
    let component = host.master_component().expect("master");
    assert_eq!(host.active_component(), Some(component.control()));
}

/// Tests that committing without preserve_focus focuses the master
#[tokio::test]
async fn commit_focuses_master_by_default() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    let master = harness.journal.components_for("a.txt")[0];
    assert!(harness.journal.events_for(master).contains(&Event::Focused(master)));
}

/// Tests that visibility is remembered and forwarded
#[tokio::test]
async fn visibility_is_forwarded_to_both_children() {
    let harness = Harness::new();
    let host = SplitPaneHost::with_registry(harness.registry(), &SplitSettings::default());
    host.create(Region::new(0, 0, 800, 600)).expect("create");
    host.layout(Dimension::new(800, 600));
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");
    assert_eq!(harness.journal.count(|e| matches!(e, Event::Visible(_, true))), 0);
    assert_eq!(harness.journal.count(|e| matches!(e, Event::Focused(_))), 0);

    host.set_visible(true, Some(GroupPosition::new(1)));
    assert_eq!(harness.journal.count(|e| matches!(e, Event::Visible(_, true))), 2);

    host.set_visible(false, None);
    assert_eq!(harness.journal.count(|e| matches!(e, Event::Visible(_, false))), 4);
}

/// Tests that clear_input disposes both children
#[tokio::test]
async fn clear_input_empties_host() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    host.clear_input();

    assert_eq!(host.phase(), HostPhase::Empty);
    assert!(host.input().is_none());
    assert!(host.regions().is_none());
    assert!(host.master_component().is_none());
    assert_eq!(harness.journal.disposed(), 2);
}

/// Tests that dispose is idempotent and blocks further input
#[tokio::test]
async fn dispose_is_idempotent() {
    let harness = Harness::new();
    let host = harness.host();
    host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
        .await
        .expect("set_input");

    host.dispose();
    host.dispose();

    assert!(host.is_disposed());
    assert_eq!(harness.journal.disposed(), 2);
    assert!(host.container_ids().is_none());
    assert_eq!(
        host.set_input(pair("a.txt", "b.txt"), InputOptions::default())
            .await,
        Err(SplitError::HostDisposed)
    );
    assert_eq!(
        host.create(Region::new(0, 0, 800, 600)),
        Err(SplitError::HostDisposed)
    );
}

/// Tests that divider subscribers see drags and resets
#[tokio::test]
async fn divider_subscribers_follow_changes() {
    let harness = Harness::new();
    let host = harness.host();
    let mut rx = host.subscribe_divider();

    host.drag_divider(80);
    rx.changed().await.expect("sender alive");
    assert_eq!(*rx.borrow_and_update(), 300);

    assert_eq!(host.reset_divider(), 400);
    rx.changed().await.expect("sender alive");
    assert_eq!(*rx.borrow_and_update(), 400);
}
