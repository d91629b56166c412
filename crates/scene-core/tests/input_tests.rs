// Event-fed input state, including the post-teardown guarantees.

use scene_core::{InputState, Scheduler, SceneState, ScrollMetrics, Stage, Viewport};

fn scrolled_to(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top,
        scroll_height: 5000.0,
        client_height: 1000.0,
    }
}

#[test]
fn scroll_events_drive_the_scheduler() {
    let mut input = InputState::new(Viewport {
        width: 800,
        height: 600,
    });
    let scheduler = Scheduler::default();
    let mut scene = SceneState::default();

    assert!(input.on_scroll(scrolled_to(2000.0)));
    assert_eq!(input.progress(), 50.0);
    let tick = scheduler.tick(&mut scene, input.progress());
    assert_eq!(tick.stage, Some(Stage::Rotation));
}

#[test]
fn events_after_detach_are_ignored() {
    let mut input = InputState::new(Viewport {
        width: 800,
        height: 600,
    });
    input.on_scroll(scrolled_to(1000.0));
    input.detach();
    let snapshot = input.clone();

    // Synthetic events dispatched after teardown
    assert!(!input.on_scroll(scrolled_to(4000.0)));
    assert!(!input.on_resize(1920, 1080));

    assert_eq!(input, snapshot);
    assert_eq!(input.progress(), 25.0);
    assert_eq!(
        input.viewport(),
        Viewport {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn detach_is_idempotent() {
    let mut input = InputState::default();
    input.detach();
    input.detach();
    assert!(input.is_detached());
    assert!(!input.on_scroll(scrolled_to(10.0)));
}

#[test]
fn unscrollable_page_maps_to_intro_start() {
    let mut input = InputState::default();
    input.on_scroll(ScrollMetrics {
        scroll_top: 0.0,
        scroll_height: 900.0,
        client_height: 900.0,
    });
    assert_eq!(input.progress(), 0.0);

    let mut scene = SceneState::default();
    let tick = Scheduler::default().tick(&mut scene, input.progress());
    assert_eq!(tick.stage, Some(Stage::Intro));
    assert!(scene.cube.position.is_finite());
}

#[test]
fn camera_aspect_follows_viewport() {
    let mut input = InputState::default();
    input.on_resize(1200, 600);
    let mut scene = SceneState::default();
    let vp = input.viewport();
    scene.camera.set_viewport(vp.width, vp.height);
    assert_eq!(scene.camera.aspect, 2.0);
}
