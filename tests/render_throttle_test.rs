use tui_snake::term::{frame_fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_live_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
}

#[test]
fn render_throttle_reset_forces_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    t.reset();
    assert!(t.should_render(1, 1, true));
}

#[test]
fn fingerprint_tracks_revision_and_viewport() {
    let base = frame_fingerprint(3, 80, 24);
    assert_eq!(base, frame_fingerprint(3, 80, 24));
    assert_ne!(base, frame_fingerprint(4, 80, 24));
    assert_ne!(base, frame_fingerprint(3, 81, 24));
    assert_ne!(base, frame_fingerprint(3, 80, 25));
}

#[test]
fn render_throttle_live_frame_records_new_fingerprint() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    // Live frame with a new fingerprint is drawn and becomes the reference.
    assert!(t.should_render(100, 2, false));
    // Same fingerprint once static again: throttled relative to that frame.
    assert!(!t.should_render(200, 2, true));
    assert!(!t.should_render(349, 2, true));
    assert!(t.should_render(350, 2, true));
}

#[test]
fn render_throttle_skipped_frames_do_not_move_the_window() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 7, true));
    for now in [50, 100, 150, 200] {
        assert!(!t.should_render(now, 7, true));
    }
    // Window still counts from the last drawn frame at 0.
    assert!(t.should_render(250, 7, true));
    assert!(!t.should_render(260, 7, true));
}

#[test]
fn render_throttle_change_back_to_old_fingerprint_draws() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(10, 2, true));
    assert!(t.should_render(20, 1, true));
    assert!(!t.should_render(30, 1, true));
}

#[test]
fn render_throttle_clock_going_backwards_throttles() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(1_000, 1, true));
    assert!(!t.should_render(500, 1, true));
}
