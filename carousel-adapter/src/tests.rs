use crate::*;

use carousel::{CarouselOptions, Easing};

fn options(visible: usize, speed_ms: u64) -> CarouselOptions {
    CarouselOptions::new(visible)
        .with_slide_size(100, 50)
        .with_slide_spacing(10)
        .with_transition(speed_ms, Easing::EaseOutExpo)
}

#[test]
fn tween_lands_on_target_and_clamps_duration() {
    let t = Tween::new(0, -300, 10, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(10), 0);
    assert_eq!(t.sample(11), -300);

    let t = Tween::new(-5, -115, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), -60);
    assert!(!t.is_done(99));
    assert!(t.is_done(100));
    assert_eq!(t.sample(1_000), -115);
}

#[test]
fn driver_tween_moves_strip_and_settles() {
    let mut d = Driver::new(options(1, 100), 6).unwrap();
    let start = d.left();
    assert_eq!(start, -5);

    assert!(d.click_next(0));
    assert!(d.carousel().is_animating());
    assert!(d.view().is_animating());

    let mut last = start;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = d.tick(now_ms) {
            assert!(off <= last);
            last = off;
        }
    }
    assert!(!d.carousel().is_animating());
    assert_eq!(d.carousel().current_slide(), 1);
    assert_eq!(d.left(), d.carousel().layout().left_for(1));
    assert_eq!(last, d.left());
}

#[test]
fn clicks_during_a_tween_are_dropped() {
    let mut d = Driver::new(options(1, 100), 6).unwrap();
    assert!(d.click_next(0));
    d.tick(50);
    assert!(!d.click_next(50));
    d.tick(100);
    assert_eq!(d.carousel().current_slide(), 1);
    assert!(d.click_next(100));
}

#[test]
fn loop_wrap_re_anchors_after_the_tween() {
    let mut d = Driver::new(options(1, 100).with_infinite(true), 3).unwrap();
    assert_eq!(d.carousel().current_slide(), 1);

    assert!(d.click_prev(0));
    d.tick(60);
    assert!(d.carousel().is_animating());
    assert_eq!(d.tick(100), Some(d.carousel().layout().left_for(3)));
    assert_eq!(d.carousel().current_slide(), 3);
    assert_eq!(d.carousel().virtual_slide(), 2);
}

#[test]
fn auto_rotation_runs_from_ticks() {
    let mut d = Driver::new(options(1, 100).with_infinite(true).with_auto(true, 500), 3).unwrap();
    assert_eq!(d.tick(0), None);
    assert_eq!(d.tick(499), None);
    d.tick(500);
    assert!(d.carousel().is_animating());
    assert_eq!(d.view().tween().map(|t| t.start_ms), Some(500));

    d.tick(600);
    assert!(!d.carousel().is_animating());
    assert_eq!(d.carousel().current_slide(), 2);

    d.on_focus_lost();
    d.tick(1_100);
    assert!(!d.carousel().is_animating());
    d.on_focus_gained();
    d.tick(1_200);
    d.tick(1_700);
    assert!(d.carousel().is_animating());
}

#[test]
fn zero_duration_settles_immediately() {
    let mut d = Driver::new(options(2, 0), 6).unwrap();
    assert!(d.click_next(0));
    assert!(!d.carousel().is_animating());
    assert_eq!(d.left(), d.carousel().layout().left_for(2));
    assert_eq!(d.tick(10), None);
}

#[test]
fn scene_reflects_controls() {
    let mut d = Driver::new(options(2, 0), 6).unwrap();
    let scene = d.view().scene();
    assert_eq!(scene.pages, 3);
    assert_eq!(scene.active, [0]);
    assert_eq!(scene.slots.len(), 6);
    assert_eq!(scene.classes.wrapper, "carouselWrapper");
    let prev = scene.prev.clone().unwrap();
    assert_eq!(prev.class, "carouselBtnPrev");
    assert!(prev.disabled);
    assert_eq!(scene.next.as_ref().map(|b| b.disabled), Some(false));

    d.click_page(2, 0);
    let scene = d.view().scene();
    assert_eq!(scene.active, [2]);
    assert_eq!(scene.prev.as_ref().map(|b| b.disabled), Some(false));
    assert_eq!(scene.next.as_ref().map(|b| b.disabled), Some(true));
}

#[test]
fn held_transition_starts_tween_when_resumed() {
    use alloc::sync::Arc;
    use carousel::Proceed;
    use std::sync::Mutex;

    let held: Arc<Mutex<Option<Proceed>>> = Arc::default();
    let stash = Arc::clone(&held);
    let mut d = Driver::new(
        options(1, 100).with_before_slide_change(Some(move |_t, _c, p| {
            *stash.lock().unwrap() = Some(p);
            None
        })),
        4,
    )
    .unwrap();

    assert!(d.click_next(0));
    assert!(!d.view().is_animating());
    let ticket = held.lock().unwrap().take().unwrap();
    assert!(d.proceed(ticket, 250));
    assert_eq!(d.view().tween().map(|t| t.start_ms), Some(250));
    d.tick(350);
    assert_eq!(d.carousel().current_slide(), 1);
}
