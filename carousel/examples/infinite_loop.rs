// Example: infinite looping with auto-rotation and a hook that holds transitions.
use std::sync::{Arc, Mutex};

use carousel::{Carousel, CarouselOptions, HeadlessView, Proceed};

fn main() {
    let held: Arc<Mutex<Option<Proceed>>> = Arc::default();
    let stash = Arc::clone(&held);

    let options = CarouselOptions::new(1)
        .with_infinite(true)
        .with_auto(true, 1_000)
        .with_before_slide_change(Some(move |target: isize, current: usize, p: Proceed| {
            println!("about to move {current} -> {target}; waiting for content");
            *stash.lock().expect("poisoned") = Some(p);
            None
        }));

    let mut c = Carousel::new(options, 4, HeadlessView::new()).expect("valid options");
    println!("slots={:?}", c.view().slots);

    let mut now_ms = 0u64;
    for _ in 0..6 {
        c.tick(now_ms);
        if let Some(p) = held.lock().expect("poisoned").take() {
            c.proceed(p);
        }
        println!(
            "t={now_ms} internal={} virtual={} shifts={:?}",
            c.current_slide(),
            c.virtual_slide(),
            c.view().shifts
        );
        now_ms += 1_000;
    }

    // A user click ends auto-rotation for good.
    c.click_prev();
    println!("after click: auto={} state={:?}", c.is_auto_rotating(), c.state());
}
