use carousel::{CarouselOptions, Easing};
use carousel_adapter::Driver;

fn main() {
    // Example: a frame loop driving an infinite, auto-rotating carousel.
    //
    // An adapter would:
    // - forward clicks and focus changes to the driver
    // - call tick(now_ms) every frame
    // - write the returned offset to the strip's `left` and redraw the scene
    let options = CarouselOptions::new(1)
        .with_slide_size(640, 360)
        .with_transition(400, Easing::EaseOutExpo)
        .with_infinite(true)
        .with_auto(true, 2_000);
    let mut d = Driver::new(options, 4).expect("valid options");
    println!("scene={:?}", d.view().scene());

    let mut now_ms = 0u64;
    while now_ms <= 9_000 {
        if let Some(left) = d.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!(
                    "t={now_ms} left={left} slide={}",
                    d.carousel().virtual_slide()
                );
            }
        }
        now_ms += 16;
    }

    println!("done: state={:?}", d.carousel().state());
}
