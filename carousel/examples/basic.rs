// Example: a paged carousel driven by a headless view.
use carousel::{Carousel, CarouselOptions, HeadlessView};

fn main() {
    let options = CarouselOptions::new(2)
        .with_slide_size(320, 180)
        .with_slide_spacing(12)
        .with_after_slide_change(Some(|now: usize, prev: usize| {
            println!("settled on slide {now} (was {prev})");
        }));

    let mut c = Carousel::new(options, 7, HeadlessView::new()).expect("valid options");
    println!("layout={:?}", c.layout());
    println!("pages={:?}", c.pagination().map(|p| p.controls()));

    c.click_next();
    c.click_next();
    c.click_next();
    println!(
        "state={:?} active={:?} prev_disabled={} next_disabled={}",
        c.state(),
        c.view().active,
        c.view().prev_disabled,
        c.view().next_disabled
    );

    c.click_page(0);
    println!("back to start: state={:?}", c.state());
}
