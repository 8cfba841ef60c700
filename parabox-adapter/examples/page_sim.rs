// Example: a simulated page scrolled at 60fps with animations advanced every frame.
use parabox::{Easing, ItemOptions, SectionOptions, StyleMap};
use parabox_adapter::{Controller, Page};

fn main() {
    let mut page = Page::new(3000.0);
    let card = page.add_element(900, 200);
    let nav = page.add_element(0, 48);

    let mut c = Controller::new(page);
    c.register(
        &[card],
        ItemOptions::new()
            .with_range(Some(400.0), Some(1400.0))
            .with_easing(Easing::EaseInOutCubic)
            .with_duration_ms(240)
            .with_from(StyleMap::new().with("opacity", 0.0).with("left", "-40px"))
            .with_to(StyleMap::new().with("opacity", 1.0).with("left", "0px")),
    )
    .unwrap();
    c.register(
        &[nav],
        SectionOptions::new()
            .with_section("intro", 0.0)
            .with_section("cards", 800.0)
            .with_section("footer", 1600.0),
    )
    .unwrap();

    let mut now_ms = 0u64;
    let mut scroll = 0u64;
    while scroll < 2000 {
        now_ms += 16;
        scroll += 40;
        c.on_scroll(scroll, now_ms);

        for (_, change) in c.take_events() {
            println!("t={now_ms}ms scroll={scroll} section={:?}", change.name);
        }
        if now_ms % 160 == 0 {
            println!(
                "t={now_ms}ms scroll={scroll} card={:?}",
                c.page().styles(card)
            );
        }
    }

    while c.tick(now_ms) {
        now_ms += 16;
    }
    println!("done: card={:?}", c.page().styles(card));
}
