// Example: minimal host that prints every effect the engine applies.
use parabox::{
    Animation, BackgroundOptions, Host, ItemOptions, ParaBox, SectionChange, SectionOptions,
    StyleMap, StyleValue,
};

struct PrintHost {
    scroll: u64,
}

impl Host<&'static str> for PrintHost {
    fn scroll_top(&self) -> u64 {
        self.scroll
    }

    fn document_height(&self) -> f64 {
        4000.0
    }

    fn client_height(&self, _element: &&'static str) -> u32 {
        320
    }

    fn offset_top(&self, element: &&'static str) -> u64 {
        match *element {
            "#hero" => 0,
            _ => 1200,
        }
    }

    fn css(&self, _element: &&'static str, _property: &str) -> Option<String> {
        Some("center top".to_string())
    }

    fn set_css(&mut self, element: &&'static str, property: &str, value: StyleValue) {
        println!("  {element} {{ {property}: {value} }}");
    }

    fn stop(&mut self, _element: &&'static str) {}

    fn animate(&mut self, element: &&'static str, styles: &StyleMap, animation: Animation) {
        println!("  {element} animate {styles:?} over {}ms", animation.duration_ms);
    }

    fn trigger(&mut self, element: &&'static str, event: &SectionChange) {
        println!("  {element} sectionChange {:?} ({:?})", event.name, event.index);
    }
}

fn main() {
    let mut host = PrintHost { scroll: 0 };
    let mut engine = ParaBox::new();

    engine
        .register(&mut host, &["#hero", "#story"], BackgroundOptions::new())
        .unwrap();
    engine
        .register(
            &mut host,
            &["#badge"],
            ItemOptions::new()
                .with_range(Some(600.0), Some(1800.0))
                .with_from(StyleMap::new().with("opacity", 0.0))
                .with_to(StyleMap::new().with("opacity", 1.0)),
        )
        .unwrap();
    engine
        .register_named(
            &mut host,
            &["#nav"],
            "section",
            SectionOptions::new()
                .with_section("top", 0.0)
                .with_section("story", 1100.0),
        )
        .unwrap();

    for scroll in [0, 120, 700, 1200, 1500, 2400] {
        println!("scroll={scroll}");
        host.scroll = scroll;
        engine.on_scroll(&mut host);
    }
}
