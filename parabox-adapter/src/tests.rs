use crate::*;

use parabox::{
    BACKGROUND_POSITION, BackgroundOptions, Easing, Host, ItemOptions, SectionOptions, StyleMap,
    StyleValue,
};

fn fade_options(duration_ms: u64) -> ItemOptions {
    ItemOptions::new()
        .with_range(Some(100.0), Some(200.0))
        .with_easing(Easing::Linear)
        .with_duration_ms(duration_ms)
        .with_from(StyleMap::new().with("opacity", 0.0))
        .with_to(StyleMap::new().with("opacity", 1.0))
}

#[test]
fn tween_reaches_target_exactly() {
    let tw = Tween::new(10.0, 20.0, 100, 50, Easing::Swing);
    assert_eq!(tw.sample(0), 10.0);
    assert_eq!(tw.sample(100), 10.0);
    assert!(tw.sample(125) > 10.0 && tw.sample(125) < 20.0);
    assert!(tw.is_done(150));
    assert_eq!(tw.sample(150), 20.0);
    assert_eq!(tw.sample(1_000), 20.0);

    // Zero durations are clamped so sampling never divides by zero.
    let tw = Tween::new(0.0, 1.0, 0, 0, Easing::Linear);
    assert_eq!(tw.duration_ms, 1);
    assert_eq!(tw.sample(1), 1.0);
}

#[test]
fn page_animates_numeric_styles_and_snaps_keywords() {
    let mut page = Page::new(1000.0);
    let el = page.add_element(0, 10);
    page.set_style(el, "left", "0px");

    let to = StyleMap::new()
        .with("left", "100px")
        .with("visibility", "visible");
    let animation = parabox::Animation {
        easing: Easing::Linear,
        duration_ms: 100,
    };
    page.animate(&el, &to, animation);

    assert_eq!(
        page.style(el, "visibility"),
        Some(&StyleValue::Keyword("visible".into()))
    );
    assert!(page.is_animating(el));

    assert!(page.tick(25));
    assert_eq!(page.style(el, "left"), Some(&StyleValue::Px(25.0)));
    assert_eq!(page.css(&el, "left").as_deref(), Some("25px"));

    assert!(!page.tick(100));
    assert_eq!(page.style(el, "left"), Some(&StyleValue::Px(100.0)));
    assert!(!page.is_animating(el));
}

#[test]
fn page_stop_keeps_reached_values() {
    let mut page = Page::new(1000.0);
    let el = page.add_element(0, 10);
    page.set_style(el, "opacity", 0.0);
    let animation = parabox::Animation {
        easing: Easing::Linear,
        duration_ms: 100,
    };
    page.animate(&el, &StyleMap::new().with("opacity", 1.0), animation);

    page.tick(25);
    page.stop(&el);
    page.tick(100);
    assert_eq!(page.style(el, "opacity"), Some(&StyleValue::Number(0.25)));
    assert!(!page.has_running_animations());
}

#[test]
fn controller_restarts_item_animation_from_reached_value() {
    let mut page = Page::new(1000.0);
    let el = page.add_element(0, 10);
    let mut c = Controller::new(page);
    c.register(&[el], fade_options(100)).unwrap();
    assert_eq!(c.page().css(&el, "opacity").as_deref(), Some("0"));

    c.on_scroll(150, 0);
    assert!(c.is_animating());
    c.tick(50);
    assert_eq!(c.page().style(el, "opacity"), Some(&StyleValue::Number(0.5)));

    // Leaving the range mid-animation stops and heads back from 0.5.
    c.on_scroll(250, 50);
    c.tick(100);
    assert_eq!(c.page().style(el, "opacity"), Some(&StyleValue::Number(0.25)));

    assert!(!c.tick(150));
    assert_eq!(c.page().style(el, "opacity"), Some(&StyleValue::Number(0.0)));
    assert!(!c.engine().item().is_shown(&el));
}

#[test]
fn controller_rapid_toggles_never_queue_animations() {
    let mut page = Page::new(1000.0);
    let el = page.add_element(0, 10);
    let mut c = Controller::new(page);
    c.register(&[el], fade_options(1_000)).unwrap();

    let mut now_ms = 0;
    for scroll in [150, 50, 150, 50, 150] {
        now_ms += 10;
        c.on_scroll(scroll, now_ms);
    }
    assert!(c.engine().item().is_shown(&el));

    assert!(!c.tick(now_ms + 1_000));
    assert_eq!(c.page().style(el, "opacity"), Some(&StyleValue::Number(1.0)));
}

#[test]
fn controller_moves_backgrounds() {
    let mut page = Page::new(3000.0);
    let el = page.add_element(1000, 300);
    page.set_style(el, BACKGROUND_POSITION, "center top");
    let mut c = Controller::new(page);
    c.register(&[el], BackgroundOptions::new().with_area(100))
        .unwrap();

    c.on_scroll(950, 0);
    assert_eq!(
        c.page().css(&el, BACKGROUND_POSITION).as_deref(),
        Some("center -45px")
    );
    c.on_scroll(0, 16);
    assert_eq!(
        c.page().css(&el, BACKGROUND_POSITION).as_deref(),
        Some("center top")
    );
}

#[test]
fn controller_collects_section_events() {
    let mut page = Page::new(3000.0);
    let nav = page.add_element(0, 40);
    let mut c = Controller::new(page);
    let sub = c
        .register_named(
            &[nav],
            "section",
            SectionOptions::new()
                .with_section("intro", 0.0)
                .with_section("gallery", 800.0),
        )
        .unwrap();

    for (i, scroll) in [10, 20, 900, 900, 300].into_iter().enumerate() {
        c.on_scroll(scroll, i as u64 * 16);
    }

    let events = c.take_events();
    let names: Vec<_> = events
        .iter()
        .map(|(el, change)| {
            assert_eq!(*el, nav);
            assert_eq!(change.tracker, sub);
            change.name.clone().unwrap()
        })
        .collect();
    assert_eq!(names, ["intro", "gallery", "intro"]);
    assert!(c.take_events().is_empty());

    assert!(c.unsubscribe(sub));
    c.on_scroll(900, 200);
    assert!(c.page().events().is_empty());
}
