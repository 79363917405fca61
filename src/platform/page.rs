//! Landing page DOM wiring (WASM only)
//!
//! Binds the `ui` state machines to the document. These listeners live as
//! long as the page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::error::FieldError;
use crate::settings::FieldSettings;
use crate::ui::{NavBar, StarRating, StepHighlighter, smooth_scroll_target};

/// All elements matching `selector` under `root`
fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Bad selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add a page-lifetime listener
fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::trace!("Failed to toggle {class}: {e:?}");
    }
}

/// Observe `targets`, calling `handler` with each entry that intersects
fn observe_intersections(
    targets: &[Element],
    threshold: f64,
    root_margin: &str,
    mut handler: impl FnMut(&Element) + 'static,
) -> Result<(), FieldError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    handler(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

/// Mobile menu toggle and the navbar scroll class
fn setup_navigation(window: &Window, document: &Document, settings: &FieldSettings) {
    let nav = Rc::new(RefCell::new(NavBar::new(settings.scroll_threshold)));

    let toggle = document.query_selector(".mobile-menu-toggle").ok().flatten();
    let links = document.query_selector(".nav-links").ok().flatten();
    if let (Some(toggle), Some(links)) = (toggle, links) {
        {
            let nav = nav.clone();
            let links = links.clone();
            on(&toggle, "click", move |_| {
                let open = nav.borrow_mut().toggle_menu();
                set_class(&links, "active", open);
            });
        }

        if let Ok(anchors) = links.query_selector_all("a") {
            for anchor in (0..anchors.length()).filter_map(|i| anchors.item(i)) {
                let nav = nav.clone();
                let links = links.clone();
                on(&anchor, "click", move |_| {
                    nav.borrow_mut().close_menu();
                    set_class(&links, "active", false);
                });
            }
        }
    }

    if let Some(navbar) = document.get_element_by_id("navbar") {
        let win = window.clone();
        on(window, "scroll", move |_| {
            let offset = win.scroll_y().unwrap_or(0.0);
            let mut nav = nav.borrow_mut();
            if nav.on_scroll(offset) {
                set_class(&navbar, "scrolled", nav.scrolled);
            }
        });
    }
}

/// `.fade-on-scroll` elements get `visible` once seen; it is never removed
fn setup_reveal(document: &Document) -> Result<(), FieldError> {
    let targets = query_all(document, ".fade-on-scroll");
    if targets.is_empty() {
        return Ok(());
    }
    observe_intersections(&targets, 0.1, "0px 0px -100px 0px", |element| {
        set_class(element, "visible", true);
    })
}

fn rating_of(star: &Element) -> Option<u8> {
    star.get_attribute("data-rating")?.parse().ok()
}

fn paint_stars(stars: &[Element], rating: &StarRating) {
    for star in stars {
        let Some(n) = rating_of(star) else { continue };
        set_class(star, "active", rating.lit(n));
        star.set_text_content(Some(&rating.glyph(n).to_string()));
    }
}

fn setup_star_rating(document: &Document) {
    let Some(widget) = document.get_element_by_id("starRating") else {
        return;
    };
    let stars = Rc::new(query_all(document, "#starRating .star"));
    let max = stars.iter().filter_map(rating_of).max().unwrap_or(5);
    let rating = Rc::new(RefCell::new(StarRating::new(max)));
    let value = document
        .get_element_by_id("ratingValue")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    for star in stars.iter() {
        let Some(n) = rating_of(star) else { continue };

        {
            let (rating, stars, value) = (rating.clone(), stars.clone(), value.clone());
            on(star, "click", move |_| {
                let mut rating = rating.borrow_mut();
                rating.click(n);
                if let (Some(input), Some(selected)) = (&value, rating.selected()) {
                    input.set_value(&selected.to_string());
                }
                paint_stars(&stars, &rating);
            });
        }

        let (rating, stars) = (rating.clone(), stars.clone());
        on(star, "mouseenter", move |_| {
            let mut rating = rating.borrow_mut();
            rating.hover(n);
            paint_stars(&stars, &rating);
        });
    }

    on(&widget, "mouseleave", move |_| {
        let mut rating = rating.borrow_mut();
        rating.leave();
        paint_stars(&stars, &rating);
    });
}

fn setup_smooth_scroll(document: &Document, settings: &FieldSettings) {
    let excluded = Rc::new(settings.excluded_anchors.clone());
    for anchor in query_all(document, "a[href^=\"#\"]") {
        let excluded = excluded.clone();
        let doc = document.clone();
        let link = anchor.clone();
        on(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = smooth_scroll_target(&href, excluded.as_slice()) else {
                return;
            };
            event.prevent_default();
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Highlight the step in view and the image sharing its `data-step`
fn setup_process_steps(document: &Document) -> Result<(), FieldError> {
    let steps = query_all(document, ".step-item");
    let images = query_all(document, ".process-img");
    if steps.is_empty() || images.is_empty() {
        return Ok(());
    }

    let mut highlighter = StepHighlighter::new();
    let all_steps = steps.clone();
    observe_intersections(&steps, 0.5, "0px", move |entry| {
        let Some(step) = entry.get_attribute("data-step") else {
            return;
        };
        if !highlighter.activate(&step) {
            return;
        }
        for element in all_steps.iter().chain(&images) {
            let active = element
                .get_attribute("data-step")
                .is_some_and(|s| highlighter.is_active(&s));
            set_class(element, "active", active);
        }
    })
}

/// Wire every landing page behaviour present on the page
pub fn setup(settings: &FieldSettings) -> Result<(), FieldError> {
    let window = web_sys::window().ok_or(FieldError::NoWindow)?;
    let document = window.document().ok_or(FieldError::NoDocument)?;

    setup_navigation(&window, &document, settings);
    setup_reveal(&document)?;
    setup_star_rating(&document);
    setup_smooth_scroll(&document, settings);
    setup_process_steps(&document)?;

    log::info!("Page behaviours attached");
    Ok(())
}
