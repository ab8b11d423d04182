//! DOM-binding carousel controller.
//!
//! Binds to pre-rendered markup (a `#carousel` container holding slide,
//! control and dot children) and reflects a single slide cursor into it:
//! exactly one slide is displayed and at most one dot carries the `active`
//! class. Pages without the container get a silent no-op.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, MouseEvent, TouchEvent};

use crate::model::SlideCursor;
use crate::state::{MoveVerdict, SwipeDir, SwipeTracker};

/// Page-unique id of the carousel container.
pub const ROOT_ID: &str = "carousel";

const SLIDE_SELECTOR: &str = ".carousel-slide";
const PREV_SELECTOR: &str = ".carousel-prev";
const NEXT_SELECTOR: &str = ".carousel-next";
const DOT_SELECTOR: &str = ".dot";

/// Elements and state shared by every event closure.
struct Parts {
    slides: Vec<HtmlElement>,
    dots: Vec<Element>,
    cursor: RefCell<SlideCursor>,
    swipe: RefCell<SwipeTracker>,
}

impl Parts {
    /// Moves the cursor and re-applies slide visibility and dot markers.
    fn show(&self, target: i64) {
        let Some(idx) = self.cursor.borrow_mut().show(target) else {
            return;
        };
        for (i, slide) in self.slides.iter().enumerate() {
            let display = if i == idx { "block" } else { "none" };
            let _ = slide.style().set_property("display", display);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            let _ = dot.class_list().toggle_with_force("active", i == idx);
        }
    }

    fn next(&self) {
        let target = self.cursor.borrow().index() as i64 + 1;
        self.show(target);
    }

    fn prev(&self) {
        let target = self.cursor.borrow().index() as i64 - 1;
        self.show(target);
    }
}

/// Handle to a mounted carousel. The event closures keep the widget alive
/// for the page's lifetime; the handle itself may be dropped.
pub struct Carousel {
    parts: Rc<Parts>,
}

impl Carousel {
    /// Binds to the `#carousel` markup, shows the first slide and wires all
    /// navigation events. Returns `None` when the page has no carousel
    /// container; nothing is registered in that case.
    pub fn mount(document: &Document) -> Option<Carousel> {
        let root = document.get_element_by_id(ROOT_ID)?;

        let slides: Vec<HtmlElement> = query_all(&root, SLIDE_SELECTOR);
        let dots: Vec<Element> = query_all(&root, DOT_SELECTOR);
        let prev_btn = query_one(&root, PREV_SELECTOR);
        let next_btn = query_one(&root, NEXT_SELECTOR);

        let parts = Rc::new(Parts {
            cursor: RefCell::new(SlideCursor::new(slides.len())),
            swipe: RefCell::new(SwipeTracker::default()),
            slides,
            dots,
        });
        parts.show(0);

        if let Some(btn) = &next_btn {
            let parts_cb = parts.clone();
            let cb = Closure::wrap(Box::new(move |_: MouseEvent| parts_cb.next())
                as Box<dyn FnMut(_)>);
            let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }
        if let Some(btn) = &prev_btn {
            let parts_cb = parts.clone();
            let cb = Closure::wrap(Box::new(move |_: MouseEvent| parts_cb.prev())
                as Box<dyn FnMut(_)>);
            let _ = btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }
        for (i, dot) in parts.dots.iter().enumerate() {
            let parts_cb = parts.clone();
            let cb = Closure::wrap(Box::new(move |_: MouseEvent| parts_cb.show(i as i64))
                as Box<dyn FnMut(_)>);
            let _ = dot.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }

        let touchstart = {
            let parts_cb = parts.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(t) = e.touches().item(0) {
                    parts_cb
                        .swipe
                        .borrow_mut()
                        .begin(t.client_x() as f64, t.client_y() as f64);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = root.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touchstart.as_ref().unchecked_ref(),
            &opts,
        );
        touchstart.forget();

        let touchmove = {
            let parts_cb = parts.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(t) = e.touches().item(0) else { return };
                let verdict = parts_cb
                    .swipe
                    .borrow_mut()
                    .movement(t.client_x() as f64, t.client_y() as f64);
                // block native horizontal page scroll while a swipe is live
                if verdict == MoveVerdict::Swipe {
                    e.prevent_default();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = root.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touchmove.as_ref().unchecked_ref(),
            &opts,
        );
        touchmove.forget();

        let touchend = {
            let parts_cb = parts.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(t) = e.changed_touches().item(0) else { return };
                let ended = parts_cb
                    .swipe
                    .borrow_mut()
                    .finish(t.client_x() as f64, t.client_y() as f64);
                match ended {
                    Some(SwipeDir::Left) => parts_cb.next(),
                    Some(SwipeDir::Right) => parts_cb.prev(),
                    None => {}
                }
            }) as Box<dyn FnMut(_)>)
        };
        let _ = root
            .add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref());
        touchend.forget();

        Some(Carousel { parts })
    }

    /// Number of slides captured at mount time.
    pub fn slide_count(&self) -> usize {
        self.parts.cursor.borrow().len()
    }
}

fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<T>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

fn query_one(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}
