pub mod markup;
pub mod page;

use crate::error::GalleryError;
use ahash::AHashMap;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";

/// Live event listeners keyed by control name.
///
/// Binding a key that is already bound drops the previous listener, so a
/// control never carries more than one handler.
#[derive(Default)]
pub struct HandlerRegistry {
    listeners: AHashMap<&'static str, EventListener>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<F>(&mut self, key: &'static str, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners
            .insert(key, EventListener::new(target, event, handler));
    }

    /// Bind a click handler on the first descendant of `root` matching `selector`.
    /// Returns false when nothing matches.
    pub fn bind_click<F>(&mut self, key: &'static str, root: &Element, selector: &str, handler: F) -> bool
    where
        F: FnMut(&Event) + 'static,
    {
        match query(root, selector) {
            Some(el) => {
                self.bind(key, &el, "click", handler);
                true
            }
            None => false,
        }
    }
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

pub fn require_id(id: &'static str) -> Result<Element, GalleryError> {
    by_id(id).ok_or(GalleryError::MissingElement(id))
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), GalleryError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_display(el: &Element, value: &str) -> Result<(), GalleryError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", value)?;
    }
    Ok(())
}
