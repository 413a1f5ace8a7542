//! Page widgets that live outside the controller: progress bar, particles,
//! banners and the player element.

use super::markup::{ACTIONS_MODAL_HTML, ACTIONS_MODAL_ID, DELETE_MODAL_HTML, DELETE_MODAL_ID};
use super::{by_id, by_id_as, query, set_class, set_display, OPEN_CLASS};
use crate::banner::Banner;
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::particles;
use crate::scroll::{progress_width, scroll_progress};
use gloo::console;
use gloo::timers::callback::Timeout;
use gloo::utils::{body, document, document_element, window};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlDocument, HtmlElement, HtmlMediaElement};

/// Write the current scroll progress into `#scrollProgress`
pub fn update_scroll_progress() -> Result<(), GalleryError> {
    let Some(bar) = by_id_as::<HtmlElement>("scrollProgress") else {
        return Ok(());
    };
    let root = document_element();
    let scroll_top = window()
        .page_y_offset()
        .ok()
        .filter(|offset| *offset != 0.0)
        .unwrap_or_else(|| f64::from(root.scroll_top()));
    let progress = scroll_progress(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    bar.style().set_property("width", &progress_width(progress))?;
    Ok(())
}

/// Fill `#particles` once. Returns the number of particles created.
pub fn populate_particles(config: &GalleryConfig) -> Result<usize, GalleryError> {
    let Some(container) = by_id("particles") else {
        return Ok(0);
    };
    let has_gallery = query(&body(), ".gallery").is_some();
    let count = particles::particle_count(config, has_gallery);

    let doc = document();
    for particle in particles::generate(count, js_sys::Math::random) {
        let el: HtmlElement = doc.create_element("div")?.unchecked_into();
        el.set_class_name("particle");
        let style = el.style();
        for (name, value) in particle.style() {
            style.set_property(name, &value)?;
        }
        container.append_child(&el)?;
    }
    Ok(count)
}

/// Find or create the banner container
fn messages_container() -> Result<Element, GalleryError> {
    let doc = document();
    if let Some(existing) = doc.query_selector(".messages")? {
        return Ok(existing);
    }

    let container = doc.create_element("div")?;
    container.set_class_name("messages");
    if let Some(card) = doc.query_selector(".card")? {
        // Right after the card's first child (its heading)
        let anchor = card.first_child().and_then(|first| first.next_sibling());
        card.insert_before(&container, anchor.as_ref())?;
    }
    Ok(container)
}

/// Append a banner and remove it after `ttl_ms`
pub fn show_banner(banner: &Banner, ttl_ms: u32) -> Result<(), GalleryError> {
    let container = messages_container()?;
    let message = document().create_element("div")?;
    message.set_class_name(&banner.class_name());
    message.set_text_content(Some(&banner.text));
    container.append_child(&message)?;

    Timeout::new(ttl_ms, move || {
        if message.parent_node().is_some() {
            message.remove();
        }
    })
    .forget();
    Ok(())
}

/// Named value from `document.cookie`
pub fn cookie_value(cookie_name: &str) -> Option<String> {
    let cookies = document().dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    crate::cookie::get_cookie(&cookies, cookie_name)
}

/// Reuse the dialog from the page markup or build it
pub fn ensure_modal(id: &'static str) -> Result<Element, GalleryError> {
    if let Some(existing) = by_id(id) {
        return Ok(existing);
    }

    let (class, html) = match id {
        ACTIONS_MODAL_ID => ("video-actions-modal", ACTIONS_MODAL_HTML),
        DELETE_MODAL_ID => ("delete-modal", DELETE_MODAL_HTML),
        _ => return Err(GalleryError::MissingElement(id)),
    };
    let modal = document().create_element("div")?;
    modal.set_id(id);
    modal.set_class_name(class);
    modal.set_inner_html(html);
    body().append_child(&modal)?;
    Ok(modal)
}

/// Whether the page ships the playback overlay
pub fn player_available() -> bool {
    by_id("videoModal").is_some()
        && by_id_as::<HtmlMediaElement>("videoPlayer").is_some()
        && by_id("videoModalTitle").is_some()
}

/// Load and start the player overlay. Missing markup makes this a no-op.
pub fn open_player(url: &str, title: &str, description: Option<&str>) -> Result<(), GalleryError> {
    let (Some(modal), Some(player), Some(title_el)) = (
        by_id("videoModal"),
        by_id_as::<HtmlMediaElement>("videoPlayer"),
        by_id("videoModalTitle"),
    ) else {
        console::warn!("video player markup missing");
        return Ok(());
    };

    player.set_src(url);
    title_el.set_text_content(Some(title));

    if let Some(desc_el) = by_id("videoModalDesc") {
        let wrapper = desc_el.parent_element();
        match description {
            Some(text) => {
                desc_el.set_text_content(Some(text));
                if let Some(wrapper) = &wrapper {
                    set_display(wrapper, "block")?;
                }
            }
            None => {
                if let Some(wrapper) = &wrapper {
                    set_display(wrapper, "none")?;
                }
            }
        }
    }

    set_class(&modal, OPEN_CLASS, true)?;

    let playback = player.play()?;
    wasm_bindgen_futures::spawn_local(async move {
        if JsFuture::from(playback).await.is_err() {
            console::log!("autoplay blocked");
        }
    });
    Ok(())
}

/// Stop and hide the player overlay
pub fn close_player() -> Result<(), GalleryError> {
    if let (Some(modal), Some(player)) = (
        by_id("videoModal"),
        by_id_as::<HtmlMediaElement>("videoPlayer"),
    ) {
        player.pause()?;
        player.set_src("");
        set_class(&modal, OPEN_CLASS, false)?;
    }
    Ok(())
}

/// Toggle page scrolling on the body
pub fn set_scroll_locked(locked: bool) -> Result<(), GalleryError> {
    let style = body().style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}
