pub mod banner;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod dialog;
pub mod dom;
pub mod error;
pub mod mutation;
pub mod particles;
pub mod runtime;
pub mod scroll;
pub mod scroll_lock;
pub mod types;

use config::GalleryConfig;
use controller::UiEvent;
use error::GalleryError;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use types::VideoRef;

use wasm_bindgen::prelude::*;
use serde_wasm_bindgen::from_value;

/// Module entry point: wires the page once the DOM is parsed
#[wasm_bindgen(start)]
pub fn start() {
    // Set panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
}

fn mount() {
    match runtime::mount() {
        Ok(()) => console::log!("video gallery ready"),
        Err(err) => console::error!("video gallery setup failed:", err.to_string()),
    }
}

/// Replace the configuration; missing fields keep their defaults
#[wasm_bindgen]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    let config: GalleryConfig = from_value(config_js).map_err(GalleryError::from)?;
    runtime::configure(config);
    Ok(())
}

/// Template ids may arrive as numbers
fn video_id(value: &JsValue) -> Result<String, JsValue> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .ok_or_else(|| JsValue::from_str("video id must be a string or a number"))
}

/// Play a video in the playback overlay
#[wasm_bindgen(js_name = openVideoModal)]
pub fn open_video_modal(video_url: String, title: Option<String>, description: Option<String>) {
    runtime::open_player(video_url, title, description);
}

#[wasm_bindgen(js_name = closeVideoModal)]
pub fn close_video_modal() {
    runtime::dispatch(UiEvent::ClosePlayer);
}

/// Open the actions dialog for a video
#[wasm_bindgen(js_name = showVideoModal)]
pub fn show_video_modal(
    video_id_js: JsValue,
    title: String,
    description: Option<String>,
) -> Result<(), JsValue> {
    runtime::show_actions(video_id(&video_id_js)?, title, description);
    Ok(())
}

#[wasm_bindgen(js_name = closeActionsModal)]
pub fn close_actions_modal() {
    runtime::dispatch(UiEvent::CloseActions);
}

#[wasm_bindgen(js_name = hideEditForms)]
pub fn hide_edit_forms() {
    runtime::dispatch(UiEvent::CancelEdit);
}

/// Ask for confirmation before deleting a video
#[wasm_bindgen(js_name = showDeleteModal)]
pub fn show_delete_modal(video_id_js: JsValue, title: String) -> Result<(), JsValue> {
    let target = VideoRef::new(video_id(&video_id_js)?, title, None);
    runtime::dispatch(UiEvent::ShowDelete(target));
    Ok(())
}

#[wasm_bindgen(js_name = closeDeleteModal)]
pub fn close_delete_modal() {
    runtime::dispatch(UiEvent::CloseDelete);
}

/// Read a cookie from `document.cookie`
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: String) -> Option<String> {
    dom::page::cookie_value(&name)
}

// Re-export key types for JavaScript
#[wasm_bindgen(typescript_custom_section)]
const TYPESCRIPT_TYPES: &'static str = r#"
export interface GalleryConfig {
    basePath?: string;
    csrfCookie?: string;
    editReloadMs?: number;
    deleteReloadMs?: number;
    thumbnailReloadMs?: number;
    bannerTtlMs?: number;
    galleryParticles?: number;
    defaultParticles?: number;
}

export interface MutationResponse {
    success: boolean;
    message?: string;
    error?: string;
    thumbnail_url?: string;
}
"#;
