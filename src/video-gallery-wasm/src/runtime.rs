//! Glue between the controller and the live page.
//!
//! Listeners turn DOM events into [`UiEvent`]s, the controller answers with
//! [`UiCommand`]s, and `apply` performs them.

use crate::config::GalleryConfig;
use crate::controller::{GalleryController, UiCommand, UiEvent};
use crate::dom::markup::{ACTIONS_MODAL_ID, DELETE_MODAL_ID, REVEALED_ACTIONS};
use crate::dom::{self, page, HandlerRegistry, ACTIVE_CLASS, OPEN_CLASS};
use crate::error::GalleryError;
use crate::mutation::{Mutation, MutationClient};
use crate::types::{EditForm, VideoRef};
use gloo::console;
use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};

thread_local! {
    static CONTROLLER: RefCell<GalleryController> = RefCell::new(GalleryController::default());
    static HANDLERS: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
    static IN_FLIGHT: Cell<usize> = const { Cell::new(0) };
}

/// Mutations sent and not yet settled
pub fn in_flight() -> usize {
    IN_FLIGHT.with(Cell::get)
}

// Secondary buttons also match page-provided dialogs that lack the cancel classes
const CANCEL_EDIT_SELECTOR: &str = ".form-actions .btn.secondary";
const CANCEL_DELETE_SELECTOR: &str = ".delete-modal-footer .btn.secondary";

/// Replace the running configuration
pub fn configure(config: GalleryConfig) {
    CONTROLLER.with(|c| c.borrow_mut().set_config(config));
}

pub fn config() -> GalleryConfig {
    CONTROLLER.with(|c| c.borrow().config().clone())
}

/// Build the dialogs, bind every listener and populate the particles
pub fn mount() -> Result<(), GalleryError> {
    let config = config();

    HANDLERS.with(|handlers| -> Result<(), GalleryError> {
        let mut handlers = handlers.borrow_mut();
        bind_page(&mut handlers);
        bind_actions_modal(&mut handlers)?;
        bind_delete_modal(&mut handlers)?;
        Ok(())
    })?;

    let count = page::populate_particles(&config)?;
    if count > 0 {
        console::log!("particles created:", count as u32);
    }
    Ok(())
}

/// Feed an event through the controller and apply the result
pub fn dispatch(event: UiEvent) {
    let commands = CONTROLLER.with(|c| c.borrow_mut().handle(event));
    let config = config();
    for command in commands {
        if let Err(err) = apply(command, &config) {
            console::error!("ui update failed:", err.to_string());
        }
    }
}

fn apply(command: UiCommand, config: &GalleryConfig) -> Result<(), GalleryError> {
    match command {
        UiCommand::OpenPlayer {
            url,
            title,
            description,
        } => page::open_player(&url, &title, description.as_deref())?,
        UiCommand::ClosePlayer => page::close_player()?,
        UiCommand::OpenActions { title } => {
            let modal = dom::require_id(ACTIONS_MODAL_ID)?;
            if let Some(title_el) = dom::query(&modal, ".video-title-display") {
                title_el.set_text_content(Some(&title));
            }
            for selector in REVEALED_ACTIONS {
                if let Some(button) = dom::query(&modal, selector) {
                    dom::set_display(&button, "inline-flex")?;
                }
            }
            dom::set_class(&modal, OPEN_CLASS, true)?;
        }
        UiCommand::CloseActions => {
            if let Some(modal) = dom::by_id(ACTIONS_MODAL_ID) {
                dom::set_class(&modal, OPEN_CLASS, false)?;
            }
        }
        UiCommand::ShowEditForm { form, value } => {
            let form_el = dom::require_id(form.form_id())?;
            match form {
                EditForm::Title => {
                    if let Some(input) = dom::by_id_as::<HtmlInputElement>(form.input_id()) {
                        input.set_value(&value);
                    }
                }
                EditForm::Description => {
                    if let Some(input) = dom::by_id_as::<HtmlTextAreaElement>(form.input_id()) {
                        input.set_value(&value);
                    }
                }
            }
            dom::set_class(&form_el, ACTIVE_CLASS, true)?;
        }
        UiCommand::HideEditForms => {
            let forms = document().query_selector_all(".edit-form")?;
            for i in 0..forms.length() {
                if let Some(form) = forms.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                    dom::set_class(&form, ACTIVE_CLASS, false)?;
                }
            }
        }
        UiCommand::OpenDelete { title } => {
            let modal = dom::require_id(DELETE_MODAL_ID)?;
            if let Some(title_el) = dom::by_id("modalVideoTitle") {
                title_el.set_text_content(Some(&title));
            }
            dom::set_class(&modal, OPEN_CLASS, true)?;
        }
        UiCommand::CloseDelete => {
            if let Some(modal) = dom::by_id(DELETE_MODAL_ID) {
                dom::set_class(&modal, OPEN_CLASS, false)?;
            }
        }
        UiCommand::SetScrollLocked(locked) => page::set_scroll_locked(locked)?,
        UiCommand::Send(mutation) => send(mutation, config),
        UiCommand::ShowBanner(banner) => page::show_banner(&banner, config.banner_ttl_ms)?,
        UiCommand::ScheduleReload { delay_ms } => {
            Timeout::new(delay_ms, || {
                if let Err(err) = window().location().reload() {
                    console::error!("reload failed:", err);
                }
            })
            .forget();
        }
        UiCommand::Navigate { url } => window().location().set_href(&url)?,
    }
    Ok(())
}

fn send(mutation: Mutation, config: &GalleryConfig) {
    let client = MutationClient::new(
        config.base_path.clone(),
        page::cookie_value(&config.csrf_cookie),
    );
    IN_FLIGHT.with(|n| n.set(n.get() + 1));
    wasm_bindgen_futures::spawn_local(async move {
        let result = client.send(&mutation).await;
        IN_FLIGHT.with(|n| n.set(n.get().saturating_sub(1)));
        match &result {
            Ok(response) => {
                if let Some(url) = &response.thumbnail_url {
                    console::log!("thumbnail ready:", url);
                }
            }
            Err(err) => {
                console::error!(
                    "mutation failed:",
                    mutation.path(&client.base_path),
                    err.to_string(),
                    "pending:",
                    in_flight() as u32
                );
            }
        }
        dispatch(UiEvent::MutationSettled { mutation, result });
    });
}

fn bind_page(handlers: &mut HandlerRegistry) {
    handlers.bind("scroll", &window(), "scroll", |_| {
        if let Err(err) = page::update_scroll_progress() {
            console::error!("scroll progress failed:", err.to_string());
        }
    });
    handlers.bind("keydown", &document(), "keydown", |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            if key.key() == "Escape" {
                dispatch(UiEvent::Escape);
            }
        }
    });
}

fn bind_actions_modal(handlers: &mut HandlerRegistry) -> Result<(), GalleryError> {
    let modal = page::ensure_modal(ACTIONS_MODAL_ID)?;

    let bindings: [(&'static str, &str, fn() -> UiEvent); 9] = [
        ("actions.overlay", ".video-actions-modal-overlay", || UiEvent::CloseActions),
        ("actions.gallery", ".go-to-gallery", || UiEvent::GoToVideo),
        ("actions.stay", ".stay-here", || UiEvent::Stay),
        ("actions.edit_title", ".edit-title", || UiEvent::EditTitle),
        ("actions.edit_description", ".edit-description", || UiEvent::EditDescription),
        ("actions.thumbnail", ".generate-thumb", || UiEvent::GenerateThumbnail),
        ("actions.delete", ".delete-video", || UiEvent::DeleteFromActions),
        ("actions.save_title", "#saveTitleBtn", || {
            UiEvent::SaveTitle(input_value(EditForm::Title))
        }),
        ("actions.save_description", "#saveDescBtn", || {
            UiEvent::SaveDescription(input_value(EditForm::Description))
        }),
    ];
    for (key, selector, event) in bindings {
        if !handlers.bind_click(key, &modal, selector, move |_| dispatch(event())) {
            console::warn!("actions dialog control missing:", selector);
        }
    }

    // Both forms carry a cancel button
    if let Ok(cancels) = modal.query_selector_all(CANCEL_EDIT_SELECTOR) {
        let keys = ["actions.cancel_title", "actions.cancel_description"];
        for (i, key) in keys.into_iter().enumerate() {
            if let Some(button) = cancels.item(i as u32) {
                handlers.bind(key, &button, "click", |_| dispatch(UiEvent::CancelEdit));
            }
        }
    }
    Ok(())
}

fn bind_delete_modal(handlers: &mut HandlerRegistry) -> Result<(), GalleryError> {
    let modal = page::ensure_modal(DELETE_MODAL_ID)?;
    handlers.bind_click("delete.overlay", &modal, ".delete-modal-overlay", |_| {
        dispatch(UiEvent::CloseDelete)
    });
    handlers.bind_click("delete.cancel", &modal, CANCEL_DELETE_SELECTOR, |_| {
        dispatch(UiEvent::CloseDelete)
    });
    if !handlers.bind_click("delete.confirm", &modal, "#confirmDeleteBtn", |_| {
        dispatch(UiEvent::ConfirmDelete)
    }) {
        console::warn!("delete dialog has no confirm button");
    }
    Ok(())
}

/// Current content of an edit form's input
fn input_value(form: EditForm) -> String {
    let value = match form {
        EditForm::Title => dom::by_id_as::<HtmlInputElement>(form.input_id()).map(|i| i.value()),
        EditForm::Description => {
            dom::by_id_as::<HtmlTextAreaElement>(form.input_id()).map(|t| t.value())
        }
    };
    value.unwrap_or_default()
}

/// Open the playback overlay. Without the player markup nothing opens and
/// page scrolling stays untouched.
pub fn open_player(url: String, title: Option<String>, description: Option<String>) -> bool {
    if !page::player_available() {
        console::warn!("video player markup missing");
        return false;
    }
    dispatch(UiEvent::OpenPlayer {
        url,
        title,
        description,
    });
    true
}

/// Open the actions dialog for a video
pub fn show_actions(id: String, title: String, description: Option<String>) {
    dispatch(UiEvent::ShowActions(VideoRef::new(id, title, description)));
}
