use crate::banner::Banner;
use crate::config::GalleryConfig;
use crate::dialog::{ActionsDialog, DeleteDialog, PlayerOverlay};
use crate::error::MutationError;
use crate::mutation::{Mutation, MutationResponse};
use crate::scroll_lock::ScrollLock;
use crate::types::{EditForm, Overlay, VideoRef};
use smallvec::SmallVec;

/// User intents and async completions fed to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    OpenPlayer {
        url: String,
        title: Option<String>,
        description: Option<String>,
    },
    ClosePlayer,
    ShowActions(VideoRef),
    CloseActions,
    GoToVideo,
    Stay,
    EditTitle,
    EditDescription,
    /// Raw content of the title input
    SaveTitle(String),
    /// Raw content of the description textarea
    SaveDescription(String),
    CancelEdit,
    GenerateThumbnail,
    DeleteFromActions,
    ShowDelete(VideoRef),
    ConfirmDelete,
    CloseDelete,
    Escape,
    MutationSettled {
        mutation: Mutation,
        result: Result<MutationResponse, MutationError>,
    },
}

/// DOM-level operation produced by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    OpenPlayer {
        url: String,
        title: String,
        description: Option<String>,
    },
    ClosePlayer,
    /// Show the actions dialog with its action buttons revealed
    OpenActions { title: String },
    CloseActions,
    ShowEditForm { form: EditForm, value: String },
    HideEditForms,
    OpenDelete { title: String },
    CloseDelete,
    SetScrollLocked(bool),
    Send(Mutation),
    ShowBanner(Banner),
    ScheduleReload { delay_ms: u32 },
    Navigate { url: String },
}

pub type Commands = SmallVec<[UiCommand; 6]>;

/// Overlay state machine for the gallery page
pub struct GalleryController {
    config: GalleryConfig,
    player: PlayerOverlay,
    actions: ActionsDialog,
    delete: DeleteDialog,
    scroll_lock: ScrollLock,
}

impl GalleryController {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            player: PlayerOverlay::new(),
            actions: ActionsDialog::new(),
            delete: DeleteDialog::new(),
            scroll_lock: ScrollLock::new(),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GalleryConfig) {
        self.config = config;
    }

    pub fn actions(&self) -> &ActionsDialog {
        &self.actions
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete
    }

    pub fn player(&self) -> &PlayerOverlay {
        &self.player
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Apply an event and return the DOM operations it requires, in order
    pub fn handle(&mut self, event: UiEvent) -> Commands {
        let was_locked = self.scroll_lock.is_locked();
        let mut out = Commands::new();

        match event {
            UiEvent::OpenPlayer {
                url,
                title,
                description,
            } => {
                self.player.open();
                self.scroll_lock.acquire(Overlay::Player);
                out.push(UiCommand::OpenPlayer {
                    url,
                    title: PlayerOverlay::display_title(title.as_deref()),
                    description: description.filter(|d| !d.is_empty()),
                });
            }
            UiEvent::ClosePlayer => self.close_player(&mut out),
            UiEvent::ShowActions(target) => {
                if self.actions.editing().is_some() {
                    out.push(UiCommand::HideEditForms);
                }
                out.push(UiCommand::OpenActions {
                    title: target.title.clone(),
                });
                self.actions.show(target);
                self.scroll_lock.acquire(Overlay::Actions);
            }
            UiEvent::CloseActions | UiEvent::Stay => {
                self.close_actions(&mut out);
            }
            UiEvent::GoToVideo => {
                if let Some(target) = self.close_actions(&mut out) {
                    out.push(UiCommand::Navigate {
                        url: self.config.video_url(&target.id),
                    });
                }
            }
            UiEvent::EditTitle => self.begin_edit(EditForm::Title, &mut out),
            UiEvent::EditDescription => self.begin_edit(EditForm::Description, &mut out),
            UiEvent::SaveTitle(raw) => {
                // Empty titles are rejected without a round trip
                let value = raw.trim();
                if !value.is_empty() {
                    self.submit_edit(EditForm::Title, value, &mut out);
                }
            }
            UiEvent::SaveDescription(raw) => {
                self.submit_edit(EditForm::Description, raw.trim(), &mut out);
            }
            UiEvent::CancelEdit => {
                self.actions.hide_forms();
                out.push(UiCommand::HideEditForms);
            }
            UiEvent::GenerateThumbnail => {
                if let Some(target) = self.actions.target() {
                    out.push(UiCommand::Send(Mutation::GenerateThumbnail {
                        video_id: target.id.clone(),
                    }));
                }
            }
            UiEvent::DeleteFromActions => {
                if let Some(target) = self.close_actions(&mut out) {
                    self.show_delete(target, &mut out);
                }
            }
            UiEvent::ShowDelete(target) => self.show_delete(target, &mut out),
            UiEvent::ConfirmDelete => {
                if let Some(target) = self.delete.target() {
                    out.push(UiCommand::Send(Mutation::Delete {
                        video_id: target.id.clone(),
                    }));
                }
            }
            UiEvent::CloseDelete => self.close_delete(&mut out),
            UiEvent::Escape => {
                self.close_player(&mut out);
                self.close_actions(&mut out);
                self.close_delete(&mut out);
            }
            UiEvent::MutationSettled { mutation, result } => {
                self.settle(mutation, result, &mut out);
            }
        }

        let locked = self.scroll_lock.is_locked();
        if locked != was_locked {
            out.push(UiCommand::SetScrollLocked(locked));
        }
        out
    }

    fn close_player(&mut self, out: &mut Commands) {
        self.player.close();
        self.scroll_lock.release(Overlay::Player);
        out.push(UiCommand::ClosePlayer);
    }

    fn close_actions(&mut self, out: &mut Commands) -> Option<VideoRef> {
        let target = self.actions.close();
        self.scroll_lock.release(Overlay::Actions);
        out.push(UiCommand::CloseActions);
        out.push(UiCommand::HideEditForms);
        target
    }

    fn show_delete(&mut self, target: VideoRef, out: &mut Commands) {
        out.push(UiCommand::OpenDelete {
            title: DeleteDialog::display_title(&target.title),
        });
        self.delete.show(target);
        self.scroll_lock.acquire(Overlay::Delete);
    }

    fn close_delete(&mut self, out: &mut Commands) {
        self.delete.close();
        self.scroll_lock.release(Overlay::Delete);
        out.push(UiCommand::CloseDelete);
    }

    fn begin_edit(&mut self, form: EditForm, out: &mut Commands) {
        if let Some(value) = self.actions.begin_edit(form) {
            out.push(UiCommand::HideEditForms);
            out.push(UiCommand::ShowEditForm { form, value });
        }
    }

    fn submit_edit(&mut self, form: EditForm, value: &str, out: &mut Commands) {
        if self.actions.editing() != Some(form) {
            return;
        }
        if let Some(target) = self.actions.target() {
            out.push(UiCommand::Send(Mutation::Edit {
                video_id: target.id.clone(),
                field: form.field(),
                value: value.to_string(),
            }));
        }
    }

    fn settle(
        &mut self,
        mutation: Mutation,
        result: Result<MutationResponse, MutationError>,
        out: &mut Commands,
    ) {
        // The delete dialog closes on every outcome
        if matches!(mutation, Mutation::Delete { .. }) {
            self.close_delete(out);
        }

        match result {
            Ok(response) if response.success => {
                if matches!(mutation, Mutation::Edit { .. }) {
                    self.actions.hide_forms();
                    out.push(UiCommand::HideEditForms);
                }
                out.push(UiCommand::ShowBanner(Banner::success(
                    mutation.success_text(&response),
                )));
                out.push(UiCommand::ScheduleReload {
                    delay_ms: mutation.reload_delay_ms(&self.config),
                });
            }
            Ok(response) => {
                out.push(UiCommand::ShowBanner(Banner::error(
                    mutation.failure_text(&response),
                )));
            }
            Err(_) => {
                out.push(UiCommand::ShowBanner(Banner::error(mutation.fallback_error())));
            }
        }
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}
