use crate::card::view::FaceContext;
use crate::card::{
    CardAction, CardContent, CopyTarget, Face, FaceSurfaces, FlipIntent, FlipReducer, FlipState,
    FlipTransition,
};
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::effects::SideEffects;
use crate::export::{capture_faces, ExportError, ExportJob};
use crate::profile::{Profile, ProfileError, ProfileIntent, ProfileReducer, ProfileState};
use crate::shortlink::{ShortLinkIntent, ShortLinkReducer, ShortLinkState, ShortenError};
use crate::ui::contacts::{CopyFeedbackIntent, CopyFeedbackReducer, CopyFeedbackState};
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;
use crate::ui::toast::{ToastIntent, ToastLevel, ToastReducer, ToastState};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// The card itself; Enter/Space flips it.
    Card,
    /// An interactive child on the back face.
    Action(CardAction),
}

#[derive(Debug)]
pub enum UiCommand {
    LoadProfile,
    Shorten { long_url: String },
    Export(ExportJob),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    config: Config,
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    theme: Theme,
    flip: FlipState,
    /// Render-only animation, never consulted for `flip`.
    transition: FlipTransition,
    profile: ProfileState,
    content: Option<CardContent>,
    surfaces: FaceSurfaces,
    copy_feedback: CopyFeedbackState,
    short_link: ShortLinkState,
    toast: ToastState,
    clipboard: Box<dyn ClipboardSink>,
    effects: Box<dyn SideEffects>,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(
        config: Config,
        clipboard: Box<dyn ClipboardSink>,
        effects: Box<dyn SideEffects>,
    ) -> Self {
        let theme = config.card.theme;
        Self {
            config,
            should_quit: false,
            focus: Focus::Card,
            size: None,
            theme,
            flip: FlipState::default(),
            transition: FlipTransition::default(),
            profile: ProfileState::default(),
            content: None,
            surfaces: FaceSurfaces::default(),
            copy_feedback: CopyFeedbackState::default(),
            short_link: ShortLinkState::default(),
            toast: ToastState::default(),
            clipboard,
            effects,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn flip_state(&self) -> FlipState {
        self.flip
    }

    pub fn transition(&self) -> FlipTransition {
        self.transition
    }

    pub fn profile_state(&self) -> &ProfileState {
        &self.profile
    }

    pub fn content(&self) -> Option<&CardContent> {
        self.content.as_ref()
    }

    pub fn surfaces(&self) -> &FaceSurfaces {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut FaceSurfaces {
        &mut self.surfaces
    }

    pub fn copy_feedback(&self) -> &CopyFeedbackState {
        &self.copy_feedback
    }

    pub fn short_link(&self) -> &ShortLinkState {
        &self.short_link
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Interactive state the back face renders this frame.
    pub fn face_context(&self) -> FaceContext<'_> {
        FaceContext {
            focused: match self.focus {
                Focus::Action(action) => Some(action),
                Focus::Card => None,
            },
            copied: self.copy_feedback.just_copied(),
            short_link: self.short_link.short_url(),
        }
    }

    pub fn load_profile(&mut self) {
        if self.profile.profile().is_some() {
            return;
        }
        dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Reload);
        if !self.send_command(UiCommand::LoadProfile) {
            dispatch_mvi!(
                self,
                profile,
                ProfileReducer,
                ProfileIntent::Failed {
                    message: "background worker is not running".to_string(),
                }
            );
        }
    }

    pub fn on_profile_loaded(&mut self, result: Result<Profile, ProfileError>) {
        if self.profile.profile().is_some() {
            tracing::debug!("Ignoring profile result; a profile is already loaded");
            return;
        }
        match result {
            Ok(profile) => {
                tracing::info!(name = %profile.name, "Profile loaded");
                let profile = Arc::new(profile);
                self.content = Some(CardContent::new(Arc::clone(&profile)));
                self.surfaces
                    .mount(self.config.card.face_width, self.config.card.face_height);
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Loaded(profile));
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load profile");
                dispatch_mvi!(
                    self,
                    profile,
                    ProfileReducer,
                    ProfileIntent::Failed {
                        message: format!("{} ({})", err.user_message(), err),
                    }
                );
            }
        }
    }

    /// Flip the card. Only reached from the card itself, never from a child.
    pub fn toggle(&mut self) {
        dispatch_mvi!(self, flip, FlipReducer, FlipIntent::Toggle);
        self.transition.start();
        if !self.flip.is_flipped() {
            self.focus = Focus::Card;
        }
        tracing::debug!(face = %self.flip.face(), "Card flipped");

        let pulse = Duration::from_millis(self.config.effects.haptic_ms);
        if let Err(err) = self.effects.haptic_pulse(pulse) {
            tracing::debug!(error = %err, "Haptic pulse skipped");
        }
        if let Err(err) = self.effects.play_flip_cue() {
            tracing::debug!(error = %err, "Flip cue skipped");
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn on_tick(&mut self) {
        self.transition.tick();
        dispatch_mvi!(self, copy_feedback, CopyFeedbackReducer, CopyFeedbackIntent::Tick);
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Tick);
    }

    /// Cycle focus through the card and, while the back shows, its actions.
    pub fn move_focus(&mut self, forward: bool) {
        if !self.flip.is_flipped() || self.content.is_none() {
            self.focus = Focus::Card;
            return;
        }
        let order: Vec<Focus> = std::iter::once(Focus::Card)
            .chain(CardAction::ALL.iter().map(|action| Focus::Action(*action)))
            .collect();
        let current = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    pub fn clear_focus(&mut self) {
        self.focus = Focus::Card;
    }

    /// Enter/Space: flips only when the card itself has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Card => self.toggle(),
            Focus::Action(action) => self.activate(action),
        }
    }

    /// Run a back-face action. Never flips the card.
    pub fn activate(&mut self, action: CardAction) {
        match action.copy_target() {
            Some(target) => self.copy(target),
            None => self.open_link(action),
        }
    }

    pub fn copy(&mut self, target: CopyTarget) {
        let text = match (target, self.profile.profile()) {
            (CopyTarget::Phone, Some(profile)) => Some(profile.phone.clone()),
            (CopyTarget::Email, Some(profile)) => Some(profile.email.clone()),
            (CopyTarget::ShortLink, _) => self.short_link.short_url().map(str::to_string),
            (_, None) => None,
        };
        let Some(text) = text else {
            let message = match target {
                CopyTarget::ShortLink => "No short link yet; press s to create one",
                _ => "Profile is not loaded",
            };
            self.notify(message, ToastLevel::Info);
            return;
        };

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                let ticks = self.config.ui.ticks_for(self.config.ui.copy_feedback_ms);
                dispatch_mvi!(
                    self,
                    copy_feedback,
                    CopyFeedbackReducer,
                    CopyFeedbackIntent::Copied { target, ticks }
                );
                self.notify(format!("Copied: {text}"), ToastLevel::Success);
            }
            Err(err) => {
                tracing::warn!(target = target.label(), error = %err, "Clipboard write failed");
                dispatch_mvi!(
                    self,
                    copy_feedback,
                    CopyFeedbackReducer,
                    CopyFeedbackIntent::Failed { target }
                );
                self.notify(format!("Could not copy {}", target.label()), ToastLevel::Error);
            }
        }
    }

    fn open_link(&mut self, action: CardAction) {
        let url = match (action, self.profile.profile()) {
            (CardAction::OpenLinkedIn, Some(profile)) => profile.linkedin.clone(),
            (CardAction::OpenGithub, Some(profile)) => profile.github.clone(),
            (CardAction::OpenWebsite, Some(profile)) => profile.website.clone(),
            _ => return,
        };
        match self.effects.open_link(&url) {
            Ok(()) => {
                tracing::info!(url = %url, "Opened link");
                self.notify(format!("Opening {url}"), ToastLevel::Info);
            }
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "Failed to open link");
                self.notify(format!("Could not open {url}"), ToastLevel::Error);
            }
        }
    }

    /// URL the short link and QR caption refer to.
    pub fn page_url(&self) -> Option<String> {
        self.config.card.page_url.clone().or_else(|| {
            self.profile
                .profile()
                .map(|profile| profile.website.to_string())
        })
    }

    pub fn shorten(&mut self) {
        let Some(long_url) = self.page_url() else {
            self.notify("No page URL to shorten", ToastLevel::Error);
            return;
        };
        dispatch_mvi!(
            self,
            short_link,
            ShortLinkReducer,
            ShortLinkIntent::Requested {
                long_url: long_url.clone(),
            }
        );
        if self.send_command(UiCommand::Shorten {
            long_url: long_url.clone(),
        }) {
            self.notify("Shortening link...", ToastLevel::Info);
        } else {
            dispatch_mvi!(
                self,
                short_link,
                ShortLinkReducer,
                ShortLinkIntent::Failed {
                    long_url,
                    message: "background worker is not running".to_string(),
                }
            );
        }
    }

    pub fn on_short_link_finished(&mut self, long_url: String, result: Result<String, ShortenError>) {
        match result {
            Ok(short_url) => {
                tracing::info!(long_url = %long_url, short_url = %short_url, "Short link ready");
                self.notify(format!("Short link: {short_url}"), ToastLevel::Success);
                dispatch_mvi!(
                    self,
                    short_link,
                    ShortLinkReducer,
                    ShortLinkIntent::Succeeded {
                        long_url,
                        short_url,
                    }
                );
            }
            Err(err) => {
                tracing::warn!(long_url = %long_url, error = %err, "Short link failed");
                self.notify(err.user_message(), ToastLevel::Error);
                dispatch_mvi!(
                    self,
                    short_link,
                    ShortLinkReducer,
                    ShortLinkIntent::Failed {
                        long_url,
                        message: err.to_string(),
                    }
                );
            }
        }
    }

    /// Capture both faces now; the rest of the pipeline runs in the background.
    pub fn export_both_faces(&mut self) {
        let ctx = FaceContext {
            focused: None,
            copied: None,
            short_link: self.short_link.short_url(),
        };
        match capture_faces(&mut self.surfaces, self.content.as_ref(), self.theme, &ctx) {
            Ok(job) => {
                if self.send_command(UiCommand::Export(job)) {
                    self.notify("Exporting card...", ToastLevel::Info);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Export failed before capture");
                self.notify(err.user_message(), ToastLevel::Error);
            }
        }
    }

    pub fn on_export_finished(&mut self, result: Result<PathBuf, ExportError>) {
        match result {
            Ok(path) => self.notify(format!("Saved {}", path.display()), ToastLevel::Success),
            Err(err) => {
                tracing::error!(error = %err, "Export failed");
                self.notify(err.user_message(), ToastLevel::Error);
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        let ticks = self.config.ui.ticks_for(self.config.ui.toast_ms);
        dispatch_mvi!(
            self,
            toast,
            ToastReducer,
            ToastIntent::Show {
                message: message.into(),
                level,
                ticks,
            }
        );
    }

    pub fn dismiss_toast(&mut self) {
        dispatch_mvi!(self, toast, ToastReducer, ToastIntent::Dismiss);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!(?command, "No background worker attached");
            self.notify("Background worker is not running", ToastLevel::Error);
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue background command");
                self.notify("Background worker is busy", ToastLevel::Error);
                false
            }
        }
    }

    /// Which face is up, ignoring the animation.
    pub fn face(&self) -> Face {
        self.flip.face()
    }
}
