//! Shared test utilities: host-capability spies and app builders.

#![allow(dead_code, unused_imports)]

pub mod stub_server;

use bizcard::card::CardAction;
use bizcard::clipboard::{ClipboardError, ClipboardSink};
use bizcard::config::Config;
use bizcard::effects::{EffectError, SideEffects};
use bizcard::profile::Profile;
use bizcard::ui::app::{App, UiCommand};
use bizcard::ui::layout::{card_rect, layout_regions};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use parking_lot::Mutex;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const SCREEN: (u16, u16) = (120, 40);

pub const SAMPLE_JSON: &str = r#"{
    "name": "Alex Chen",
    "title": "Staff Engineer",
    "company": "Example Corp",
    "phone": "+1-555-0100",
    "email": "alex@example.com",
    "linkedin": "https://www.linkedin.com/in/alex",
    "github": "https://github.com/alex",
    "website": "https://example.com/alex"
}"#;

pub fn sample_profile() -> Profile {
    Profile::from_json(SAMPLE_JSON).expect("sample profile parses")
}

// -- Spies --------------------------------------------------------------------

/// Clipboard that records writes, or fails every write.
pub struct SpyClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl ClipboardSink for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("denied".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectCall {
    Haptic(Duration),
    Cue,
    Open(String),
}

/// Effects that record calls. With `fail`, every call also errors.
pub struct SpyEffects {
    calls: Arc<Mutex<Vec<EffectCall>>>,
    fail: bool,
}

impl SpyEffects {
    fn record(&self, call: EffectCall) -> Result<(), EffectError> {
        self.calls.lock().push(call);
        if self.fail {
            return Err(EffectError::Unsupported("test host"));
        }
        Ok(())
    }
}

impl SideEffects for SpyEffects {
    fn haptic_pulse(&mut self, duration: Duration) -> Result<(), EffectError> {
        self.record(EffectCall::Haptic(duration))
    }

    fn play_flip_cue(&mut self) -> Result<(), EffectError> {
        self.record(EffectCall::Cue)
    }

    fn open_link(&mut self, url: &url::Url) -> Result<(), EffectError> {
        self.record(EffectCall::Open(url.to_string()))
    }
}

// -- App builders -------------------------------------------------------------

pub struct Harness {
    pub app: App,
    pub clipboard: Arc<Mutex<Vec<String>>>,
    pub effects: Arc<Mutex<Vec<EffectCall>>>,
    pub commands: mpsc::Receiver<UiCommand>,
}

impl Harness {
    /// Commands queued so far, oldest first.
    pub fn drain_commands(&mut self) -> Vec<UiCommand> {
        let mut drained = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            drained.push(command);
        }
        drained
    }

    pub fn effect_calls(&self) -> Vec<EffectCall> {
        self.effects.lock().clone()
    }

    pub fn cue_count(&self) -> usize {
        self.effects
            .lock()
            .iter()
            .filter(|call| **call == EffectCall::Cue)
            .count()
    }

    /// Run the flip animation to rest.
    pub fn settle(&mut self) {
        while self.app.transition().is_active() {
            self.app.on_tick();
        }
    }

    /// Screen position of the card's top-left corner.
    pub fn card_origin(&self) -> (u16, u16) {
        let config = self.app.config();
        let screen = Rect::new(0, 0, SCREEN.0, SCREEN.1);
        let card = card_rect(
            layout_regions(screen).body,
            (config.card.face_width, config.card.face_height),
        );
        (card.x, card.y)
    }
}

pub struct HarnessBuilder {
    config: Config,
    clipboard_fails: bool,
    effects_fail: bool,
}

impl HarnessBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.clipboard_fails = true;
        self
    }

    pub fn failing_effects(mut self) -> Self {
        self.effects_fail = true;
        self
    }

    pub fn build(self) -> Harness {
        let clipboard = Arc::new(Mutex::new(Vec::new()));
        let effects = Arc::new(Mutex::new(Vec::new()));
        let mut app = App::new(
            self.config,
            Box::new(SpyClipboard {
                writes: clipboard.clone(),
                fail: self.clipboard_fails,
            }),
            Box::new(SpyEffects {
                calls: effects.clone(),
                fail: self.effects_fail,
            }),
        );
        let (tx, commands) = mpsc::channel(16);
        app.set_command_sender(tx);
        app.on_resize(SCREEN.0, SCREEN.1);
        Harness {
            app,
            clipboard,
            effects,
            commands,
        }
    }

    /// Build and feed the sample profile through the normal load path.
    pub fn loaded(self) -> Harness {
        let mut harness = self.build();
        harness.app.load_profile();
        let commands = harness.drain_commands();
        assert!(matches!(commands.as_slice(), [UiCommand::LoadProfile]));
        harness.app.on_profile_loaded(Ok(sample_profile()));
        harness
    }
}

pub fn harness() -> HarnessBuilder {
    HarnessBuilder {
        config: Config::default(),
        clipboard_fails: false,
        effects_fail: false,
    }
}

// -- Input helpers ------------------------------------------------------------

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}
