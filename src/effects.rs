//! Best-effort side channels: flip cue, haptics and link opening.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::EffectsConfig;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("{0} is not supported by this terminal")]
    Unsupported(&'static str),

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Terminal write failed: {0}")]
    Io(#[from] io::Error),
}

/// Host capabilities the card uses for fire-and-forget effects.
///
/// Callers ignore failures; nothing here may affect card state.
pub trait SideEffects {
    fn haptic_pulse(&mut self, duration: Duration) -> Result<(), EffectError>;

    /// Start the flip cue from its beginning.
    fn play_flip_cue(&mut self) -> Result<(), EffectError>;

    /// Open `url` outside the card, in the user's browser.
    fn open_link(&mut self, url: &Url) -> Result<(), EffectError>;
}

/// Effects for a terminal host.
pub struct TerminalEffects {
    bell: bool,
    sound_command: Vec<String>,
    playback: Option<Child>,
}

impl TerminalEffects {
    pub fn from_config(config: &EffectsConfig) -> Self {
        Self {
            bell: config.bell,
            sound_command: config.sound_command.clone(),
            playback: None,
        }
    }

    fn stop_playback(playback: &mut Option<Child>) {
        if let Some(mut child) = playback.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

impl SideEffects for TerminalEffects {
    fn haptic_pulse(&mut self, _duration: Duration) -> Result<(), EffectError> {
        Err(EffectError::Unsupported("vibration"))
    }

    fn play_flip_cue(&mut self) -> Result<(), EffectError> {
        if let Some((program, args)) = self.sound_command.split_first() {
            Self::stop_playback(&mut self.playback);
            let child = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| EffectError::Spawn {
                    command: program.clone(),
                    source,
                })?;
            self.playback = Some(child);
            return Ok(());
        }

        if self.bell {
            let mut stdout = io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn open_link(&mut self, url: &Url) -> Result<(), EffectError> {
        let mut command = opener_command(url.as_str());
        let program = command.get_program().to_string_lossy().into_owned();
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EffectError::Spawn {
                command: program,
                source,
            })?;
        // Reap the opener without blocking the UI.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

impl Drop for TerminalEffects {
    fn drop(&mut self) {
        Self::stop_playback(&mut self.playback);
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
