use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::effects::TerminalEffects;
use crate::services::Services;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{spawn_worker, COMMAND_QUEUE};
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

/// Run the card until the user quits. The UI loop owns `App` on this thread;
/// network and export work runs on `runtime`.
pub fn run(config: Config, runtime: &Runtime) -> anyhow::Result<()> {
    let services = Services::from_config(&config)?;
    let tick_rate = config.ui.tick_rate();
    let clipboard = ClipboardHandler::new(config.clipboard.osc52_fallback);
    let effects = TerminalEffects::from_config(&config.effects);

    let mut app = App::new(config, Box::new(clipboard), Box::new(effects));
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = spawn_worker(runtime.handle(), services, command_rx, events.sender());
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.load_profile();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::ProfileLoaded(result)) => app.on_profile_loaded(result),
            Ok(AppEvent::ShortLinkFinished { long_url, result }) => {
                app.on_short_link_finished(long_url, result)
            }
            Ok(AppEvent::ExportFinished(result)) => app.on_export_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Dropping the app closes the command channel and ends the worker loop.
    drop(app);
    worker.abort();
    tracing::info!("bizcard exited");
    Ok(())
}
