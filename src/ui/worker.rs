//! Background side of the TUI: runs [`UiCommand`]s and posts results back.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use crate::services::Services;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Queue depth for commands waiting on the worker.
pub const COMMAND_QUEUE: usize = 16;

/// Each command runs on its own task, so a slow shortener never holds up an
/// export and overlapping exports proceed independently.
pub fn spawn_worker(
    handle: &Handle,
    services: Arc<Services>,
    mut commands: Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    let spawner = handle.clone();
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            let services = Arc::clone(&services);
            let events = events.clone();
            spawner.spawn(async move {
                let event = run_command(&services, command).await;
                if events.send(event).is_err() {
                    tracing::debug!("UI closed before a background result arrived");
                }
            });
        }
        tracing::debug!("Command channel closed; worker exiting");
    })
}

pub async fn run_command(services: &Services, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::LoadProfile => AppEvent::ProfileLoaded(services.profile.load().await),
        UiCommand::Shorten { long_url } => {
            let result = services.shortener.shorten(&long_url).await;
            AppEvent::ShortLinkFinished { long_url, result }
        }
        UiCommand::Export(job) => AppEvent::ExportFinished(services.exporter.export(job).await),
    }
}
