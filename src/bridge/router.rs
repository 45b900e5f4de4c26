use std::sync::Arc;

use tracing::debug;

use super::{Command, Handlers, Reply};

/// Decodes request lines and dispatches them to [`Handlers`].
///
/// Cheap to clone; every connection holds its own copy.
#[derive(Clone)]
pub struct CommandRouter {
    handlers: Arc<Handlers>,
}

impl CommandRouter {
    /// Route requests to `handlers`
    pub fn new(handlers: Handlers) -> Self {
        Self {
            handlers: Arc::new(handlers),
        }
    }

    /// Answer one request line with one wire message.
    pub async fn dispatch(&self, line: &str) -> String {
        let command = Command::from(line);
        debug!(?command, "dispatching request");
        self.route(command).await.into_wire()
    }

    /// Run the handler for an already decoded command.
    pub async fn route(&self, command: Command) -> Reply {
        let handlers = &self.handlers;

        match command {
            Command::GetMedia => Reply::Media(handlers.get_media().await),
            Command::GetThumbnail => Reply::Thumbnail(handlers.get_thumbnail().await),
            Command::GetAudioDevices => Reply::Devices(handlers.get_audio_devices().await),
            Command::SetAudioDevice(index) => {
                Reply::Action(handlers.set_audio_device(index).await)
            }
            Command::InvalidDeviceIndex => Reply::Action(handlers.invalid_device_index()),
            Command::TogglePlayback => Reply::Action(handlers.toggle_playback().await),
            Command::Next => Reply::Action(handlers.next().await),
            Command::Previous => Reply::Action(handlers.previous().await),
            Command::Unknown(raw) => {
                debug!(%raw, "unknown command");
                Reply::unknown_command()
            }
        }
    }
}
