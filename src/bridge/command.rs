/// Prefix of the only command that carries an argument.
const SET_AUDIO_DEVICE: &str = "set_audio_device";

/// A decoded client request.
///
/// Every incoming line maps to exactly one variant; the exact-match tokens
/// and the `set_audio_device` prefix are disjoint, so match order is
/// irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `get_media`
    GetMedia,
    /// `get_thumbnail`
    GetThumbnail,
    /// `get_audio_devices`
    GetAudioDevices,
    /// `set_audio_device <index>` with a valid non-negative index
    SetAudioDevice(u32),
    /// `set_audio_device` with a missing, non-integer, negative or extra argument
    InvalidDeviceIndex,
    /// `toggle_playback`
    TogglePlayback,
    /// `next`
    Next,
    /// `prev`
    Previous,
    /// Anything else, kept verbatim for logging
    Unknown(String),
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        match line {
            "get_media" => Self::GetMedia,
            "get_thumbnail" => Self::GetThumbnail,
            "get_audio_devices" => Self::GetAudioDevices,
            "toggle_playback" => Self::TogglePlayback,
            "next" => Self::Next,
            "prev" => Self::Previous,
            SET_AUDIO_DEVICE => Self::InvalidDeviceIndex,
            _ => match line
                .strip_prefix(SET_AUDIO_DEVICE)
                .and_then(|rest| rest.strip_prefix(' '))
            {
                Some(argument) => parse_device_index(argument)
                    .map_or(Self::InvalidDeviceIndex, Self::SetAudioDevice),
                None => Self::Unknown(line.to_string()),
            },
        }
    }
}

fn parse_device_index(argument: &str) -> Option<u32> {
    let mut tokens = argument.split_whitespace();
    let index = tokens.next()?.parse().ok()?;

    tokens.next().is_none().then_some(index)
}
