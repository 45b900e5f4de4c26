use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;

use super::*;
use crate::services::{
    AudioDevice, AudioDeviceProvider, AudioError, DeviceCache, MediaError, MediaProvider,
    MediaSession, PlaybackAction, ThumbnailProvider, media::PlaybackStatus,
};

/// Scripted media provider that flips its status when play/pause succeed.
#[derive(Default)]
struct FakeMedia {
    session: Mutex<Option<MediaSession>>,
    query_error: Mutex<Option<String>>,
    refuse_actions: Mutex<bool>,
    actions: Mutex<Vec<PlaybackAction>>,
}

impl FakeMedia {
    fn with_status(status: PlaybackStatus) -> Arc<Self> {
        let media = Self::default();
        *media.session.lock().unwrap() = Some(MediaSession {
            status,
            title: "Teardrop".to_string(),
            artist: "Massive Attack".to_string(),
            app_id: "spotify".to_string(),
            position: Duration::from_secs(61),
            duration: Duration::from_secs(330),
        });
        Arc::new(media)
    }

    fn actions(&self) -> Vec<PlaybackAction> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaProvider for FakeMedia {
    async fn current_session(&self) -> Result<Option<MediaSession>, MediaError> {
        if let Some(message) = self.query_error.lock().unwrap().clone() {
            return Err(MediaError::ControlFailed(message));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn perform(&self, action: PlaybackAction) -> Result<bool, MediaError> {
        let mut session = self.session.lock().unwrap();
        let Some(session) = session.as_mut() else {
            return Err(MediaError::NoActiveSession);
        };

        self.actions.lock().unwrap().push(action);
        if *self.refuse_actions.lock().unwrap() {
            return Ok(false);
        }

        match action {
            PlaybackAction::Play => session.status = PlaybackStatus::Playing,
            PlaybackAction::Pause => session.status = PlaybackStatus::Paused,
            PlaybackAction::Next | PlaybackAction::Previous => {}
        }
        Ok(true)
    }
}

struct FakeThumbnails(Result<Option<Vec<u8>>, String>);

#[async_trait]
impl ThumbnailProvider for FakeThumbnails {
    async fn thumbnail(&self) -> Result<Option<Vec<u8>>, MediaError> {
        self.0.clone().map_err(MediaError::Artwork)
    }
}

#[derive(Default)]
struct FakeAudio {
    devices: Vec<AudioDevice>,
    fail_set: bool,
    list_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

#[async_trait]
impl AudioDeviceProvider for FakeAudio {
    async fn output_devices(&self, _timeout: Duration) -> Result<Vec<AudioDevice>, AudioError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.devices.clone())
    }

    async fn set_default_output(&self, _index: u32, _timeout: Duration) -> Result<(), AudioError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set {
            return Err(AudioError::HelperFailed {
                status: "exit status: 1".to_string(),
                stderr: "Failure: No such entity".to_string(),
            });
        }
        Ok(())
    }
}

fn speakers_and_headphones() -> FakeAudio {
    FakeAudio {
        devices: vec![
            AudioDevice::new(0, "Speakers", true),
            AudioDevice::new(1, "Headphones", false),
        ],
        ..FakeAudio::default()
    }
}

fn router_with(
    media: Arc<FakeMedia>,
    thumbnails: FakeThumbnails,
    audio: Arc<FakeAudio>,
) -> CommandRouter {
    let cache = DeviceCache::new(audio, Duration::from_secs(10), Duration::from_secs(10));
    CommandRouter::new(Handlers::new(media, Arc::new(thumbnails), Arc::new(cache)))
}

fn router(media: Arc<FakeMedia>, audio: Arc<FakeAudio>) -> CommandRouter {
    router_with(media, FakeThumbnails(Ok(None)), audio)
}

fn json(wire: &str) -> serde_json::Value {
    serde_json::from_str(wire).unwrap()
}

#[tokio::test]
async fn get_media_without_session_is_not_playing() {
    let router = router(Arc::new(FakeMedia::default()), Arc::default());

    assert_eq!(router.dispatch("get_media").await, r#"{"is_playing":false}"#);
}

#[tokio::test]
async fn get_media_while_playing_reports_track() {
    let router = router(FakeMedia::with_status(PlaybackStatus::Playing), Arc::default());

    let reply = json(&router.dispatch("get_media").await);

    assert_eq!(reply["is_playing"], true);
    assert_eq!(reply["title"], "Teardrop");
    assert_eq!(reply["app"], "spotify");
    assert_eq!(reply["position_formatted"], "1:01");
    assert_eq!(reply["duration_formatted"], "5:30");
    assert_eq!(reply["progress_percent"], 18.48);
}

#[tokio::test]
async fn get_media_fault_keeps_shape() {
    let media = FakeMedia::with_status(PlaybackStatus::Playing);
    *media.query_error.lock().unwrap() = Some("bus unavailable".to_string());
    let router = router(media, Arc::default());

    let reply = json(&router.dispatch("get_media").await);

    assert_eq!(reply["is_playing"], false);
    assert!(reply["error"].as_str().unwrap().contains("bus unavailable"));
    assert!(reply.get("title").is_none());
}

#[tokio::test]
async fn toggle_alternates_pause_and_resume() {
    let media = FakeMedia::with_status(PlaybackStatus::Playing);
    let router = router(media.clone(), Arc::default());

    let first = json(&router.dispatch("toggle_playback").await);
    let second = json(&router.dispatch("toggle_playback").await);

    assert_eq!(first["success"], true);
    assert_eq!(first["message"], "Media paused successfully");
    assert_eq!(second["success"], true);
    assert_eq!(second["message"], "Media resumed successfully");
    assert_eq!(media.actions(), vec![PlaybackAction::Pause, PlaybackAction::Play]);
}

#[tokio::test]
async fn refused_actions_report_failure_messages() {
    let media = FakeMedia::with_status(PlaybackStatus::Paused);
    *media.refuse_actions.lock().unwrap() = true;
    let router = router(media, Arc::default());

    let cases = [
        ("toggle_playback", "Failed to resume media"),
        ("next", "Failed to skip to next track"),
        ("prev", "Failed to skip to previous track"),
    ];
    for (request, message) in cases {
        let reply = json(&router.dispatch(request).await);
        assert_eq!(reply["success"], false, "{request}");
        assert_eq!(reply["message"], message, "{request}");
    }
}

#[tokio::test]
async fn skip_commands_succeed() {
    let media = FakeMedia::with_status(PlaybackStatus::Playing);
    let router = router(media.clone(), Arc::default());

    assert_eq!(
        json(&router.dispatch("next").await)["message"],
        "Skipped to next track successfully"
    );
    assert_eq!(
        json(&router.dispatch("prev").await)["message"],
        "Skipped to previous track successfully"
    );
    assert_eq!(media.actions(), vec![PlaybackAction::Next, PlaybackAction::Previous]);
}

#[tokio::test]
async fn controls_without_session_report_it() {
    let router = router(Arc::new(FakeMedia::default()), Arc::default());

    for request in ["toggle_playback", "next", "prev"] {
        assert_eq!(
            router.dispatch(request).await,
            r#"{"success":false,"message":"No active media session found"}"#,
            "{request}"
        );
    }
}

#[tokio::test]
async fn control_fault_is_prefixed() {
    let media = FakeMedia::with_status(PlaybackStatus::Playing);
    *media.query_error.lock().unwrap() = Some("player crashed".to_string());
    let router = router(media, Arc::default());

    let reply = json(&router.dispatch("toggle_playback").await);

    assert_eq!(reply["success"], false);
    assert!(reply["message"].as_str().unwrap().starts_with("Error: "));
}

#[tokio::test]
async fn thumbnail_is_base64_or_empty() {
    let media = Arc::new(FakeMedia::default());

    let with_art = router_with(
        media.clone(),
        FakeThumbnails(Ok(Some(b"hello".to_vec()))),
        Arc::default(),
    );
    let without_art = router_with(media.clone(), FakeThumbnails(Ok(None)), Arc::default());
    let broken = router_with(media, FakeThumbnails(Err("404".to_string())), Arc::default());

    assert_eq!(with_art.dispatch("get_thumbnail").await, "aGVsbG8=");
    assert_eq!(without_art.dispatch("get_thumbnail").await, "");
    assert_eq!(broken.dispatch("get_thumbnail").await, "");
}

#[tokio::test]
async fn device_listing_has_single_default() {
    let router = router(Arc::new(FakeMedia::default()), Arc::new(speakers_and_headphones()));

    let reply = json(&router.dispatch("get_audio_devices").await);
    let devices = reply.as_array().unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices.iter().filter(|d| d["default"] == true).count(), 1);
    assert_eq!(devices[1]["name"], "Headphones");
}

#[tokio::test]
async fn set_audio_device_switches_default() {
    let audio = Arc::new(speakers_and_headphones());
    let router = router(Arc::new(FakeMedia::default()), audio.clone());

    router.dispatch("get_audio_devices").await;
    let reply = router.dispatch("set_audio_device 1").await;
    let devices = json(&router.dispatch("get_audio_devices").await);

    assert_eq!(
        reply,
        r#"{"success":true,"message":"Default audio device set to 1"}"#
    );
    assert_eq!(devices[0]["default"], false);
    assert_eq!(devices[1]["default"], true);
    assert_eq!(audio.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn set_audio_device_unknown_index() {
    let audio = Arc::new(speakers_and_headphones());
    let router = router(Arc::new(FakeMedia::default()), audio.clone());

    router.dispatch("get_audio_devices").await;
    let reply = router.dispatch("set_audio_device 9").await;

    assert_eq!(reply, r#"{"success":false,"message":"Audio device 9 not found"}"#);
    assert_eq!(audio.set_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn set_audio_device_helper_failure() {
    let audio = Arc::new(FakeAudio {
        fail_set: true,
        ..speakers_and_headphones()
    });
    let router = router(Arc::new(FakeMedia::default()), audio);

    let reply = json(&router.dispatch("set_audio_device 1").await);

    assert_eq!(reply["success"], false);
    assert!(reply["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to set audio device: "));
}

#[tokio::test]
async fn malformed_index_never_reaches_provider() {
    let audio = Arc::new(speakers_and_headphones());
    let router = router(Arc::new(FakeMedia::default()), audio.clone());

    for request in ["set_audio_device", "set_audio_device x", "set_audio_device -2"] {
        assert_eq!(
            router.dispatch(request).await,
            r#"{"success":false,"message":"Invalid device index"}"#,
            "{request}"
        );
    }
    assert_eq!(audio.list_calls.load(Ordering::SeqCst), 0);
    assert_eq!(audio.set_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_command_touches_nothing() {
    let media = FakeMedia::with_status(PlaybackStatus::Playing);
    let audio = Arc::new(speakers_and_headphones());
    let router = router(media.clone(), audio.clone());

    assert_eq!(router.dispatch("play").await, r#"{"error":"Unknown command"}"#);
    assert!(media.actions().is_empty());
    assert_eq!(audio.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn session_answers_in_order_until_closed() {
    let router = router(FakeMedia::with_status(PlaybackStatus::Playing), Arc::default());
    let (transport, mut client) = ChannelTransport::pair(4);
    let session = tokio::spawn(Session::new(transport, router, "test").run());

    let first = client.request("bogus").await.unwrap();
    let second = client.request("toggle_playback").await.unwrap();
    drop(client);

    assert_eq!(first, r#"{"error":"Unknown command"}"#);
    assert_eq!(json(&second)["message"], "Media paused successfully");
    assert_eq!(session.await.unwrap(), 2);
}
