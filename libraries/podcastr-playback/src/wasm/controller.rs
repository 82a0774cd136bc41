//! WASM-compatible PlayerController wrapper

use crate::{Navigation, PlayerConfig, PlayerController, PlayerError};
use js_sys::Function;
use podcastr_core::Episode;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// WASM-compatible player controller
///
/// Wraps the core PlayerController with a JavaScript-friendly API.
/// Episodes cross the boundary as plain JS objects with camelCase fields.
#[wasm_bindgen]
pub struct WasmPlayerController {
    inner: PlayerController,

    // Called as `callback(event, snapshot)` after each state change
    on_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayerController {
    /// Create a new player controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_config(PlayerConfig::default())
    }

    /// Create a player controller from a config object
    /// (`{ looping?, shuffling?, shuffleSeed? }`)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<WasmPlayerController, JsValue> {
        console_error_panic_hook::set_once();
        let config: WasmConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        Ok(Self::with_config(config.into()))
    }

    fn with_config(config: PlayerConfig) -> Self {
        Self {
            inner: PlayerController::new(config),
            on_change: None,
            on_error: None,
        }
    }

    // ===== Queue =====

    /// Replace the queue and start playing at `startIndex`
    #[wasm_bindgen(js_name = loadQueue)]
    pub fn load_queue(&mut self, episodes: JsValue, start_index: usize) -> Result<(), JsValue> {
        let episodes: Vec<Episode> = serde_wasm_bindgen::from_value(episodes)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        let result = self.inner.load_queue(Arc::<[Episode]>::from(episodes), start_index);
        self.flush();
        result.map_err(|e| self.handle_error(e))
    }

    /// Play one episode on its own
    pub fn play(&mut self, episode: JsValue) -> Result<(), JsValue> {
        let episode: Episode = serde_wasm_bindgen::from_value(episode)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episode: {}", e)))?;

        let result = self.inner.play_single(episode);
        self.flush();
        result.map_err(|e| self.handle_error(e))
    }

    /// Empty the queue and stop
    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.inner.clear_player_state();
        self.flush();
    }

    // ===== Transport =====

    /// Flip the playing flag
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
        self.flush();
    }

    /// Flip the loop flag
    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.inner.toggle_loop();
        self.flush();
    }

    /// Flip the shuffle flag
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.flush();
    }

    /// Report play/pause from the audio element
    #[wasm_bindgen(js_name = setIsPlaying)]
    pub fn set_is_playing(&mut self, value: bool) {
        self.inner.set_is_playing(value);
        self.flush();
    }

    // ===== Navigation =====

    /// Go to the next episode ("moved" | "restart" | "unchanged")
    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) -> String {
        let navigation = self.inner.play_next();
        self.flush();
        navigation_name(navigation)
    }

    /// Go to the previous episode ("moved" | "unchanged")
    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) -> String {
        let navigation = self.inner.play_previous();
        self.flush();
        navigation_name(navigation)
    }

    /// Report the audio element's `ended` event
    /// ("moved" | "restart" | "cleared" | "unchanged")
    #[wasm_bindgen(js_name = handleEpisodeEnded)]
    pub fn handle_episode_ended(&mut self) -> String {
        let navigation = self.inner.handle_episode_ended();
        self.flush();
        navigation_name(navigation)
    }

    // ===== Progress =====

    /// Report `currentTime` from the audio element (seconds)
    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&mut self, seconds: f64) {
        self.inner.set_progress(whole_seconds(seconds));
        self.flush();
    }

    /// Scrub to a position (seconds)
    pub fn seek(&mut self, seconds: f64) -> Result<(), JsValue> {
        let result = self.inner.seek(whole_seconds(seconds));
        self.flush();
        result.map_err(|e| self.handle_error(e))
    }

    // ===== State Queries =====

    /// Playing flag
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    /// Loop flag
    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.inner.is_looping()
    }

    /// Shuffle flag
    #[wasm_bindgen(js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.inner.is_shuffling()
    }

    /// Whether "next" can move
    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Whether "previous" can move
    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    /// Index of the current episode (undefined when empty)
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.inner.current_index()
    }

    /// Position in the current episode, in seconds
    pub fn progress(&self) -> f64 {
        self.inner.progress() as f64
    }

    /// Current episode as a JS object (null when empty)
    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> JsValue {
        self.inner
            .current_episode()
            .and_then(|episode| serde_wasm_bindgen::to_value(episode).ok())
            .unwrap_or(JsValue::NULL)
    }

    /// Loaded queue as an array of JS objects
    #[wasm_bindgen(js_name = episodeQueue)]
    pub fn episode_queue(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.episode_queue()[..]).unwrap_or(JsValue::NULL)
    }

    /// Full state snapshot as a JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register the state change callback: `(event, snapshot) => void`
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn flush(&mut self) {
        let events = self.inner.drain_events();
        let Some(ref cb) = self.on_change else {
            return;
        };
        if events.is_empty() {
            return;
        }

        let snapshot =
            serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL);
        for event in events {
            if let Ok(js_event) = serde_wasm_bindgen::to_value(&event) {
                cb.call2(&JsValue::NULL, &js_event, &snapshot).ok();
            }
        }
    }

    fn handle_error(&self, error: PlayerError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

impl Default for WasmPlayerController {
    fn default() -> Self {
        Self::new()
    }
}

/// Config as it arrives from JS (camelCase, all optional)
#[derive(serde::Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct WasmConfig {
    looping: bool,
    shuffling: bool,
    shuffle_seed: Option<u64>,
}

impl From<WasmConfig> for PlayerConfig {
    fn from(config: WasmConfig) -> Self {
        Self {
            looping: config.looping,
            shuffling: config.shuffling,
            shuffle_seed: config.shuffle_seed,
        }
    }
}

fn navigation_name(navigation: Navigation) -> String {
    navigation.as_str().to_string()
}

fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}
