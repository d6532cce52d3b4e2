//! Event-sourced playback state for the video showcase.
//!
//! The UI never assumes a command succeeded. Clicking the toggle only issues
//! the native `play()`/`pause()` call; state moves when the media element
//! confirms with a `loadeddata`, `play`, `pause` or `ended` event. A rejected
//! `play()` (autoplay policy, detached element) therefore leaves the control
//! showing exactly what the element is doing.

/// Confirmed status of the showcase media element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No data loaded yet. The toggle is disabled.
    #[default]
    Idle,
    /// Data available, nothing started.
    Ready,
    Playing,
    Paused,
    /// Playback ran to the end. Presented like `Paused`; toggling replays.
    Ended,
}

/// Native media element events the state machine consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// `loadeddata` fired, or the element already had data when we attached.
    Loaded,
    Play,
    Pause,
    Ended,
}

/// Native call the toggle issues for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

impl PlaybackState {
    /// Whether the element is confirmed to be rendering frames right now.
    /// Drives the play/pause icon.
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// The toggle stays disabled until the media reports loaded data.
    pub fn can_toggle(self) -> bool {
        !matches!(self, PlaybackState::Idle)
    }

    /// Command the toggle should issue: the opposite of the confirmed state.
    /// `None` while `Idle`.
    pub fn command(self) -> Option<MediaCommand> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing => Some(MediaCommand::Pause),
            PlaybackState::Ready | PlaybackState::Paused | PlaybackState::Ended => {
                Some(MediaCommand::Play)
            }
        }
    }
}

/// Applies one confirmed media event. Pairs not listed leave the state
/// unchanged, so stray or re-fired events can never corrupt the machine.
pub fn transition(state: PlaybackState, event: PlaybackEvent) -> PlaybackState {
    use PlaybackEvent as Ev;
    use PlaybackState as St;

    match (state, event) {
        (St::Idle, Ev::Loaded) => St::Ready,
        (St::Ready | St::Paused | St::Ended, Ev::Play) => St::Playing,
        (St::Playing, Ev::Pause) => St::Paused,
        // Browsers fire `pause` just before `ended`, so accept either order.
        (St::Playing | St::Paused, Ev::Ended) => St::Ended,
        (current, _) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::{PlaybackEvent as Ev, PlaybackState as St};

    #[test]
    fn starts_idle_with_the_toggle_disabled() {
        let state = St::default();
        assert_eq!(state, St::Idle);
        assert!(!state.can_toggle());
        assert_eq!(state.command(), None, "idle must not issue any native command");
    }

    #[test]
    fn loadeddata_arms_the_toggle() {
        let state = transition(St::Idle, Ev::Loaded);
        assert_eq!(state, St::Ready);
        assert!(state.can_toggle());
        assert!(!state.is_playing(), "ready media shows the play icon until confirmed");
    }

    #[test]
    fn playback_events_before_loadeddata_are_ignored() {
        assert_eq!(transition(St::Idle, Ev::Play), St::Idle);
        assert_eq!(transition(St::Idle, Ev::Pause), St::Idle);
        assert_eq!(transition(St::Idle, Ev::Ended), St::Idle);
    }

    #[test]
    fn toggle_requests_the_opposite_of_the_confirmed_state() {
        assert_eq!(St::Ready.command(), Some(MediaCommand::Play));
        assert_eq!(St::Playing.command(), Some(MediaCommand::Pause));
        assert_eq!(St::Paused.command(), Some(MediaCommand::Play));
    }

    #[test]
    fn confirmed_play_then_pause_round_trip() {
        let playing = transition(St::Ready, Ev::Play);
        assert_eq!(playing, St::Playing);
        assert!(playing.is_playing());

        let paused = transition(playing, Ev::Pause);
        assert_eq!(paused, St::Paused);
        assert!(!paused.is_playing());

        assert_eq!(transition(paused, Ev::Play), St::Playing);
    }

    #[test]
    fn unconfirmed_commands_move_nothing() {
        // A rejected play() produces no native event, so the machine holds.
        assert_eq!(transition(St::Ready, Ev::Pause), St::Ready);
        assert_eq!(transition(St::Paused, Ev::Pause), St::Paused);
        assert_eq!(transition(St::Playing, Ev::Play), St::Playing);
        assert_eq!(transition(St::Ready, Ev::Loaded), St::Ready, "a re-fired loadeddata must not reset progress");
    }

    #[test]
    fn ended_presents_like_paused_and_replays() {
        let ended = transition(St::Playing, Ev::Ended);
        assert_eq!(ended, St::Ended);
        assert!(!ended.is_playing(), "finished media shows the play icon");
        assert!(ended.can_toggle());
        assert_eq!(ended.command(), Some(MediaCommand::Play));
        assert_eq!(transition(ended, Ev::Play), St::Playing, "toggling after the end replays");
    }

    #[test]
    fn natural_end_survives_the_pause_then_ended_event_order() {
        let paused = transition(St::Playing, Ev::Pause);
        assert_eq!(transition(paused, Ev::Ended), St::Ended);
    }
}
