//! Observer delivery tests
//!
//! Subscribed callbacks must see the state after the change, in emission
//! order, and stop receiving events once unsubscribed.

use podcastr_core::Episode;
use podcastr_playback::{PlayerController, PlayerEvent, PlayerSnapshot, SharedPlayer};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(PlayerEvent, PlayerSnapshot)>>>;

fn create_queue(n: usize) -> Vec<Episode> {
    (0..n)
        .map(|i| {
            Episode::new(
                format!("ep{}", i),
                format!("Episode {}", i),
                "https://cdn/ep.mp3",
                900,
            )
        })
        .collect()
}

fn record(player: &mut PlayerController) -> (Seen, podcastr_playback::SubscriptionId) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let id = player.subscribe(move |event, snapshot| {
        log.lock().unwrap().push((event.clone(), snapshot.clone()));
    });
    (seen, id)
}

#[test]
fn test_snapshot_reflects_completed_change() {
    let mut player = PlayerController::default();
    let (seen, _) = record(&mut player);

    player.load_queue(create_queue(3), 1).unwrap();
    player.play_next();

    let seen = seen.lock().unwrap();
    for (event, snapshot) in seen.iter() {
        // Every event already sees the fully loaded queue
        assert_eq!(snapshot.queue_len, 3);
        if let PlayerEvent::EpisodeChanged { index, episode_id, .. } = event {
            assert_eq!(snapshot.current_index, Some(*index));
            assert_eq!(&snapshot.current_episode.as_ref().unwrap().id, episode_id);
        }
    }

    let (last_event, last_snapshot) = seen.last().unwrap();
    assert!(matches!(last_event, PlayerEvent::EpisodeChanged { index: 2, .. }));
    assert!(!last_snapshot.has_next);
}

#[test]
fn test_observer_sees_full_event_sequence() {
    let mut player = PlayerController::default();
    let (seen, _) = record(&mut player);

    player.load_queue(create_queue(2), 0).unwrap();
    player.toggle_loop();
    player.play_next();
    player.toggle_play();
    player.clear_player_state();

    let observed: Vec<PlayerEvent> =
        seen.lock().unwrap().iter().map(|(e, _)| e.clone()).collect();
    assert_eq!(observed.len(), 7);
    assert_eq!(observed[4], PlayerEvent::Restarted { episode_id: "ep0".into() });
    assert_eq!(observed[6], PlayerEvent::Cleared);
}

#[test]
fn test_subscribed_host_does_not_buffer_events() {
    let mut player = PlayerController::default();
    player.subscribe(|_, _| {});

    let mut long_episode = create_queue(1);
    long_episode[0].duration = 100_000;
    player.load_queue(long_episode, 0).unwrap();
    for second in 1..=5_000 {
        player.set_progress(second);
    }

    assert!(!player.has_pending_events());
    assert!(player.drain_events().is_empty());
}

#[test]
fn test_events_buffer_again_after_last_unsubscribe() {
    let mut player = PlayerController::default();
    let (_, id) = record(&mut player);

    player.load_queue(create_queue(2), 0).unwrap();
    assert!(!player.has_pending_events());

    player.unsubscribe(id);
    player.play_next();
    assert_eq!(player.drain_events().len(), 1);
}

#[test]
fn test_loop_restart_after_pause_reports_playing() {
    let mut player = PlayerController::default();
    player.play_single(create_queue(1).remove(0)).unwrap();
    player.toggle_loop();
    player.set_progress(600);
    // Media element pauses right before reporting the end
    player.set_is_playing(false);

    let (seen, _) = record(&mut player);
    player.handle_episode_ended();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);

    let (event, snapshot) = &seen[0];
    assert_eq!(*event, PlayerEvent::Restarted { episode_id: "ep0".into() });
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.progress, 0);

    let (event, snapshot) = &seen[1];
    assert_eq!(*event, PlayerEvent::PlayingChanged { is_playing: true });
    assert!(snapshot.is_playing);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let mut player = PlayerController::default();
    let (first, first_id) = record(&mut player);
    let (second, _) = record(&mut player);

    player.load_queue(create_queue(2), 0).unwrap();
    assert!(player.unsubscribe(first_id));
    let delivered = first.lock().unwrap().len();

    player.play_next();
    player.toggle_shuffle();

    assert_eq!(first.lock().unwrap().len(), delivered);
    assert_eq!(second.lock().unwrap().len(), delivered + 2);
    assert!(!player.unsubscribe(first_id));
}

#[test]
fn test_rejected_calls_notify_nobody() {
    let mut player = PlayerController::default();
    let (seen, _) = record(&mut player);

    assert!(player.load_queue(Vec::<Episode>::new(), 0).is_err());
    player.toggle_play();
    player.set_is_playing(true);
    player.play_next();
    player.play_previous();
    player.clear_player_state();
    assert!(player.seek(10).is_err());

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_shared_player_observer_across_threads() {
    let player = SharedPlayer::default();
    let seen: Arc<Mutex<Vec<PlayerEvent>>> = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&seen);
    player
        .with(|p| {
            p.subscribe(move |event, _| log.lock().unwrap().push(event.clone()));
        })
        .unwrap();

    let worker = player.clone();
    std::thread::spawn(move || {
        worker
            .with(|p| p.load_queue(create_queue(4), 0))
            .unwrap()
            .unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(
        seen.lock().unwrap().first(),
        Some(&PlayerEvent::QueueLoaded {
            length: 4,
            start_index: 0
        })
    );
}
