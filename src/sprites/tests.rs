//! Sprites domain: tests for animator bookkeeping and facing.

use super::{AnimationTrigger, Animator, mirrored_scale_x};
use crate::core::AnimationCue;

#[test]
fn test_animator_tracks_parameters() {
    let mut animator = Animator::default();

    animator.apply(AnimationCue::Running(true));
    animator.apply(AnimationCue::Grounded(true));
    animator.apply(AnimationCue::Speed(0.75));

    assert!(animator.is_running);
    assert!(animator.is_grounded);
    assert_eq!(animator.speed, 0.75);
    assert_eq!(animator.last_trigger, None);
}

#[test]
fn test_animator_records_triggers() {
    let mut animator = Animator::default();

    animator.apply(AnimationCue::Jump);
    assert_eq!(animator.last_trigger, Some(AnimationTrigger::Jump));

    animator.apply(AnimationCue::Death);
    assert_eq!(animator.last_trigger, Some(AnimationTrigger::Death));
    assert_eq!(animator.trigger_count, 2);
}

#[test]
fn test_running_animator_starts_running() {
    let animator = Animator::running();
    assert!(animator.is_running);
    assert!(!animator.is_grounded);
}

#[test]
fn test_mirrored_scale_keeps_magnitude() {
    assert_eq!(mirrored_scale_x(2.0, -1.0), -2.0);
    assert_eq!(mirrored_scale_x(-2.0, 1.0), 2.0);
    assert_eq!(mirrored_scale_x(-1.5, -1.0), -1.5);
}
