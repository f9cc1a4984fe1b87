//! Core domain: one-shot tasks fired on the main loop after a wall-clock delay.

use std::time::Duration;

use bevy::prelude::*;

pub type DeferredFn = Box<dyn FnOnce(&mut World) + Send + Sync + 'static>;

struct DeferredTask {
    owner: Entity,
    timer: Timer,
    run: DeferredFn,
}

/// Queue of deferred tasks. Each task belongs to an owner entity and is
/// dropped unfired if the owner is gone by the time it comes due.
#[derive(Resource, Default)]
pub struct DeferredTasks {
    pending: Vec<DeferredTask>,
}

impl DeferredTasks {
    pub fn schedule(&mut self, owner: Entity, delay: Duration, run: DeferredFn) {
        self.pending.push(DeferredTask {
            owner,
            timer: Timer::new(delay, TimerMode::Once),
            run,
        });
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every task and hand back the ones that came due with a live
    /// owner. Tasks with a dead owner are discarded whether due or not.
    pub fn tick(&mut self, delta: Duration, owner_alive: impl Fn(Entity) -> bool) -> Vec<DeferredFn> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());

        for mut task in self.pending.drain(..) {
            if !owner_alive(task.owner) {
                debug!("Dropping deferred task for despawned {:?}", task.owner);
                continue;
            }
            task.timer.tick(delta);
            if task.timer.remaining().is_zero() {
                due.push(task.run);
            } else {
                remaining.push(task);
            }
        }

        self.pending = remaining;
        due
    }
}
