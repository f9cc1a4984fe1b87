//! Data definitions for the actor content file.
//!
//! These structs mirror assets/data/actors.ron. Positions and sizes are
//! `(x, y)` tuples in world units.

use serde::{Deserialize, Serialize};

use crate::movement::ColliderTag;

pub type Pair = (f32, f32);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActorsFile {
    pub schema_version: u32,
    pub player: PlayerDef,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub sounds: SoundBankDef,
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDef {
    pub position: Pair,
    #[serde(default = "default_player_size")]
    pub size: Pair,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_jump_impulse")]
    pub jump_impulse: f32,
    /// Seconds between death and the game-over notification.
    #[serde(default = "default_respawn_delay")]
    pub respawn_delay: f32,
}

fn default_player_size() -> Pair {
    (0.8, 1.0)
}

fn default_move_speed() -> f32 {
    5.0
}

fn default_jump_impulse() -> f32 {
    15.0
}

fn default_respawn_delay() -> f32 {
    2.0
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            position: (-6.0, 0.0),
            size: default_player_size(),
            move_speed: default_move_speed(),
            jump_impulse: default_jump_impulse(),
            respawn_delay: default_respawn_delay(),
        }
    }
}

// ============================================================================
// Enemies
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDef {
    pub id: String,
    pub position: Pair,
    #[serde(default = "default_enemy_size")]
    pub size: Pair,
    /// Patrol endpoints A and B. The enemy starts out walking to B.
    pub waypoints: Option<(Pair, Pair)>,
    #[serde(default = "default_patrol_speed")]
    pub speed: f32,
    pub ground_check: Option<GroundCheckDef>,
    /// Seconds between idle monster sounds.
    #[serde(default = "default_sound_interval")]
    pub sound_interval: f32,
    /// Radius of the sensor that reacts to the player coming close.
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroundCheckDef {
    /// Offset from the enemy centre while facing right. Mirrored when facing left.
    pub offset: Pair,
    #[serde(default = "default_check_radius")]
    pub radius: f32,
    #[serde(default)]
    pub tag: ColliderTag,
}

fn default_enemy_size() -> Pair {
    (0.8, 0.8)
}

fn default_patrol_speed() -> f32 {
    2.0
}

fn default_sound_interval() -> f32 {
    3.0
}

fn default_proximity_radius() -> f32 {
    1.5
}

fn default_check_radius() -> f32 {
    0.2
}

// ============================================================================
// Level geometry and sounds
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub position: Pair,
    pub size: Pair,
    #[serde(default)]
    pub tag: ColliderTag,
}

/// Asset paths per sound cue. `None` leaves the cue silent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SoundBankDef {
    pub running: Option<String>,
    pub jump: Option<String>,
    pub death: Option<String>,
    pub monster: Option<String>,
}

impl Default for ActorsFile {
    fn default() -> Self {
        Self {
            schema_version: 1,
            player: PlayerDef::default(),
            enemies: vec![EnemyDef {
                id: "enemy_ground_patrol".to_string(),
                position: (2.0, -1.6),
                size: default_enemy_size(),
                waypoints: Some(((-1.0, -1.6), (5.0, -1.6))),
                speed: default_patrol_speed(),
                ground_check: Some(GroundCheckDef {
                    offset: (0.5, -0.5),
                    radius: default_check_radius(),
                    tag: ColliderTag::Ground,
                }),
                sound_interval: default_sound_interval(),
                proximity_radius: default_proximity_radius(),
            }],
            platforms: vec![
                PlatformDef {
                    position: (0.0, -2.5),
                    size: (14.0, 1.0),
                    tag: ColliderTag::Ground,
                },
                PlatformDef {
                    position: (-3.0, 0.5),
                    size: (3.0, 0.4),
                    tag: ColliderTag::Ground,
                },
            ],
            sounds: SoundBankDef::default(),
        }
    }
}
