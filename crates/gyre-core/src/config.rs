//! Wave and stage configuration shapes.
//!
//! A stage file is JSON. Every section falls back to the documented defaults
//! when a field is omitted. Loading and validation happen once, before spawn;
//! the behavior core only ever sees the seeded components.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{AttackPatternData, BehaviorStateData, RetreatTimerData, ScaleAnimation};
use crate::constants::*;
use crate::enums::*;

/// Errors raised while loading a stage configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stage config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Entry path flown right after spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryPathConfig {
    pub path_type: EntryPathType,
    /// Seconds to complete the path.
    pub duration: f32,
    pub spiral_turns: f32,
    /// Degrees swept by an arc entry.
    pub arc_angle: f32,
    pub rotation: RotationDirection,
    /// Radius the path starts on. 0 uses the spawn point's distance to center.
    pub start_radius: f32,
    /// Orbit radius the path ends on. `None` uses the screen's orbit ring.
    pub target_radius: Option<f32>,
}

impl Default for EntryPathConfig {
    fn default() -> Self {
        Self {
            path_type: EntryPathType::default(),
            duration: DEFAULT_ENTRY_DURATION,
            spiral_turns: DEFAULT_SPIRAL_TURNS,
            arc_angle: DEFAULT_ARC_ANGLE,
            rotation: RotationDirection::default(),
            start_radius: 0.0,
            target_radius: None,
        }
    }
}

/// Spawn-in scale animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleAnimConfig {
    pub start_scale: f32,
    pub end_scale: f32,
    pub easing: EasingKind,
}

impl Default for ScaleAnimConfig {
    fn default() -> Self {
        Self {
            start_scale: 1.0,
            end_scale: 1.0,
            easing: EasingKind::Linear,
        }
    }
}

impl ScaleAnimConfig {
    /// Build an animation that runs over `duration` seconds.
    pub fn animation(&self, duration: f32) -> ScaleAnimation {
        ScaleAnimation {
            start_scale: self.start_scale,
            end_scale: self.end_scale,
            easing: self.easing,
            duration,
            elapsed: 0.0,
            active: true,
        }
    }
}

/// Post-entry behavior and orbit tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub post_entry: PostEntryBehavior,
    pub orbit_duration: f32,
    pub orbit_direction: RotationDirection,
    /// Degrees per second.
    pub orbit_speed: f32,
    pub max_attacks: u32,
    pub hover_duration: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            post_entry: PostEntryBehavior::default(),
            orbit_duration: DEFAULT_ORBIT_DURATION,
            orbit_direction: RotationDirection::default(),
            orbit_speed: DEFAULT_ORBIT_SPEED,
            max_attacks: 0,
            hover_duration: DEFAULT_HOVER_DURATION,
        }
    }
}

impl BehaviorConfig {
    /// Seed a fresh behavior record in the Entering state.
    pub fn seed_state(&self) -> BehaviorStateData {
        BehaviorStateData {
            orbit_speed: self.orbit_speed,
            orbit_direction: self.orbit_direction,
            orbit_duration: self.orbit_duration,
            post_entry_behavior: self.post_entry,
            max_attacks: self.max_attacks,
            hover_duration: self.hover_duration,
            ..BehaviorStateData::default()
        }
    }
}

/// Attack run tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    pub pattern: AttackPatternType,
    pub cooldown: f32,
    pub rush_speed: f32,
    pub return_speed: f32,
    /// Optional cap on a single run (seconds). 0 disables it.
    pub duration: f32,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            pattern: AttackPatternType::default(),
            cooldown: 0.0,
            rush_speed: DEFAULT_RUSH_SPEED,
            return_speed: DEFAULT_RETREAT_SPEED,
            duration: 0.0,
        }
    }
}

impl AttackConfig {
    pub fn seed_pattern(&self) -> AttackPatternData {
        AttackPatternData {
            pattern_type: self.pattern,
            rush_speed: self.rush_speed,
            return_speed: self.return_speed,
            cooldown: self.cooldown,
            attack_duration: self.duration,
            ..AttackPatternData::default()
        }
    }
}

/// Weapon cadence. Read by the weapon system, never by the behavior core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireConfig {
    /// Seconds between volleys.
    pub interval: f32,
    pub burst_count: u32,
    pub bullet_speed: f32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            interval: 2.0,
            burst_count: 1,
            bullet_speed: 250.0,
        }
    }
}

/// Forced retreat tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetreatConfig {
    pub health_threshold: f32,
    /// Seconds on stage before a forced exit. 0 disables it.
    pub timeout: f32,
    pub speed: f32,
}

impl Default for RetreatConfig {
    fn default() -> Self {
        Self {
            health_threshold: RETREAT_HEALTH_THRESHOLD,
            timeout: 0.0,
            speed: DEFAULT_RETREAT_SPEED,
        }
    }
}

impl RetreatConfig {
    pub fn seed_timer(&self) -> RetreatTimerData {
        RetreatTimerData {
            timeout_duration: self.timeout,
            retreat_speed: self.speed,
            health_threshold: self.health_threshold,
            ..RetreatTimerData::default()
        }
    }
}

/// A group of identical enemies spawned in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyGroupConfig {
    pub enemy_type: String,
    pub count: u32,
    /// Seconds after the wave starts before the first spawn.
    pub delay: f32,
    /// Seconds between consecutive spawns.
    pub spawn_interval: f32,
    /// Bearing of the first spawn (degrees, from center).
    pub spawn_angle: f32,
    /// Angular spacing between consecutive spawns (degrees).
    pub spread_degrees: f32,
    pub spawn_radius: f32,
    pub health: f32,
    pub entry_path: EntryPathConfig,
    pub scale_anim: ScaleAnimConfig,
    pub behavior: BehaviorConfig,
    pub attack: Option<AttackConfig>,
    pub fire: Option<FireConfig>,
    pub retreat: Option<RetreatConfig>,
}

impl Default for EnemyGroupConfig {
    fn default() -> Self {
        Self {
            enemy_type: String::from("drone"),
            count: 1,
            delay: 0.0,
            spawn_interval: 0.0,
            spawn_angle: 0.0,
            spread_degrees: 0.0,
            spawn_radius: DEFAULT_SPAWN_RADIUS,
            health: DEFAULT_ENEMY_HEALTH,
            entry_path: EntryPathConfig::default(),
            scale_anim: ScaleAnimConfig::default(),
            behavior: BehaviorConfig::default(),
            attack: None,
            fire: None,
            retreat: None,
        }
    }
}

/// One wave of the stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Seconds after stage start.
    pub start_time: f32,
    pub groups: Vec<EnemyGroupConfig>,
}

/// A complete stage: an ordered list of waves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub name: String,
    pub waves: Vec<WaveConfig>,
}

impl StageConfig {
    /// Parse and validate a stage from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let stage: StageConfig = serde_json::from_str(json)?;
        stage.validate()?;
        Ok(stage)
    }

    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> u32 {
        self.waves
            .iter()
            .flat_map(|w| w.groups.iter())
            .map(|g| g.count)
            .sum()
    }

    /// Reject values the behavior core cannot fly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (wi, wave) in self.waves.iter().enumerate() {
            non_negative(&format!("waves[{wi}].start_time"), wave.start_time)?;
            for (gi, group) in wave.groups.iter().enumerate() {
                group.validate(&format!("waves[{wi}].groups[{gi}]"))?;
            }
        }
        Ok(())
    }
}

impl EnemyGroupConfig {
    fn validate(&self, path: &str) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::invalid(
                format!("{path}.count"),
                "a group must spawn at least one enemy",
            ));
        }
        non_negative(&format!("{path}.delay"), self.delay)?;
        non_negative(&format!("{path}.spawn_interval"), self.spawn_interval)?;
        finite(&format!("{path}.spawn_angle"), self.spawn_angle)?;
        finite(&format!("{path}.spread_degrees"), self.spread_degrees)?;
        non_negative(&format!("{path}.spawn_radius"), self.spawn_radius)?;
        if !(self.health.is_finite() && self.health > 0.0) {
            return Err(ConfigError::invalid(
                format!("{path}.health"),
                "must be positive",
            ));
        }

        let entry = &self.entry_path;
        non_negative(&format!("{path}.entry_path.duration"), entry.duration)?;
        non_negative(&format!("{path}.entry_path.spiral_turns"), entry.spiral_turns)?;
        finite(&format!("{path}.entry_path.arc_angle"), entry.arc_angle)?;
        non_negative(&format!("{path}.entry_path.start_radius"), entry.start_radius)?;
        if let Some(r) = entry.target_radius {
            non_negative(&format!("{path}.entry_path.target_radius"), r)?;
        }

        non_negative(&format!("{path}.scale_anim.start_scale"), self.scale_anim.start_scale)?;
        non_negative(&format!("{path}.scale_anim.end_scale"), self.scale_anim.end_scale)?;

        let behavior = &self.behavior;
        non_negative(&format!("{path}.behavior.orbit_duration"), behavior.orbit_duration)?;
        finite(&format!("{path}.behavior.orbit_speed"), behavior.orbit_speed)?;
        non_negative(&format!("{path}.behavior.hover_duration"), behavior.hover_duration)?;

        if let Some(attack) = &self.attack {
            positive(&format!("{path}.attack.rush_speed"), attack.rush_speed)?;
            positive(&format!("{path}.attack.return_speed"), attack.return_speed)?;
            non_negative(&format!("{path}.attack.cooldown"), attack.cooldown)?;
            non_negative(&format!("{path}.attack.duration"), attack.duration)?;
        }
        if let Some(fire) = &self.fire {
            positive(&format!("{path}.fire.interval"), fire.interval)?;
        }
        if let Some(retreat) = &self.retreat {
            if !(0.0..=1.0).contains(&retreat.health_threshold) {
                return Err(ConfigError::invalid(
                    format!("{path}.retreat.health_threshold"),
                    "must be within [0, 1]",
                ));
            }
            non_negative(&format!("{path}.retreat.timeout"), retreat.timeout)?;
            positive(&format!("{path}.retreat.speed"), retreat.speed)?;
        }
        Ok(())
    }
}

fn finite(field: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be a finite number"))
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn positive(field: &str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} is not positive")));
    }
    Ok(())
}
