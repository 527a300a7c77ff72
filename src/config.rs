use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size {width}x{height} is empty")]
    EmptyScreen { width: u32, height: u32 },
    #[error("lane count must be at least 1")]
    NoLanes,
    #[error("frame rate must be at least 1")]
    ZeroFps,
    #[error("border offset {border_x} leaves no track on a {width} px screen")]
    NoTrack { border_x: u32, width: u32 },
    #[error("lane markers need a non-zero length and gap")]
    MarkerGeometry,
    #[error("spawn cooldown {start}..={end} is empty or allows a zero delay")]
    SpawnCooldown { start: u32, end: u32 },
    #[error("car width ratio {0} must be within (0, 1]")]
    CarWidthRatio(f32),
    #[error("speeds and car heights must be positive")]
    NonPositiveTuning,
}

/// Screen and track layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub lane_count: u32,
    pub border_x: u32,
    pub lane_marker_length: u32,
    pub lane_marker_gap: u32,
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            lane_count: 3,
            border_x: 60,
            lane_marker_length: 48,
            lane_marker_gap: 80,
            fps: 60,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }
        if self.lane_count == 0 {
            return Err(ConfigError::NoLanes);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.border_x.saturating_mul(2) >= self.width {
            return Err(ConfigError::NoTrack {
                border_x: self.border_x,
                width: self.width,
            });
        }
        if self.lane_marker_length == 0 || self.lane_marker_gap == 0 {
            return Err(ConfigError::MarkerGeometry);
        }
        Ok(())
    }

    pub fn track_left(&self) -> f32 {
        self.border_x as f32
    }

    pub fn track_right(&self) -> f32 {
        (self.width - self.border_x) as f32
    }

    pub fn lane_width(&self) -> f32 {
        (self.track_right() - self.track_left()) / self.lane_count as f32
    }

    /// Horizontal center of lane `lane`, counted from the left border.
    pub fn lane_center(&self, lane: usize) -> f32 {
        self.track_left() + self.lane_width() * (lane as f32 + 0.5)
    }

    pub fn middle_lane(&self) -> usize {
        self.lane_count as usize / 2
    }

    /// Score added per running frame.
    pub fn frame_time(&self) -> f64 {
        1.0 / f64::from(self.fps)
    }
}

/// Per-frame speeds and car proportions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub car_speed: f32,
    pub road_scroll_speed: f32,
    pub obstacle_speed: f32,
    pub spawn_cooldown: RangeInclusive<u32>,
    pub car_width_ratio: f32,
    pub player_height: f32,
    pub obstacle_height: f32,
    pub player_offset_from_bottom: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            car_speed: 5.0,
            road_scroll_speed: 3.0,
            obstacle_speed: 3.0,
            spawn_cooldown: 60..=120,
            car_width_ratio: 0.6,
            player_height: 40.0,
            obstacle_height: 50.0,
            player_offset_from_bottom: 80.0,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (start, end) = (*self.spawn_cooldown.start(), *self.spawn_cooldown.end());
        if start == 0 || start > end {
            return Err(ConfigError::SpawnCooldown { start, end });
        }
        if !(self.car_width_ratio > 0.0 && self.car_width_ratio <= 1.0) {
            return Err(ConfigError::CarWidthRatio(self.car_width_ratio));
        }
        let positive = [
            self.car_speed,
            self.road_scroll_speed,
            self.obstacle_speed,
            self.player_height,
            self.obstacle_height,
        ];
        if positive.iter().any(|v| *v <= 0.0) {
            return Err(ConfigError::NonPositiveTuning);
        }
        Ok(())
    }

    /// Width shared by the player and obstacles, truncated to whole pixels.
    pub fn car_width(&self, config: &GameConfig) -> f32 {
        (config.lane_width() * self.car_width_ratio).floor()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub road: Rgb,
    pub grass: Rgb,
    pub lane_marker: Rgb,
    pub player_car: Rgb,
    pub enemy_car: Rgb,
    pub text: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            road: Rgb(60, 60, 60),
            grass: Rgb(34, 139, 34),
            lane_marker: Rgb(255, 255, 255),
            player_car: Rgb(255, 0, 0),
            enemy_car: Rgb(0, 100, 255),
            text: Rgb(255, 255, 255),
            background: Rgb(0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(Tuning::default().validate(), Ok(()));
        assert_eq!(config.track_left(), 60.0);
        assert_eq!(config.track_right(), 340.0);
        assert!((config.lane_width() - 280.0 / 3.0).abs() < 1e-4);
        assert!((config.lane_center(1) - 200.0).abs() < 1e-4);
        assert_eq!(config.middle_lane(), 1);
    }

    #[test]
    fn borders_must_leave_a_track() {
        let config = GameConfig {
            border_x: 200,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoTrack {
                border_x: 200,
                width: 400
            })
        );
    }

    #[test]
    fn rejects_zero_lanes_and_zero_fps() {
        let no_lanes = GameConfig {
            lane_count: 0,
            ..GameConfig::default()
        };
        assert_eq!(no_lanes.validate(), Err(ConfigError::NoLanes));

        let no_fps = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert_eq!(no_fps.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn rejects_zero_spawn_delay() {
        let tuning = Tuning {
            spawn_cooldown: 0..=10,
            ..Tuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(ConfigError::SpawnCooldown { start: 0, end: 10 })
        );
    }

    #[test]
    fn car_width_is_whole_pixels() {
        let config = GameConfig::default();
        assert_eq!(Tuning::default().car_width(&config), 56.0);
    }
}
