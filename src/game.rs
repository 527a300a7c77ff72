use rand::rngs::StdRng;
use rand::Rng;
#[cfg(test)]
use rand::SeedableRng;

use crate::action::Controls;
use crate::car::Car;
use crate::config::{ConfigError, GameConfig, Palette, Tuning};
use crate::lane::LaneMarkers;
use crate::record::RunLog;
use crate::spawner::Spawner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    GameOver,
    Terminated,
}

/// One play session: the player car, the obstacles and the score.
///
/// Generic over the random source so tests can seed it.
pub struct Game<R: Rng = StdRng> {
    config: GameConfig,
    tuning: Tuning,
    palette: Palette,
    rng: R,
    state: State,
    player: Car,
    obstacles: Vec<Car>,
    markers: LaneMarkers,
    spawner: Spawner,
    score: f64,
    frames: u64,
    dodged: u32,
    // current run already in the log
    recorded: bool,
    log: RunLog,
}

#[cfg(test)]
impl Game<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            GameConfig::default(),
            Tuning::default(),
            Palette::default(),
            StdRng::seed_from_u64(seed),
        )
        .expect("default config is valid")
    }
}

impl<R: Rng> Game<R> {
    pub fn new(
        config: GameConfig,
        tuning: Tuning,
        palette: Palette,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        tuning.validate()?;

        let spawner = Spawner::new(tuning.spawn_cooldown.clone(), &mut rng);
        let markers = LaneMarkers::new(&config);
        let (x, y) = Self::player_start(&config, &tuning);
        let player = Car::new(
            x,
            y,
            tuning.car_width(&config),
            tuning.player_height,
            palette.player_car,
        );

        Ok(Self {
            config,
            tuning,
            palette,
            rng,
            state: State::Running,
            player,
            obstacles: Vec::new(),
            markers,
            spawner,
            score: 0.0,
            frames: 0,
            dodged: 0,
            recorded: false,
            log: RunLog::default(),
        })
    }

    fn player_start(config: &GameConfig, tuning: &Tuning) -> (f32, f32) {
        (
            config.lane_center(config.middle_lane()),
            config.height as f32 - tuning.player_offset_from_bottom,
        )
    }

    /// Advances the session by one frame.
    pub fn update(&mut self, controls: &Controls) {
        if self.state == State::Terminated {
            return;
        }
        if controls.quit {
            log::info!("quit requested at score {:.1}", self.score);
            self.state = State::Terminated;
            return;
        }
        if self.state == State::GameOver {
            if controls.restart {
                self.restart();
            }
            return;
        }

        self.steer(controls.direction());
        self.markers
            .scroll(self.tuning.road_scroll_speed, &self.config);
        if self.advance_obstacles() {
            self.crash();
            return;
        }
        self.maybe_spawn();
        self.score += self.config.frame_time();
        self.frames += 1;
    }

    /// Moves the player unless the new position would leave the track.
    fn steer(&mut self, direction: i8) {
        if direction == 0 {
            return;
        }
        let dx = f32::from(direction) * self.tuning.car_speed;
        let half = self.player.width / 2.0;
        let new_x = self.player.x + dx;
        if new_x - half >= self.config.track_left() && new_x + half <= self.config.track_right() {
            self.player.translate(dx, 0.0);
        }
    }

    /// Moves every obstacle down and drops those past the bottom edge.
    /// Returns true on the first obstacle found touching the player.
    fn advance_obstacles(&mut self) -> bool {
        let bottom = self.config.height as f32;
        let mut gone = Vec::new();

        for (index, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.translate(0.0, self.tuning.obstacle_speed);

            if obstacle.intersects(&self.player) {
                return true;
            }
            if obstacle.rect().top() > bottom {
                gone.push(index);
            }
        }

        for index in gone.into_iter().rev() {
            self.obstacles.remove(index);
            self.dodged += 1;
        }
        false
    }

    fn maybe_spawn(&mut self) {
        let lanes = self.config.lane_count as usize;
        let Some(lane) = self.spawner.tick(lanes, &mut self.rng) else {
            return;
        };

        let height = self.tuning.obstacle_height;
        let obstacle = Car::new(
            self.config.lane_center(lane),
            -height,
            self.tuning.car_width(&self.config),
            height,
            self.palette.enemy_car,
        );
        log::debug!("frame {}: obstacle in lane {lane}", self.frames);
        self.obstacles.push(obstacle);
    }

    fn crash(&mut self) {
        self.state = State::GameOver;
        self.recorded = true;
        let record = self.log.push(self.score, self.frames, self.dodged);
        log::info!(
            "crash on run {}: score {:.1} after {} frames, {} dodged",
            record.run,
            record.score,
            record.frames,
            record.dodged
        );
    }

    /// Starts a new run from scratch; the score does not carry over.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.score = 0.0;
        self.frames = 0;
        self.dodged = 0;
        self.recorded = false;
        self.spawner.reset(&mut self.rng);
        let (x, y) = Self::player_start(&self.config, &self.tuning);
        self.player.move_to(x, y);
        self.state = State::Running;
        log::info!("run {} started", self.log.records.len() + 1);
    }

    /// Run log including the run in progress, if it scored anything.
    pub fn finish(mut self) -> RunLog {
        if !self.recorded && self.frames > 0 {
            self.log.push(self.score, self.frames, self.dodged);
        }
        self.log
    }

    #[cfg(test)]
    pub const fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Terminated
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub const fn player(&self) -> &Car {
        &self.player
    }

    pub fn obstacles(&self) -> &[Car] {
        &self.obstacles
    }

    pub const fn markers(&self) -> &LaneMarkers {
        &self.markers
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[cfg(test)]
    pub const fn log(&self) -> &RunLog {
        &self.log
    }

    #[cfg(test)]
    fn place_obstacle(&mut self, x: f32, y: f32) {
        let height = self.tuning.obstacle_height;
        let width = self.tuning.car_width(&self.config);
        self.obstacles
            .push(Car::new(x, y, width, height, self.palette.enemy_car));
    }
}
