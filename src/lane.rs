use crate::config::GameConfig;

/// Dash marks on the internal lane boundaries. Cosmetic only.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneMarkers {
    marks: Vec<(f32, f32)>,
}

impl LaneMarkers {
    pub fn new(config: &GameConfig) -> Self {
        let length = config.lane_marker_length as i64;
        let step = (config.lane_marker_length + config.lane_marker_gap) as usize;
        let end = config.height as i64 + length;

        let mut marks = Vec::new();
        for lane in 1..config.lane_count {
            let x = (config.track_left() + lane as f32 * config.lane_width()).floor();
            for y in (-length..end).step_by(step) {
                marks.push((x, y as f32));
            }
        }

        Self { marks }
    }

    /// Moves every dash down by `speed`, wrapping those past the bottom to just above the top.
    pub fn scroll(&mut self, speed: f32, config: &GameConfig) {
        let height = config.height as f32;
        let length = config.lane_marker_length as f32;
        for (_, y) in &mut self.marks {
            *y += speed;
            if *y > height {
                *y = -length;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f32, f32)> {
        self.marks.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.marks.len()
    }
}
