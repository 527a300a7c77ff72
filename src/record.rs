use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Outcome of one run, from start or restart to crash or quit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run: usize,
    pub score: f64,
    pub frames: u64,
    pub dodged: u32,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    pub records: Vec<RunRecord>,
}

impl RunLog {
    pub fn push(&mut self, score: f64, frames: u64, dodged: u32) -> &RunRecord {
        let run = self.records.len() + 1;
        self.records.push(RunRecord {
            run,
            score,
            frames,
            dodged,
        });
        &self.records[run - 1]
    }

    pub fn best_score(&self) -> Option<f64> {
        self.records.iter().map(|r| r.score).reduce(f64::max)
    }

    pub fn to_json(&self, config: &GameConfig) -> serde_json::Value {
        serde_json::json!({
            "config": config,
            "runs": self.records,
            "best": self.best_score(),
        })
    }
}
