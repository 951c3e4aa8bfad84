use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use zole_core::game::state::{DealError, GameState, StateError};
use zole_core::model::player::Seat;

use crate::config::{BenchConfig, ResolvedOutputs};
use crate::stats::{DealStats, StatsError, StatsSummary};

/// Deals a configured number of seeded hands and records each one.
pub struct DealRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub hands_dealt: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub stats: StatsSummary,
}

#[derive(Debug, Serialize)]
struct SeatRow {
    seat: String,
    name: String,
    cards: Vec<String>,
    trumps: usize,
    points: u32,
}

#[derive(Debug, Serialize)]
struct DealLogRow {
    run_id: String,
    deal_id: String,
    hand_index: usize,
    seed: u64,
    leader: String,
    seats: Vec<SeatRow>,
    skat: Vec<String>,
    skat_points: u32,
}

impl DealLogRow {
    fn capture(run_id: &str, hand_index: usize, deal_seed: u64, state: &GameState) -> Self {
        let seats = Seat::LOOP
            .iter()
            .map(|&seat| {
                let player = state.player(seat);
                SeatRow {
                    seat: seat.to_string(),
                    name: player.name().to_string(),
                    cards: player.hand().names(),
                    trumps: player.hand().trump_count(),
                    points: player.hand().points(),
                }
            })
            .collect();
        DealLogRow {
            run_id: run_id.to_string(),
            deal_id: format!("H{hand_index:05}"),
            hand_index,
            seed: deal_seed,
            leader: state.leader().to_string(),
            seats,
            skat: state.deck().iter().map(|id| id.card().name()).collect(),
            skat_points: state.deck().iter().map(|id| u32::from(id.card().value())).sum(),
        }
    }
}

impl DealRunner {
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Deal every hand, streaming JSONL rows to disk, then write the summary.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.deals.seed.unwrap_or(0));
        let mut stats = DealStats::new();
        let mut rows_written = 0usize;

        for hand_index in 0..self.config.deals.hands {
            let deal_seed = rng.next_u64();
            let leader = self.config.deals.leader.leader_for(hand_index);
            let state = GameState::with_seed(deal_seed).deal(leader)?;
            state.check_conservation()?;

            event!(
                target: "zole_bench::deal",
                Level::DEBUG,
                run_id = %self.config.run_id,
                hand_index = hand_index as u64,
                deal_seed,
                leader = %leader,
                "dealt hand"
            );

            stats.record(&state);
            let row = DealLogRow::capture(&self.config.run_id, hand_index, deal_seed, &state);
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }

        writer.flush()?;

        let summary = stats.finalize()?;
        summary.write_markdown(&self.config.run_id, &self.outputs.summary_md)?;
        event!(
            target: "zole_bench::deal",
            Level::INFO,
            run_id = %self.config.run_id,
            hands = summary.hands,
            avg_skat_points = summary.avg_skat_points,
            "run complete"
        );

        Ok(RunSummary {
            hands_dealt: summary.hands,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            stats: summary,
        })
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    #[error("dealt state is inconsistent: {0}")]
    State(#[from] StateError),
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
}
