use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;
use zole_core::game::state::{GameState, HAND_SIZE};
use zole_core::model::player::{SEAT_COUNT, Seat};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("no hands were recorded")]
    Empty,
}

/// Running totals over dealt hands.
#[derive(Debug, Clone, Default)]
pub struct DealStats {
    hands: usize,
    trumps: [usize; SEAT_COUNT],
    points: [u64; SEAT_COUNT],
    leads: [usize; SEAT_COUNT],
    skat_points: u64,
    skat_trumps: usize,
    trump_histogram: [usize; HAND_SIZE + 1],
}

impl DealStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: &GameState) {
        self.hands += 1;
        self.leads[state.leader().index()] += 1;
        for seat in Seat::LOOP {
            let hand = state.player(seat).hand();
            let trumps = hand.trump_count();
            self.trumps[seat.index()] += trumps;
            self.points[seat.index()] += u64::from(hand.points());
            self.trump_histogram[trumps.min(HAND_SIZE)] += 1;
        }
        for id in state.deck() {
            let card = id.card();
            self.skat_points += u64::from(card.value());
            if card.is_trump() {
                self.skat_trumps += 1;
            }
        }
    }

    pub fn hands(&self) -> usize {
        self.hands
    }

    pub fn finalize(self) -> Result<StatsSummary, StatsError> {
        if self.hands == 0 {
            return Err(StatsError::Empty);
        }
        let n = self.hands as f64;
        Ok(StatsSummary {
            hands: self.hands,
            avg_trumps: self.trumps.map(|t| t as f64 / n),
            avg_points: self.points.map(|p| p as f64 / n),
            leads: self.leads,
            avg_skat_points: self.skat_points as f64 / n,
            avg_skat_trumps: self.skat_trumps as f64 / n,
            trump_histogram: self.trump_histogram,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub hands: usize,
    pub avg_trumps: [f64; SEAT_COUNT],
    pub avg_points: [f64; SEAT_COUNT],
    pub leads: [usize; SEAT_COUNT],
    pub avg_skat_points: f64,
    pub avg_skat_trumps: f64,
    /// Player hands bucketed by how many trumps they hold.
    pub trump_histogram: [usize; HAND_SIZE + 1],
}

impl StatsSummary {
    pub fn render_markdown(&self, run_id: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Deal Summary: {run_id}\n");
        let _ = writeln!(out, "Hands dealt: {}\n", self.hands);
        out.push_str("| Seat | Leads | Avg trumps | Avg points |\n");
        out.push_str("|------|-------|------------|------------|\n");
        for seat in Seat::LOOP {
            let i = seat.index();
            let _ = writeln!(
                out,
                "| {seat} | {leads} | {trumps:.3} | {points:.3} |",
                leads = self.leads[i],
                trumps = self.avg_trumps[i],
                points = self.avg_points[i],
            );
        }
        let _ = writeln!(
            out,
            "\nSkat: {:.3} points, {:.3} trumps on average\n",
            self.avg_skat_points, self.avg_skat_trumps
        );
        out.push_str("| Trumps in hand | Hands |\n");
        out.push_str("|----------------|-------|\n");
        for (trumps, count) in self.trump_histogram.iter().enumerate() {
            let _ = writeln!(out, "| {trumps} | {count} |");
        }
        out
    }

    pub fn write_markdown(&self, run_id: &str, path: impl AsRef<Path>) -> Result<(), StatsError> {
        fs::write(path.as_ref(), self.render_markdown(run_id)).map_err(|source| {
            StatsError::Io {
                context: "writing summary markdown",
                source,
            }
        })
    }
}
