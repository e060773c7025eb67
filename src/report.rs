//! Rendering of experiment results as text tables or JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::experiment::{AllPairsRow, SingleSourceRow};

/// Everything one benchmark run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    /// Seed of the random graph generator, to reproduce the run
    pub seed: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub single_source: Vec<SingleSourceRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_pairs: Vec<AllPairsRow>,
}

impl Report {
    pub fn new(seed: u64) -> Self {
        Report {
            generated_at: Utc::now(),
            seed,
            single_source: Vec::new(),
            all_pairs: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Both tables, skipping experiments that were not run
    pub fn render_tables(&self) -> String {
        let mut out = String::new();
        if !self.single_source.is_empty() {
            out.push_str(&single_source_table(&self.single_source));
        }
        if !self.all_pairs.is_empty() {
            out.push_str(&all_pairs_table(&self.all_pairs));
        }
        out
    }
}

pub fn single_source_table(rows: &[SingleSourceRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str(&format!(
        "{:<6} | {:<15} | {:<15} | {:<15}\n",
        "Size", "Dijkstra (s)", "Bellman-Ford (s)", "Floyd-Warshall (s)"
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for row in rows {
        out.push_str(&format!(
            "{:<6} | {:<15.6} | {:<15.6} | {:<15.6}\n",
            row.size, row.dijkstra_secs, row.bellman_ford_secs, row.floyd_warshall_secs
        ));
    }
    out
}

pub fn all_pairs_table(rows: &[AllPairsRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "=".repeat(75)));
    out.push_str(&format!(
        "{:<6} | {:<20} | {:<20} | {:<20}\n",
        "Size", "Floyd-Warshall (s)", "Dijkstra All (s)", "Bellman-Ford All (s)"
    ));
    out.push_str(&format!("{}\n", "-".repeat(75)));
    for row in rows {
        out.push_str(&format!(
            "{:<6} | {:<20.6} | {:<20.6} | {:<20.6}\n",
            row.size, row.floyd_warshall_secs, row.dijkstra_all_secs, row.bellman_ford_all_secs
        ));
    }
    out
}
