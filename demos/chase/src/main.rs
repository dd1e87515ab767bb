//! Headless player-versus-monster chase on a two-room dungeon level.
//!
//! Usage:
//!
//! ```text
//! chase [SESSION_CONFIG.json] [MONSTER_TREE.json]
//! ```
//!
//! Both arguments are optional.  A session config overrides
//! [`SessionConfig::default`] field by field; a monster tree switches the
//! monster to the JSON decision-tree brain.  Set `RUST_LOG=debug` to see
//! behavior switches and resets as they happen.

mod network;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_agent::{BrainKind, Sample, SessionBuilder, SessionConfig};
use nav_core::Vec2;
use nav_decision::JsonTree;

// ── Constants ─────────────────────────────────────────────────────────────────

const PLAYER_START:  Vec2 = Vec2::new(100.0, 100.0);
const MONSTER_START: Vec2 = Vec2::new(500.0, 400.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Session config.
    let mut config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SessionConfig::default(),
    };

    // 2. Optional JSON monster tree.
    let json_tree = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading monster tree {path}"))?;
            config.monster.brain = BrainKind::JsonTree;
            Some(JsonTree::from_json_str(&text).with_context(|| format!("parsing {path}"))?)
        }
        None => None,
    };

    // 3. Level.
    let walls = network::build_walls();
    let graph = network::build_graph(&walls)?;
    println!("=== chase ===");
    println!(
        "Level: {} walls, {} nodes, {} links",
        walls.len(),
        graph.node_count(),
        graph.link_count()
    );
    println!(
        "Run:   {} frames at dt {:.4} s, seed {}, brain {:?}",
        config.total_frames, config.dt, config.seed, config.monster.brain
    );
    println!();

    // 4. Build session.
    let mut builder = SessionBuilder::new(config, graph)
        .walls(walls)
        .player_start(PLAYER_START)
        .monster_start(MONSTER_START);
    if let Some(tree) = json_tree {
        builder = builder.json_tree(tree);
    }
    let mut session = builder.build()?;

    // 5. Run.
    let mut samples: Vec<Sample> = Vec::new();
    let t0 = Instant::now();
    let summary = session.run(&mut samples)?;
    let elapsed = t0.elapsed();
    info!(wall_secs = elapsed.as_secs_f64(), "run complete");

    // 6. Summary.
    println!(
        "Played {} frames ({:.1} s simulated) in {:.3} s",
        summary.frames,
        summary.elapsed_secs,
        elapsed.as_secs_f64()
    );
    println!("  resets : {}", summary.resets);
    println!("  brain  : {}", session.brain_name());
    println!();

    // 7. Monster action histogram.
    let mut histogram: BTreeMap<String, u64> = BTreeMap::new();
    for s in &samples {
        *histogram.entry(s.action.to_string()).or_default() += 1;
    }
    println!("{:<20} {:>8} {:>7}", "Action", "Frames", "Share");
    println!("{}", "-".repeat(37));
    for (action, count) in &histogram {
        let share = 100.0 * *count as f64 / samples.len().max(1) as f64;
        println!("{action:<20} {count:>8} {share:>6.1}%");
    }

    // 8. Final positions.
    println!();
    println!("player  at {}", session.player().position);
    println!("monster at {}", session.monster().position);

    Ok(())
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn load_config(path: &Path) -> Result<SessionConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading session config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_honours_rust_log() {
        // SAFETY: no other test in this binary reads or writes the environment.
        unsafe { std::env::set_var("RUST_LOG", "debug") };
        assert!(log_filter().to_string().contains("debug"));

        unsafe { std::env::remove_var("RUST_LOG") };
        assert_eq!(log_filter().to_string(), "info");
    }
}
