use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use sched_core::IndexedInstance;
use tracing::warn;
use types::{BestAssignmentEntry, Checkpoint, ExactResults, Individual};

/// Compressed checkpoint of the full population plus the shape needed to
/// reconstruct the dense tensor on load, written every `saving_every`
/// generations. Checkpoint-write failures are logged and otherwise ignored;
/// the in-memory best is still returned at run end.
pub fn save_population(path: &Path, inst: &IndexedInstance, population: &[Individual]) {
    let checkpoint = Checkpoint {
        num_courses: inst.num_courses(),
        num_teachers: inst.num_teachers(),
        num_rooms: inst.num_rooms(),
        num_slots: inst.num_slots,
        population: population.to_vec(),
    };
    if let Err(e) = try_save_population(path, &checkpoint) {
        warn!(error = %e, path = %path.display(), "failed to write population checkpoint");
    }
}

fn try_save_population(path: &Path, checkpoint: &Checkpoint) -> anyhow::Result<()> {
    let bytes = bincode::serialize(checkpoint)?;
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    encoder.write_all(&bytes)?;
    encoder.finish()?;
    Ok(())
}

pub fn load_population(path: &Path) -> anyhow::Result<Checkpoint> {
    let file = File::open(path)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let checkpoint: Checkpoint = bincode::deserialize_from(decoder)?;
    Ok(checkpoint)
}

pub fn save_best(path: &Path, inst: &IndexedInstance, best: &Individual) -> anyhow::Result<()> {
    let entries: Vec<BestAssignmentEntry> = best
        .placements
        .iter()
        .enumerate()
        .filter_map(|(c, p)| {
            p.map(|p| BestAssignmentEntry {
                course_code: inst.courses[c].0.clone(),
                teacher: inst.teachers[p.teacher].0.clone(),
                room: inst.rooms[p.room].0.clone(),
                slot: p.slot.to_string(),
            })
        })
        .collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &entries)?;
    Ok(())
}

pub fn save_fitness_history(path: &Path, history: &[Vec<f64>]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), history)?;
    Ok(())
}

pub fn save_computing_times(path: &Path, times: &[f64]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), times)?;
    Ok(())
}

pub fn save_exact_results(path: &Path, results: &ExactResults) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), results)?;
    Ok(())
}
