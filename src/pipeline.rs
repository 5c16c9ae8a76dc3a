//! src/pipeline.rs
use crate::tokenizer::tokenize;
use anyhow::Context;
use rayon::prelude::*;
use std::collections::HashMap;

/// The map/shuffle/reduce word counter. One shared worker pool serves both
/// parallel stages; the shuffle stage is a plain sequential fold.
pub struct WordCountPipeline {
    pool: rayon::ThreadPool,
}

impl WordCountPipeline {
    /// `workers == 0` sizes the pool to the available parallelism.
    pub fn new(workers: usize) -> Result<Self, anyhow::Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .context("Failed to build the worker pool")?;
        Ok(Self { pool })
    }

    /// Runs the full pipeline. Each stage completes before the next starts,
    /// and the result is independent of how the pool schedules tasks.
    #[tracing::instrument(name = "Run word count pipeline", skip_all, fields(bytes = text.len()))]
    pub fn run(&self, text: &str) -> HashMap<String, u64> {
        let tokens = tokenize(text);
        let pairs = self.map(tokens);
        let grouped = shuffle(pairs);
        self.reduce(grouped)
    }

    /// Map stage: one `(token, 1)` pair per occurrence, in no particular
    /// order. Total over any input.
    pub fn map(&self, tokens: Vec<String>) -> Vec<(String, u64)> {
        self.pool
            .install(|| tokens.into_par_iter().map(|token| (token, 1)).collect())
    }

    /// Reduce stage: per-key sums, parallel across distinct keys.
    pub fn reduce(&self, grouped: HashMap<String, Vec<u64>>) -> HashMap<String, u64> {
        self.pool.install(|| {
            grouped
                .into_par_iter()
                .map(|(word, counts)| (word, counts.iter().sum()))
                .collect()
        })
    }
}

/// Shuffle stage: a single-writer fold grouping pairs by word. Bucket length
/// equals the occurrence count of the word; bucket order is not a contract
/// since only the per-key sum is observable downstream.
pub fn shuffle(pairs: Vec<(String, u64)>) -> HashMap<String, Vec<u64>> {
    let mut grouped: HashMap<String, Vec<u64>> = HashMap::new();
    for (word, count) in pairs {
        grouped.entry(word).or_default().push(count);
    }
    grouped
}
