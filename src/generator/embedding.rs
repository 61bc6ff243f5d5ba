//! Deterministic mock embeddings.
//!
//! Every input string folds into a 64-bit seed, the seed drives a pinned
//! PCG generator, and the drawn vector is scaled to unit length. The same
//! text always yields the same vector in every process.

use rand::SeedableRng;
use rand::distributions::{Distribution, Standard};
use rand_pcg::Pcg64Mcg;

use crate::constants::{EMBEDDING_DIMENSIONS, EMBEDDING_SEED_BASE, OBJECT_EMBEDDING, OBJECT_LIST};
use crate::generator::tokens::estimate_tokens;
use crate::model::types::{EmbeddingData, EmbeddingResponse, EmbeddingUsage};

/// `seed = seed * 31 + codepoint`, left to right, with i64 wraparound.
pub fn seed_from_text(text: &str) -> i64 {
    text.chars().fold(0i64, |seed, c| {
        seed.wrapping_mul(EMBEDDING_SEED_BASE)
            .wrapping_add(c as i64)
    })
}

pub fn generate_embedding(text: &str, dimensions: usize) -> Vec<f64> {
    let mut rng = Pcg64Mcg::seed_from_u64(seed_from_text(text) as u64);

    let mut vector: Vec<f64> = Standard
        .sample_iter(&mut rng)
        .take(dimensions)
        .map(|u: f64| u * 2.0 - 1.0)
        .collect();

    normalize(&mut vector);
    vector
}

/// Scales to unit length. An all-zero vector is left untouched rather than
/// turned into NaNs.
pub fn normalize(vector: &mut [f64]) {
    let magnitude = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if magnitude == 0.0 {
        return;
    }
    for value in vector.iter_mut() {
        *value /= magnitude;
    }
}

pub fn generate_embeddings(model: String, inputs: &[String]) -> EmbeddingResponse {
    let mut usage = EmbeddingUsage::default();

    let data = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let tokens = estimate_tokens(input);
            usage.prompt_tokens += tokens;
            usage.total_tokens += tokens;

            EmbeddingData {
                object: OBJECT_EMBEDDING.to_string(),
                embedding: generate_embedding(input, EMBEDDING_DIMENSIONS),
                index,
            }
        })
        .collect();

    EmbeddingResponse {
        object: OBJECT_LIST.to_string(),
        data,
        model,
        usage,
    }
}
