//! Deterministic local text embedding.
//!
//! Hashed bag-of-words: each lowercase alphanumeric token is hashed
//! (FNV-1a) into a fixed-dimension slot, weighted by term frequency, and
//! the vector is L2-normalized. No vocabulary file, no model download, and
//! the same text always embeds to the same vector.

const DEFAULT_DIMENSION: usize = 256;

/// Hashed bag-of-words embedder.
pub struct Embedder {
    dimension: usize,
}

impl Default for Embedder {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl Embedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Embeds text into a normalized term-frequency vector.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        let lowercase = text.to_lowercase();
        let tokens: Vec<&str> = lowercase
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return vector;
        }

        for token in &tokens {
            let slot = fnv1a(token) as usize % self.dimension;
            vector[slot] += 1.0 / tokens.len() as f32;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

/// Cosine similarity of two equal-length vectors; zero vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// FNV-1a, fixed offset/prime so hashing is stable across runs.
fn fnv1a(token: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET;
    for byte in token.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_is_deterministic() {
        let embedder = Embedder::default();
        assert_eq!(embedder.embed("margherita pizza"), embedder.embed("margherita pizza"));
    }

    #[test]
    fn test_embed_is_case_insensitive() {
        let embedder = Embedder::default();
        assert_eq!(embedder.embed("Pizza"), embedder.embed("pizza"));
    }

    #[test]
    fn test_identical_text_has_unit_similarity() {
        let embedder = Embedder::default();
        let v = embedder.embed("chocolate lava cake");
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_overlapping_text_scores_higher_than_disjoint() {
        let embedder = Embedder::default();
        let query = embedder.embed("chocolate cake");
        let near = embedder.embed("warm chocolate cake dessert");
        let far = embedder.embed("grilled chicken salad");
        assert!(cosine_similarity(&query, &near) > cosine_similarity(&query, &far));
    }

    #[test]
    fn test_empty_text_embeds_to_zero_vector() {
        let embedder = Embedder::default();
        let v = embedder.embed("   ");
        assert!(v.iter().all(|x| *x == 0.0));
        assert_eq!(cosine_similarity(&v, &v), 0.0);
    }
}
