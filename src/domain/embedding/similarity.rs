//! Cosine similarity and distance between embedding vectors

/// Calculate cosine similarity between two vectors.
///
/// Mismatched lengths or zero-norm inputs yield 0.0, which callers
/// treat as "no similarity" rather than an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Cosine distance: `1 - cosine_similarity`.
///
/// The index stores and compares distances with this function at both
/// population and query time, so ordering is consistent.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    1.0 - cosine_similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];

        assert!(cosine_similarity(&a, &b).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];

        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_cosine_similarity_unnormalized_vectors() {
        // 3-4-5 triangle: cos = 4/5 = 0.8 exactly
        let a = vec![1.0, 0.0];
        let b = vec![4.0, 3.0];

        assert_eq!(cosine_similarity(&a, &b), 0.8);
    }

    #[test]
    fn test_cosine_similarity_empty() {
        let empty: Vec<f32> = vec![];
        let non_empty = vec![1.0, 2.0];

        assert_eq!(cosine_similarity(&empty, &non_empty), 0.0);
    }

    #[test]
    fn test_cosine_similarity_different_lengths() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_distance_complements_similarity() {
        let a = vec![1.0, 0.0];
        let b = vec![4.0, 3.0];

        assert_eq!(cosine_distance(&a, &b), 1.0 - 0.8);
        assert!(cosine_distance(&a, &a).abs() < 0.0001);
    }
}
