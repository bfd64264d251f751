use crate::types::{Embedding, EMBEDDING_DIMENSION};

/// Scale applied to raw cosine before clamping into [0, 1]
pub const SIMILARITY_BOOST: f64 = 1.2;

/// Euclidean norm
pub fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale a vector to unit length in place; zero vectors are left untouched.
pub fn l2_normalize(vector: &mut [f64]) {
    let norm = l2_norm(vector);
    if norm == 0.0 {
        return;
    }
    for value in vector.iter_mut() {
        *value /= norm;
    }
}

/// Truncate or zero-pad to `dimension`, then L2-normalize.
pub fn reconcile_dimension(vector: &[f64], dimension: usize) -> Embedding {
    let mut reconciled: Embedding = vector.iter().copied().take(dimension).collect();
    reconciled.resize(dimension, 0.0);
    l2_normalize(&mut reconciled);
    reconciled
}

/// Boosted cosine similarity in [0, 1]
///
/// Both operands are reconciled to [`EMBEDDING_DIMENSION`] first, so vectors
/// of any origin compare the same way. A zero vector on either side scores 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let a = reconcile_dimension(a, EMBEDDING_DIMENSION);
    let b = reconcile_dimension(b, EMBEDDING_DIMENSION);

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(&b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let raw = dot / (norm_a.sqrt() * norm_b.sqrt());
    // max/min rather than clamp: NaN collapses to 0
    (raw * SIMILARITY_BOOST).max(0.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(index: usize) -> Embedding {
        let mut v = vec![0.0; EMBEDDING_DIMENSION];
        v[index] = 1.0;
        v
    }

    #[test]
    fn test_normalize_zero_vector_unchanged() {
        let mut v = vec![0.0; 4];
        l2_normalize(&mut v);
        assert_eq!(v, vec![0.0; 4]);
    }

    #[test]
    fn test_normalize_to_unit_length() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_reconcile_lengths() {
        for len in [0, 1, 7, EMBEDDING_DIMENSION, 768] {
            let v: Vec<f64> = (0..len).map(|i| (i + 1) as f64).collect();
            let r = reconcile_dimension(&v, EMBEDDING_DIMENSION);
            assert_eq!(r.len(), EMBEDDING_DIMENSION);
            if len > 0 {
                assert!((l2_norm(&r) - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_reconcile_pads_with_zeros() {
        let r = reconcile_dimension(&[2.0, 0.0], EMBEDDING_DIMENSION);
        assert_eq!(r[0], 1.0);
        assert!(r[1..].iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_reconcile_truncates_then_normalizes() {
        let mut v = vec![0.0; 100];
        v[0] = 3.0;
        v[1] = 4.0;
        v[99] = 1000.0;
        let r = reconcile_dimension(&v, EMBEDDING_DIMENSION);
        assert!((r[0] - 0.6).abs() < 1e-12);
        assert!((r[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_self_similarity_clamps_to_one() {
        let v = reconcile_dimension(&[1.0, 2.0, 3.0], EMBEDDING_DIMENSION);
        assert_eq!(cosine_similarity(&v, &v), 1.0);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let zero = vec![0.0; EMBEDDING_DIMENSION];
        assert_eq!(cosine_similarity(&zero, &unit(3)), 0.0);
        assert_eq!(cosine_similarity(&unit(3), &zero), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_orthogonal_and_opposite_floor_at_zero() {
        assert_eq!(cosine_similarity(&unit(0), &unit(1)), 0.0);
        let neg: Vec<f64> = unit(0).iter().map(|x| -x).collect();
        assert_eq!(cosine_similarity(&unit(0), &neg), 0.0);
    }

    #[test]
    fn test_boost_applied() {
        // cos = 0.5 between these two
        let a = [1.0, 0.0];
        let b = [0.5, 3f64.sqrt() / 2.0];
        assert!((cosine_similarity(&a, &b) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_bounded_for_mixed_vectors() {
        let vectors: Vec<Vec<f64>> = vec![
            vec![1.0, -2.0, 3.0],
            vec![-0.5; 60],
            (0..50).map(|i| (i as f64).sin()).collect(),
            vec![f64::NAN, 1.0],
        ];
        for a in &vectors {
            for b in &vectors {
                let s = cosine_similarity(a, b);
                assert!((0.0..=1.0).contains(&s), "{}", s);
            }
        }
    }

    #[test]
    fn test_dimension_mismatch_resolved() {
        // Extra tail beyond the logical dimension is ignored
        let mut long = unit(0);
        long.extend(vec![5.0; 20]);
        assert_eq!(cosine_similarity(&long, &unit(0)), 1.0);
    }
}
