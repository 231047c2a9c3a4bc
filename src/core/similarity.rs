use rand::Rng;

/// Cosine of the angle between two equal-length vectors, in [-1, 1]
///
/// Returns `None` when either vector has zero magnitude - the cosine is
/// undefined there. Real questionnaire answers are all >= 1, so this only
/// arises from malformed input.
#[inline]
pub fn cosine(a: &[f64], b: &[f64]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Normalized similarity between two domain vectors, in [0, 1]
///
/// Maps cosine from [-1, 1] via (cos + 1) / 2. A degenerate (zero-magnitude)
/// vector scores 0.0: fully dissimilar rather than an error.
#[inline]
pub fn similarity(a: &[f64], b: &[f64]) -> f64 {
    match cosine(a, b) {
        Some(cos) => (cos + 1.0) / 2.0,
        None => 0.0,
    }
}

/// Similarity with optional uniform +/-5% jitter, clamped back into [0, 1]
///
/// Jitter is a display-diversity artifact, not part of the compatibility
/// model; callers disable it (or fix the RNG seed) for reproducible scores.
pub fn similarity_with_jitter<R: Rng>(a: &[f64], b: &[f64], jitter: bool, rng: &mut R) -> f64 {
    let base = similarity(a, b);
    if !jitter {
        return base;
    }

    let variation: f64 = rng.gen_range(-0.05..=0.05);
    (base + variation).clamp(0.0, 1.0)
}
