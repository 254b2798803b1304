use rand::Rng;

const EPSILON: f64 = 1e-2;

/// Roulette-wheel selection over fitness values to be minimized: inverts via
/// `f_hat_i = (max_j f_j - f_i) + epsilon` so lower fitness gets higher
/// sampling weight, then draws `N` indices independently via prefix-sum +
/// binary search (inverse CDF), consumed in index order for reproducibility.
pub fn select_indices(fitness: &[f64], n: usize, rng: &mut impl Rng) -> Vec<usize> {
    let max_f = fitness.iter().cloned().fold(f64::MIN, f64::max);
    let weights: Vec<f64> = fitness.iter().map(|&f| (max_f - f) + EPSILON).collect();

    let mut prefix = Vec::with_capacity(weights.len());
    let mut running = 0.0;
    for w in &weights {
        running += w;
        prefix.push(running);
    }
    let total = running;

    (0..n)
        .map(|_| {
            let draw = rng.gen::<f64>() * total;
            let pos = prefix.partition_point(|&cum| cum < draw);
            pos.min(prefix.len() - 1)
        })
        .collect()
}
