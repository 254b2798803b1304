use rand::Rng;
use types::Individual;

/// Swaps the entire time-slot slabs `s1` and `s2` for one individual: every
/// placement at `s1` moves to `s2` and vice versa. Preserves H1/H5/H6
/// exactly (the `(course,teacher,room)` triple is untouched) and preserves
/// H2/H3/H4 exactly (any conflict travels with the slab).
fn swap_slabs(ind: &mut Individual, s1: usize, s2: usize) {
    for placement in ind.placements.iter_mut().flatten() {
        if placement.slot == s1 {
            placement.slot = s2;
        } else if placement.slot == s2 {
            placement.slot = s1;
        }
    }
}

pub fn mutate_population(
    population: &mut [Individual],
    num_slots: usize,
    mutation_rate: f64,
    rng: &mut impl Rng,
) {
    for ind in population.iter_mut() {
        if rng.gen::<f64>() >= mutation_rate {
            continue;
        }
        let s1 = rng.gen_range(0..num_slots);
        let s2 = loop {
            let s = rng.gen_range(0..num_slots);
            if s != s1 {
                break s;
            }
        };
        swap_slabs(ind, s1, s2);
    }
}
