//! Roulette-wheel parent selection.
//!
//! Fitness is a cost, so the wheel is weighted by **inverse** fitness:
//! shorter tours get proportionally larger slices.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (fitness-proportionate reproduction)

use super::individual::Individual;
use crate::error::{GaError, Result};
use rand::Rng;

/// Selection probability of every individual, proportional to `1 / fitness`.
///
/// The returned probabilities sum to 1 (within floating-point tolerance).
///
/// # Errors
/// - [`GaError::PopulationTooSmall`] for an empty population
/// - [`GaError::DegenerateFitness`] if any fitness is zero, negative or not
///   finite, since it has no usable inverse
pub fn selection_probability(population: &[Individual]) -> Result<Vec<f64>> {
    if population.is_empty() {
        return Err(GaError::PopulationTooSmall {
            size: 0,
            minimum: 1,
        });
    }

    let inverse = population
        .iter()
        .enumerate()
        .map(|(index, ind)| {
            let f = ind.fitness();
            let w = 1.0 / f;
            if f > 0.0 && f.is_finite() && w.is_finite() {
                Ok(w)
            } else {
                Err(GaError::DegenerateFitness { index, fitness: f })
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    let total: f64 = inverse.iter().sum();
    if !total.is_finite() {
        // Inverses overflowed when added up; blame the shortest tour.
        let (index, fitness) = population
            .iter()
            .map(Individual::fitness)
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));
        return Err(GaError::DegenerateFitness { index, fitness });
    }
    Ok(inverse.into_iter().map(|w| w / total).collect())
}

/// Draws `pair_count` parent pairs as indices into `population`.
///
/// Within a pair the two indices are always distinct: the first parent is
/// drawn from the full wheel, the second from the wheel with the first
/// removed. Pairs are drawn independently, so the same individual may
/// appear in several pairs.
///
/// # Errors
/// - [`GaError::PopulationTooSmall`] if pairs are requested from fewer than
///   2 individuals
/// - any error from [`selection_probability`]
pub fn select_parents<R: Rng>(
    population: &[Individual],
    pair_count: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    if pair_count == 0 {
        return Ok(Vec::new());
    }
    if population.len() < 2 {
        return Err(GaError::PopulationTooSmall {
            size: population.len(),
            minimum: 2,
        });
    }

    let prob = selection_probability(population)?;
    let pairs = (0..pair_count)
        .map(|_| {
            let first = spin(&prob, None, rng);
            let second = spin(&prob, Some(first), rng);
            (first, second)
        })
        .collect();
    Ok(pairs)
}

/// One spin of the wheel, optionally with one slot removed.
///
/// Expects at least one slot outside `exclude`. If the remaining weight has
/// underflowed to zero, the slot is drawn uniformly instead.
fn spin<R: Rng>(weights: &[f64], exclude: Option<usize>, rng: &mut R) -> usize {
    let total: f64 = weights
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .map(|(_, w)| w)
        .sum();
    if !(total > 0.0 && total.is_finite()) {
        let slots = weights.len() - usize::from(exclude.is_some());
        let k = rng.random_range(0..slots);
        return match exclude {
            Some(e) if k >= e => k + 1,
            _ => k,
        };
    }
    let threshold = rng.random_range(0.0..total);

    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &w) in weights.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        cumulative += w;
        last = i;
        if cumulative > threshold {
            return i;
        }
    }

    last // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::build_distance_matrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Two-point individuals whose round trip equals the requested fitness.
    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .map(|&f| {
                let m = build_distance_matrix(&[0.0, f / 2.0], &[0.0, 0.0]).unwrap();
                Individual::evaluated(vec![1, 2], &m).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0, 123.4, 0.25]);
        let prob = selection_probability(&pop).unwrap();
        assert_eq!(prob.len(), 6);
        let sum: f64 = prob.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "sum = {sum}");
    }

    #[test]
    fn test_probabilities_inverse_to_fitness() {
        let pop = make_population(&[2.0, 4.0, 8.0]);
        let prob = selection_probability(&pop).unwrap();
        // 1/2 : 1/4 : 1/8 = 4 : 2 : 1
        assert!((prob[0] - 4.0 / 7.0).abs() < 1e-12);
        assert!((prob[1] - 2.0 / 7.0).abs() < 1e-12);
        assert!((prob[2] - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_fitness_is_degenerate() {
        let pop = make_population(&[3.0, 0.0, 1.0]);
        match selection_probability(&pop) {
            Err(GaError::DegenerateFitness { index, fitness }) => {
                assert_eq!(index, 1);
                assert_eq!(fitness, 0.0);
            }
            other => panic!("expected degenerate fitness, got {other:?}"),
        }
    }

    #[test]
    fn test_infinite_fitness_is_degenerate() {
        // Both legs of the round trip are finite; their sum is not.
        let far = build_distance_matrix(&[0.0, 1.5e308], &[0.0, 0.0]).unwrap();
        let mut pop = vec![Individual::evaluated(vec![1, 2], &far).unwrap()];
        assert!(pop[0].fitness().is_infinite());
        pop.extend(make_population(&[2.0, 4.0]));

        match selection_probability(&pop) {
            Err(GaError::DegenerateFitness { index, fitness }) => {
                assert_eq!(index, 0);
                assert!(fitness.is_infinite());
            }
            other => panic!("expected degenerate fitness, got {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_inverse_total_is_degenerate() {
        // Each 1/f is finite but the sum overflows.
        let pop = make_population(&[1e-308, 1e-308, 3.0]);
        assert!(matches!(
            selection_probability(&pop),
            Err(GaError::DegenerateFitness { .. })
        ));
    }

    #[test]
    fn test_empty_population_rejected() {
        assert!(matches!(
            selection_probability(&[]),
            Err(GaError::PopulationTooSmall { size: 0, .. })
        ));
    }

    #[test]
    fn test_pairs_are_distinct() {
        let pop = make_population(&[1.0, 1000.0, 1000.0, 1000.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let pairs = select_parents(&pop, 2000, &mut rng).unwrap();
        assert_eq!(pairs.len(), 2000);
        for &(a, b) in &pairs {
            assert_ne!(a, b, "a pair must not select the same individual twice");
            assert!(a < pop.len() && b < pop.len());
        }
    }

    #[test]
    fn test_two_individuals_always_pair_together() {
        let pop = make_population(&[1.0, 50.0]);
        let mut rng = StdRng::seed_from_u64(3);
        for (a, b) in select_parents(&pop, 200, &mut rng).unwrap() {
            assert_eq!(a + b, 1);
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for (a, _) in select_parents(&pop, n, &mut rng).unwrap() {
            counts[a] += 1;
        }
        // Index 2 holds ~96% of the wheel
        assert!(
            counts[2] > 8500,
            "expected best to dominate first draws, got {counts:?}"
        );
        assert!(counts[2] > counts[1] && counts[1] > counts[0]);
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for (a, b) in select_parents(&pop, 10000, &mut rng).unwrap() {
            counts[a] += 1;
            counts[b] += 1;
        }
        for &c in &counts {
            assert!(
                (4000..6000).contains(&c),
                "expected roughly uniform with equal fitness, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_zero_pairs() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(select_parents(&[], 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_single_individual_cannot_pair() {
        let pop = make_population(&[5.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            select_parents(&pop, 1, &mut rng),
            Err(GaError::PopulationTooSmall {
                size: 1,
                minimum: 2
            })
        ));
    }

    #[test]
    fn test_spin_respects_exclusion() {
        let mut rng = StdRng::seed_from_u64(9);
        let weights = [0.9, 0.05, 0.05];
        for _ in 0..1000 {
            assert_ne!(spin(&weights, Some(0), &mut rng), 0);
        }
    }

    #[test]
    fn test_spin_without_remaining_weight_is_uniform() {
        let mut rng = StdRng::seed_from_u64(4);
        let weights = [1.0, 0.0, 0.0];
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            counts[spin(&weights, Some(0), &mut rng)] += 1;
        }
        assert_eq!(counts[0], 0);
        assert!(counts[1] > 1200 && counts[2] > 1200, "got {counts:?}");
    }
}
