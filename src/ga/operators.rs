//! Permutation crossover and mutation for tours.
//!
//! Both operators work on plain `&[usize]` tours and never produce
//! duplicates: if the inputs are permutations of the same value set, so are
//! the outputs.
//!
//! # Crossover
//!
//! [`crossover`] swaps the values of the two parents at one random position.
//! That leaves each child with one duplicated and one missing value, which a
//! repair walk fixes by following the cycle of positions that links the
//! two parents (the same cycles Cycle Crossover is built from).
//!
//! # Mutation
//!
//! [`swap_mutation`] exchanges two random positions and returns the result
//! as a new tour.
//!
//! # References
//!
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-position swap crossover with repair.
///
/// Picks a crossover position uniformly over `0..n` and delegates to
/// [`crossover_at`].
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    if parent1.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let point = rng.random_range(0..parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Swap crossover at a fixed position.
///
/// # Algorithm
///
/// 1. Copy the parents into two children and swap their values at `point`.
///    Child 1 now lacks `parent1[point]` and holds the value at `point` twice.
/// 2. Starting from the anchor `point`, scan forward (wrapping) for the
///    other occurrence of the anchor's value in child 1, swap the two
///    children at that position and move the anchor there.
/// 3. Stop once the anchor holds the missing value.
///
/// Every step swaps a new position of the parents' shared cycle, so the walk
/// ends after at most `n` steps; the loop is bounded by `n` explicitly.
/// At every position the pair `{child1[i], child2[i]}` equals
/// `{parent1[i], parent2[i]}`, which makes child 2 a permutation whenever
/// child 1 is.
///
/// Identical parents, or parents that already agree at `point`, produce
/// children equal to the parents.
///
/// # Complexity
/// O(n²) worst case (n steps, each scanning at most n - 1 positions)
///
/// # Panics
/// Panics if the parents have different lengths or `point` is out of range.
pub fn crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    point: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(point < n, "crossover point {point} out of range for length {n}");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    let missing = parent1[point];
    swap_between(&mut child1, &mut child2, point);

    let mut anchor = point;
    for _ in 0..n {
        let duplicate = child1[anchor];
        if duplicate == missing {
            break;
        }
        let Some(next) = (1..n)
            .map(|k| (anchor + k) % n)
            .find(|&j| child1[j] == duplicate)
        else {
            // Parents are not permutations of the same values.
            break;
        };
        swap_between(&mut child1, &mut child2, next);
        anchor = next;
    }

    (child1, child2)
}

#[inline]
fn swap_between(a: &mut [usize], b: &mut [usize], i: usize) {
    std::mem::swap(&mut a[i], &mut b[i]);
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// Both positions are drawn independently and uniformly, so they may
/// coincide, in which case the tour comes back unchanged. The input is left
/// untouched.
///
/// # Complexity
/// O(n) for the copy, O(1) for the swap
pub fn swap_mutation<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let mut mutated = tour.to_vec();
    let n = mutated.len();
    if n == 0 {
        return mutated;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    mutated.swap(i, j);
    mutated
}

// ============================================================================
// Tests
// ============================================================================
