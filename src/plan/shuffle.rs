use rand::Rng;

/// Fisher-Yates shuffle: walks from the last index down to 1 and swaps each
/// slot with a uniformly chosen slot at or below it, so every permutation is
/// equally likely.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
