//! Location estimators over a sample
//!
//! Every estimator returns `None` for an empty sample. These helpers are
//! independent of the distribution types.
use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use std::collections::HashMap;

// reciprocals of values this close to zero count as zero in `harmonic_mean`
const HARMONIC_CUTOFF: f64 = 1e-9;

fn sorted(data: &ArrayView1<f64>) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// sum divided by count
pub fn arithmetic_mean(data: ArrayView1<f64>) -> Option<f64> {
    data.mean()
}

/// $n / \sum_i x_i^{-1}$, skipping near-zero observations in the sum
pub fn harmonic_mean(data: ArrayView1<f64>) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let reciprocals: f64 = data
        .iter()
        .map(|&x| if x.abs() > HARMONIC_CUTOFF { 1. / x } else { 0. })
        .sum();
    Some(data.len() as f64 / reciprocals)
}

/// middle value of the sorted sample, or the mean of the two middle values
pub fn median(data: ArrayView1<f64>) -> Option<f64> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let sorted = sorted(&data);
    if n % 2 == 0 {
        Some(0.5 * (sorted[n / 2 - 1] + sorted[n / 2]))
    } else {
        Some(sorted[n / 2])
    }
}

/// Most frequent value. Ties go to the value seen first.
pub fn mode(data: ArrayView1<f64>) -> Option<f64> {
    // keyed on the bit pattern of x + 0.0 so that both zeros share an entry
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (i, &x) in data.iter().enumerate() {
        let (_, count) = counts.entry((x + 0.).to_bits()).or_insert((i, 0));
        *count += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (first_a, a)), (_, (first_b, b))| a.cmp(b).then(first_b.cmp(first_a)))
        .map(|(bits, _)| f64::from_bits(bits))
}

/// Sample quantile at cumulative probability `p`
///
/// Uses the position $np - \frac{1}{2}$ into the sorted sample and
/// interpolates linearly between neighbours. `p = 0` and `p = 1` give the
/// extremes; `p` outside $[0, 1]$ gives `None`.
pub fn quantile(data: ArrayView1<f64>, p: f64) -> Option<f64> {
    let n = data.len();
    if n == 0 || !(0. ..=1.).contains(&p) {
        return None;
    }
    if p == 0. {
        return data.min().ok().copied();
    }
    if p == 1. {
        return data.max().ok().copied();
    }
    let sorted = sorted(&data);
    let index = (n as f64 * p - 0.5).clamp(0., (n - 1) as f64);
    let lower = index.floor();
    let i = lower as usize;
    if index == lower {
        return Some(sorted[i]);
    }
    let frac = index - lower;
    Some(sorted[i] + (sorted[i + 1] - sorted[i]) * frac)
}

/// mean of the smallest and largest observation
pub fn midrange(data: ArrayView1<f64>) -> Option<f64> {
    let min = data.min().ok()?;
    let max = data.max().ok()?;
    Some(0.5 * (min + max))
}

/// Mean of the middle half of the sorted sample
///
/// When the sample size is not a multiple of four the observations that
/// straddle the quartiles contribute with fractional weight.
pub fn interquartile_mean(data: ArrayView1<f64>) -> Option<f64> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let sorted = sorted(&data);
    let (lo, hi) = (n as f64 / 4., 3. * n as f64 / 4.);
    let total: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let weight = ((i + 1) as f64).min(hi) - (i as f64).max(lo);
            x * weight.max(0.)
        })
        .sum();
    Some(total / (hi - lo))
}
