use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

/// applies `f` to every element of `x`, keeping its shape
///
/// Elements are independent, so with the `rayon` feature the map runs in
/// parallel.
#[cfg(not(feature = "rayon"))]
pub fn map_elementwise<S, D, F>(x: &ArrayBase<S, D>, f: F) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(f64) -> f64 + Sync + Send,
{
    Zip::from(x).map_collect(|&x| f(x))
}

#[cfg(feature = "rayon")]
pub fn map_elementwise<S, D, F>(x: &ArrayBase<S, D>, f: F) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(f64) -> f64 + Sync + Send,
{
    Zip::from(x).par_map_collect(|&x| f(x))
}
