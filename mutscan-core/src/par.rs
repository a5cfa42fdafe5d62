/// Parallel map: apply `$f` to each element of `$slice`, collecting into a Vec.
macro_rules! par_map {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $slice.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice.iter().map($f).collect()
        }
    }};
}

/// Parallel find: index and value of the first element (in slice order) for which `$f` returns Some.
macro_rules! par_find_map_first {
    ($slice:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
            $slice
                .par_iter()
                .enumerate()
                .find_map_first(|(i, x)| $f(x).map(|v| (i, v)))
        }
        #[cfg(not(feature = "parallel"))]
        {
            $slice
                .iter()
                .enumerate()
                .find_map(|(i, x)| $f(x).map(|v| (i, v)))
        }
    }};
}
