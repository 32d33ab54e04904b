use std::time::{Duration, Instant};

pub mod binary_heap;
pub mod graph_generator;
pub mod io;

/// runs the given function and returns the elapsed time together with its result
pub fn measure_time<R, F: FnOnce() -> R>(function: F) -> (Duration, R) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
