pub mod field;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate at the given level (default
/// `Debug`), and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!(
            $log_level,
            "{} took {} µs",
            $label,
            elapsed.as_micros()
        );
        value
    }};
}

/// Calculate the number of hexes within `radius` steps of some center hex
/// (inclusive). Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn hex_range_len(radius: usize) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    3 * radius * radius + 3 * radius + 1
}
