//! Tests for benchmark defaults and output constants

#[cfg(test)]
mod tests {
    use knapsweep::io::configuration::{
        ALGORITHM_NAME, CSV_COLUMNS, CSV_SEPARATOR, DEFAULT_MAX_THREADS, DEFAULT_MIN_THREADS,
        DEFAULT_REPETITIONS, EXIT_MANIFEST, EXIT_USAGE,
    };

    // Tests sweep defaults
    // Verified by changing the default thread bounds
    #[test]
    fn test_sweep_defaults() {
        assert_eq!(DEFAULT_REPETITIONS, 5);
        assert_eq!(DEFAULT_MIN_THREADS, 1);
        assert_eq!(DEFAULT_MAX_THREADS, 32);
    }

    // Tests the record header layout
    // Verified by reordering the columns
    #[test]
    fn test_record_columns() {
        assert_eq!(CSV_SEPARATOR, ',');
        assert_eq!(CSV_COLUMNS, ["inst", "correct", "n", "p", "t"]);
    }

    // Tests the algorithm name is a single banner token
    // Verified by adding a space to the name
    #[test]
    fn test_algorithm_name_has_no_whitespace() {
        assert!(!ALGORITHM_NAME.is_empty());
        assert!(!ALGORITHM_NAME.chars().any(char::is_whitespace));
    }

    // Tests exit codes are distinct and non-zero
    // Verified by sharing one exit code
    #[test]
    fn test_exit_codes() {
        assert_eq!(EXIT_USAGE, 1);
        assert_eq!(EXIT_MANIFEST, 2);
    }
}
