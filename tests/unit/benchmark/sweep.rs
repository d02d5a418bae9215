//! Tests for the thread sweep driver

#[cfg(test)]
mod tests {
    use crate::support::textbook_instance;
    use knapsweep::AlgorithmError;
    use knapsweep::benchmark::sweep::{BenchmarkRecord, ThreadSweep};
    use knapsweep::io::configuration::DEFAULT_REPETITIONS;
    use std::path::Path;
    use std::time::Duration;

    fn collect(sweep: &ThreadSweep, expected: u64) -> knapsweep::Result<(bool, Vec<BenchmarkRecord>)> {
        let mut records = Vec::new();
        let outcome = sweep.run(
            Path::new("textbook.txt"),
            &textbook_instance(),
            expected,
            |record| {
                records.push(record.clone());
                Ok(())
            },
        )?;
        Ok((outcome.correct, records))
    }

    // Tests the default sweep doubles from 1 to 32
    // Verified by stopping before the maximum
    #[test]
    fn test_default_thread_counts() {
        let sweep = ThreadSweep::default();
        assert_eq!(sweep.thread_counts().collect::<Vec<_>>(), vec![1, 2, 4, 8, 16, 32]);
        assert_eq!(sweep.repetitions(), DEFAULT_REPETITIONS);
    }

    // Tests sweeps starting off a power of two stop below the maximum
    // Verified by clamping the last count to the maximum
    #[test]
    fn test_custom_thread_counts() -> knapsweep::Result<()> {
        let sweep = ThreadSweep::new(1, 3, 20)?;
        assert_eq!(sweep.thread_counts().collect::<Vec<_>>(), vec![3, 6, 12]);

        let single = ThreadSweep::new(1, 4, 4)?;
        assert_eq!(single.thread_counts().collect::<Vec<_>>(), vec![4]);
        Ok(())
    }

    // Tests doubling near the integer limit terminates
    // Verified by using wrapping multiplication
    #[test]
    fn test_thread_counts_do_not_overflow() -> knapsweep::Result<()> {
        let sweep = ThreadSweep::new(1, usize::MAX / 2 + 1, usize::MAX)?;
        assert_eq!(sweep.thread_counts().count(), 1);
        Ok(())
    }

    // Tests invalid sweep parameters are rejected
    // Verified by accepting zero repetitions
    #[test]
    fn test_rejects_invalid_parameters() {
        for (repetitions, min, max) in [(0, 1, 4), (1, 0, 4), (1, 8, 4)] {
            assert!(matches!(
                ThreadSweep::new(repetitions, min, max),
                Err(AlgorithmError::InvalidParameter { .. })
            ));
        }
    }

    // Tests repetition counts beyond the duration divisor range are rejected
    // Verified by truncating the repetition count when averaging
    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_rejects_repetitions_beyond_u32() -> knapsweep::Result<()> {
        let too_many = u32::MAX as usize + 1;

        assert!(matches!(
            ThreadSweep::new(too_many, 1, 1),
            Err(AlgorithmError::InvalidParameter {
                parameter: "repetitions",
                ..
            })
        ));
        assert_eq!(ThreadSweep::new(u32::MAX as usize, 1, 1)?.repetitions(), u32::MAX as usize);
        Ok(())
    }

    // Tests one correct record per thread count
    // Verified by emitting a record per repetition
    #[test]
    fn test_run_records_each_thread_count() -> knapsweep::Result<()> {
        let sweep = ThreadSweep::new(2, 1, 4)?;
        let (correct, records) = collect(&sweep, 220)?;

        assert!(correct);
        assert_eq!(
            records.iter().map(|r| r.thread_count).collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
        for record in &records {
            assert!(record.correct);
            assert_eq!(record.item_count, 3);
            assert_eq!(record.instance_path, Path::new("textbook.txt"));
        }
        Ok(())
    }

    // Tests a wrong expected optimum marks every record and the outcome
    // Verified by reporting only the last repetition's verdict
    #[test]
    fn test_run_reports_incorrect_solutions() -> knapsweep::Result<()> {
        let sweep = ThreadSweep::new(3, 1, 2)?.with_pruning(true);
        let (correct, records) = collect(&sweep, 221)?;

        assert!(!correct);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| !record.correct));
        Ok(())
    }

    // Tests callback errors abort the sweep
    // Verified by ignoring the callback result
    #[test]
    fn test_run_propagates_callback_errors() -> knapsweep::Result<()> {
        let sweep = ThreadSweep::new(1, 1, 8)?;
        let mut calls = 0;
        let result = sweep.run(Path::new("x"), &textbook_instance(), 220, |_| {
            calls += 1;
            Err(std::io::Error::other("closed").into())
        });

        assert!(matches!(result, Err(AlgorithmError::Output { .. })));
        assert_eq!(calls, 1);
        Ok(())
    }

    // Tests average duration is reported in whole milliseconds
    // Verified by reporting microseconds
    #[test]
    fn test_average_duration_ms() {
        let record = BenchmarkRecord {
            instance_path: "a".into(),
            correct: true,
            item_count: 1,
            thread_count: 1,
            average_duration: Duration::from_micros(2_750),
        };
        assert_eq!(record.average_duration_ms(), 2);
    }
}
