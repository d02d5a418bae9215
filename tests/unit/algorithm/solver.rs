//! Tests for the dynamic programming engine

#[cfg(test)]
mod tests {
    use crate::support::{brute_force_optimum, textbook_instance};
    use knapsweep::algorithm::checker::check_correctness;
    use knapsweep::algorithm::solver::{
        ALGORITHM_FAMILY, AlgorithmFamily, DynamicProgramming, SolverConfig,
    };
    use knapsweep::algorithm::strategy::{FillStrategy, SequentialFill};
    use knapsweep::benchmark::generator::InstanceGenerator;
    use knapsweep::model::{Item, ProblemInstance};

    fn engine(threads: usize) -> knapsweep::Result<DynamicProgramming> {
        DynamicProgramming::new(SolverConfig::with_threads(threads))
    }

    // Tests the textbook instance picks the two heavier items
    // Verified by backtracking from the first column
    #[test]
    fn test_textbook_instance() -> knapsweep::Result<()> {
        let instance = textbook_instance();
        let solution = engine(2)?.solve(&instance)?;

        assert_eq!(solution.indices(), &[1, 2]);
        assert!(check_correctness(&instance, 220, &solution));
        Ok(())
    }

    // Tests a single item heavier than the capacity is not taken
    // Verified by ignoring the weight in the base row
    #[test]
    fn test_single_item_too_heavy() -> knapsweep::Result<()> {
        let instance = ProblemInstance::new(vec![Item::new(10, 5)], 5);
        let solution = engine(1)?.solve(&instance)?;

        assert!(solution.is_empty());
        assert!(check_correctness(&instance, 0, &solution));
        Ok(())
    }

    // Tests zero capacity yields an empty solution for positive weights
    // Verified by treating capacity as inclusive of one extra unit
    #[test]
    fn test_zero_capacity() -> knapsweep::Result<()> {
        let mut generator = InstanceGenerator::new(3);
        let instance = generator.instance(15, 0);
        let solution = engine(4)?.solve(&instance)?;

        assert!(solution.is_empty());
        assert_eq!(solution.total_value(&instance), Some(0));
        Ok(())
    }

    // Tests the optimum matches exhaustive search on small instances
    // Verified by using >= instead of > when taking items
    #[test]
    fn test_matches_brute_force() -> knapsweep::Result<()> {
        let mut generator = InstanceGenerator::with_bounds(11, 30, 50);
        let solver = engine(4)?;

        for item_count in 0..=14 {
            let instance = generator.instance_with_ratio(item_count, 0.4);
            let expected = brute_force_optimum(&instance);
            let solution = solver.solve(&instance)?;

            assert!(
                check_correctness(&instance, expected, &solution),
                "{item_count} items: {solution:?} does not reach {expected}"
            );
        }
        Ok(())
    }

    // Tests the table and the solution are the same for every thread count
    // Verified by letting workers share one output cell
    #[test]
    fn test_deterministic_across_thread_counts() -> knapsweep::Result<()> {
        let instance = InstanceGenerator::new(5).instance_with_ratio(60, 0.5);
        let reference = DynamicProgramming::with_strategy(SequentialFill, false);
        let reference_table = reference.table(&instance.items, instance.capacity)?;
        let reference_solution = reference.solve(&instance)?;

        for threads in [1, 2, 4, 8, 16] {
            let solver = engine(threads)?;
            let table = solver.table(&instance.items, instance.capacity)?;
            for row in 0..table.rows() {
                assert_eq!(table.row(row), reference_table.row(row), "threads = {threads}");
            }
            assert_eq!(solver.solve(&instance)?, reference_solution);
        }
        Ok(())
    }

    // Tests growing the capacity never lowers the optimum
    // Verified by clamping the take branch to the inherited value
    #[test]
    fn test_optimum_monotone_in_capacity() -> knapsweep::Result<()> {
        let instance = InstanceGenerator::new(9).instance(10, 0);
        let solver = engine(2)?;

        let mut previous = 0;
        for capacity in 0..=200 {
            let optimum = solver.table(&instance.items, capacity)?.optimum();
            assert!(optimum >= previous, "capacity {capacity}");
            previous = optimum;
        }
        Ok(())
    }

    // Tests pruning keeps the optimum and returns original indices
    // Verified by returning indices into the pruned item list
    #[test]
    fn test_pruning_preserves_optimum() -> knapsweep::Result<()> {
        let mut generator = InstanceGenerator::with_bounds(21, 20, 20);
        let plain = engine(2)?;
        let pruned = DynamicProgramming::new(SolverConfig {
            threads: 2,
            prune_dominated: true,
        })?;

        for _ in 0..25 {
            let instance = generator.instance_with_ratio(16, 0.3);
            let expected = brute_force_optimum(&instance);

            assert!(check_correctness(&instance, expected, &plain.solve(&instance)?));
            assert!(check_correctness(&instance, expected, &pruned.solve(&instance)?));
        }
        Ok(())
    }

    // Tests timed runs return the same solution as untimed ones
    // Verified by timing an empty closure
    #[test]
    fn test_run_timed() -> knapsweep::Result<()> {
        let instance = textbook_instance();
        let solver = engine(1)?;
        let (solution, _elapsed) = solver.run_timed(&instance)?;

        assert_eq!(solution, solver.solve(&instance)?);
        Ok(())
    }

    // Tests engine configuration reaches the strategy
    // Verified by ignoring the configured thread count
    #[test]
    fn test_config_threads() -> knapsweep::Result<()> {
        assert_eq!(engine(6)?.strategy().threads(), 6);
        assert_eq!(SolverConfig::default(), SolverConfig::with_threads(1));
        assert!(DynamicProgramming::new(SolverConfig::with_threads(0)).is_err());
        Ok(())
    }

    // Tests family tags used in the record banner
    // Verified by swapping two tags
    #[test]
    fn test_family_tags() {
        assert_eq!(ALGORITHM_FAMILY, AlgorithmFamily::DynamicProgramming);
        assert_eq!(AlgorithmFamily::DynamicProgramming.to_string(), "dyn");
        assert_eq!(AlgorithmFamily::BranchAndBound.tag(), "bnb");
        assert_eq!(AlgorithmFamily::TwoList.tag(), "tl");
    }
}
