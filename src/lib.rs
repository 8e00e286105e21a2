use clap::Parser;
use color_eyre::eyre::{ensure, WrapErr};
use hyphae::{ArrayList, Chain, Collection, OrderedChain};
use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Write;

pub use color_eyre::eyre::Result;

pub mod trace;

/// The capacity the array list starts out with, before any values are
/// generated.
const INITIAL_CAPACITY: usize = 10;

/// How far a sum computed through [`Collection::for_each`] may drift from the
/// running total before it's considered wrong.
const TOLERANCE: f64 = 0.001;

#[derive(Debug, Parser)]
#[command(
    name = "hyphae-demo",
    about = "exercises the hyphae collections",
    version
)]
pub struct Options {
    /// How many random values to add to the array list and the chain.
    #[arg(short, long, env = "HYPHAE_COUNT", default_value_t = 10)]
    pub count: usize,

    /// Seeds the random number generator, so that runs are reproducible.
    #[arg(short, long, env = "HYPHAE_SEED", default_value_t = 0)]
    pub seed: u64,

    /// Upper bound of the random values. The lower bound is always 0.
    #[arg(long, default_value_t = 10_000.0)]
    pub max: f64,

    /// How many values (`1..=n`) to insert into the ordered chain.
    ///
    /// This must be at least 5, since the ordered scenario removes 1 and 5.
    #[arg(long, default_value_t = 10)]
    pub ordered: u32,

    /// Configures logging.
    #[arg(short, long, env = "RUST_LOG", default_value = "hyphae_demo=info,warn")]
    pub log: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 0,
            max: 10_000.0,
            ordered: 10,
            log: String::from("hyphae_demo=info,warn"),
        }
    }
}

impl Options {
    /// Runs both parts of the demo, writing their output to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        self.part_one(out).context("part 1 failed")?;
        writeln!(out)?;
        self.part_two(out).context("part 2 failed")?;
        Ok(())
    }

    /// Fills an [`ArrayList`] and a [`Chain`] with the same random values,
    /// and checks that summing each through a `&dyn Collection` agrees with
    /// the running total.
    #[tracing::instrument(
        level = "info",
        skip(self, out),
        fields(count = self.count, seed = self.seed)
    )]
    pub fn part_one(&self, out: &mut impl Write) -> Result<()> {
        ensure!(
            self.max.is_finite() && self.max > 0.0,
            "the upper bound must be a positive finite number, not {}",
            self.max
        );

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        let values = Uniform::new(0.0, self.max);

        let mut array = ArrayList::with_capacity(INITIAL_CAPACITY);
        let mut chain = Chain::new();
        let mut total = 0.0;
        for value in (&mut rng).sample_iter(values).take(self.count) {
            total += value;
            array.push(value);
            chain.push_back(value);
        }
        tracing::debug!(total, capacity = array.capacity(), "generated values");

        writeln!(out, "Array List Elements: {array}")?;
        writeln!(out, "Linked List Elements: {chain}")?;
        writeln!(out)?;
        writeln!(out, "Testing Part 1")?;

        writeln!(out, "Testing ArrayList sum")?;
        check_sum("array list", &array, total)?;
        writeln!(out, "Passed!")?;

        writeln!(out, "Testing LinkedList sum")?;
        check_sum("chain", &chain, total)?;
        writeln!(out, "Passed!")?;

        writeln!(out, "Part 1 complete!")?;
        Ok(())
    }

    /// Inserts `1..=n` into an ascending [`OrderedChain`], then checks that
    /// removing present values succeeds and removing absent ones does not.
    #[tracing::instrument(level = "info", skip(self, out), fields(n = self.ordered))]
    pub fn part_two(&self, out: &mut impl Write) -> Result<()> {
        let n = self.ordered;
        ensure!(n >= 5, "the ordered chain needs at least 5 values, not {n}");

        writeln!(out, "Testing Part 2")?;
        writeln!(out, "Testing OrderedList remove")?;

        let mut ordered = OrderedChain::new(|x: &f64, y: &f64| x < y);
        for i in 1..=n {
            ordered.insert(f64::from(i));
        }
        writeln!(out, "Ordered List elements: {ordered}")?;

        for present in [1.0, 5.0] {
            ensure!(
                ordered.remove(&present),
                "{present} should have been removed from {ordered}"
            );
            tracing::debug!(present, len = ordered.len(), "removed");
        }
        for absent in [0.0, f64::from(n) + 1.0] {
            ensure!(
                !ordered.remove(&absent),
                "{absent} was never inserted, but removing it succeeded"
            );
        }
        ensure!(
            ordered.len() == n as usize - 2,
            "expected {} elements after removing 2, found {}",
            n - 2,
            ordered.len()
        );

        writeln!(out, "Ordered List elements: {ordered}")?;
        writeln!(out, "Passed!")?;
        writeln!(out, "Part 2 complete!")?;
        Ok(())
    }
}

/// Sums every value in `values`.
pub fn sum(values: &dyn Collection<f64>) -> f64 {
    let mut sum = 0.0;
    values.for_each(&mut |value| sum += *value);
    sum
}

fn check_sum(name: &str, values: &dyn Collection<f64>, expected: f64) -> Result<()> {
    let actual = sum(values);
    tracing::info!(name, actual, expected, "checking sum");
    ensure!(
        (actual - expected).abs() < TOLERANCE,
        "{name} summed to {actual}, but the values added up to {expected}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("demo should succeed");
        String::from_utf8(out).expect("demo output should be UTF-8")
    }

    #[test]
    fn default_options_match_cli() {
        let parsed = Options::parse_from(["hyphae-demo"]);
        let default = Options::default();
        assert_eq!(parsed.count, default.count);
        assert_eq!(parsed.seed, default.seed);
        assert_eq!(parsed.max, default.max);
        assert_eq!(parsed.ordered, default.ordered);
    }

    #[test]
    fn part_one_passes() {
        let opts = Options::default();
        let out = run_to_string(|out| opts.part_one(out));
        assert!(out.starts_with("Array List Elements: ["));
        assert_eq!(out.matches("Passed!").count(), 2);
        assert!(out.ends_with("Part 1 complete!\n"));
    }

    #[test]
    fn part_one_with_no_values() {
        let opts = Options {
            count: 0,
            ..Options::default()
        };
        let out = run_to_string(|out| opts.part_one(out));
        assert!(out.contains("Array List Elements: []\n"));
        assert!(out.contains("Linked List Elements: []\n"));
    }

    #[test]
    fn part_one_rejects_bad_bound() {
        for max in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = Options {
                max,
                ..Options::default()
            };
            assert!(opts.part_one(&mut Vec::new()).is_err(), "max = {max}");
        }
    }

    #[test]
    fn part_two_output() {
        let opts = Options::default();
        let out = run_to_string(|out| opts.part_two(out));
        assert!(out.contains(
            "Ordered List elements: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]\n\
             Ordered List elements: [2, 3, 4, 6, 7, 8, 9, 10]\n"
        ));
        assert!(out.ends_with("Part 2 complete!\n"));
    }

    #[test]
    fn part_two_needs_five_values() {
        let opts = Options {
            ordered: 4,
            ..Options::default()
        };
        assert!(opts.part_two(&mut Vec::new()).is_err());

        let opts = Options {
            ordered: 5,
            ..Options::default()
        };
        let out = run_to_string(|out| opts.part_two(out));
        assert!(out.contains("Ordered List elements: [2, 3, 4]\n"));
    }

    #[test]
    fn run_is_deterministic() {
        let opts = Options {
            seed: 42,
            ..Options::default()
        };
        let first = run_to_string(|out| opts.run(out));
        let second = run_to_string(|out| opts.run(out));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn sums_agree(values in proptest::collection::vec(0.0..10_000.0f64, 0..64)) {
            let array: ArrayList<f64> = values.iter().copied().collect();
            let chain: Chain<f64> = values.iter().copied().collect();
            let expected: f64 = values.iter().sum();

            prop_assert!((sum(&array) - expected).abs() < TOLERANCE);
            prop_assert!((sum(&chain) - expected).abs() < TOLERANCE);
        }

        #[test]
        fn any_seed_passes(seed in any::<u64>(), count in 0usize..128) {
            let opts = Options { seed, count, ..Options::default() };
            prop_assert!(opts.part_one(&mut Vec::new()).is_ok());
        }
    }
}
