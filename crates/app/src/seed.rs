use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Flag(u64),
    Generated(u64),
}

impl SeedSource {
    pub fn value(self) -> u64 {
        match self {
            Self::Flag(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Entropy from wall clock, pid, and a process-local counter, mixed so that
/// rapid successive launches still diverge.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Pick the seed from `--seed <n>` / `--seed=<n>` if present, else fall back
/// to the generated one. Flags after the first are rejected.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedSource, String> {
    let mut selected = None;
    let mut arguments = args.iter().skip(1).peekable();

    while let Some(argument) = arguments.next() {
        let value = if argument == "--seed" {
            let Some(value) = arguments.next() else {
                return Err("missing value for --seed".to_string());
            };
            Some(value.as_str())
        } else {
            argument.strip_prefix("--seed=")
        };

        let Some(value) = value else { continue };
        if selected.is_some() {
            return Err("seed provided more than once".to_string());
        }
        selected = Some(parse_seed_value(value)?);
    }

    Ok(match selected {
        Some(seed) => SeedSource::Flag(seed),
        None => SeedSource::Generated(generated_seed),
    })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_flag_is_absent() {
        let args = as_args(&["delve"]);
        let source = resolve_seed_from_args(&args, 9_876_543).expect("resolution");
        assert_eq!(source, SeedSource::Generated(9_876_543));
    }

    #[test]
    fn parses_seed_flag_with_separate_value() {
        let args = as_args(&["delve", "--seed", "4242"]);
        let source = resolve_seed_from_args(&args, 1).expect("valid --seed");
        assert_eq!(source, SeedSource::Flag(4_242));
    }

    #[test]
    fn parses_seed_flag_with_inline_value() {
        let args = as_args(&["delve", "--seed=2026"]);
        let source = resolve_seed_from_args(&args, 1).expect("valid --seed");
        assert_eq!(source, SeedSource::Flag(2_026));
    }

    #[test]
    fn errors_when_seed_flag_has_no_value() {
        let args = as_args(&["delve", "--seed"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("missing value");
        assert!(err.contains("missing"), "error should explain missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["delve", "--seed=abc"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("non-numeric value");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let args = as_args(&["delve", "--seed=1", "--seed", "2"]);
        let err = resolve_seed_from_args(&args, 1).expect_err("duplicate flags");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
