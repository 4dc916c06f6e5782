//! Sequential timing harness for the three matchers.

use std::time::{Duration, Instant};

use colored::Colorize;

use crate::boyer_moore::boyer_moore_search;
use crate::kmp::kmp_search;
use crate::rabin_karp::rabin_karp_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }

    pub fn search(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Algorithm::Kmp => kmp_search(text, pattern),
            Algorithm::BoyerMoore => boyer_moore_search(text, pattern),
            Algorithm::RabinKarp => rabin_karp_search(text, pattern),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Existing,
    Fake,
}

impl PatternKind {
    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::Existing => "Existing",
            PatternKind::Fake => "Fake",
        }
    }
}

/// One timed search invocation.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub kind: PatternKind,
    pub duration: Duration,
    pub found: Option<usize>,
}

pub fn measure(
    algorithm: Algorithm,
    kind: PatternKind,
    text: &[u8],
    pattern: &[u8],
) -> Measurement {
    let start = Instant::now();
    let found = algorithm.search(text, pattern);
    let duration = start.elapsed();

    Measurement {
        algorithm,
        kind,
        duration,
        found,
    }
}

/// Run every algorithm against the existing and fake patterns, one
/// invocation at a time. The runs must stay sequential: overlapping them
/// would skew the wall-clock numbers being compared.
pub fn run_benchmark(text: &str, existing_pattern: &str, fake_pattern: &str) -> Vec<Measurement> {
    let text = text.as_bytes();
    let mut measurements = Vec::with_capacity(Algorithm::ALL.len() * 2);

    for algorithm in Algorithm::ALL {
        measurements.push(measure(
            algorithm,
            PatternKind::Existing,
            text,
            existing_pattern.as_bytes(),
        ));
        measurements.push(measure(
            algorithm,
            PatternKind::Fake,
            text,
            fake_pattern.as_bytes(),
        ));
    }

    measurements
}

/// Plain text form of one report line.
pub fn report_line(measurement: &Measurement) -> String {
    format!(
        "{} Search - {}: {} seconds",
        measurement.algorithm.name(),
        measurement.kind.label(),
        measurement.duration.as_secs_f64()
    )
}

/// Print the report, one line per measurement. Colorization highlights the
/// algorithm name and the duration without changing the line's text.
pub fn print_report(measurements: &[Measurement]) {
    for measurement in measurements {
        println!(
            "{} Search - {}: {} seconds",
            measurement.algorithm.name().bold(),
            measurement.kind.label(),
            measurement.duration.as_secs_f64().to_string().cyan()
        );
    }
}
