use colored::Colorize;

use substring_bench::{build_client, fetch_text, print_report, run_benchmark};

struct BenchmarkRun {
    url: &'static str,
    existing_pattern: &'static str,
    fake_pattern: &'static str,
}

const RUNS: [BenchmarkRun; 2] = [
    BenchmarkRun {
        url: "https://www.gutenberg.org/files/1342/1342-0.txt",
        existing_pattern: "It is a truth universally acknowledged",
        fake_pattern: "flux capacitor",
    },
    BenchmarkRun {
        url: "https://www.gutenberg.org/files/2701/2701-0.txt",
        existing_pattern: "Call me Ishmael",
        fake_pattern: "warp drive coolant",
    },
];

#[tokio::main]
async fn main() {
    let client = build_client();
    let mut failed = false;

    for run in &RUNS {
        println!("{}", format!("Benchmarking text from {}", run.url).bold());

        match fetch_text(&client, run.url).await {
            Ok(text) => {
                let measurements = run_benchmark(&text, run.existing_pattern, run.fake_pattern);
                print_report(&measurements);
                println!();
            }
            Err(err) => {
                eprintln!("{}", format!("Fetch failed: {}", err).red());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
