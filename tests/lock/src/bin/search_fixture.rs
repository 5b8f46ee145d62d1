//! Binary that runs the reference scenarios through the hybrid search and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` block per scenario on stdout. Logging goes to
//! stderr and is controlled by `RUST_LOG` (default `warn`).

use lock_tests::scenarios::REFERENCE_SCENARIOS;
use tandem_search::heuristic::OrdinalDistance;
use tandem_search::search::search_traced;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    init_tracing();

    for scenario in &REFERENCE_SCENARIOS {
        let policy = scenario.policy();
        policy.validate().expect("fixture split ratio is valid");
        let graph = scenario.graph();
        let result = search_traced(
            &graph,
            scenario.start(),
            &scenario.goal(),
            &policy,
            &OrdinalDistance,
        );
        tracing::info!(scenario = scenario.name, "scenario complete");

        let trace_digest = result.trace.digest().expect("trace digest");
        let outcome_digest = result.outcome.digest().expect("outcome digest");
        let (phase_one, phase_two) = result.outcome.phase_counts();
        let path = result
            .outcome
            .path()
            .map_or_else(|| "none".to_string(), |p| p.join(","));
        let cost = result
            .outcome
            .cost()
            .map_or_else(|| "none".to_string(), |c| c.to_string());

        println!("scenario={}", scenario.name);
        println!("path={path}");
        println!("cost={cost}");
        println!("phase_one_accepted={phase_one}");
        println!("phase_two_accepted={phase_two}");
        println!("total_pops={}", result.trace.events.len());
        println!("trace_digest={}", trace_digest.as_str());
        println!("outcome_digest={}", outcome_digest.as_str());
    }
}
