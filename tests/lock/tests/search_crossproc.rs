//! Cross-process determinism for the reference scenarios.
//!
//! Spawns the `search_fixture` binary under four environment variants and
//! asserts all produce identical stdout. Each process gets a fresh `HashMap`
//! seed, so this also shows that hash iteration order never leaks into the
//! search.

use std::path::Path;
use std::process::Command;

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_search_fixture")
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    // Sanity checks.
    assert_eq!(baseline.matches("scenario=").count(), 5);
    assert!(
        baseline.contains("scenario=diamond_a_to_d\npath=A,C,D\ncost=5\n"),
        "baseline output missing diamond result: {baseline}"
    );
    assert!(
        baseline.contains("trace_digest=sha256:"),
        "baseline output missing trace_digest"
    );
    assert!(
        baseline.contains("outcome_digest=sha256:"),
        "baseline output missing outcome_digest"
    );

    // Variant 2: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 4: verbose logging. Logs go to stderr only.
    let variant_logging = run_variant(&root, &[("RUST_LOG", "trace"), ("TANDEM_NOISE", "1")]);
    assert_eq!(
        baseline, variant_logging,
        "output differs when RUST_LOG=trace"
    );
}
