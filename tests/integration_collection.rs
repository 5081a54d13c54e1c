// tests/integration_collection.rs
//! End-to-end runs over collections written to a temp directory.

use std::fs;
use std::path::Path;

use clap::Parser;
use linkrank_core::cli::{self, Cli};
use linkrank_core::collection;
use linkrank_core::config::Config;
use linkrank_core::exit::LinkRankExit;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// A -> B, A -> C, B -> C, C -> A; D has no links at all.
fn sample_collection() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "collection.txt", "A B\nC   D\n");
    write(d.path(), "A.txt", "#start Section-1\nB C A B\n#end Section-1\n");
    write(d.path(), "B.txt", "links to C only\n");
    write(d.path(), "C.txt", "back to A\n");
    write(d.path(), "D.txt", "nothing to see here\n");
    d
}

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("linkrank").chain(args.iter().copied()))
}

fn report_lines(path: &Path) -> Vec<(String, usize, String)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let parts: Vec<_> = line.split(", ").collect();
            assert_eq!(parts.len(), 3, "bad report line: {line}");
            (
                parts[0].to_string(),
                parts[1].parse().unwrap(),
                parts[2].to_string(),
            )
        })
        .collect()
}

#[test]
fn test_load_builds_graph_from_files() {
    let d = sample_collection();
    let config = Config::load(d.path()).unwrap();
    let coll = collection::load(&config).unwrap();

    assert_eq!(coll.len(), 4);
    assert_eq!(coll.graph.edge_count(), 4);
    let a = coll.vertices.index_of("A").unwrap();
    let b = coll.vertices.index_of("B").unwrap();
    let c = coll.vertices.index_of("C").unwrap();
    assert!(coll.graph.is_connected(a, b));
    assert!(coll.graph.is_connected(a, c));
    assert!(!coll.graph.is_connected(a, a));
    assert!(coll.graph.is_connected(c, a));
}

#[test]
fn test_missing_document_names_path() {
    let d = sample_collection();
    fs::remove_file(d.path().join("C.txt")).unwrap();
    let config = Config::load(d.path()).unwrap();
    let err = collection::load(&config).err().unwrap();
    assert!(err.to_string().contains("C.txt"), "error should name the file: {err}");
}

#[test]
fn test_full_run_writes_ranked_report() {
    let d = sample_collection();
    let dir = d.path().to_str().unwrap();
    let exit = cli::execute(&cli(&["0.85", "0.00001", "1000", "--dir", dir, "--top", "0"])).unwrap();
    assert_eq!(exit, LinkRankExit::Success);

    let lines = report_lines(&d.path().join("pagerankList.txt"));
    let order: Vec<_> = lines.iter().map(|(n, o, _)| (n.as_str(), *o)).collect();
    assert_eq!(order, vec![("A", 2), ("C", 1), ("B", 1), ("D", 0)]);

    for (_, _, score) in &lines {
        let decimals = score.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 7, "score {score} must have seven decimals");
    }
    // D has no in-links: it keeps the teleport share (1 - 0.85) / 4.
    assert_eq!(lines[3].2, "0.0375000");
}

#[test]
fn test_output_override_and_config_file() {
    let d = sample_collection();
    write(d.path(), "linkrank.toml", "[rank]\nmax_iterations = 0\n");
    let out = d.path().join("custom.txt");
    let args = [
        "--dir",
        d.path().to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--top",
        "0",
        "0.85",
        "0.0001",
        "3",
    ];
    let exit = cli::execute(&cli(&args)).unwrap();
    assert_eq!(exit, LinkRankExit::Success);
    assert!(out.exists());
    assert!(!d.path().join("pagerankList.txt").exists());
}

#[test]
fn test_zero_iterations_in_config_is_rejected() {
    let d = sample_collection();
    write(d.path(), "linkrank.toml", "[rank]\nmax_iterations = 0\n");
    let err = cli::execute(&cli(&["--dir", d.path().to_str().unwrap()])).unwrap_err();
    assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
}

#[test]
fn test_invalid_damping_is_invalid_input() {
    let d = sample_collection();
    let err = cli::execute(&cli(&["1.5", "0.0001", "10", "--dir", d.path().to_str().unwrap()]))
        .unwrap_err();
    assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
    assert_eq!(LinkRankExit::InvalidInput.code(), 2);
}

#[test]
fn test_missing_collection_is_generic_error() {
    let d = tempfile::tempdir().unwrap();
    let err = cli::execute(&cli(&["--dir", d.path().to_str().unwrap()])).unwrap_err();
    assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::Error);
    assert!(format!("{err:#}").contains("collection.txt"));
}

#[test]
fn test_empty_collection_writes_empty_report() {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "collection.txt", "   \n");
    let exit = cli::execute(&cli(&["--dir", d.path().to_str().unwrap(), "--top", "0"])).unwrap();
    assert_eq!(exit, LinkRankExit::Success);
    let report = fs::read_to_string(d.path().join("pagerankList.txt")).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_init_writes_default_config_once() {
    let d = tempfile::tempdir().unwrap();
    let dir = d.path().to_str().unwrap();
    assert_eq!(cli::execute(&cli(&["--init", "--dir", dir])).unwrap(), LinkRankExit::Success);
    let loaded = Config::load(d.path()).unwrap();
    assert_eq!(loaded.rank.damping, 0.85);
    assert!(cli::execute(&cli(&["--init", "--dir", dir])).is_err(), "existing config is kept");
}

#[test]
fn test_invalid_utf8_document_still_links() {
    let d = sample_collection();
    fs::write(d.path().join("A.txt"), b"caf\xe9 B\n").unwrap();
    let config = Config::load(d.path()).unwrap();
    let coll = collection::load(&config).unwrap();

    let a = coll.vertices.index_of("A").unwrap();
    let b = coll.vertices.index_of("B").unwrap();
    let c = coll.vertices.index_of("C").unwrap();
    assert!(coll.graph.is_connected(a, b), "token after the bad byte still links");
    assert!(!coll.graph.is_connected(a, c));
}

#[test]
fn test_parallel_verbose_run_matches_sequential_report() {
    let seq = sample_collection();
    let par = sample_collection();
    let seq_dir = seq.path().to_str().unwrap();
    let par_dir = par.path().to_str().unwrap();

    let exit = cli::execute(&cli(&["--dir", seq_dir, "--top", "0"])).unwrap();
    assert_eq!(exit, LinkRankExit::Success);
    let exit = cli::execute(&cli(&["--dir", par_dir, "--parallel", "--verbose", "--top", "2"]))
        .unwrap();
    assert_eq!(exit, LinkRankExit::Success);

    let seq_report = fs::read_to_string(seq.path().join("pagerankList.txt")).unwrap();
    let par_report = fs::read_to_string(par.path().join("pagerankList.txt")).unwrap();
    assert!(!seq_report.is_empty());
    assert_eq!(seq_report, par_report);
}

