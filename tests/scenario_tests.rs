mod common;

use common::write_trace;
use coverage_growth::aggregator::{align_runs, reduce_run, CoverageMetric, RunTimeline};
use coverage_growth::corpus::{load_corpus, CorpusOptions};
use coverage_growth::parser::{CompanionMtimeResolver, TraceRecord};
use coverage_growth::utils::{TraceError, TraceSection};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn load_run(dir: &Path) -> Result<RunTimeline, TraceError> {
    let resolver = CompanionMtimeResolver::new(".trace");
    load_corpus(dir, &CorpusOptions::default(), &resolver).map(|records| reduce_run(&records))
}

fn points(timeline: &RunTimeline) -> Vec<(f64, usize, usize)> {
    timeline
        .series
        .iter()
        .map(|p| (p.relative_time, p.unique_blocks, p.unique_edges))
        .collect()
}

#[test]
fn test_single_trace_run() {
    let dir = tempfile::tempdir().unwrap();
    write_trace(dir.path(), "seed", 1_000, &[1, 2, 3], &[10, 20]);

    let timeline = load_run(dir.path()).unwrap();
    assert_eq!(points(&timeline), vec![(0.0, 3, 2)]);
    assert_eq!(timeline.start_timestamp, Some(1_000.0));
}

#[test]
fn test_two_traces_grow_edges() {
    let dir = tempfile::tempdir().unwrap();
    // Names reversed relative to time: ordering comes from companion mtimes
    write_trace(dir.path(), "a_late", 150, &[], &[2, 3]);
    write_trace(dir.path(), "z_early", 100, &[], &[1, 2]);

    let timeline = load_run(dir.path()).unwrap();
    let edges: Vec<(f64, usize)> = timeline
        .series
        .iter()
        .map(|p| (p.relative_time, p.unique_edges))
        .collect();
    assert_eq!(edges, vec![(0.0, 2), (50.0, 3)]);
}

#[test]
fn test_two_runs_align_with_forward_fill() {
    let run_a = tempfile::tempdir().unwrap();
    let run_b = tempfile::tempdir().unwrap();
    write_trace(run_a.path(), "only", 500, &[1], &[1, 2, 3]);
    write_trace(run_b.path(), "first", 900, &[1], &[7]);
    write_trace(run_b.path(), "second", 950, &[1], &[8, 9]);

    let a = load_run(run_a.path()).unwrap();
    let mut b = load_run(run_b.path()).unwrap();
    // Run B's only observation at 50: drop its first point
    b.series.remove(0);

    let table = align_runs(&[a, b], CoverageMetric::Edges);
    let rows: Vec<(f64, Vec<usize>)> = table
        .rows
        .iter()
        .map(|r| (r.timestamp, r.counts.clone()))
        .collect();
    assert_eq!(rows, vec![(0.0, vec![3, 0]), (50.0, vec![3, 3])]);
}

#[test]
fn test_empty_directory_is_zero_column() {
    let run_a = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();
    write_trace(run_a.path(), "t1", 10, &[1], &[1]);
    write_trace(run_a.path(), "t2", 20, &[2], &[2]);

    let empty_timeline = load_run(empty.path()).unwrap();
    assert!(empty_timeline.is_empty());
    assert_eq!(empty_timeline, RunTimeline::empty());

    let table = align_runs(
        &[load_run(run_a.path()).unwrap(), empty_timeline],
        CoverageMetric::Edges,
    );
    assert_eq!(table.rows.len(), 2);
    assert!(table.column(1).unwrap().all(|count| count == 0));
}

#[test]
fn test_truncated_trace_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    write_trace(dir.path(), "ok", 10, &[1], &[1]);
    fs::write(dir.path().join("bad.trace"), "0\n5\n1\n2\n3\n").unwrap();
    fs::write(dir.path().join("bad"), "").unwrap();

    match load_run(dir.path()).unwrap_err() {
        TraceError::TruncatedTraceFile {
            path,
            section,
            declared,
            found,
        } => {
            assert_eq!(path, dir.path().join("bad.trace"));
            assert_eq!(section, TraceSection::Edges);
            assert_eq!((declared, found), (5, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_companion_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("orphan.trace"), "0\n0\n").unwrap();

    assert!(matches!(
        load_run(dir.path()),
        Err(TraceError::MissingCompanionArtifact { .. })
    ));
}

fn synthetic_records() -> Vec<TraceRecord> {
    // Deterministic pseudo-random identifier sets
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..40)
        .map(|i| {
            let blocks: Vec<u64> = (0..(next() % 20)).map(|_| next() % 200).collect();
            let edges: Vec<u64> = (0..(next() % 20)).map(|_| next() % 300).collect();
            TraceRecord::new(format!("{i}.trace"), blocks, edges, 1_000.0 + (i / 3) as f64)
        })
        .collect()
}

#[test]
fn test_series_properties() {
    let records = synthetic_records();
    let timeline = reduce_run(&records);

    assert_eq!(timeline.series[0].relative_time, 0.0);
    for pair in timeline.series.windows(2) {
        assert!(pair[0].unique_blocks <= pair[1].unique_blocks);
        assert!(pair[0].unique_edges <= pair[1].unique_edges);
        assert!(pair[0].relative_time <= pair[1].relative_time);
    }

    assert_eq!(reduce_run(&records), timeline);
}

#[test]
fn test_forward_fill_property() {
    let records = synthetic_records();
    let a = reduce_run(&records[..20]);
    let b = reduce_run(&records[10..]);
    let table = align_runs(&[a.clone(), b.clone()], CoverageMetric::Edges);

    for (run, timeline) in [a, b].iter().enumerate() {
        for pair in table.rows.windows(2) {
            let updated = timeline
                .series
                .iter()
                .any(|p| p.relative_time == pair[1].timestamp);
            if !updated {
                assert_eq!(pair[0].counts[run], pair[1].counts[run]);
            }
        }
    }
}
