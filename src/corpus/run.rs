//! Per-run loading with explicit success/failure.
//!
//! A failing run never hides the outcome of the others. Whether a
//! failure aborts the report or becomes an empty column is the caller's
//! decision.

use super::loader::{load_corpus, CorpusOptions};
use crate::aggregator::{reduce_run, RunTimeline};
use crate::parser::OrderingKeyResolver;
use crate::utils::error::TraceError;
use crate::utils::manifest::RunSpec;
use log::{info, warn};
use rayon::prelude::*;

/// Result of loading and reducing one run
#[derive(Debug)]
pub struct RunOutcome {
    pub spec: RunSpec,
    pub result: Result<RunTimeline, TraceError>,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&TraceError> {
        self.result.as_ref().err()
    }

    /// The run's timeline, or an empty one if loading failed
    pub fn timeline_or_empty(&self) -> RunTimeline {
        self.result.as_ref().cloned().unwrap_or_default()
    }
}

/// Load one run directory and reduce it to a timeline
pub fn load_run(
    spec: &RunSpec,
    options: &CorpusOptions,
    resolver: &dyn OrderingKeyResolver,
) -> RunOutcome {
    let result = load_corpus(&spec.directory, options, resolver).map(|records| reduce_run(&records));

    match &result {
        Ok(timeline) => {
            let (blocks, edges) = timeline.totals();
            info!(
                "Run '{}': {} traces, {} unique blocks, {} unique edges",
                spec.label,
                timeline.len(),
                blocks,
                edges
            );
        }
        Err(e) => warn!("Run '{}' failed to load: {}", spec.label, e),
    }

    RunOutcome {
        spec: spec.clone(),
        result,
    }
}

/// Load every configured run concurrently
///
/// Outcomes come back in configuration order whatever order the runs
/// finish in.
pub fn load_runs(
    specs: &[RunSpec],
    options: &CorpusOptions,
    resolver: &dyn OrderingKeyResolver,
) -> Vec<RunOutcome> {
    specs
        .par_iter()
        .map(|spec| load_run(spec, options, resolver))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TraceMtimeResolver;
    use std::path::PathBuf;

    #[test]
    fn test_failed_run_does_not_affect_others() {
        let good = tempfile::tempdir().unwrap();
        std::fs::write(good.path().join("one.trace"), "1\n1\n4\n8\n").unwrap();

        let specs = vec![
            RunSpec {
                label: "missing".to_string(),
                directory: PathBuf::from("/nonexistent/coverage/dir"),
            },
            RunSpec {
                label: "good".to_string(),
                directory: good.path().to_path_buf(),
            },
        ];

        let outcomes = load_runs(&specs, &CorpusOptions::default(), &TraceMtimeResolver);

        assert!(!outcomes[0].is_ok());
        assert!(matches!(outcomes[0].error(), Some(TraceError::Io { .. })));
        assert!(outcomes[0].timeline_or_empty().is_empty());

        assert!(outcomes[1].is_ok());
        assert_eq!(outcomes[1].timeline_or_empty().totals(), (1, 1));
    }

    #[test]
    fn test_load_runs_keeps_configuration_order() {
        let dirs: Vec<_> = (0..4).map(|_| tempfile::tempdir().unwrap()).collect();
        for (i, dir) in dirs.iter().enumerate() {
            for t in 0..=i {
                let text = format!("1\n1\n{t}\n{t}\n");
                std::fs::write(dir.path().join(format!("t{t}.trace")), text).unwrap();
            }
        }

        let specs: Vec<RunSpec> = dirs
            .iter()
            .enumerate()
            .map(|(i, dir)| RunSpec {
                label: format!("run-{i}"),
                directory: dir.path().to_path_buf(),
            })
            .collect();
        let options = CorpusOptions {
            jobs: 2,
            ..Default::default()
        };

        let outcomes = load_runs(&specs, &options, &TraceMtimeResolver);

        let labels: Vec<_> = outcomes.iter().map(|o| o.spec.label.as_str()).collect();
        assert_eq!(labels, vec!["run-0", "run-1", "run-2", "run-3"]);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.timeline_or_empty().totals(), (i + 1, i + 1));
        }
    }
}
