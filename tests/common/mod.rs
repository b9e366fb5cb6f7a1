//! Fixture helpers: trace files plus companion artifacts with fixed mtimes.

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};

/// Render a trace file body
pub fn trace_text(blocks: &[u64], edges: &[u64]) -> String {
    let mut text = format!("{}\n{}\n", blocks.len(), edges.len());
    for id in blocks.iter().chain(edges) {
        text.push_str(&format!("{id}\n"));
    }
    text
}

/// Write `<name>.trace` and its companion `<name>` modified at `secs`
pub fn write_trace(dir: &Path, name: &str, secs: u64, blocks: &[u64], edges: &[u64]) {
    fs::write(dir.join(format!("{name}.trace")), trace_text(blocks, edges)).unwrap();

    let companion = File::create(dir.join(name)).unwrap();
    companion
        .set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}
