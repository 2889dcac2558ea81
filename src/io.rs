use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::frame::FrameIndex;
use crate::page_table::PageNumber;

/// Parse a whitespace-separated reference string.
pub fn parse_reference_string(content: &str) -> Result<Vec<PageNumber>> {
    let mut references = Vec::new();
    for token in content.split_whitespace() {
        let page: PageNumber = token
            .parse()
            .with_context(|| format!("Invalid page number: {token}"))?;
        references.push(page);
    }
    if references.is_empty() {
        bail!("Reference string is empty");
    }
    Ok(references)
}

pub fn read_reference_string<P: AsRef<Path>>(path: P) -> Result<Vec<PageNumber>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read input file {}", path.as_ref().display()))?;
    parse_reference_string(&content)
}

/// Write the per-reference frame indices, space-separated on one line.
pub fn write_frame_trace<P: AsRef<Path>>(path: P, frames: &[FrameIndex]) -> Result<()> {
    let output: Vec<String> = frames.iter().map(|f| f.to_string()).collect();
    fs::write(path.as_ref(), output.join(" "))
        .with_context(|| format!("Failed to write output file {}", path.as_ref().display()))
}
