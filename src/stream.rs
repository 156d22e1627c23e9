use std::io::{BufRead, BufReader, Read, Write};

use tracing::{debug, trace, warn};

use crate::classify::LineClass;
use crate::config::SampleConfig;
use crate::error::{Result, SampleError};
use crate::output::{DigestAlgorithm, SampleOutput};
use crate::sampler::{ReservoirSampler, SlotOutcome};

/// Counts and checksum describing a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    /// Header lines emitted
    pub headers: usize,
    /// Data lines read from the input
    pub data_seen: u64,
    /// Data lines emitted
    pub data_kept: usize,
    /// Hex checksum of the written output, when requested
    pub digest: Option<String>,
}

/// Read the whole input once and return headers plus the final reservoir
///
/// This function:
/// - Reads input line by line, keeping each line's bytes and terminator
/// - Sends header lines to the header set in encounter order
/// - Offers data lines to the reservoir, which alone advances the draw counter
/// - Retains at most `capacity` data lines plus the headers in memory
pub fn sample_lines<R: Read>(input: R, config: &SampleConfig) -> Result<SampleOutput> {
    let mut reader = BufReader::new(input);
    let rule = config.header_rule();

    let mut sampler = match config.seed() {
        Some(seed) => ReservoirSampler::with_seed(config.capacity(), seed),
        None => ReservoirSampler::new(config.capacity()),
    };
    let mut headers = Vec::new();

    debug!(
        capacity = config.capacity().get(),
        seed = ?config.seed(),
        header_prefix = ?rule.prefix().map(String::from_utf8_lossy),
        "starting reservoir pass"
    );

    loop {
        let mut line = Vec::new();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(SampleError::Read)?;
        if n == 0 {
            break; // EOF
        }

        match rule.classify(&line) {
            LineClass::Header => headers.push(line),
            LineClass::Data => {
                if let SlotOutcome::Replaced(slot) = sampler.offer(line) {
                    trace!(slot, seen = sampler.seen(), "replaced reservoir slot");
                }
            }
        }
    }

    if rule.is_enabled() && headers.is_empty() {
        warn!("header prefix was set but no header lines were found");
    }
    debug!(
        headers = headers.len(),
        data_seen = sampler.seen(),
        data_kept = sampler.samples().len(),
        "input exhausted"
    );

    Ok(SampleOutput {
        headers,
        data_seen: sampler.seen(),
        samples: sampler.into_samples(),
    })
}

/// Sample the input and write the result, optionally computing a checksum
///
/// Nothing is written unless the input was read to the end without error.
///
/// Returns a [`SampleReport`]; its `digest` is `Some(hex_string)` only when
/// a digest algorithm was specified.
pub fn sample_lines_streaming<R: Read, W: Write>(
    input: R,
    output: &mut W,
    config: &SampleConfig,
    digest_algorithm: Option<DigestAlgorithm>,
) -> Result<SampleReport> {
    let sample = sample_lines(input, config)?;

    let digest = sample
        .emit(output, digest_algorithm)
        .map_err(SampleError::Write)?;

    Ok(SampleReport {
        headers: sample.headers.len(),
        data_seen: sample.data_seen,
        data_kept: sample.samples.len(),
        digest,
    })
}
