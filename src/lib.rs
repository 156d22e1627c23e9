//! line-reservoir - Uniform random line sampling for text pipelines
//!
//! This library draws a fixed-size uniform random sample of lines from a text
//! stream of unknown length in a single pass. It's meant for tabular data
//! pipelines where inputs can be far larger than memory and where header or
//! comment lines must survive the sampling untouched.
//!
//! # Key Features
//!
//! - **Bounded memory**: Holds at most `N` data lines plus the header lines
//! - **Header preservation**: Lines matching a prefix are always emitted first
//!   and never enter the sampling pool
//! - **Reproducible**: An explicit seed fixes the whole draw sequence
//! - **Byte-exact output**: Lines are written exactly as read, terminators included
//! - **Checksums**: Optionally compute SHA-256/SHA-512 of the written sample
//!
//! # Examples
//!
//! **Seeded sample** with `#` header lines:
//!
//! ```
//! use line_reservoir::{sample_lines_streaming, SampleConfig};
//!
//! let input = "#h1\na\n#h2\nb\nc\n";
//! let config = SampleConfig::new(2)
//!     .unwrap()
//!     .with_seed(Some(7))
//!     .with_header_prefix(Some(b"#"));
//!
//! let mut output = Vec::new();
//! let report = sample_lines_streaming(input.as_bytes(), &mut output, &config, None).unwrap();
//!
//! assert!(output.starts_with(b"#h1\n#h2\n"));
//! assert_eq!(report.data_kept, 2);
//! ```
//!
//! **Sampling arbitrary items** with the reservoir directly:
//!
//! ```
//! use line_reservoir::ReservoirSampler;
//! use std::num::NonZeroUsize;
//!
//! let mut sampler = ReservoirSampler::with_seed(NonZeroUsize::new(5).unwrap(), 42);
//! for i in 0..100 {
//!     sampler.offer(i);
//! }
//! assert_eq!(sampler.samples().len(), 5);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod output;
pub mod sampler;
pub mod stream;

pub use classify::{HeaderRule, LineClass};
pub use config::SampleConfig;
pub use error::{Result, SampleError};
pub use output::{DigestAlgorithm, SampleOutput};
pub use sampler::{ReservoirSampler, SlotOutcome};
pub use stream::{sample_lines, sample_lines_streaming, SampleReport};
