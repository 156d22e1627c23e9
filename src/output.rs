use std::fmt;
use std::io::Write;
use std::str::FromStr;

use sha2::{Digest, Sha256, Sha512};

/// Supported digest algorithms for checksum computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// SHA-256 checksum
    Sha256,
    /// SHA-512 checksum
    Sha512,
}

impl DigestAlgorithm {
    /// Display name used when reporting the checksum
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(format!(
                "unknown digest algorithm '{}'. Supported: sha256, sha512",
                s
            )),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running hash over the lines as they are emitted
enum Checksum {
    Sha256(Sha256),
    Sha512(Sha512),
}

impl Checksum {
    fn start(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => Checksum::Sha256(Sha256::new()),
            DigestAlgorithm::Sha512 => Checksum::Sha512(Sha512::new()),
        }
    }

    fn update(&mut self, line: &[u8]) {
        match self {
            Checksum::Sha256(hasher) => hasher.update(line),
            Checksum::Sha512(hasher) => hasher.update(line),
        }
    }

    fn into_hex(self) -> String {
        match self {
            Checksum::Sha256(hasher) => hex::encode(hasher.finalize()),
            Checksum::Sha512(hasher) => hex::encode(hasher.finalize()),
        }
    }
}

/// Final result of a sampling pass, ready to be written
///
/// Headers are kept in encounter order and samples in reservoir slot order.
/// Each entry is the raw line including whatever terminator it was read with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleOutput {
    pub headers: Vec<Vec<u8>>,
    pub samples: Vec<Vec<u8>>,
    /// Data lines read, retained or not
    pub data_seen: u64,
}

impl SampleOutput {
    /// Write headers, then samples, byte for byte
    pub fn write_to<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        self.emit(output, None).map(|_| ())
    }

    /// Write the output, hashing each line as it goes out when an algorithm is given
    ///
    /// Returns `Some(hex_string)` only if a digest was computed.
    pub fn emit<W: Write>(
        &self,
        output: &mut W,
        digest_algorithm: Option<DigestAlgorithm>,
    ) -> std::io::Result<Option<String>> {
        let mut checksum = digest_algorithm.map(Checksum::start);

        for line in self.headers.iter().chain(self.samples.iter()) {
            output.write_all(line)?;
            if let Some(checksum) = checksum.as_mut() {
                checksum.update(line);
            }
        }
        output.flush()?;

        Ok(checksum.map(Checksum::into_hex))
    }

    /// Total number of lines that will be written
    pub fn len(&self) -> usize {
        self.headers.len() + self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
