use line_reservoir::{sample_lines, sample_lines_streaming, DigestAlgorithm, SampleConfig};
use std::io::Write;
use std::process::{Command, Stdio};

const VCF: &str = "##fileformat=VCFv4.2
##source=caller
#CHROM\tPOS\tID\tREF\tALT
1\t100\trs1\tA\tG
1\t200\trs2\tC\tT
2\t300\trs3\tG\tA
2\t400\trs4\tT\tC
3\t500\trs5\tA\tC
X\t600\trs6\tC\tG
";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line-reservoir"))
}

/// Test with a realistic VCF-style file where every header starts with '#'
#[test]
fn test_realistic_sampling() {
    let config = SampleConfig::new(3)
        .unwrap()
        .with_seed(Some(17))
        .with_header_prefix(Some(b"#"));

    let mut output = Vec::new();
    let report = sample_lines_streaming(VCF.as_bytes(), &mut output, &config, None).unwrap();
    let result = String::from_utf8(output).unwrap();

    // All three headers come first, in order
    assert!(result
        .starts_with("##fileformat=VCFv4.2\n##source=caller\n#CHROM\tPOS\tID\tREF\tALT\n"));
    assert_eq!(report.headers, 3);
    assert_eq!(report.data_seen, 6);
    assert_eq!(report.data_kept, 3);

    // Every sampled record exists verbatim in the input
    let records: Vec<&str> = result.lines().skip(3).collect();
    assert_eq!(records.len(), 3);
    for record in &records {
        assert!(VCF.lines().skip(3).any(|l| l == *record));
    }
}

#[test]
fn test_exactly_n_lines_keep_original_order() {
    let input = "zebra\napple\nmango\nbanana\n";
    let config = SampleConfig::new(4).unwrap();

    let sample = sample_lines(input.as_bytes(), &config).unwrap();
    let expected: Vec<Vec<u8>> = ["zebra\n", "apple\n", "mango\n", "banana\n"]
        .iter()
        .map(|l| l.as_bytes().to_vec())
        .collect();
    assert_eq!(sample.samples, expected);
}

#[test]
fn test_unseeded_runs_still_bounded() {
    let input: String = (0..10_000).map(|i| format!("line {}\n", i)).collect();
    let config = SampleConfig::new(100).unwrap();

    let sample = sample_lines(input.as_bytes(), &config).unwrap();
    assert_eq!(sample.samples.len(), 100);
    assert_eq!(sample.data_seen, 10_000);
}

#[test]
fn test_cli_stdin_with_headers() {
    let mut child = bin()
        .args(["-n", "2", "-s", "5", "-p", "#"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"#h1\na\n#h2\nb\nc\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("#h1\n#h2\n"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_cli_seed_is_reproducible_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 0..500 {
        writeln!(file, "row{}", i).unwrap();
    }
    let path = file.path().to_str().unwrap().to_string();

    let run = || bin().args(["-n", "7", "-s", "99", path.as_str()]).output().unwrap();
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 7);
}

#[test]
fn test_cli_output_file_and_digest() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("sample.txt");

    let mut child = bin()
        .args(["-n", "1", "--digest", "sha256", "-o"])
        .arg(&out_path)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"only\n").unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read(&out_path).unwrap(), b"only\n");

    let stderr = String::from_utf8(out.stderr).unwrap();
    let mut expected = Vec::new();
    let config = SampleConfig::new(1).unwrap();
    let report = sample_lines_streaming(
        &b"only\n"[..],
        &mut expected,
        &config,
        Some(DigestAlgorithm::Sha256),
    )
    .unwrap();
    assert!(stderr.contains(&format!("SHA-256: {}", report.digest.unwrap())));
}

#[test]
fn test_cli_rejects_non_positive_num() {
    for num in ["0", "-4"] {
        let out = bin()
            .args(["-n", num, "-"])
            .stdin(Stdio::null())
            .output()
            .unwrap();

        assert!(!out.status.success());
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8_lossy(&out.stderr).contains("positive integer"));
    }
}

#[test]
fn test_cli_missing_input_file() {
    let out = bin()
        .args(["-n", "3", "/definitely/not/here.tsv"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/definitely/not/here.tsv"));
}

#[test]
fn test_cli_requires_num() {
    let out = bin().arg("-").stdin(Stdio::null()).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_huge_num_on_small_input() {
    for num in ["100000000000", "9223372036854775807"] {
        let mut child = bin()
            .args(["-n", num])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(b"a\nb\nc\n").unwrap();
        let out = child.wait_with_output().unwrap();

        assert!(out.status.success());
        assert_eq!(out.stdout, b"a\nb\nc\n");
    }
}

#[test]
fn test_cli_negative_seed_is_reproducible() {
    let input: String = (0..200).map(|i| format!("r{}\n", i)).collect();

    let run = || {
        let mut child = bin()
            .args(["-n", "2", "-s", "-5"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
        child.wait_with_output().unwrap()
    };
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).lines().count(), 2);
}
