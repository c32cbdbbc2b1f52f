//! End-to-end runs against files on disk
//!
//! Library-level tests go through `confmat::run`; process-level tests spawn
//! the built binary to check exit codes and that failures leave no output.

use confmat::config::{parse_args, FileConfig, Settings};
use confmat::{run, ConfmatError, ErrorKind};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn settings_for(args: &[&str]) -> Settings {
    let cli = parse_args(std::iter::once("confmat").chain(args.iter().copied())).unwrap();
    Settings::resolve(&cli, &FileConfig::default()).unwrap()
}

fn confmat_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_confmat"))
}

fn output_in(dir: &TempDir) -> PathBuf {
    dir.path().join("output_confusion_matrix.csv")
}

const REFERENCE: &str = "id,actual,predicted\n1,A,A\n2,A,B\n3,B,B\n4,B,B\n";

#[test]
fn test_reference_matrix_written_beside_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);

    let summary = run(&settings_for(&[input.to_str().unwrap()])).unwrap();

    assert_eq!(summary.output, output_in(&dir));
    assert_eq!(summary.records, 4);
    assert_eq!(summary.matrix.total(), 4);
    let written = fs::read_to_string(output_in(&dir)).unwrap();
    assert_eq!(written, "actual\\predicted,A,B\nA,1,1\nB,0,2\n");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "labels.csv",
        "actual,predicted\nflu,cold\ncold,cold\ncovid,flu\nflu,flu\n,flu\ncovid,covid\n",
    );
    let settings = settings_for(&[input.to_str().unwrap(), "--metrics"]);

    run(&settings).unwrap();
    let first = fs::read(&settings.output).unwrap();
    let first_metrics = fs::read(settings.metrics_output.as_ref().unwrap()).unwrap();

    run(&settings).unwrap();
    assert_eq!(fs::read(&settings.output).unwrap(), first);
    assert_eq!(fs::read(settings.metrics_output.as_ref().unwrap()).unwrap(), first_metrics);
}

#[test]
fn test_missing_rows_are_dropped_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "actual,predicted\nA,A\n,B\nB,\nB,A\n");

    let summary = run(&settings_for(&[input.to_str().unwrap()])).unwrap();

    assert_eq!(summary.records, 4);
    assert_eq!(summary.dropped, 2);
    assert_eq!(summary.matrix.total(), 2);
}

#[test]
fn test_reject_policy_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "actual,predicted\nA,A\nB,\n");

    let err = run(&settings_for(&[input.to_str().unwrap(), "--missing", "reject"])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputFormat);
    assert!(!output_in(&dir).exists());
}

#[test]
fn test_empty_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "actual,predicted\n,\n  ,x\n");

    let err = run(&settings_for(&[input.to_str().unwrap()])).unwrap_err();

    assert!(matches!(err, ConfmatError::EmptyInput { dropped: 2, .. }));
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert!(!output_in(&dir).exists());
}

#[test]
fn test_header_only_is_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "actual,predicted\n");

    let err = run(&settings_for(&[input.to_str().unwrap()])).unwrap_err();
    assert!(matches!(err, ConfmatError::EmptyInput { dropped: 0, .. }));
}

#[test]
fn test_missing_predicted_column_is_format_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "id,actual\n1,A\n");

    let err = run(&settings_for(&[input.to_str().unwrap()])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InputFormat);
    assert!(matches!(err, ConfmatError::MissingColumn { ref column, .. } if column == "predicted"));
    assert!(!output_in(&dir).exists());
}

#[test]
fn test_nonexistent_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");

    let err = run(&settings_for(&[input.to_str().unwrap()])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_custom_columns_and_tsv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "labels.tsv",
        "Sample\tDiagnosis\tModel Output\ns1\tFlu\tflu\ns2\tCold\tFLU\n",
    );

    let summary = run(&settings_for(&[
        input.to_str().unwrap(),
        "--actual-column",
        "diagnosis",
        "--predicted-column",
        "model output",
        "--lowercase-labels",
    ]))
    .unwrap();

    assert_eq!(summary.output, dir.path().join("output_confusion_matrix.tsv"));
    let written = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(written, "actual\\predicted\tcold\tflu\ncold\t0\t1\nflu\t0\t1\n");
}

#[test]
fn test_metrics_sheet() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);

    let summary = run(&settings_for(&[input.to_str().unwrap(), "--metrics"])).unwrap();

    let metrics_path = dir.path().join("output_confusion_matrix_metrics.csv");
    assert_eq!(summary.metrics_output.as_deref(), Some(metrics_path.as_path()));
    let sheet = fs::read_to_string(metrics_path).unwrap();
    let lines: Vec<&str> = sheet.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("condition,true_positive,false_positive"));
    assert_eq!(lines[2], "B,2,1,1,0,1.0000,0.5000,0.6667,0.8000,3,2,2,4");
}

#[test]
fn test_metrics_path_on_input_leaves_input_intact() {
    let dir = TempDir::new().unwrap();
    let original = "actual,predicted\nA,A\nA,B\n";
    let input = write_input(&dir, "cm_metrics.csv", original);
    let output = dir.path().join("cm.csv");

    let cli = parse_args([
        "confmat",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--metrics",
    ])
    .unwrap();
    let err = Settings::from_cli(&cli).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(fs::read_to_string(&input).unwrap(), original);
    assert!(!output.exists());
}

#[test]
fn test_failed_metrics_write_leaves_no_matrix() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);
    fs::create_dir(dir.path().join("output_confusion_matrix_metrics.csv")).unwrap();

    let err = run(&settings_for(&[input.to_str().unwrap(), "--metrics"])).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!output_in(&dir).exists());
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["labels.csv", "output_confusion_matrix_metrics.csv"]);
}

#[test]
fn test_yaml_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "truth;guess\nx;y\ny;y\n");
    let config = write_input(
        &dir,
        "confmat.yaml",
        "actual_column: truth\npredicted_column: guess\ndelimiter: \";\"\n",
    );

    let cli =
        parse_args(["confmat", input.to_str().unwrap(), "--config", config.to_str().unwrap()])
            .unwrap();
    let summary = run(&Settings::from_cli(&cli).unwrap()).unwrap();

    assert_eq!(summary.matrix.count("x", "y"), Some(1));
    let written = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(written, "actual\\predicted;x;y\nx;0;1\ny;0;1\n");
}

// =============================================================================
// Binary
// =============================================================================

fn run_bin(args: &[&Path], extra: &[&str]) -> std::process::Output {
    let mut cmd = confmat_bin();
    for a in args {
        cmd.arg(a);
    }
    cmd.args(extra).output().unwrap()
}

#[test]
fn test_binary_success_exit_code() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);

    let out = run_bin(&[&input], &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Accuracy: 0.7500"));
    assert!(output_in(&dir).exists());
}

#[test]
fn test_binary_json_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);

    let out = run_bin(&[&input], &["--format", "json"]);

    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["matrix"], serde_json::json!([[1, 1], [0, 2]]));
}

#[test]
fn test_binary_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", REFERENCE);

    let out = run_bin(&[&input], &["-q"]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_binary_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "labels.csv", "actual,label\nA,A\n");

    let out = run_bin(&[&input], &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("E011"));
    assert!(stderr.contains("predicted"));
    assert!(!output_in(&dir).exists());
}

#[test]
fn test_binary_requires_input_argument() {
    let out = confmat_bin().output().unwrap();
    assert!(!out.status.success());
}
