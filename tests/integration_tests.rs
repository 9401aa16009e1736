use mulsum::utils::validation::Validate;
use mulsum::{CliConfig, LocalStorage, MulPipeline, ScanEngine, ScanError, ScanReport};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

fn config(input: &str) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        conditionals: false,
        report: None,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_scan() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "day03.txt",
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(\nmul(11,8)mul(8,5))\n",
    );

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = MulPipeline::new(storage, config("day03.txt"));
    let engine = ScanEngine::new(pipeline);

    let total = engine.run().await.unwrap();

    assert_eq!(total, 161);
}

#[tokio::test]
async fn test_end_to_end_scan_with_conditionals() {
    let temp_dir = TempDir::new().unwrap();
    write_input(
        &temp_dir,
        "day03.txt",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)un\ndo()?mul(8,5))\n",
    );

    let mut cfg = config("day03.txt");
    cfg.conditionals = true;

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = MulPipeline::new(storage, cfg);
    let engine = ScanEngine::new(pipeline);

    let total = engine.run().await.unwrap();

    assert_eq!(total, 48);
}

#[tokio::test]
async fn test_missing_input_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = MulPipeline::new(storage, config("absent.txt"));
    let engine = ScanEngine::new(pipeline);

    let result = engine.run().await;

    let err = result.unwrap_err();
    assert!(matches!(err, ScanError::IoError(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_report_file_is_written_next_to_output() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "day03.txt", "mul(2,3)mul(4,5)\nhello world\n");

    let mut cfg = config("day03.txt");
    cfg.report = Some("out/report.json".to_string());

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = MulPipeline::new(storage, cfg);
    let engine = ScanEngine::new(pipeline);

    let total = engine.run().await.unwrap();
    assert_eq!(total, 26);

    let report_path = temp_dir.path().join("out/report.json");
    assert!(report_path.exists());

    let report: ScanReport =
        serde_json::from_slice(&std::fs::read(&report_path).unwrap()).unwrap();
    assert_eq!(report.total, 26);
    assert_eq!(report.executed.len(), 2);
    assert_eq!(report.lines_scanned, 2);
    assert_eq!(report.skipped, 0);
}

#[tokio::test]
async fn test_rerun_yields_identical_total() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "day03.txt", "mul(2,3) noise mul(4,5)\nmul(6,7)\n");

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = MulPipeline::new(storage, config("day03.txt"));
    let engine = ScanEngine::new(pipeline);

    let first = engine.run().await.unwrap();
    let second = engine.run().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, 68);
}

#[test]
fn test_cli_config_validation_exit_code() {
    let err = config("").validate().unwrap_err();

    assert!(matches!(err, ScanError::InvalidConfigValueError { .. }));
    assert_eq!(err.exit_code(), 2);
}
