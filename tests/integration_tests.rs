use anyhow::Result;
use skyline::{
    run_job, OutputFormat, Point, RunConfig, SkylineError, SkylineStrategy, TomlConfig,
};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

#[test]
fn test_end_to_end_text_input_to_text_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "points.txt", "5\n1 4\n2 3\n3 2\n4 1\n5 5\n")?;
    let output = temp_dir.path().join("out/skyline.txt");

    let config = RunConfig {
        output_path: Some(output.to_str().unwrap().to_string()),
        ..RunConfig::default()
    }
    .with_input(input);

    let report = run_job(&config)?;
    assert_eq!(report.input_count, 5);
    assert_eq!(
        report.skyline,
        vec![
            Point::new(1, 4),
            Point::new(2, 3),
            Point::new(3, 2),
            Point::new(4, 1)
        ]
    );

    let written = fs::read_to_string(&output)?;
    assert_eq!(written, "1   4\n2   3\n3   2\n4   1\n");
    Ok(())
}

#[test]
fn test_end_to_end_csv_input_to_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "points.csv", "x,y\n3,1\n3,5\n1,2\n")?;
    let output = temp_dir.path().join("skyline.json");

    let config = RunConfig {
        output_path: Some(output.to_str().unwrap().to_string()),
        output_format: OutputFormat::Json,
        strategy: SkylineStrategy::Iterative,
        verify: true,
        ..RunConfig::default()
    }
    .with_input(input);

    run_job(&config)?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(json["input_count"], 3);
    assert_eq!(json["strategy"], "iterative");
    assert_eq!(
        json["skyline"],
        serde_json::json!([{"x": 1, "y": 2}, {"x": 3, "y": 1}])
    );
    Ok(())
}

#[test]
fn test_empty_point_set() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "empty.txt", "0\n")?;
    let output = temp_dir.path().join("skyline.csv");

    let config = RunConfig {
        output_path: Some(output.to_str().unwrap().to_string()),
        output_format: OutputFormat::Csv,
        ..RunConfig::default()
    }
    .with_input(input);

    let report = run_job(&config)?;
    assert!(report.skyline.is_empty());
    // csv 在沒有資料列時不會寫出標頭
    assert_eq!(fs::read_to_string(&output)?, "");
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = RunConfig::default()
        .with_input(temp_dir.path().join("nope.txt").to_str().unwrap());

    let err = run_job(&config).unwrap_err();
    assert!(matches!(err, SkylineError::FileNotFoundError { .. }));
    Ok(())
}

#[test]
fn test_malformed_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "bad.txt", "2\n1 2\nx 4\n")?;
    let output = temp_dir.path().join("skyline.txt");

    let config = RunConfig {
        output_path: Some(output.to_str().unwrap().to_string()),
        ..RunConfig::default()
    }
    .with_input(input);

    let err = run_job(&config).unwrap_err();
    assert!(matches!(err, SkylineError::ParseError { line: 3, .. }));
    Ok(())
}

#[test]
fn test_y_floor_violation_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "points.txt", "2\n1 0\n0 1\n")?;
    let output = temp_dir.path().join("skyline.txt");

    let config = RunConfig {
        output_path: Some(output.to_str().unwrap().to_string()),
        y_floor: Some(1),
        ..RunConfig::default()
    }
    .with_input(input);

    assert!(matches!(
        run_job(&config),
        Err(SkylineError::ValidationError { .. })
    ));
    Ok(())
}

#[test]
fn test_failed_run_keeps_existing_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "bad.txt", "2\n1 2\nx 4\n")?;
    let output = write_input(&temp_dir, "skyline.txt", "previous result\n")?;

    let config = RunConfig {
        output_path: Some(output.clone()),
        ..RunConfig::default()
    }
    .with_input(input);

    let err = run_job(&config).unwrap_err();
    assert!(matches!(err, SkylineError::ParseError { .. }));
    assert_eq!(fs::read_to_string(&output)?, "previous result\n");
    Ok(())
}

#[test]
fn test_rejected_y_floor_keeps_existing_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "points.txt", "2\n1 0\n0 1\n")?;
    let output = write_input(&temp_dir, "skyline.txt", "previous result\n")?;

    let config = RunConfig {
        output_path: Some(output.clone()),
        y_floor: Some(1),
        ..RunConfig::default()
    }
    .with_input(input);

    assert!(run_job(&config).is_err());
    assert_eq!(fs::read_to_string(&output)?, "previous result\n");
    Ok(())
}

#[test]
fn test_toml_config_drives_run_job() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "points.csv", "x,y\n1,5\n2,6\n5,1\n")?;
    let output = temp_dir.path().join("skyline.csv");

    let toml = format!(
        r#"
[input]
path = "{}"

[output]
path = "{}"
format = "csv"

[algorithm]
strategy = "iterative"
verify = true
"#,
        input,
        output.to_str().unwrap()
    );
    let config = TomlConfig::from_toml_str(&toml)?;

    let report = run_job(&config)?;
    assert_eq!(report.skyline, vec![Point::new(1, 5), Point::new(5, 1)]);
    assert_eq!(fs::read_to_string(&output)?, "x,y\n1,5\n5,1\n");

    // 轉成 RunConfig 後同樣可以執行
    let resolved = RunConfig::from_provider(&config);
    assert_eq!(resolved.input_path.as_deref(), Some(input.as_str()));
    assert_eq!(run_job(&resolved)?.skyline, report.skyline);
    Ok(())
}
