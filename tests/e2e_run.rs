
use std::fs;
use std::process::Output;

use tempfile::tempdir;

use support_server::{result_files, run_rtmon, spawn_http_server};

fn describe(output: &Output) -> String {
    format!(
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn read_single_result(dir: &std::path::Path, environment: &str) -> Result<Vec<String>, String> {
    let files = result_files(dir)?;
    let [path] = files.as_slice() else {
        return Err(format!("Expected one result file, got {:?}", files));
    };
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| "Missing file name".to_owned())?;
    if !name.starts_with(&format!("{}-result-", environment)) {
        return Err(format!("Unexpected result file name: {}", name));
    }
    let content = fs::read_to_string(path).map_err(|err| format!("read failed: {}", err))?;
    Ok(content.lines().map(str::to_owned).collect())
}

#[test]
fn e2e_two_urls_default_environment() -> Result<(), String> {
    let (base, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let results = dir.path().join("results");
    let config = format!(r#"{{ "Urls": ["{base}/b", "{base}/a"] }}"#);
    fs::write(dir.path().join("local.json"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_rtmon(
        dir.path(),
        ["--results-dir".to_owned(), results.to_string_lossy().into_owned()],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let lines = read_single_result(&results, "local")?;
    if lines.len() != 20 {
        return Err(format!("Expected 20 lines, got {}", lines.len()));
    }
    let means = lines
        .iter()
        .filter(|line| line.split(',').count() == 3)
        .count();
    if means != 2 {
        return Err(format!("Expected 2 mean lines, got {}", means));
    }
    let (a_lines, b_lines) = lines.split_at(10);
    if a_lines.iter().any(|line| !line.starts_with(&format!("{base}/a,")))
        || b_lines.iter().any(|line| !line.starts_with(&format!("{base}/b,")))
    {
        return Err(format!("Lines not grouped by URL: {:?}", lines));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains(&format!("{base}/a: ")) {
        return Err(format!("Expected per-request log lines: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_named_environment_with_failures() -> Result<(), String> {
    let (base, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let results = dir.path().join("results");
    let config = format!(
        r#"{{ "Urls": ["{base}/ok", "{base}/fail"], "RequestsPerUrl": 3, "ResultsDir": "{}" }}"#,
        results.to_string_lossy().replace('\\', "\\\\")
    );
    fs::write(dir.path().join("staging.json"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_rtmon(dir.path(), ["staging"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let lines = read_single_result(&results, "staging")?;
    if lines.len() != 3 {
        return Err(format!("Expected 3 lines, got {:?}", lines));
    }
    if lines.iter().any(|line| line.contains("/fail")) {
        return Err("Failed requests must not be written".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("500") {
        return Err(format!("Expected failure diagnostics: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_toml_environment_and_cli_precedence() -> Result<(), String> {
    let (base, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let results = dir.path().join("results");
    let config = format!("Urls = [\"{base}/x\"]\nRequestsPerUrl = 7\n");
    fs::write(dir.path().join("qa.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_rtmon(
        dir.path(),
        [
            "qa".to_owned(),
            "--requests-per-url".to_owned(),
            "4".to_owned(),
            "--concurrency".to_owned(),
            "2".to_owned(),
            "--results-dir".to_owned(),
            results.to_string_lossy().into_owned(),
        ],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let lines = read_single_result(&results, "qa")?;
    if lines.len() != 4 {
        return Err(format!("CLI should override config count: {:?}", lines));
    }
    Ok(())
}

#[test]
fn e2e_missing_environment_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let results = dir.path().join("results");

    let output = run_rtmon(
        dir.path(),
        [
            "nowhere".to_owned(),
            "--results-dir".to_owned(),
            results.to_string_lossy().into_owned(),
        ],
    )?;
    if output.status.success() {
        return Err("Expected missing config to fail".to_owned());
    }
    if results.exists() {
        return Err("No results should be written on config failure".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("nowhere") {
        return Err(format!("Diagnostic should name the environment: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_malformed_config_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("local.json"), "{ not json")
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_rtmon(dir.path(), ["--results-dir", "results"])?;
    if output.status.success() {
        return Err("Expected malformed config to fail".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("local.json") {
        return Err(format!("Diagnostic should name the file: {}", stderr));
    }
    Ok(())
}
