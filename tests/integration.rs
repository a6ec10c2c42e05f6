//! End-to-end tests for the fibgold binary
//!
//! Each test runs the compiled binary in its own scratch working directory
//! with an isolated config directory, feeding the term count through stdin
//! or flags, and checks stdout/stderr and the files left behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

const GROWTH_FILE: &str = "fibonacci_exponential_growth.html";
const CONVERGENCE_FILE: &str = "fibonacci_golden_ratio.html";

/// Captured output of one invocation
struct RunOutput {
    stdout: String,
    stderr: String,
    success: bool,
}

/// Scratch directories for one test
struct TestContext {
    /// Working directory of the binary
    work_dir: TempDir,
    /// Config directory (XDG_CONFIG_HOME)
    config_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
        }
    }

    fn work_path(&self, name: &str) -> PathBuf {
        self.work_dir.path().join(name)
    }

    /// Run the binary with the given args, writing `stdin` to it
    fn run(&self, args: &[&str], stdin: &str) -> RunOutput {
        self.run_with_env(args, stdin, &[])
    }

    /// Like `run`, with extra environment overrides
    fn run_with_env(&self, args: &[&str], stdin: &str, env: &[(&str, &str)]) -> RunOutput {
        let mut child = Command::new(env!("CARGO_BIN_EXE_fibgold"))
            .args(args)
            .current_dir(self.work_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .envs(env.iter().copied())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to run fibgold");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for fibgold");
        RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        }
    }

    fn run_ok(&self, args: &[&str], stdin: &str) -> String {
        let output = self.run(args, stdin);
        assert!(
            output.success,
            "fibgold {:?} failed:\nstdout: {}\nstderr: {}",
            args, output.stdout, output.stderr
        );
        output.stdout
    }

    fn files_in_work_dir(&self) -> usize {
        std::fs::read_dir(self.work_dir.path()).unwrap().count()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn test_interactive_run_writes_charts() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["run", "--no-open"], "10\n");

    assert!(stdout.contains("Enter the number of Fibonacci terms to generate: "));
    assert!(stdout.contains("Index (n) |F(n)\n----------+--------------------\n"));
    assert!(stdout.contains("0         |0\n"));
    assert!(stdout.contains("9         |34\n"));
    assert!(!stdout.contains("10        |"));
    assert!(stdout.contains(&format!(
        "Exponential growth visualization saved to '{GROWTH_FILE}'"
    )));
    assert!(stdout.contains(&format!(
        "Golden ratio visualization saved to '{CONVERGENCE_FILE}'"
    )));
    assert!(stdout.contains("Analysis complete!"));

    let growth = read(&ctx.work_path(GROWTH_FILE));
    assert!(growth.contains("<title>Exponential Growth of Fibonacci Sequence</title>"));
    assert!(growth.contains("<svg"));

    let convergence = read(&ctx.work_path(CONVERGENCE_FILE));
    assert!(convergence.contains("<title>Convergence to the Golden Ratio</title>"));
    assert!(convergence.contains("Golden Ratio (φ ≈ 1.61803399)"));
}

#[test]
fn test_default_command_is_run() {
    let ctx = TestContext::new();
    let config = ctx.config_dir.path().join("fibgold.toml");
    std::fs::write(&config, "[display]\nopen_browser = false\n").unwrap();

    let stdout = ctx.run_ok(&["--config", config.to_str().unwrap()], "12\n");
    assert!(stdout.starts_with("Fibonacci Sequence\n"));
    assert!(stdout.contains("11        |89\n"));
    assert!(!stdout.contains("Displaying"));
    assert!(ctx.work_path(GROWTH_FILE).exists());
}

#[test]
fn test_non_positive_input_produces_nothing() {
    let ctx = TestContext::new();
    for input in ["0\n", "-7\n"] {
        let output = ctx.run(&["run", "--no-open"], input);
        assert!(!output.success);
        assert!(output.stderr.contains("Please enter a positive integer."));
        assert!(!output.stdout.contains("F(n)"));
    }
    assert_eq!(ctx.files_in_work_dir(), 0);
}

#[test]
fn test_non_numeric_input_produces_nothing() {
    let ctx = TestContext::new();
    let output = ctx.run(&["run", "--no-open"], "twenty\n");
    assert!(!output.success);
    assert!(output
        .stderr
        .contains("Invalid input. Please enter a valid number."));
    assert_eq!(ctx.files_in_work_dir(), 0);
}

#[test]
fn test_terms_flag_and_out_dir() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["run", "--terms", "25", "--out-dir", "charts", "--no-open"], "");

    assert!(!stdout.contains("Enter the number"));
    assert!(stdout.contains("24        |46368\n"));
    assert!(ctx.work_path("charts").join(GROWTH_FILE).exists());
    assert!(ctx.work_path("charts").join(CONVERGENCE_FILE).exists());
    assert!(!ctx.work_path(GROWTH_FILE).exists());
}

#[test]
fn test_negative_terms_flag_rejected() {
    let ctx = TestContext::new();
    let output = ctx.run(&["run", "--terms", "-3", "--no-open"], "");
    assert!(!output.success);
    assert!(output.stderr.contains("Please enter a positive integer."));
    assert_eq!(ctx.files_in_work_dir(), 0);
}

#[test]
fn test_table_command_large_terms() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["table", "--terms", "101"], "");
    assert!(stdout.contains("100       |354224848179261915075\n"));
    assert_eq!(ctx.files_in_work_dir(), 0);
}

#[test]
fn test_ratios_json_converges() {
    let ctx = TestContext::new();
    let stdout = ctx.run_ok(&["ratios", "--terms", "20", "--json"], "");
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 18);
    assert_eq!(rows[0]["n"], 2);
    let last = rows.last().unwrap()["ratio"].as_f64().unwrap();
    assert!((last - 1.618_033_988_7).abs() < 1e-6);
}

#[test]
fn test_invalid_config_file_reported() {
    let ctx = TestContext::new();
    let config = ctx.config_dir.path().join("broken.toml");
    std::fs::write(&config, "[charts\n").unwrap();

    let output = ctx.run(&["--config", config.to_str().unwrap(), "table", "-t", "3"], "");
    assert!(!output.success);
    assert!(output.stderr.contains("Invalid configuration file"));
}

#[test]
fn test_missing_browser_opener_is_not_fatal() {
    let ctx = TestContext::new();
    // no opener can be found on an empty PATH
    let output = ctx.run_with_env(&["run"], "12\n", &[("PATH", "")]);

    assert!(
        output.success,
        "stdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
    assert!(output
        .stdout
        .contains("Displaying exponential growth visualization in browser..."));
    assert_eq!(
        output
            .stdout
            .matches("Could not display figures in browser: ")
            .count(),
        1
    );
    assert!(output
        .stdout
        .contains("HTML files have been saved and can be opened manually."));
    assert!(output.stdout.contains("Analysis complete!"));
    // reported once, on stdout only
    assert!(!output.stderr.contains("Could not display figures"));

    assert!(ctx.work_path(GROWTH_FILE).exists());
    assert!(ctx.work_path(CONVERGENCE_FILE).exists());
}
