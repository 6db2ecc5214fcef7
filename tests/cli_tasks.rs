mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

const TS_BOILERPLATE: &str = "import { input } from \"../src/input\";\n";

/// Shell task body, padded past the boilerplate size so it counts as started.
fn script(body: &str) -> String {
    format!("# {}\n{}", "-".repeat(TS_BOILERPLATE.len()), body)
}

#[test]
fn make_day_creates_tasks_and_placeholder_input() {
    let ctx = TestContext::new();
    ctx.write_project(None);

    ctx.cli()
        .args(["make-day", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5-1.ts"))
        .stdout(predicate::str::contains("5-2.ts"));

    assert_eq!(ctx.read("tasks/5-1.ts"), TS_BOILERPLATE);
    assert_eq!(ctx.read("tasks/5-2.ts"), TS_BOILERPLATE);
    assert_eq!(ctx.read("inputs/5.txt"), "");
}

#[test]
fn make_day_keeps_solved_tasks() {
    let ctx = TestContext::new();
    ctx.write_project(None);
    ctx.write_task("2-1.ts", "console.log(42);\n");
    ctx.write_input("2.txt", "pasted");

    ctx.cli().args(["md", "2"]).assert().success();

    assert_eq!(ctx.read("tasks/2-1.ts"), "console.log(42);\n");
    assert_eq!(ctx.read("tasks/2-2.ts"), TS_BOILERPLATE);
    assert_eq!(ctx.read("inputs/2.txt"), "pasted");
}

#[test]
fn make_day_fetches_input_with_session_from_dotenv() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2023/day/7/input")
        .match_header("cookie", "session=secret")
        .with_status(200)
        .with_body("32T3K 765\nT55J5 684\n")
        .create();

    let ctx = TestContext::new();
    let root = ctx.write_project(None);
    let config = fs::read_to_string(root.join("advent.toml")).unwrap();
    fs::write(
        root.join("advent.toml"),
        format!("{}\n[puzzle_input]\nbase_url = \"{}\"\n", config, server.url()),
    )
    .unwrap();
    fs::write(root.join(".env"), "AOC_SESSION=secret\n").unwrap();

    ctx.cli().args(["make-day", "7"]).assert().success();

    mock.assert();
    assert_eq!(ctx.read("inputs/7.txt"), "32T3K 765\nT55J5 684\n");
}

#[test]
fn make_day_keeps_input_when_download_is_cut_short() {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\npartial").unwrap();
    });

    let ctx = TestContext::new();
    let root = ctx.write_project(None);
    let config = fs::read_to_string(root.join("advent.toml")).unwrap();
    fs::write(
        root.join("advent.toml"),
        format!("{}\n[puzzle_input]\nbase_url = \"{}\"\n", config, base_url),
    )
    .unwrap();
    ctx.write_input("8.txt", "previous input\n");

    ctx.cli().args(["make-day", "8"]).env("AOC_SESSION", "secret").assert().success();
    server.join().unwrap();

    assert_eq!(ctx.read("inputs/8.txt"), "previous input\n");
}

#[cfg(unix)]
#[test]
fn run_accepts_zero_padded_task_file() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("05-1.ts", &script("cat\n"));
    ctx.write_input("5.txt", "x");

    ctx.cli().arg("list").assert().success().stdout("5-1\n");
    ctx.cli().args(["run", "5-1"]).assert().success().stdout("x");
}

#[test]
fn make_day_rejects_out_of_range_day() {
    let ctx = TestContext::new();
    ctx.write_project(None);

    ctx.cli()
        .args(["make-day", "26"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: day=26 is not a valid day"));

    assert!(!ctx.work_dir().join("tasks/26-1.ts").exists());
}

#[test]
fn list_prints_started_tasks_in_order() {
    let ctx = TestContext::new();
    ctx.write_project(None);
    ctx.write_task("3-2.ts", &format!("{TS_BOILERPLATE}b();\n"));
    ctx.write_task("1-1.ts", &format!("{TS_BOILERPLATE}a();\n"));
    ctx.write_task("3-1.ts", &format!("{TS_BOILERPLATE}c();\n"));
    ctx.write_task("4-1.ts", TS_BOILERPLATE);
    ctx.write_task("notes.md", "ignored");

    ctx.cli().arg("list").assert().success().stdout("1-1\n3-1\n3-2\n");
}

#[test]
fn run_without_project_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project config not found"));
}

#[test]
fn run_rejects_malformed_selector() {
    let ctx = TestContext::new();
    ctx.write_project(None);
    ctx.write_task("1-1.ts", "a();\n");

    ctx.cli()
        .args(["run", "1-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid as a task identifier"));
}

#[test]
fn run_reports_empty_catalog() {
    let ctx = TestContext::new();
    ctx.write_project(None);
    ctx.write_task("1-1.ts", TS_BOILERPLATE);

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tasks to run were found."));
}

#[cfg(unix)]
#[test]
fn run_latest_pipes_trimmed_input() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("1-1.ts", &script("echo wrong\n"));
    ctx.write_task("2-1.ts", &script("echo \"task=$ADVENT_TASK\"\ncat\n"));
    ctx.write_input("2.txt", "\n1 2 3\n\n");

    ctx.cli().arg("run").assert().success().stdout("task=2-1\n1 2 3");
}

#[cfg(unix)]
#[test]
fn run_example_mode_uses_example_input() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("1-1.ts", &script("cat\n"));
    ctx.write_input("1.txt", "real");
    ctx.write_input("example.txt", "sample");

    ctx.cli().args(["r", "1", "yes"]).assert().success().stdout("sample");
}

#[cfg(unix)]
#[test]
fn run_falls_back_to_default_input() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("3-1.ts", &script("cat\n"));
    ctx.write_input("default.txt", "shared");

    ctx.cli().args(["run", "3-1"]).assert().success().stdout("shared");
}

#[cfg(unix)]
#[test]
fn run_propagates_task_exit_code() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("1-1.ts", &script("exit 3\n"));
    ctx.write_input("1.txt", "x");

    ctx.cli().arg("run").assert().failure().code(3);
}

#[cfg(unix)]
#[test]
fn run_reports_missing_input() {
    let ctx = TestContext::new();
    ctx.write_project(Some(&["sh"]));
    ctx.write_task("4-1.ts", &script("cat\n"));

    ctx.cli()
        .args(["run", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Neither day (4) nor default input file exists"));
}
