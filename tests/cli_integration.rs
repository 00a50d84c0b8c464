use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::Command;
use std::thread::{self, JoinHandle};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "acscrape-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// One canned listing page: a session panel with a nested presentation
/// panel, in the site's markup dialect.
fn listing_page(session_id: u32, title: &str, presentation_id: u32) -> String {
    format!(
        r##"<html><body>
        <div id="event-content">
          <div class="panel panel-default panel-session">
            <div class="panel-heading" id="panel-session-{session_id}">
              <h4 class="panel-title">
                <div class="session-panel-title">
                  <a href="#">{title}</a>
                  <div class="session-panel-heading">9:00 AM
                        - 9:15 AM</div>
                  <div class="session-panel-heading">
                    <span>Jane Doe</span> | <span>John Roe</span>
                  </div>
                </div>
              </h4>
            </div>
            <div class="panel-body">
              <div class="panel panel-default panel-session">
                <div class="panel-heading" id="panel-session-{presentation_id}">
                  <h4 class="panel-title">
                    <div class="session-panel-title">
                      <a href="#">Welcome Talk</a>
                      <div class="session-panel-heading">9:00 AM</div>
                      <div class="session-panel-heading"><span>Jane Doe</span></div>
                    </div>
                  </h4>
                </div>
              </div>
            </div>
          </div>
        </div>
        </body></html>"##
    )
}

struct StubResponse {
    status: u16,
    body: String,
}

fn page(status: u16, body: String) -> StubResponse {
    StubResponse { status, body }
}

/// Minimal single-threaded HTTP stub keyed on the eventSearchDate query
/// parameter. Serves at most `expected_requests` connections on a detached
/// thread; the binary under test blocks until its responses arrive, so no
/// join is needed before asserting.
fn serve(
    responses: HashMap<String, StubResponse>,
    expected_requests: usize,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}/", listener.local_addr().expect("local addr"));
    let handle = thread::spawn(move || {
        for _ in 0..expected_requests {
            match listener.accept() {
                Ok((stream, _)) => handle_connection(stream, &responses),
                Err(_) => return,
            }
        }
    });
    (base_url, handle)
}

fn handle_connection(mut stream: TcpStream, responses: &HashMap<String, StubResponse>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let date = request_line
        .split("eventSearchDate=")
        .nth(1)
        .and_then(|rest| rest.split(['&', ' ']).next())
        .unwrap_or("");
    let missing = StubResponse {
        status: 404,
        body: String::new(),
    };
    let response = responses.get(date).unwrap_or(&missing);
    let reason = if response.status == 200 { "OK" } else { "Error" };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes());
}

fn run_acscrape(args: &[&str]) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = env!("CARGO_BIN_EXE_acscrape");
    let output = Command::new(bin).args(args).output().expect("run acscrape");
    (output.status.success(), output.stdout, output.stderr)
}

#[test]
fn full_crawl_writes_consolidated_feed_in_date_order() {
    let responses = HashMap::from([
        ("2021-04-13".to_string(), page(200, listing_page(42, "Opening Remarks", 43))),
        ("2021-04-14".to_string(), page(200, listing_page(50, "Wednesday Orals", 51))),
        ("2021-04-15".to_string(), page(200, listing_page(60, "Thursday Posters", 61))),
        ("2021-04-16".to_string(), page(200, listing_page(70, "Closing Session", 71))),
    ]);
    let (base_url, _server) = serve(responses, 4);

    let root = unique_temp_dir("full-crawl");
    let out = root.join("schedule.json");
    let (ok, _, stderr) = run_acscrape(&[
        "--base-url", &base_url,
        "--date", "2021-04-13",
        "--date", "2021-04-14",
        "--date", "2021-04-15",
        "--date", "2021-04-16",
        "--output", out.to_str().unwrap(),
        "--concurrency", "4",
    ]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let feed: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let sessions = feed.as_array().expect("array output");
    assert_eq!(sessions.len(), 4);

    // Output order follows input date order, whatever order fetches finish in.
    let titles: Vec<&str> = sessions
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Opening Remarks", "Wednesday Orals", "Thursday Posters", "Closing Session"]
    );

    let first = &sessions[0];
    assert_eq!(first["date"].as_str(), Some("2021-04-13T00:00:00-0500"));
    assert_eq!(
        first["track"].as_str(),
        Some("[ORGN] Division of Organic Chemistry")
    );
    assert_eq!(first["time"].as_str(), Some("9:00 AM- 9:15 AM"));
    assert_eq!(
        first["presiders"],
        serde_json::json!(["Jane Doe", "John Roe"])
    );
    assert!(first["zoom_link"].as_str().unwrap().ends_with("/42/attend"));

    let talks = first["presentations"].as_array().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0]["title"].as_str(), Some("Welcome Talk"));
    assert_eq!(talks[0]["presenters"], serde_json::json!(["Jane Doe"]));
    assert!(talks[0]["zoom_link"].as_str().unwrap().ends_with("/43/attend"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn failed_date_is_skipped_with_warning_and_success_exit() {
    let responses = HashMap::from([
        ("2021-04-13".to_string(), page(200, listing_page(42, "Opening Remarks", 43))),
        ("2021-04-14".to_string(), page(500, "server exploded".to_string())),
        ("2021-04-15".to_string(), page(200, listing_page(60, "Thursday Posters", 61))),
        ("2021-04-16".to_string(), page(200, listing_page(70, "Closing Session", 71))),
    ]);
    let (base_url, _server) = serve(responses, 4);

    let root = unique_temp_dir("failed-date");
    let out = root.join("schedule.json");
    let (ok, _, stderr) = run_acscrape(&[
        "--base-url", &base_url,
        "--date", "2021-04-13",
        "--date", "2021-04-14",
        "--date", "2021-04-15",
        "--date", "2021-04-16",
        "--output", out.to_str().unwrap(),
    ]);

    // Partial failure is still a successful run.
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let stderr = String::from_utf8_lossy(&stderr);
    assert!(
        stderr.contains("2021-04-14") && stderr.contains("500"),
        "stderr missing failed-date warning: {stderr}"
    );

    let feed: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let sessions = feed.as_array().unwrap();
    assert_eq!(sessions.len(), 3);
    let dates: Vec<&str> = sessions
        .iter()
        .map(|s| s["date"].as_str().unwrap())
        .collect();
    assert!(!dates.contains(&"2021-04-14T00:00:00-0500"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn rerun_overwrites_previous_feed() {
    let responses = HashMap::from([(
        "2021-04-13".to_string(),
        page(200, listing_page(42, "Opening Remarks", 43)),
    )]);
    let (base_url, _server) = serve(responses, 2);

    let root = unique_temp_dir("overwrite");
    let out = root.join("schedule.json");
    let args = [
        "--base-url", base_url.as_str(),
        "--date", "2021-04-13",
        "--output", out.to_str().unwrap(),
        "--quiet",
    ];

    let (ok, _, stderr) = run_acscrape(&args);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let first = fs::read_to_string(&out).unwrap();

    let (ok, _, stderr) = run_acscrape(&args);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let second = fs::read_to_string(&out).unwrap();

    assert_eq!(first, second);
    let feed: Value = serde_json::from_str(&second).unwrap();
    assert_eq!(feed.as_array().unwrap().len(), 1);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn day_with_no_sessions_yields_empty_feed() {
    let responses = HashMap::from([(
        "2021-04-13".to_string(),
        page(
            200,
            r#"<html><body><div id="event-content"><p>Nothing scheduled.</p></div></body></html>"#
                .to_string(),
        ),
    )]);
    let (base_url, _server) = serve(responses, 1);

    let root = unique_temp_dir("empty-day");
    let out = root.join("schedule.json");
    let (ok, _, stderr) = run_acscrape(&[
        "--base-url", &base_url,
        "--date", "2021-04-13",
        "--output", out.to_str().unwrap(),
    ]);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    assert_eq!(fs::read_to_string(&out).unwrap(), "[]\n");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn invalid_date_flag_fails_before_fetching() {
    let root = unique_temp_dir("bad-date");
    let out = root.join("schedule.json");
    let (ok, _, stderr) = run_acscrape(&[
        "--date", "April 13th",
        "--output", out.to_str().unwrap(),
    ]);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid date"));
    assert!(!out.exists());

    let _ = fs::remove_dir_all(root);
}
