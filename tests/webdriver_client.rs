//! Integration test: WebDriver requests against a local remote end
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{Value, json};

use display_picker::Error;
use display_picker::automation::{WebDriverClient, WindowPositioner, WindowRect, hand_off};
use display_picker::config::WebDriverConfig;
use display_picker::monitor::{Dimension, DisplayDevice, DisplayInventory, Point};

#[derive(Debug, Clone)]
struct Request {
    method: String,
    path: String,
    body: Value,
}

/// Minimal remote end: one request per connection, answers with canned
/// W3C envelopes and remembers what it was sent.
struct RemoteEnd {
    url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RemoteEnd {
    fn start() -> Self {
        Self::spawn(false)
    }

    /// Window moves fail as if the browser window had been closed.
    fn without_window() -> Self {
        Self::spawn(true)
    }

    fn spawn(reject_moves: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        thread::spawn(move || {
            let mut rect = json!({ "x": 0, "y": 0, "width": 1280, "height": 720 });
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let request = read_request(&stream);
                let (status, body) = respond(&request, &mut rect, reject_moves);
                seen.lock().unwrap().push(request);
                write_response(stream, status, &body);
            }
        });

        Self { url, requests }
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    fn config(&self, session_id: Option<&str>, start_url: Option<&str>) -> WebDriverConfig {
        WebDriverConfig {
            url: format!("{}/", self.url),
            browser: "chrome".to_string(),
            start_url: start_url.map(str::to_string),
            session_id: session_id.map(str::to_string),
        }
    }
}

fn read_request(stream: &TcpStream) -> Request {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).unwrap();
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    Request { method, path, body }
}

fn respond(request: &Request, rect: &mut Value, reject_moves: bool) -> (&'static str, Value) {
    match (request.method.as_str(), request.path.as_str()) {
        ("POST", "/session") => (
            "200 OK",
            json!({ "value": {
                "sessionId": "s-1",
                "capabilities": {
                    "browserName": request.body["capabilities"]["alwaysMatch"]["browserName"]
                }
            }}),
        ),
        ("POST", "/session/s-1/window/rect") if reject_moves => (
            "404 Not Found",
            json!({ "value": {
                "error": "no such window",
                "message": "Browsing context has been discarded",
                "stacktrace": ""
            }}),
        ),
        ("POST", "/session/s-1/window/rect") => {
            rect["x"] = request.body["x"].clone();
            rect["y"] = request.body["y"].clone();
            ("200 OK", json!({ "value": rect }))
        }
        ("GET", "/session/s-1/window/rect") => ("200 OK", json!({ "value": rect })),
        ("POST", "/session/s-1/url") => ("200 OK", json!({ "value": null })),
        (method, path) => (
            "404 Not Found",
            json!({ "value": {
                "error": "unknown command",
                "message": format!("{} {}", method, path)
            }}),
        ),
    }
}

fn write_response(mut stream: TcpStream, status: &str, body: &Value) {
    let body = body.to_string();
    write!(
        stream,
        "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
    .unwrap();
    stream.flush().unwrap();
}

fn side_by_side() -> DisplayInventory {
    DisplayInventory::from_devices(
        vec![
            DisplayDevice::new("0", Point::new(0, 0), Dimension::new(1920, 1080)),
            DisplayDevice::new("1", Point::new(1920, 0), Dimension::new(2560, 1440)),
        ],
        None,
    )
    .unwrap()
}

#[test]
fn test_new_session_requests_configured_browser() {
    let remote = RemoteEnd::start();
    let client = WebDriverClient::new_session(&remote.config(None, None)).unwrap();
    assert_eq!(client.session_id(), "s-1");

    let requests = remote.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/session");
    assert_eq!(
        requests[0].body,
        json!({ "capabilities": { "alwaysMatch": { "browserName": "chrome" } } })
    );
}

#[test]
fn test_window_position_is_posted_and_read_back() {
    let remote = RemoteEnd::start();
    let client = WebDriverClient::attach(&remote.url, "s-1");

    client.set_window_position(Point::new(1920, -40)).unwrap();
    assert_eq!(
        client.window_rect().unwrap(),
        WindowRect {
            x: 1920,
            y: -40,
            width: 1280,
            height: 720
        }
    );

    let requests = remote.requests();
    assert_eq!(
        remote.paths(),
        vec!["POST /session/s-1/window/rect", "GET /session/s-1/window/rect"]
    );
    assert_eq!(requests[0].body, json!({ "x": 1920, "y": -40 }));
    assert_eq!(requests[1].body, Value::Null);
}

#[test]
fn test_navigate_posts_url() {
    let remote = RemoteEnd::start();
    let client = WebDriverClient::attach(&remote.url, "s-1");
    client.navigate("https://example.org/").unwrap();

    let requests = remote.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/session/s-1/url");
    assert_eq!(requests[0].body, json!({ "url": "https://example.org/" }));
}

#[test]
fn test_hand_off_starts_session_moves_and_navigates() {
    let remote = RemoteEnd::start();
    let config = remote.config(None, Some("https://example.org/start"));

    let top_left = hand_off(&side_by_side(), 1, Some(&config)).unwrap();
    assert_eq!(top_left, Point::new(1920, 0));

    assert_eq!(
        remote.paths(),
        vec![
            "POST /session",
            "POST /session/s-1/window/rect",
            "POST /session/s-1/url"
        ]
    );
    let requests = remote.requests();
    assert_eq!(requests[1].body, json!({ "x": 1920, "y": 0 }));
    assert_eq!(
        requests[2].body,
        json!({ "url": "https://example.org/start" })
    );
}

#[test]
fn test_hand_off_attaches_to_configured_session() {
    let remote = RemoteEnd::start();
    let config = remote.config(Some("s-1"), None);

    assert_eq!(
        hand_off(&side_by_side(), 0, Some(&config)).unwrap(),
        Point::new(0, 0)
    );
    assert_eq!(remote.paths(), vec!["POST /session/s-1/window/rect"]);
}

#[test]
fn test_rejected_move_fails_hand_off() {
    let remote = RemoteEnd::without_window();
    let config = remote.config(Some("s-1"), Some("https://example.org/start"));

    match hand_off(&side_by_side(), 1, Some(&config)) {
        Err(Error::WebDriver { error, message }) => {
            assert_eq!(error, "no such window");
            assert_eq!(message, "Browsing context has been discarded");
        }
        other => panic!("expected WebDriver error, got {:?}", other),
    }
    // One attempt, and the start page is never requested.
    assert_eq!(remote.paths(), vec!["POST /session/s-1/window/rect"]);
}
