//! Minimal scripted HTTP/1.1 registry for integration tests.
//!
//! Each name maps to a list of replies served in order; the last reply
//! repeats once the list is exhausted. Unknown names get 404. Every request
//! is counted and logged in arrival order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this status and body.
    Status(u16, String),
    /// Close the connection without writing a response.
    Drop,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Status(200, body.to_string())
    }

    pub fn status(code: u16) -> Self {
        Reply::Status(code, format!("{{\"error\":\"status {}\"}}", code))
    }
}

#[derive(Debug, Default)]
struct State {
    routes: HashMap<String, Vec<Reply>>,
    hits: HashMap<String, usize>,
    log: Vec<String>,
}

#[derive(Clone)]
pub struct RegistryServer {
    base_url: String,
    state: Arc<Mutex<State>>,
}

impl RegistryServer {
    /// Starts a server in a background thread. The server runs until the process exits.
    pub fn start(routes: Vec<(&str, Vec<Reply>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(State {
            routes: routes
                .into_iter()
                .map(|(name, replies)| (name.to_string(), replies))
                .collect(),
            ..State::default()
        }));
        let server_state = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let state = Arc::clone(&server_state);
                thread::spawn(move || handle(stream, &state));
            }
        });
        Self {
            base_url: format!("http://127.0.0.1:{}/", port),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received for `name`.
    pub fn hits(&self, name: &str) -> usize {
        self.state.lock().unwrap().hits.get(name).copied().unwrap_or(0)
    }

    /// Names in the order their requests arrived.
    pub fn log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }
}

fn handle(mut stream: TcpStream, state: &Mutex<State>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let Some(path) = read_request_path(&mut stream) else {
        return;
    };
    let name = path.trim_start_matches('/').to_string();

    let reply = {
        let mut st = state.lock().unwrap();
        st.log.push(name.clone());
        let hit = {
            let h = st.hits.entry(name.clone()).or_insert(0);
            *h += 1;
            *h
        };
        match st.routes.get(&name) {
            Some(replies) if !replies.is_empty() => {
                replies[(hit - 1).min(replies.len() - 1)].clone()
            }
            _ => Reply::status(404),
        }
    };

    match reply {
        Reply::Drop => {}
        Reply::Status(code, body) => {
            let response = format!(
                "HTTP/1.1 {} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                code,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    }
}

/// Reads the request head and returns the request-target of the request line.
fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = std::str::from_utf8(&buf).ok()?;
    let request_line = head.lines().next()?;
    let mut parts = request_line.split_whitespace();
    let _method = parts.next()?;
    parts.next().map(|p| p.to_string())
}
