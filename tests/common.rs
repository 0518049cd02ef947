#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

pub fn hrp() -> Command {
    cargo_bin_cmd!("hrportal")
}

pub fn snapshot() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/snapshot.json")
        .to_string_lossy()
        .to_string()
}

/// Fresh, empty working directory under the system temp dir.
pub fn workdir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("hrportal_it_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create workdir");
    dir
}

/// Write a config file pointing session and output into `dir`.
pub fn write_config(dir: &Path, api: &str) -> String {
    let cfg = dir.join("hrportal.conf");
    let yaml = format!(
        "api_base_url: {api}\nsession_file: {}\noutput_dir: {}\n",
        dir.join("session.json").display(),
        dir.join("out").display()
    );
    fs::write(&cfg, yaml).expect("write config");
    cfg.to_string_lossy().to_string()
}

pub fn write_session(dir: &Path, role: &str) {
    let json = format!(r#"{{ "token": "test-token", "role": "{role}" }}"#);
    fs::write(dir.join("session.json"), json).expect("write session");
}

/// Minimal HTTP stub: answers `(path, status, body)` routes, 404 otherwise,
/// and records every request line it saw.
pub struct MockApi {
    pub base: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

pub fn mock_api(routes: &[(&str, u16, &str)]) -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
    let addr = listener.local_addr().expect("local addr");
    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(p, s, b)| (p.to_string(), (*s, b.to_string())))
        .collect();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            let mut content_length = 0usize;
            let mut authorized = false;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                let lower = line.to_lowercase();
                if let Some(v) = lower.strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap_or(0);
                }
                if lower.starts_with("authorization: bearer test-token") {
                    authorized = true;
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).ok();

            let target = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            seen.lock().unwrap().push(request_line.trim().to_string());
            let path = target.split('?').next().unwrap_or("/");

            let (status, payload) = if !authorized {
                (401, r#"{"message":"missing token"}"#.to_string())
            } else {
                routes
                    .get(path)
                    .cloned()
                    .unwrap_or((404, r#"{"message":"not found"}"#.to_string()))
            };

            let resp = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{payload}",
                payload.len()
            );
            stream.write_all(resp.as_bytes()).ok();
        }
    });

    MockApi {
        base: format!("http://{addr}/api"),
        requests,
    }
}
