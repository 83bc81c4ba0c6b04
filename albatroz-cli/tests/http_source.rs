mod common;

use albatroz_cli::catalog::Catalog;
use albatroz_cli::commands::add::{self, AddOutcome};
use albatroz_cli::commands::init::InitOptions;
use albatroz_cli::commands::Backends;
use albatroz_cli::fetch::{ComponentSource, HttpSource};
use albatroz_cli::AlbatrozError;
use common::{FakeInstaller, FakePrompt, EXPO_WITH_ICONS};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Accept one connection, answer it with `status` and `body`, and hand back
/// the request line that was received.
fn serve_once(status: &'static str, body: &'static [u8]) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let len = body.len();
        let head = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: {len}\r\n\
             Connection: close\r\n\r\n"
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}/components"), handle)
}

/// Talk to the loopback server directly, whatever proxy the environment sets.
fn local_source() -> HttpSource {
    HttpSource::with_client(
        reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap(),
    )
}

#[test]
fn fetch_returns_body() {
    let (base_url, server) = serve_once("200 OK", b"export const Alert = ...;");
    let alert = Catalog::new().lookup("alert").unwrap();

    let body = local_source().fetch(&base_url, &alert).unwrap();

    assert_eq!(body, b"export const Alert = ...;");
    assert_eq!(server.join().unwrap(), "GET /components/alert.tsx HTTP/1.1");
}

#[test]
fn fetch_404_is_component_not_found() {
    let (base_url, server) = serve_once("404 Not Found", b"");
    let card = Catalog::new().lookup("Card").unwrap();

    let err = local_source().fetch(&base_url, &card).unwrap_err();

    assert!(matches!(err, AlbatrozError::ComponentNotFound(_)));
    assert_eq!(err.to_string(), "Component not found in repository");
    assert_eq!(server.join().unwrap(), "GET /components/card.tsx HTTP/1.1");
}

#[test]
fn fetch_server_error_is_generic() {
    let (base_url, server) = serve_once("500 Internal Server Error", b"boom");
    let input = Catalog::new().lookup("input").unwrap();

    let err = local_source().fetch(&base_url, &input).unwrap_err();

    assert!(matches!(err, AlbatrozError::Http(_)));
    assert!(err.to_string().contains("500"));
    server.join().unwrap();
}

#[test]
fn fetch_connection_refused_is_generic() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let button = Catalog::new().lookup("button").unwrap();

    let err = local_source()
        .fetch(&format!("http://{addr}"), &button)
        .unwrap_err();

    assert!(matches!(err, AlbatrozError::Http(_)));
}

#[test]
fn add_alert_end_to_end() {
    let (base_url, server) = serve_once("200 OK", b"export const Alert = ...;");
    let tmp = TempDir::new().unwrap();
    common::write_manifest(tmp.path(), EXPO_WITH_ICONS);

    let prompt = FakePrompt::default();
    let installer = FakeInstaller::default();
    let source = local_source();
    let backends = Backends {
        prompt: &prompt,
        installer: &installer,
        source: &source,
    };
    let opts = InitOptions {
        base_url: Some(base_url),
        ..Default::default()
    };

    let outcome = add::execute(tmp.path(), Some("alert"), &opts, backends).unwrap();

    let path = tmp.path().join("src/components/ui/Alert.tsx");
    assert_eq!(
        outcome,
        AddOutcome::Written {
            path: path.clone(),
            replaced: false
        }
    );
    assert_eq!(fs::read_to_string(path).unwrap(), "export const Alert = ...;");
    assert_eq!(prompt.calls.get(), 0);
    assert!(installer.calls.borrow().is_empty());
    assert_eq!(server.join().unwrap(), "GET /components/alert.tsx HTTP/1.1");
}
