use regform::core::status::{NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE};
use regform::{ErrorMap, FieldId, FormData, FormState, SubmitOutcome, SubmitStatus, Submitter};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serves exactly one request with the given status line and body.
fn serve_once(status: &'static str, body: &'static str) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("header line");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut buf = vec![0u8; length];
        reader.read_exact(&mut buf).expect("body");

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");

        let _ = tx.send(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8_lossy(&buf).into_owned(),
        });
    });

    (base_url, rx)
}

fn registration() -> FormData {
    FormData::new()
        .with(FieldId::Name, "Ada Lovelace")
        .with(FieldId::IdentityNumber, "3174000000000001")
        .with(FieldId::Email, "ada@example.org")
        .with(FieldId::DateOfBirth, "1815-12-10")
}

#[test]
fn posts_json_body_to_register_endpoint() {
    let (base_url, rx) = serve_once("201 Created", r#"{"name":"Ada Lovelace"}"#);
    let submitter = Submitter::for_base_url(&base_url);

    assert_eq!(submitter.submit(&registration()), SubmitOutcome::Accepted);

    let request = rx.recv_timeout(Duration::from_secs(5)).expect("captured request");
    assert_eq!(request.request_line, "POST /api/register HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Ada Lovelace",
            "identityNumber": "3174000000000001",
            "email": "ada@example.org",
            "dateOfBirth": "1815-12-10",
        })
    );
}

#[test]
fn server_field_errors_reach_the_form() {
    let (base_url, _rx) = serve_once(
        "400 Bad Request",
        r#"{"status":"error","message":"Validation failed","errors":{"email":"taken"}}"#,
    );
    let submitter = Submitter::for_base_url(&base_url);

    let mut form = FormState::new();
    for field in FieldId::ALL {
        form.edit_field(field, registration().get(field));
    }
    form.submit_with(|data| submitter.submit(data));

    assert_eq!(form.errors(), &ErrorMap::new().with("email", "taken"));
    assert_eq!(form.status(), None);
    assert!(!form.is_loading());
}

#[test]
fn conflict_message_becomes_error_status() {
    let (base_url, _rx) = serve_once(
        "409 Conflict",
        r#"{"status":"error","message":"Identity number already registered"}"#,
    );
    let outcome = Submitter::for_base_url(&base_url).submit(&registration());
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: "Identity number already registered".to_string()
        }
    );
}

#[test]
fn non_json_body_is_a_network_error() {
    let (base_url, _rx) = serve_once("500 Internal Server Error", "<h1>oops</h1>");
    let outcome = Submitter::for_base_url(&base_url).submit(&registration());
    assert_eq!(outcome, SubmitOutcome::NetworkError);
}

#[test]
fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let mut form = FormState::new();
    for field in FieldId::ALL {
        form.edit_field(field, registration().get(field));
    }
    let submitter = Submitter::for_base_url(&base_url);
    form.submit_with(|data| submitter.submit(data));

    assert_eq!(form.status(), Some(&SubmitStatus::error(NETWORK_ERROR_MESSAGE)));
    assert!(!form.is_loading());
    assert_eq!(form.data(), &registration());
}

#[test]
fn accepted_submission_resets_the_form() {
    let (base_url, _rx) = serve_once("200 OK", "{}");
    let submitter = Submitter::for_base_url(&base_url);

    let mut form = FormState::new();
    for field in FieldId::ALL {
        form.edit_field(field, registration().get(field));
    }
    form.submit_with(|data| submitter.submit(data));

    assert_eq!(form.status(), Some(&SubmitStatus::success(SUCCESS_MESSAGE)));
    assert!(form.data().is_empty());
    assert!(form.errors().is_empty());
}
