use std::io::Read;

use crate::{context::DiagnosticSink, wire::ErrorResponse};

/// Reads at most `limit` bytes from `body`.
///
/// A read error ends the read; bytes received before it are kept.
pub(crate) fn read_capped<R: Read>(body: R, limit: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = body.take(limit as u64).read_to_end(&mut buf);
    buf
}

/// Async counterpart of [`read_capped`] for `reqwest` bodies.
///
/// Stops pulling chunks once `limit` bytes are buffered; the rest of the
/// body is dropped with the response.
pub(crate) async fn read_capped_response(mut response: reqwest::Response, limit: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    while buf.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(limit - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) | Err(_) => break,
        }
    }
    buf
}

/// Extracts the registry's human-readable message from a body snapshot.
///
/// Returns an empty string for empty bodies, bodies without messages, and
/// bodies that are not a distribution error response. The latter is
/// reported once to `sink`.
pub(crate) fn extract_message(body: &[u8], sink: &dyn DiagnosticSink) -> String {
    if body.is_empty() {
        return String::new();
    }

    // A bare `null` body is valid JSON carrying no errors.
    match serde_json::from_slice::<Option<ErrorResponse>>(body) {
        Ok(response) => response
            .as_ref()
            .and_then(ErrorResponse::last_message)
            .unwrap_or_default()
            .to_owned(),
        Err(err) => {
            sink.debug(format_args!("unmarshal response body failed: {err}"));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        io::{self, Cursor, Read},
        sync::Mutex,
    };

    use crate::context::DiagnosticSink;

    use super::{extract_message, read_capped};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl DiagnosticSink for Recorder {
        fn debug(&self, message: fmt::Arguments<'_>) {
            self.0
                .lock()
                .expect("recorder mutex must not be poisoned")
                .push(message.to_string());
        }
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.0.lock().expect("recorder mutex").len()
        }
    }

    /// Yields `prefix` and then fails every read.
    struct FailingAfter {
        prefix: Cursor<Vec<u8>>,
    }

    impl Read for FailingAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.prefix.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_capped_truncates_at_limit() {
        let data = vec![b'x'; 100];
        assert_eq!(read_capped(Cursor::new(data), 10).len(), 10);
    }

    #[test]
    fn read_capped_keeps_short_body() {
        let body = read_capped(Cursor::new(b"short".to_vec()), 10);
        assert_eq!(body, b"short");
    }

    #[test]
    fn read_capped_keeps_bytes_before_error() {
        let reader = FailingAfter {
            prefix: Cursor::new(b"partial".to_vec()),
        };
        assert_eq!(read_capped(reader, 64), b"partial");
    }

    #[test]
    fn extract_message_from_empty_body_is_silent() {
        let sink = Recorder::default();
        assert_eq!(extract_message(b"", &sink), "");
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn extract_message_picks_last_non_empty() {
        let sink = Recorder::default();
        let body = br#"{"errors":[{"message":"a"},{"message":""},{"message":"c"},{}]}"#;
        assert_eq!(extract_message(body, &sink), "c");
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn extract_message_reports_decode_failure_once() {
        let sink = Recorder::default();
        assert_eq!(extract_message(b"<html>502 Bad Gateway</html>", &sink), "");
        assert_eq!(sink.count(), 1);

        let logged = sink.0.lock().expect("recorder mutex")[0].clone();
        assert!(logged.starts_with("unmarshal response body failed"));
    }

    #[test]
    fn extract_message_rejects_wrong_errors_type() {
        let sink = Recorder::default();
        assert_eq!(extract_message(br#"{"errors":"nope"}"#, &sink), "");
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn extract_message_tolerates_loose_payloads() {
        let sink = Recorder::default();
        assert_eq!(extract_message(b"null", &sink), "");
        assert_eq!(extract_message(br#"{"errors":null}"#, &sink), "");
        assert_eq!(
            extract_message(br#"{"errors":[{"code":"X","message":null}]}"#, &sink),
            ""
        );
        let numeric_code = br#"{"errors":[{"code":404,"message":"manifest unknown"}]}"#;
        assert_eq!(extract_message(numeric_code, &sink), "manifest unknown");
        assert_eq!(sink.count(), 0);
    }
}
