//! HTTP agent construction and bounded response helpers.

use std::io::{self, Read};
use std::time::Duration;

/// Largest response body the client will buffer.
pub(crate) const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an agent with explicit connect and read timeouts.
///
/// Training holds the connection open for the whole server-side pipeline, so
/// each endpoint gets its own read timeout instead of one shared agent.
pub(crate) fn agent(connect_timeout: Duration, read_timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(connect_timeout)
        .timeout_read(read_timeout)
        .timeout_write(WRITE_TIMEOUT)
        .build()
}

/// Read a response into memory, enforcing a maximum byte size.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(bytes)
}

/// Short, single-line rendition of a response body for error messages.
pub(crate) fn body_excerpt(bytes: &[u8]) -> String {
    const MAX_CHARS: usize = 200;
    let text = String::from_utf8_lossy(bytes);
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(MAX_CHARS).collect();
    cut.push('…');
    cut
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/support/request.rs"]
mod request;


#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;

    fn test_agent() -> ureq::Agent {
        agent(Duration::from_secs(2), Duration::from_secs(2))
    }

    #[test]
    fn read_response_bytes_rejects_content_length_over_max() {
        let response = "HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nok".to_string();
        let (url, _) = serve_once(response);
        let response = test_agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_response_bytes_rejects_body_over_max() {
        let body = "a".repeat(32);
        let (url, _) = serve_once(format!("HTTP/1.0 200 OK\r\n\r\n{body}"));
        let response = test_agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_response_bytes_accepts_under_limit() {
        let body = "hello";
        let (url, _) = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let response = test_agent().get(&url).call().unwrap();
        assert_eq!(read_response_bytes(response, 16).unwrap(), body.as_bytes());
    }

    #[test]
    fn body_excerpt_flattens_and_truncates() {
        assert_eq!(body_excerpt(b"line one\n  line two"), "line one line two");
        let long = "x".repeat(500);
        let excerpt = body_excerpt(long.as_bytes());
        assert_eq!(excerpt.chars().count(), 201);
        assert!(excerpt.ends_with('…'));
    }
}
