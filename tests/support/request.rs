//! Request reader shared by the unit-test and integration-test HTTP servers.

use std::io::Read;

/// Read one request: headers plus as many body bytes as `Content-Length` announces.
pub fn read_request(stream: &mut impl Read) -> String {
    let mut received = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let read = stream.read(&mut buf).unwrap_or(0);
        if read == 0 {
            break;
        }
        received.extend_from_slice(&buf[..read]);
        let text = String::from_utf8_lossy(&received);
        let Some(header_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if received.len() >= header_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&received).into_owned()
}
