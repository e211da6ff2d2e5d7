//! Request and response logging.
//!
//! Emits one curl-flavored `debug!` record per attempt for the outgoing
//! request and the received response. Side effect only; nothing in the
//! pipeline depends on these.

use log::debug;

use super::{request::TransportRequest, response::TransportResponse};

const DIVIDER: &str = "---------------------------";

/// Log one outgoing request.
pub fn log_request(request: &TransportRequest) {
    let mut record = format!(
        "REQUEST\n{DIVIDER}\n--method {} \n--url '{}' \n",
        request.method, request.url
    );

    for (key, value) in &request.headers {
        record.push_str(&format!("--header '{key}: {value}' \n"));
    }

    if let Some(body) = &request.body {
        record.push_str(&format!("--data {} bytes\n", body.len()));
    }

    record.push_str(DIVIDER);
    debug!("{record}");
}

/// Log one received response.
pub fn log_response(response: &TransportResponse) {
    let mut record = format!(
        "RESPONSE\n{DIVIDER}\n--status code {}\n",
        response.status
    );

    for (key, value) in &response.headers {
        record.push_str(&format!("--header '{key}: {value}' \n"));
    }

    let body_len = response.body.as_ref().map(Vec::len).unwrap_or_default();
    record.push_str(&format!("--data {body_len} bytes\n{DIVIDER}"));

    debug!("{record}");
}
