use crate::http::mime;

/// Name sent in the `Server` header of every response.
pub const SERVER_NAME: &str = "SimpleServer";

/// HTTP status codes produced by the server.
///
/// Exactly two outcomes exist: the requested file was readable (`Ok`) or it
/// was not (`NotFound`). Nothing else is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use simpleserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// Headers are kept as an ordered list and written in insertion order, so the
/// header block is byte-stable: `Server`, `Content-Length`, `Connection`,
/// `Content-Type`.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they will be written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, replacing any existing header with the same name.
    ///
    /// A replaced header keeps its original position in the header block.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }

        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a `Content-Length` header based on the body size if none was set.
    pub fn build(mut self) -> Response {
        if !self.headers.iter().any(|(k, _)| k == "Content-Length") {
            self.headers
                .push(("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Builds the 200 response for a readable file.
    ///
    /// `Content-Length` is the file's on-disk byte size, exactly as given;
    /// the body is the caller's line-normalized content. The content type is
    /// inferred from the file name.
    pub fn file(file_name: &str, size: u64, body: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Server", SERVER_NAME)
            .header("Content-Length", size.to_string())
            .header("Connection", "Close")
            .header("Content-Type", mime::content_type(file_name))
            .body(body)
            .build()
    }

    /// Builds the 404 response for an unreadable file.
    ///
    /// The body names the missing file and ends with a newline, so the
    /// advertised length is the fixed template length plus the name length.
    pub fn not_found(file_name: &str) -> Self {
        let body = format!("The following file was not found: {}\n", file_name).into_bytes();

        ResponseBuilder::new(StatusCode::NotFound)
            .header("Server", SERVER_NAME)
            .header("Content-Length", body.len().to_string())
            .header("Connection", "Close")
            .header("Content-Type", "text/plain")
            .body(body)
            .build()
    }
}
