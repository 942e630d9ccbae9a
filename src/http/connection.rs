use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::files;
use crate::http::request::RequestLine;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles one accepted connection: a single request line in, a single
/// response out, then the connection is dropped.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    index_file: String,
}

impl Connection {
    pub fn new(stream: TcpStream, index_file: String) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            index_file,
        }
    }

    /// Serves the connection to completion.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let line = self.read_request_line().await?;
        let request = RequestLine::parse(&line);
        debug!(line = %request.raw, path = %request.path, "Request line received");

        let response = self.respond(&request).await;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Reads up to the first newline on the connection.
    ///
    /// Everything the client sends after the first line stays unread. If the
    /// peer closes before sending a newline, whatever arrived is the line —
    /// possibly nothing, which parses to an empty path downstream.
    async fn read_request_line(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(pos + 1);
                return Ok(trim_line_ending(&line));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                let len = self.buffer.len();
                let line = self.buffer.split_to(len);
                return Ok(trim_line_ending(&line));
            }
        }
    }

    async fn respond(&self, request: &RequestLine) -> Response {
        let target = files::resolve(&request.path, &self.index_file);

        match files::load(&target).await {
            Ok(file) => {
                debug!(file = %target, size = file.size, "Serving file");
                Response::file(&target, file.size, file.body)
            }
            Err(e) => {
                debug!(file = %target, error = %e, "File not readable");
                Response::not_found(&target)
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> String {
    String::from_utf8_lossy(line)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}
