//! One-shot HTTP server for client tests.
//!
//! Serves a single canned response on a loopback port and reports the request
//! line it received. The server thread exits after the first connection.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub struct StubServer {
    addr: SocketAddr,
    requests: Receiver<String>,
}

impl StubServer {
    /// Serve `body` with the given status code to the first client.
    pub fn serve(status: u16, body: impl Into<String>) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let body = body.into();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                return;
            }
            // Drain headers up to the blank line.
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok_and(|n| n > 0) && line != "\r\n" {
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let mut stream = reader.into_inner();
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            let _ = tx.send(request_line.trim_end().to_string());
        });

        Ok(Self { addr, requests: rx })
    }

    /// Endpoint pointing at this server, e.g. `http://127.0.0.1:4242/posts`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Request line of the served request, such as `GET /posts?limit=100 HTTP/1.1`.
    pub fn received_request(&self) -> Option<String> {
        self.requests.recv_timeout(Duration::from_secs(5)).ok()
    }
}
