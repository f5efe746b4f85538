//! Shared utilities for integration tests.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use credits_gateway::blockchain::{
    BlockchainDataProvider, TransportResult, VmOutput, VmValueRequest, VmValuesResponseData,
};

pub const CONTRACT: &str = "erd1qqqqqqqqqqqqqpgqcreditscontract";

type Responder = dyn Fn(&VmValueRequest) -> TransportResult<VmValuesResponseData> + Send + Sync;

/// Programmable in-process provider that records every request it receives.
pub struct StubProvider {
    respond: Box<Responder>,
    calls: AtomicUsize,
    requests: Mutex<Vec<VmValueRequest>>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&VmValueRequest) -> TransportResult<VmValuesResponseData> + Send + Sync + 'static,
    {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answer per function name: `isPaused` → paused byte, `getCreditsPerEgld` → rate,
    /// `getCredits` → the id itself.
    pub fn contract(paused: bool, rate: u64) -> Arc<Self> {
        Self::new(move |req| {
            let data = match req.func_name.as_str() {
                "isPaused" => vec![vec![u8::from(paused)]],
                "getCreditsPerEgld" => vec![rate.to_be_bytes().to_vec()],
                "getCredits" => vec![hex::decode(&req.args[0]).unwrap_or_default()],
                _ => return Ok(VmOutput::with_code("function not found").into()),
            };
            Ok(VmOutput::ok(data).into())
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls_to(&self, func_name: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.func_name == func_name)
            .count()
    }

    pub fn requests(&self) -> Vec<VmValueRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockchainDataProvider for StubProvider {
    async fn execute_vm_query(
        &self,
        request: &VmValueRequest,
    ) -> TransportResult<VmValuesResponseData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        // Yield so concurrent callers interleave like they would on a real network call.
        tokio::task::yield_now().await;
        (self.respond)(request)
    }
}

/// Start a mock gateway answering every request with `status` and `body`.
///
/// Returns the bound address and a log of raw request bodies received.
#[allow(dead_code)]
pub async fn start_mock_gateway(status: u16, body: String) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let body = body.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let request_body = read_request_body(&mut socket).await;
                        log.lock().unwrap().push(request_body);

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, received)
}

/// Read one HTTP/1.1 request and return its body as text.
async fn read_request_body(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return String::new(),
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    String::from_utf8_lossy(&buf[header_end..]).to_string()
}
