//! Socket Listener Example
//!
//! A background thread accepts TCP connections and posts each accepted socket
//! into the runtime. The runtime itself never blocks on the network.
//!
//! # Actors
//!
//! - **socket-server**: on INIT, spawns the listener thread. Moves from
//!   `Starting` to `Running` when the listener reports that it is bound; stops
//!   if binding fails or when it receives `CLOSE`.
//! - **socket-accept**: answers every accepted connection with a greeting.
//!   The socket is closed when the message payload is released.
//!
//! Run with `cargo run --example listener -- 8080 30` (port, seconds).

use std::{
    io::{Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use mailroom::*;
use tokio_util::sync::CancellationToken;

const LISTENER_BOUND: MessageKind = MessageKind::new(100);
const LISTENER_FAILED: MessageKind = MessageKind::new(101);
const ON_ACCEPT: MessageKind = MessageKind::new(102);

#[derive(Debug, Payload)]
enum Net {
    Listen { port: u16, on_accept: ActorId },
    Bound(SocketAddr),
    Failed(String),
    Accepted(TcpStream),
}

enum ServerState {
    Starting,
    Running(SocketAddr),
}

/// Owns the listener thread. The thread is told to stop through `closing`.
struct SocketServer {
    state: Option<ServerState>,
    closing: Arc<AtomicBool>,
}

impl SocketServer {
    fn new() -> Self {
        Self {
            state: None,
            closing: Arc::new(AtomicBool::new(false)),
        }
    }
}

fn listen(port: u16, server: ActorId, on_accept: ActorId, handle: Handle<Net>, closing: Arc<AtomicBool>) {
    let listener = match TcpListener::bind(("0.0.0.0", port)) {
        Ok(listener) => listener,
        Err(e) => {
            handle.post(server, server, LISTENER_FAILED, Net::Failed(e.to_string()));
            return;
        }
    };
    match listener.local_addr() {
        Ok(addr) => handle.post(server, server, LISTENER_BOUND, Net::Bound(addr)),
        Err(e) => {
            handle.post(server, server, LISTENER_FAILED, Net::Failed(e.to_string()));
            return;
        }
    }

    for stream in listener.incoming() {
        if closing.load(Ordering::Acquire) {
            break;
        }
        match stream {
            Ok(stream) => handle.post(server, on_accept, ON_ACCEPT, Net::Accepted(stream)),
            Err(e) => {
                tracing::warn!(error = %e, "accept failed, listener closing");
                break;
            }
        }
    }
}

impl Actor<Net> for SocketServer {
    fn handle(&mut self, ctx: &Context<Net>, msg: &mut Message<Net>) -> Outcome {
        match (msg.kind(), &self.state) {
            (MessageKind::INIT, None) => {
                let Some(Net::Listen { port, on_accept }) = msg.take_payload() else {
                    return Outcome::Fatal;
                };
                self.state = Some(ServerState::Starting);
                let (server, handle, closing) = (ctx.id(), ctx.handle().clone(), self.closing.clone());
                thread::spawn(move || listen(port, server, on_accept, handle, closing));
                Outcome::Continue
            }
            (LISTENER_BOUND, Some(ServerState::Starting)) => {
                let Some(Net::Bound(addr)) = msg.payload() else {
                    return Outcome::Error;
                };
                tracing::info!(%addr, "listener running");
                self.state = Some(ServerState::Running(*addr));
                Outcome::Continue
            }
            (LISTENER_FAILED, Some(ServerState::Starting)) => {
                if let Some(Net::Failed(reason)) = msg.payload() {
                    tracing::error!(%reason, "listener failed");
                }
                self.state = None;
                Outcome::Stop
            }
            (MessageKind::CLOSE | MessageKind::SHUTDOWN, Some(ServerState::Running(addr))) => {
                let addr = *addr;
                tracing::info!(%addr, "closing listener");
                self.closing.store(true, Ordering::Release);
                // Wake the blocking accept so the thread notices.
                let _ = TcpStream::connect(addr);
                self.state = None;
                Outcome::Stop
            }
            (MessageKind::SHUTDOWN, _) => Outcome::Continue,
            (LISTENER_BOUND | LISTENER_FAILED | MessageKind::CLOSE | MessageKind::INIT, _) => {
                Outcome::NotInState
            }
            _ => Outcome::UnrecognisedKind,
        }
    }
}

fn socket_accept(_ctx: &Context<Net>, msg: &mut Message<Net>) -> Outcome {
    match msg.kind() {
        MessageKind::INIT | MessageKind::SHUTDOWN => Outcome::Continue,
        ON_ACCEPT => {
            let Some(Net::Accepted(stream)) = msg.payload_mut() else {
                return Outcome::Error;
            };
            let mut buffer = [0u8; 4096];
            let read = stream.read(&mut buffer).unwrap_or_default();
            tracing::info!(request = %String::from_utf8_lossy(&buffer[..read]), "request received");
            if let Err(e) = stream.write_all(b"Hello World") {
                tracing::warn!(error = %e, "failed to answer");
                return Outcome::Error;
            }
            Outcome::Continue
        }
        _ => Outcome::UnrecognisedKind,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let port: u16 = args.next().and_then(|p| p.parse().ok()).unwrap_or(8080);
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30);

    let mut runtime = Runtime::<Net>::new(Config::default().with_drain_interval(Duration::from_secs(1)));

    let accept = runtime.create(ActorId::ROOT, Some("socket-accept"), socket_accept, None);
    let server = runtime.create(
        ActorId::ROOT,
        Some("socket-server"),
        SocketServer::new(),
        Net::Listen {
            port,
            on_accept: accept,
        },
    );

    let cancel = CancellationToken::new();
    let timer = {
        let cancel = cancel.clone();
        let handle = runtime.handle();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(seconds)).await;
            handle.post(ActorId::ROOT, server, MessageKind::CLOSE, None);
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        })
    };

    runtime.run(cancel).await?;
    let _ = timer.await;
    Ok(())
}
