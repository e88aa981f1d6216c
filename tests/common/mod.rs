#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{routing, Router};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tokio::net::TcpListener;

const VACANCIES_ROUTE: &str = "/vacancies";

/// A loopback HTTP server answering every `GET /vacancies` with a fixed reply.
///
/// The server runs on its own thread and runtime, so the blocking client
/// under test never executes inside an async context.
pub struct StubServer {
    pub base_url: String,
    requests: mpsc::Receiver<String>,
}

impl StubServer {
    /// Method and request target of the first request, e.g. `GET /vacancies?text=...`.
    pub fn request_line(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server saw no request")
    }
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: &'static str,
    requests: mpsc::Sender<String>,
}

async fn vacancies(State(reply): State<Reply>, method: Method, uri: Uri) -> Response {
    let _ = reply.requests.send(format!("{} {}", method, uri));
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        reply.body,
    )
        .into_response()
}

pub fn serve_json(status: StatusCode, body: &'static str) -> StubServer {
    let (tx, rx) = mpsc::channel();
    let router = Router::new()
        .route(VACANCIES_ROUTE, routing::get(vacancies))
        .with_state(Reply {
            status,
            body,
            requests: tx,
        });

    StubServer {
        base_url: spawn(router),
        requests: rx,
    }
}

/// Accepts requests and holds each one for `hold` before answering.
pub fn serve_silent(hold: Duration) -> String {
    let router = Router::new().route(
        VACANCIES_ROUTE,
        routing::get(move || async move {
            tokio::time::sleep(hold).await;
            StatusCode::OK
        }),
    );
    spawn(router)
}

fn spawn(router: Router) -> String {
    let (addr_tx, addr_rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
            addr_tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("stub server did not start");
    format!("http://{}", addr)
}

pub const PAGE: &str = r#"{
    "items": [
        {
            "name": "Python Developer",
            "alternate_url": "https://hh.ru/vacancy/1",
            "salary": {"from": 100000, "to": 150000, "currency": "RUR"},
            "snippet": {"requirement": "Опыт от 3 лет"}
        },
        {
            "name": "Senior Python Developer",
            "alternate_url": "https://hh.ru/vacancy/2",
            "salary": {"from": 250000, "to": null, "currency": "RUR"},
            "snippet": {"requirement": "Django, PostgreSQL"}
        },
        {
            "name": "Python Intern",
            "alternate_url": "https://hh.ru/vacancy/3",
            "salary": null,
            "snippet": {"requirement": null}
        }
    ],
    "found": 3,
    "pages": 1
}"#;
