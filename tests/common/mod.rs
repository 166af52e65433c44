use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use autoquiz::api::ApiClient;
use warp::{Filter, Reply};

/// A stand-in quiz platform API bound to an ephemeral port. Every request
/// that reaches it is counted and recorded as `path?query`, so tests can
/// assert both what was sent and that nothing was sent at all.
pub struct Stub {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn saw_request(&self, needle: &str) -> bool {
        self.requests
            .lock()
            .expect("requests lock")
            .iter()
            .any(|r| r.contains(needle))
    }
}

pub async fn spawn_stub<F>(filter: F) -> Stub
where
    F: Filter<Extract = (warp::reply::Response,), Error = warp::Rejection>
        + Clone
        + Send
        + Sync
        + 'static,
{
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let hit_counter = Arc::clone(&hits);
    let request_log = Arc::clone(&requests);
    let counted = warp::path::full()
        .and(
            warp::query::raw()
                .or(warp::any().map(String::new))
                .unify(),
        )
        .map(move |path: warp::path::FullPath, query: String| {
            hit_counter.fetch_add(1, Ordering::SeqCst);
            request_log
                .lock()
                .expect("requests lock")
                .push(format!("{}?{query}", path.as_str()));
        })
        .untuple_one()
        .and(filter);

    let (addr, server) = warp::serve(counted).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    Stub {
        base_url: format!("http://{addr}"),
        hits,
        requests,
    }
}

pub fn client(stub: &Stub) -> ApiClient {
    ApiClient::new(stub.base_url.clone(), Duration::from_secs(5)).expect("api client")
}

/// A client pointed at a dead address, for pages that must not touch the
/// network at all.
pub fn offline_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:1".to_string(), Duration::from_secs(1)).expect("api client")
}

/// The application under test, rejections recovered the way `main` wires it.
pub fn app(api: ApiClient) -> warp::filters::BoxedFilter<(warp::reply::Response,)> {
    autoquiz::routes(api)
        .recover(autoquiz::rejections::handle_rejection)
        .map(Reply::into_response)
        .boxed()
}

pub fn body_text(resp: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    String::from_utf8_lossy(resp.body()).into_owned()
}
