use std::pin::pin;

use futures::AsyncReadExt;
use kube::api::{ListParams, LogParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Pod;

/// Fetch pods in a specific namespace
pub async fn fetch_pods_by_namespace(client: &Client, namespace: &str) -> kube::Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s) in namespace '{}'", pod_list.items.len(), namespace);
    Ok(pod_list.items)
}

/// Read the last `tail_lines` lines of a pod's log.
///
/// Container output is arbitrary bytes; invalid UTF-8 is replaced with
/// U+FFFD rather than failing the whole read.
///
/// No container is named, so the API picks the pod's only container and
/// rejects the request for multi-container pods.
pub async fn fetch_pod_log_tail(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    tail_lines: i64,
) -> kube::Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let params = LogParams {
        tail_lines: Some(tail_lines),
        ..LogParams::default()
    };

    let mut reader = pin!(pods.log_stream(pod_name, &params).await?);
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .await
        .map_err(kube::Error::ReadEvents)?;

    debug!(
        "Read {} byte(s) of log from {}/{} (tail {})",
        raw.len(),
        namespace,
        pod_name,
        tail_lines
    );
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    use http::{Request, Response, StatusCode};
    use kube::client::Body;

    use super::*;

    /// Client whose every request is answered with `status` and `body`;
    /// request URIs are recorded.
    fn stub_client(status: StatusCode, body: &'static [u8]) -> (Client, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let service = tower::service_fn(move |req: Request<Body>| {
            recorder.lock().unwrap().push(req.uri().to_string());
            async move {
                Ok::<_, Infallible>(
                    Response::builder()
                        .status(status)
                        .body(Body::from(body.to_vec()))
                        .unwrap(),
                )
            }
        });
        (Client::new(service, "default"), seen)
    }

    #[tokio::test]
    async fn test_log_tail_keeps_non_utf8_output() {
        let (client, seen) = stub_client(StatusCode::OK, b"line 1\nline 2 caf\xE9\nline 3\n");

        let logs = fetch_pod_log_tail(&client, "default", "web-1", 20).await.unwrap();

        assert_eq!(logs, "line 1\nline 2 caf\u{FFFD}\nline 3\n");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("/api/v1/namespaces/default/pods/web-1/log?"), "{}", seen[0]);
        assert!(seen[0].contains("tailLines=20"), "{}", seen[0]);
    }

    #[tokio::test]
    async fn test_log_tail_surfaces_api_status() {
        let (client, _) = stub_client(
            StatusCode::NOT_FOUND,
            br#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"pods \"web-9\" not found","reason":"NotFound","code":404}"#,
        );

        let err = fetch_pod_log_tail(&client, "default", "web-9", 20).await.unwrap_err();

        match err {
            kube::Error::Api(resp) => {
                assert_eq!(resp.code, 404);
                assert_eq!(resp.message, "pods \"web-9\" not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
