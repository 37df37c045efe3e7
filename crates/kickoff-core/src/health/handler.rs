use std::time::Duration;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, Uri, header};
use hyper_util::rt::TokioIo;
use serde::Deserialize;
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::errors::KickoffError;

use super::errors::HealthError;
use super::types::HealthStatus;

/// How long a single health check may take end to end.
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Deserialize)]
struct HealthBody {
    status: String,
}

/// Ask the backend's health endpoint once.
///
/// Never returns an error; anything that stops the request from completing
/// becomes [`HealthStatus::Unreachable`].
pub fn check_backend_health(url: &str, timeout: Duration) -> HealthStatus {
    info!(event = "core.health.check_started", url = url);

    let status = match fetch_blocking(url, timeout) {
        Ok((code, body)) => classify_health_response(code, &body),
        Err(e) => {
            warn!(
                event = "core.health.check_failed",
                url = url,
                error_code = e.error_code(),
                error = %e
            );
            HealthStatus::Unreachable {
                reason: e.to_string(),
            }
        }
    };

    info!(
        event = "core.health.check_completed",
        url = url,
        healthy = status.is_healthy()
    );
    status
}

fn fetch_blocking(url: &str, timeout: Duration) -> Result<(u16, Bytes), HealthError> {
    let uri: Uri = url.parse().map_err(|e| HealthError::InvalidUrl {
        url: url.to_string(),
        message: format!("{}", e),
    })?;

    if uri.scheme_str() != Some("http") {
        return Err(HealthError::InvalidUrl {
            url: url.to_string(),
            message: "only http:// is supported".to_string(),
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| HealthError::Runtime { source })?;

    runtime.block_on(async {
        match tokio::time::timeout(timeout, fetch(&uri)).await {
            Ok(result) => result,
            Err(_) => Err(HealthError::Timeout {
                millis: timeout.as_millis() as u64,
            }),
        }
    })
}

async fn fetch(uri: &Uri) -> Result<(u16, Bytes), HealthError> {
    let host = uri.host().ok_or_else(|| HealthError::InvalidUrl {
        url: uri.to_string(),
        message: "missing host".to_string(),
    })?;
    let port = uri.port_u16().unwrap_or(80);

    let stream = TcpStream::connect((host, port))
        .await
        .map_err(|source| HealthError::Connect { source })?;

    let (mut sender, connection) =
        hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            debug!(event = "core.health.connection_closed", error = %e);
        }
    });

    let authority = uri.authority().map(|a| a.as_str()).unwrap_or(host);
    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(header::HOST, authority)
        .body(Empty::<Bytes>::new())
        .map_err(|e| HealthError::Request {
            message: e.to_string(),
        })?;

    let response = sender.send_request(request).await?;
    let code = response.status().as_u16();
    let body = response.into_body().collect().await?.to_bytes();

    Ok((code, body))
}

/// Map an HTTP answer to a health status.
///
/// Healthy only for a 2xx whose JSON body has `"status": "healthy"`.
fn classify_health_response(code: u16, body: &[u8]) -> HealthStatus {
    if !(200..300).contains(&code) {
        return HealthStatus::Unhealthy {
            detail: format!("HTTP {}", code),
        };
    }

    match serde_json::from_slice::<HealthBody>(body) {
        Ok(parsed) if parsed.status == "healthy" => HealthStatus::Healthy,
        Ok(parsed) => HealthStatus::Unhealthy {
            detail: format!("status '{}'", parsed.status),
        },
        Err(e) => HealthStatus::Unhealthy {
            detail: format!("unexpected health response: {}", e),
        },
    }
}
