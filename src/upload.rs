//! Presigned S3 uploads.
//!
//! Upload endpoints such as [`Client::upload_init_image`] only hand out a
//! target URL and a set of form fields. The file itself goes straight to
//! object storage as a `multipart/form-data` POST: every field first, then
//! the file under the `file` part. Storage answers 204 (or 200) on success.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::client::Client;
use crate::errors::{LeonardoError, Result};

/// Upload `path` to a presigned target using a fresh HTTP client.
///
/// No `Authorization` header is sent; the presigned fields carry the
/// credentials. Prefer [`Client::upload_to_presigned_url`] when a client is
/// at hand so the connection pool, cancellation and timeout are shared.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: leonardo::Client) -> leonardo::Result<()> {
/// use leonardo::UploadInitImageRequest;
///
/// let req = UploadInitImageRequest {
///     extension: Some("png".into()),
///     ..Default::default()
/// };
/// let resp = client.upload_init_image(&req).await?;
/// if let Some(target) = resp.upload_init_image {
///     if let Some(url) = target.url.as_deref() {
///         leonardo::upload_to_presigned_url(url, &target.fields, "init.png").await?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn upload_to_presigned_url(
    url: &str,
    fields: &HashMap<String, String>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let http = reqwest::Client::new();
    let form = build_form(fields, path.as_ref()).await?;
    let response = http.post(url).multipart(form).send().await?;
    let status = response.status();
    // Drain so the connection can be reused.
    let _ = response.bytes().await;
    check_status(url, status)
}

impl Client {
    /// Upload `path` to a presigned target through this client's HTTP pool.
    ///
    /// The API key is never sent to the storage host. A bound cancellation
    /// token or per-call timeout applies as for any other call.
    pub async fn upload_to_presigned_url(
        &self,
        url: &str,
        fields: &HashMap<String, String>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let form = build_form(fields, path.as_ref()).await?;
        let mut req = self.http().post(url).multipart(form);
        if let Some(timeout) = self.request_timeout() {
            req = req.timeout(timeout);
        }
        let request = req
            .build()
            .map_err(|e| LeonardoError::InvalidRequest(e.to_string()))?;
        let (status, _) = self.dispatch(request).await?;
        check_status(url, status)
    }
}

async fn build_form(fields: &HashMap<String, String>, path: &Path) -> Result<Form> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let bytes = tokio::fs::read(path).await?;
    debug!(file = %file_name, size = bytes.len(), fields = fields.len(), "preparing upload");

    // Sorted so the wire order is stable; S3 only cares that `file` is last.
    let ordered: BTreeMap<&String, &String> = fields.iter().collect();
    let mut form = Form::new();
    for (name, value) in ordered {
        form = form.text(name.clone(), value.clone());
    }
    Ok(form.part("file", Part::bytes(bytes).file_name(file_name)))
}

fn check_status(url: &str, status: StatusCode) -> Result<()> {
    match status {
        StatusCode::OK | StatusCode::NO_CONTENT => {
            debug!(status = status.as_u16(), "upload accepted");
            Ok(())
        }
        _ => {
            let host = reqwest::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_default();
            warn!(status = status.as_u16(), %host, "upload rejected");
            Err(LeonardoError::Upload {
                status: status.as_u16(),
            })
        }
    }
}
