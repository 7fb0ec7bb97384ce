//! # Leonardo.ai SDK for Rust
//!
//! Async client for the [Leonardo.ai](https://leonardo.ai) REST API. Start
//! image generations, poll them, manage datasets and custom models, and
//! upload init images straight to object storage.
//!
//! ## Quick start
//!
//! ```no_run
//! use leonardo::{Client, CreateGenerationRequest, PresetStyle};
//!
//! #[tokio::main]
//! async fn main() -> leonardo::Result<()> {
//!     let client = Client::new("your-api-key");
//!
//!     let mut req = CreateGenerationRequest::new("a lighthouse at dusk, oil painting");
//!     req.num_images = Some(2);
//!     req.preset_style = Some(PresetStyle::Cinematic);
//!
//!     let job = client.create_generation(&req).await?;
//!     let id = job.sd_generation_job.generation_id.unwrap_or_default();
//!
//!     let resp = client.get_generation(&id).await?;
//!     if let Some(generation) = resp.generations_by_pk {
//!         for image in &generation.generated_images {
//!             println!("{:?}", image.url);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use leonardo::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> leonardo::Result<()> {
//! // Falls back to LEONARDO_API_KEY when no key is given.
//! let client = ClientBuilder::new()
//!     .base_url("https://cloud.leonardo.ai/api/rest/v1")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! ```no_run
//! use leonardo::{CancellationToken, Client};
//!
//! # async fn example(client: Client) -> leonardo::Result<()> {
//! let token = CancellationToken::new();
//! let scoped = client.with_cancellation(token.clone());
//! tokio::spawn(async move { token.cancel() });
//! match scoped.get_user_info().await {
//!     Err(leonardo::LeonardoError::Cancelled) => println!("gave up"),
//!     other => println!("{:?}", other.map(|r| r.user_details.len())),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod errors;
mod models;
mod timestamp;
mod upload;

pub use client::{escape_path_segment, Client, ClientBuilder, Pagination};
pub use errors::{LeonardoError, Result};
pub use models::*;
pub use timestamp::{Timestamp, TimestampError};
pub use tokio_util::sync::CancellationToken;
pub use upload::upload_to_presigned_url;
