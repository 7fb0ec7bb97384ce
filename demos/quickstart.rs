//! Quick-start walkthrough for the Leonardo.ai Rust SDK.
//!
//! Run with:
//!   LEONARDO_API_KEY=... RUST_LOG=leonardo=debug cargo run --example quickstart
//!
//! Or pass the key directly in code (not recommended for production).

use std::time::Duration;

use leonardo::{ClientBuilder, CreateGenerationRequest, PresetStyle};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> leonardo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // -----------------------------------------------------------------------
    // 1. Create a client (reads LEONARDO_API_KEY from environment)
    // -----------------------------------------------------------------------
    let client = ClientBuilder::new().build()?;

    // -----------------------------------------------------------------------
    // 2. Who am I, and how many tokens are left?
    // -----------------------------------------------------------------------
    let me = client.get_user_info().await?;
    let Some(details) = me.user_details.first() else {
        println!("No account details returned.");
        return Ok(());
    };
    println!("User: {}", details.user.username.as_deref().unwrap_or("?"));
    println!("API subscription tokens: {:?}", details.api_subscription_tokens);
    let user_id = details.user.id.clone().unwrap_or_default();
    println!();

    // -----------------------------------------------------------------------
    // 3. Let the service suggest a prompt
    // -----------------------------------------------------------------------
    let prompt = client
        .random_prompt()
        .await?
        .prompt_generation
        .and_then(|p| p.prompt)
        .unwrap_or_else(|| "a lighthouse at dusk".to_string());
    println!("Prompt: {prompt}");

    // -----------------------------------------------------------------------
    // 4. Start a generation and poll until it finishes
    // -----------------------------------------------------------------------
    let mut req = CreateGenerationRequest::new(prompt);
    req.num_images = Some(1);
    req.preset_style = Some(PresetStyle::Dynamic);

    let job = client.create_generation(&req).await?;
    let generation_id = job.sd_generation_job.generation_id.unwrap_or_default();
    println!("Generation {generation_id} queued");

    loop {
        let resp = client.get_generation(&generation_id).await?;
        let Some(generation) = resp.generations_by_pk else {
            println!("Generation disappeared.");
            break;
        };
        if generation.is_terminal() {
            println!("Status: {:?}", generation.status);
            for image in &generation.generated_images {
                println!("  {}", image.url.as_deref().unwrap_or("-"));
            }
            break;
        }
        tokio::time::sleep(Duration::from_secs(3)).await;
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Page through recent generations
    // -----------------------------------------------------------------------
    let page = client
        .list_generations_by_user(&user_id, leonardo::Pagination::new(5, 0))
        .await?;
    for generation in &page.generations {
        println!(
            "{}  {:?}  {}",
            generation.id.as_deref().unwrap_or("-"),
            generation.status,
            generation.prompt.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
