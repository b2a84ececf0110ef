//! Streaming example: real-time token output through a sink.
//!
//! Set ZAI_API_KEY in your environment and run:
//!   cargo run --example streaming -p zai-client

use std::io::Write;

use zai_client::{CompletionRequest, Message, Zai};
use zai_types::BoxError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key =
        std::env::var("ZAI_API_KEY").expect("ZAI_API_KEY environment variable must be set");

    let client = Zai::new(api_key);

    let request = CompletionRequest {
        model: "glm-4".into(),
        messages: vec![
            Message::system("You are a helpful AI assistant."),
            Message::user("Count from 1 to 5, one number per line."),
        ],
        temperature: Some(0.7),
        ..Default::default()
    };

    print!("Response: ");
    std::io::stdout().flush()?;

    client
        .chat_stream(request, &mut |delta: &str| {
            print!("{delta}");
            std::io::stdout().flush().map_err(BoxError::from)
        })
        .await?;

    println!();
    println!("Streaming complete.");

    Ok(())
}
