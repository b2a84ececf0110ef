//! Basic usage: one blocking chat completion.
//!
//! Set ZAI_API_KEY in your environment and run:
//!   cargo run --example basic -p zai-client

use zai_client::{CompletionRequest, Message, Zai};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key =
        std::env::var("ZAI_API_KEY").expect("ZAI_API_KEY environment variable must be set");

    let client = Zai::new(api_key);

    let request = CompletionRequest {
        model: "glm-4".into(),
        messages: vec![
            Message::system("You are a helpful AI assistant."),
            Message::user("Say 'Hello from z.ai!' in exactly 5 words."),
        ],
        temperature: Some(0.7),
        ..Default::default()
    };

    let completion = client.chat(request).await?;

    if let Some(text) = completion.first_content() {
        println!("Response: {text}");
        println!("Tokens used: {}", completion.usage.total_tokens);
    }

    Ok(())
}
