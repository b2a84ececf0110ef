//! Exercise several GLM models with a short prompt.
//!
//! Set ZAI_API_KEY in your environment and run:
//!   cargo run --example models -p zai-client

use zai_client::{CompletionRequest, Message, Zai};

const MODELS: &[&str] = &["glm-4", "glm-3-turbo", "glm-4.6"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key =
        std::env::var("ZAI_API_KEY").expect("ZAI_API_KEY environment variable must be set");

    let client = Zai::new(api_key);

    for model in MODELS {
        println!("Testing model: {model}");

        let request = CompletionRequest {
            model: (*model).into(),
            messages: vec![Message::user("Say 'OK' if you can hear me.")],
            temperature: Some(0.7),
            max_tokens: Some(10),
            ..Default::default()
        };

        match client.chat(request).await {
            Ok(completion) => {
                println!("  {model}: {}", completion.first_content().unwrap_or(""));
            }
            Err(err) => {
                eprintln!("  {model}: {err}");
            }
        }
    }

    Ok(())
}
