use zai_types::{ChatCompletion, CompletionRequest, Message};

#[test]
fn request_omits_unset_sampling_fields() {
    let request = CompletionRequest {
        model: "glm-4".into(),
        messages: vec![Message::user("Hi")],
        ..Default::default()
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("temperature").is_none());
    assert!(json.get("max_tokens").is_none());
    // The stream flag is always on the wire, even when false.
    assert_eq!(json["stream"], false);
}

#[test]
fn request_serializes_sampling_fields_when_set() {
    let request = CompletionRequest {
        model: "glm-4".into(),
        messages: vec![Message::user("Hi")],
        temperature: Some(0.7),
        max_tokens: Some(10),
        stream: true,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["temperature"], 0.7);
    assert_eq!(json["max_tokens"], 10);
    assert_eq!(json["stream"], true);
}

#[test]
fn response_parses_full_document() {
    let body = serde_json::json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "glm-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 3,
            "total_tokens": 15
        }
    });

    let completion: ChatCompletion = serde_json::from_value(body).unwrap();
    assert_eq!(completion.id, "chatcmpl-abc123");
    assert_eq!(completion.model, "glm-4");
    assert_eq!(completion.choices[0].index, 0);
    assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("stop"));
    assert_eq!(completion.usage.total_tokens, 15);
    assert_eq!(completion.first_content(), Some("Hello!"));
}

#[test]
fn response_tolerates_missing_finish_reason() {
    let body = serde_json::json!({
        "id": "chatcmpl-x",
        "model": "glm-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "partial" }
        }]
    });

    let completion: ChatCompletion = serde_json::from_value(body).unwrap();
    assert!(completion.choices[0].finish_reason.is_none());
    assert_eq!(completion.usage.total_tokens, 0);
}

#[test]
fn first_content_is_none_for_empty_choices() {
    let body = serde_json::json!({
        "id": "chatcmpl-empty",
        "model": "glm-4",
        "choices": []
    });

    let completion: ChatCompletion = serde_json::from_value(body).unwrap();
    assert!(completion.first_content().is_none());
}
