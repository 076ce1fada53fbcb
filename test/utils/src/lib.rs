use serde_json::json;

/// A chat completion body as returned by the vendor with a single assistant
/// choice.
pub fn completion_fixture(content: &str) -> String {
    return json!({
        "choices": [
            {
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "index": 0
            }
        ],
        "model": "m"
    })
    .to_string();
}

pub fn empty_completion_fixture() -> String {
    return json!({
        "choices": [],
        "model": "m"
    })
    .to_string();
}

pub fn vendor_error_fixture() -> String {
    return json!({
        "error": {
            "message": "Internal failure on shard gq-7, request id req_01hx",
            "type": "internal_server_error"
        }
    })
    .to_string();
}
