use serde::{Deserialize, Serialize};

/// Body of `POST /t/createTinyUrl`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTinyUrlRequest {
    #[serde(default)]
    pub long_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTinyUrlResponse {
    pub tiny_url: String,
}
