use serde::{Deserialize, Serialize};

/// Query parameters of the cache write endpoint.
#[derive(Debug, Deserialize)]
pub struct CacheWriteParams {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheReadResponse {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheWriteResponse {
    pub key: String,
    pub value: String,
    pub status: String,
}
