use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    pub url: String,
}
