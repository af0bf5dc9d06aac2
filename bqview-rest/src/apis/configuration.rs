/// Connection settings for the BigQuery API.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Endpoint the requests go to, without a trailing slash
    pub base_path: String,
    pub user_agent: Option<String>,
    pub client: reqwest::Client,
    /// OAuth2 bearer token attached to every request
    pub bearer_access_token: Option<String>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: "https://bigquery.googleapis.com/bigquery/v2".to_owned(),
            user_agent: Some("bqview/0.1.0".to_owned()),
            client: reqwest::Client::new(),
            bearer_access_token: None,
        }
    }
}
