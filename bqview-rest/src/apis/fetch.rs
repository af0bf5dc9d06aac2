use crate::apis::{configuration, ErrorResponse, ResponseContent};

use super::Error;

pub(crate) async fn fetch<R, T>(
    configuration: &configuration::Configuration,
    method: reqwest::Method,
    uri_str: &str,
    request: &R,
    query_params: Option<Vec<(&str, String)>>,
) -> Result<T, Error<ErrorResponse>>
where
    R: serde::Serialize + ?Sized,
    T: for<'a> serde::Deserialize<'a>,
{
    let client = &configuration.client;

    let uri = format!("{}{}", configuration.base_path, uri_str);
    let mut req_builder = client.request(method.clone(), &uri);

    for (key, value) in query_params.unwrap_or_default() {
        req_builder = req_builder.query(&[(key, value)]);
    }

    if let Some(ref user_agent) = configuration.user_agent {
        req_builder = req_builder.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref token) = configuration.bearer_access_token {
        req_builder = req_builder.bearer_auth(token.to_owned());
    };
    if let &reqwest::Method::POST | &reqwest::Method::PUT | &reqwest::Method::PATCH = &method {
        req_builder = req_builder.json(request);
    }

    let req = req_builder.build()?;
    let resp = client.execute(req).await?;

    let status = resp.status();
    let content = resp.text().await?;

    if !status.is_client_error() && !status.is_server_error() {
        serde_json::from_str(&content).map_err(Error::from)
    } else {
        let entity: Option<ErrorResponse> = serde_json::from_str(&content).ok();
        let error = ResponseContent {
            status,
            content,
            entity,
        };
        Err(Error::ResponseError(error))
    }
}

pub(crate) async fn fetch_empty<R>(
    configuration: &configuration::Configuration,
    method: reqwest::Method,
    uri_str: &str,
    request: &R,
    query_params: Option<Vec<(&str, String)>>,
) -> Result<(), Error<ErrorResponse>>
where
    R: serde::Serialize + ?Sized,
{
    let client = &configuration.client;

    let uri = format!("{}{}", configuration.base_path, uri_str);
    let mut req_builder = client.request(method.clone(), &uri);

    for (key, value) in query_params.unwrap_or_default() {
        req_builder = req_builder.query(&[(key, value)]);
    }

    if let Some(ref user_agent) = configuration.user_agent {
        req_builder = req_builder.header(reqwest::header::USER_AGENT, user_agent.clone());
    }
    if let Some(ref token) = configuration.bearer_access_token {
        req_builder = req_builder.bearer_auth(token.to_owned());
    };
    if let &reqwest::Method::POST | &reqwest::Method::PUT | &reqwest::Method::PATCH = &method {
        req_builder = req_builder.json(request);
    }

    let req = req_builder.build()?;
    let resp = client.execute(req).await?;

    let status = resp.status();
    let content = resp.text().await?;

    if !status.is_client_error() && !status.is_server_error() {
        Ok(())
    } else {
        let entity: Option<ErrorResponse> = serde_json::from_str(&content).ok();
        let error = ResponseContent {
            status,
            content,
            entity,
        };
        Err(Error::ResponseError(error))
    }
}
