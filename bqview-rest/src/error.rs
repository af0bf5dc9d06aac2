use bqview::error::Error;
use reqwest::StatusCode;

use crate::apis::{self, ResponseContent};

/**
Error conversion
*/
impl<T> From<apis::Error<T>> for Error {
    fn from(val: apis::Error<T>) -> Self {
        match val {
            apis::Error::Reqwest(err) => Error::InvalidFormat(err.to_string()),
            apis::Error::Serde(err) => Error::JSONSerde(err),
            apis::Error::Io(err) => Error::IO(err),
            apis::Error::ResponseError(ResponseContent {
                status: StatusCode::NOT_FOUND,
                content,
                entity: _,
            }) => Error::NotFound(content),
            apis::Error::ResponseError(ResponseContent {
                status: StatusCode::CONFLICT,
                content,
                entity: _,
            }) => Error::AlreadyExists(content),
            apis::Error::ResponseError(err) => Error::InvalidFormat(format!(
                "Response status: {}, Response content: {}",
                err.status, err.content
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use bqview::error::Error;
    use reqwest::StatusCode;

    use crate::apis::{self, ErrorResponse, ResponseContent};

    fn response_error(status: StatusCode) -> apis::Error<ErrorResponse> {
        apis::Error::ResponseError(ResponseContent {
            status,
            content: "body".to_owned(),
            entity: None,
        })
    }

    #[test]
    fn test_not_found_mapping() {
        assert!(matches!(
            Error::from(response_error(StatusCode::NOT_FOUND)),
            Error::NotFound(_)
        ));
        assert!(matches!(
            Error::from(response_error(StatusCode::CONFLICT)),
            Error::AlreadyExists(_)
        ));
        assert!(matches!(
            Error::from(response_error(StatusCode::FORBIDDEN)),
            Error::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_error_body_parses() {
        let json = r#"{
            "error": {
                "code": 404,
                "message": "Not found: Dataset analytics-prod:sales",
                "status": "NOT_FOUND"
            }
        }"#;
        let body: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, 404);
        assert_eq!(body.error.status.as_deref(), Some("NOT_FOUND"));
    }
}
