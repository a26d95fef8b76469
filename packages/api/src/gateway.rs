//! HTTP implementation of [`domain::Gateway`].
//!
//! Bodies are read as text and decoded separately so a non-JSON answer is
//! reported as [`GatewayError::Decode`] rather than a transport failure.
//! Requests carry no timeout and are never retried.

use domain::config::GatewayConfig;
use domain::{Booking, BookingReceipt, Category, Gateway, GatewayError, Tutor};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        read_json(response).await
    }
}

fn transport(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport)?;
    decode(status, &body)
}

/// Map a status and body to a value or the matching [`GatewayError`].
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

impl Gateway for HttpGateway {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get_json("category").await
    }

    async fn list_tutors(&self) -> Result<Vec<Tutor>, GatewayError> {
        self.get_json("tutors").await
    }

    async fn get_tutor(&self, id: &str) -> Result<Tutor, GatewayError> {
        self.get_json(&format!("tutors/{id}")).await
    }

    async fn create_booking(&self, booking: &Booking) -> Result<BookingReceipt, GatewayError> {
        let url = self.url("book-tutors");
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_without_double_slash() {
        let gateway = HttpGateway::new(&GatewayConfig {
            base_url: "https://api.example.com/".to_string(),
        });
        assert_eq!(gateway.url("category"), "https://api.example.com/category");
        assert_eq!(gateway.url("/tutors/7"), "https://api.example.com/tutors/7");
    }

    #[test]
    fn test_decode_category_list() {
        let body = r#"[
            { "_id": "a", "title": "English", "icon": "FaLanguage", "tutorCount": 12 },
            { "_id": "b", "title": "Arabic", "icon": "FaBook" }
        ]"#;
        let categories: Vec<Category> = decode(200, body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].tutor_count, Some(12));
        assert!(categories[1].description.is_none());
    }

    #[test]
    fn test_decode_receipt() {
        let receipt: BookingReceipt =
            decode(200, r#"{ "acknowledged": true, "insertedId": "665f" }"#).unwrap();
        assert_eq!(receipt.inserted_id.as_deref(), Some("665f"));
    }

    #[test]
    fn test_non_success_status() {
        let result: Result<Tutor, _> = decode(404, "Not Found");
        assert_eq!(result, Err(GatewayError::Status(404)));
    }

    #[test]
    fn test_malformed_body() {
        let result: Result<Vec<Tutor>, _> = decode(200, "<html>oops</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_null_tutor_is_malformed() {
        // The gateway answers `null` for unknown ids.
        let result: Result<Tutor, _> = decode(200, "null");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }
}
