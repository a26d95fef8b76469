//! # Records exchanged with the gateway
//!
//! The gateway is a document store fronted by a JSON API, so its field names are
//! not Rust-friendly (`_id`, `Image`, `tutorCount`). Each struct keeps idiomatic
//! field names and maps the wire names with `serde(rename)`.
//!
//! | Struct | Direction | Notes |
//! |--------|-----------|-------|
//! | [`Category`] | read | One card in the home page grid. |
//! | [`Tutor`] | read | Directory card and detail page. `price` / `review` accept numbers or numeric strings. |
//! | [`Booking`] | write | Derived from a [`Tutor`] plus the [`SessionUser`] at click time. |
//! | [`BookingReceipt`] | read | Response to a booking insert. |
//! | [`SessionUser`] | local | The signed-in identity, owned by the auth provider. |

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A tutoring category shown on the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Font Awesome component name, e.g. `"FaLanguage"`.
    #[serde(rename = "icon", default)]
    pub icon_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "tutorCount", default)]
    pub tutor_count: Option<u32>,
}

impl Category {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Expert tutors available in this category")
    }

    pub fn tutor_count_label(&self) -> String {
        match self.tutor_count {
            Some(count) if count > 0 => count.to_string(),
            _ => "50+".to_string(),
        }
    }
}

/// The person behind a tutor listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub email: String,
}

/// A tutor listing. `category` holds the language taught.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "review", default, deserialize_with = "lenient_u32")]
    pub review_count: u32,
    #[serde(default)]
    pub lecturer: Lecturer,
}

impl Tutor {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Professional tutor with extensive experience...")
    }

    /// Price without a trailing `.0` for whole amounts.
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("{:.0}", self.price)
        } else {
            format!("{:.2}", self.price)
        }
    }
}

/// Body of `POST /book-tutors`.
///
/// `name` is the tutor's name and `email` is the booker's email; the gateway
/// keys both on those wire names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "tutorId")]
    pub tutor_id: String,
    pub image: String,
    pub language: String,
    pub price: f64,
    #[serde(rename = "name")]
    pub tutor_name: String,
    #[serde(rename = "tutorEmail")]
    pub tutor_email: String,
    #[serde(rename = "email")]
    pub booker_email: String,
    pub review: u32,
}

/// Insert acknowledgement. A missing `insertedId` means nothing was stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    #[serde(rename = "insertedId", default)]
    pub inserted_id: Option<String>,
}

/// The authenticated identity for the current page lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    /// Provider token used for profile updates. Never sent to the gateway.
    #[serde(skip)]
    pub id_token: String,
}

impl SessionUser {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Profile fields set right after account creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileUpdate {
    pub display_name: String,
    pub photo_url: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = lenient_f64(deserializer)?;
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("count out of range: {value}")));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutor_from_gateway_json() {
        let json = r#"{
            "_id": "64f1",
            "Image": "https://img/one.png",
            "category": "Spanish",
            "price": "25",
            "review": 12,
            "lecturer": { "userName": "Ana", "photo": "https://img/ana.png", "email": "ana@example.com" }
        }"#;
        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.id, "64f1");
        assert_eq!(tutor.price, 25.0);
        assert_eq!(tutor.review_count, 12);
        assert_eq!(tutor.lecturer.user_name, "Ana");
        assert!(tutor.description.is_none());
        assert_eq!(
            tutor.description_or_default(),
            "Professional tutor with extensive experience..."
        );
    }

    #[test]
    fn test_tutor_rejects_non_numeric_price() {
        let json = r#"{ "_id": "1", "category": "French", "price": "cheap" }"#;
        assert!(serde_json::from_str::<Tutor>(json).is_err());
    }

    #[test]
    fn test_review_count_from_string() {
        let json = r#"{ "_id": "1", "category": "French", "price": 10, "review": "7" }"#;
        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.review_count, 7);
    }

    #[test]
    fn test_price_label() {
        let mut tutor: Tutor =
            serde_json::from_str(r#"{ "_id": "1", "category": "French", "price": 30 }"#).unwrap();
        assert_eq!(tutor.price_label(), "30");
        tutor.price = 12.5;
        assert_eq!(tutor.price_label(), "12.50");
    }

    #[test]
    fn test_category_fallbacks() {
        let category: Category =
            serde_json::from_str(r#"{ "_id": "c1", "title": "English", "icon": "FaLanguage" }"#)
                .unwrap();
        assert_eq!(category.icon_name, "FaLanguage");
        assert_eq!(
            category.description_or_default(),
            "Expert tutors available in this category"
        );
        assert_eq!(category.tutor_count_label(), "50+");

        let counted = Category {
            tutor_count: Some(12),
            ..category
        };
        assert_eq!(counted.tutor_count_label(), "12");
    }

    #[test]
    fn test_booking_wire_names() {
        let booking = Booking {
            tutor_id: "t1".to_string(),
            image: "img".to_string(),
            language: "German".to_string(),
            price: 20.0,
            tutor_name: "Jonas".to_string(),
            tutor_email: "jonas@example.com".to_string(),
            booker_email: "me@example.com".to_string(),
            review: 3,
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["tutorId"], "t1");
        assert_eq!(value["name"], "Jonas");
        assert_eq!(value["tutorEmail"], "jonas@example.com");
        assert_eq!(value["email"], "me@example.com");
    }

    #[test]
    fn test_session_user_display_name_falls_back_to_email() {
        let user = SessionUser {
            uid: "u1".to_string(),
            email: "me@example.com".to_string(),
            display_name: Some(String::new()),
            photo_url: None,
            id_token: String::new(),
        };
        assert_eq!(user.display_name(), "me@example.com");
    }
}
