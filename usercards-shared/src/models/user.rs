//! The user record as served by the listing endpoint.

use serde::{Deserialize, Serialize};

/// Postal address attached to a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    /// Street name and number.
    pub street: String,
    /// Suite or apartment.
    pub suite: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
}

impl Address {
    /// Formats the address on a single line as `street, suite, city, zipcode`.
    #[must_use]
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

/// Employer details attached to a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    /// Company name; also a filter and sort target.
    pub name: String,
    /// Marketing catch phrase.
    pub catch_phrase: String,
    /// Business specialty tag.
    pub bs: String,
}

/// A user profile as served by the listing endpoint.
///
/// Fields missing from a payload deserialize as empty strings, so every
/// stored user carries the full shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// Identifier, unique within the in-memory collection.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Handle shown as `@username`.
    pub username: String,

    /// Contact email address.
    pub email: String,

    /// Contact phone number, free text.
    pub phone: String,

    /// Website host without scheme, e.g. `hildegard.org`.
    pub website: String,

    /// Postal address.
    pub address: Address,

    /// Employer.
    pub company: Company,
}

impl User {
    /// The username prefixed with `@`.
    #[must_use]
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// External link target for the website field.
    #[must_use]
    pub fn website_href(&self) -> String {
        format!("http://{}", self.website)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEANNE_JSON: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn test_user_deserializes_listing_payload() {
        let user: User = serde_json::from_str(LEANNE_JSON).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.city, "Gwenborough");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
        assert_eq!(user.company.bs, "harness real-time e-markets");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let user: User =
            serde_json::from_str(r#"{"id": 4, "name": "Patricia", "company": {"name": "Acme"}}"#)
                .unwrap();

        assert_eq!(user.id, 4);
        assert_eq!(user.email, "");
        assert_eq!(user.address, Address::default());
        assert_eq!(user.company.name, "Acme");
        assert_eq!(user.company.catch_phrase, "");
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let company = Company {
            name: "Acme".to_string(),
            catch_phrase: "Make it so".to_string(),
            bs: "synergy".to_string(),
        };

        let json = serde_json::to_string(&company).unwrap();
        assert!(json.contains("\"catchPhrase\":\"Make it so\""));
        assert!(!json.contains("catch_phrase"));
    }

    #[test]
    fn test_address_single_line() {
        let address = Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        };

        assert_eq!(
            address.single_line(),
            "Kulas Light, Apt. 556, Gwenborough, 92998-3874"
        );
    }

    #[test]
    fn test_handle_and_website_href() {
        let user: User = serde_json::from_str(LEANNE_JSON).unwrap();

        assert_eq!(user.handle(), "@Bret");
        assert_eq!(user.website_href(), "http://hildegard.org");
    }
}
