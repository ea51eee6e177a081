//! User entity and related types

use serde::{Deserialize, Serialize};

use super::validation::UserValidationError;

/// User identifier - positive integer assigned by the server or synthesized locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier following this one; `None` past `u64::MAX`
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(UserValidationError::EmptyId);
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId(s.to_string()))
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address; the remote service sends more fields than these, which are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Normalized record produced by a successful form submission
///
/// `id` is `Some` when the form edited an existing record and `None` when it
/// created a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSubmission {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub company: Option<Company>,
    pub website: Option<String>,
}

/// User record as held in the in-memory collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    /// Set for records created client-side; never sent by the server
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    local: bool,
}

impl User {
    /// Create a server-origin user with the required fields
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: None,
            email: email.into(),
            phone: phone.into(),
            address,
            company: None,
            website: None,
            local: false,
        }
    }

    /// Build a record from a form submission under the given identifier
    pub fn from_submission(id: UserId, submission: UserSubmission, local: bool) -> Self {
        Self {
            id,
            name: submission.name,
            username: None,
            email: submission.email,
            phone: submission.phone,
            address: submission.address,
            company: submission.company,
            website: submission.website,
            local,
        }
    }

    #[cfg(test)]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[cfg(test)]
    pub fn with_company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    #[cfg(test)]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn company(&self) -> Option<&Company> {
        self.company.as_ref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Whether this record was created client-side
    pub fn is_local(&self) -> bool {
        self.local
    }

    /// Case-insensitive containment of `needle` in the user's name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEANNE: &str = r#"{
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
    fn test_deserialize_server_record() {
        let user: User = serde_json::from_str(LEANNE).unwrap();

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Leanne Graham");
        assert_eq!(user.username(), Some("Bret"));
        assert_eq!(user.address().street, "Kulas Light");
        assert_eq!(user.address().city, "Gwenborough");
        assert_eq!(user.company().map(|c| c.name.as_str()), Some("Romaguera-Crona"));
        assert_eq!(user.website(), Some("hildegard.org"));
        assert!(!user.is_local());
    }

    #[test]
    fn test_local_marker_serialization() {
        let server = User::new(UserId::new(1), "A", "a@x.io", "1", Address::default());
        let json = serde_json::to_value(&server).unwrap();
        assert!(json.get("local").is_none());

        let submission = UserSubmission {
            id: None,
            name: "B".to_string(),
            email: "b@x.io".to_string(),
            phone: "2".to_string(),
            address: Address::new("Main St", "Springfield"),
            company: None,
            website: None,
        };
        let local = User::from_submission(UserId::new(2), submission, true);
        let json = serde_json::to_value(&local).unwrap();
        assert_eq!(json["local"], serde_json::Value::Bool(true));
        assert_eq!(json["address"]["city"], "Springfield");
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let user = User::new(UserId::new(1), "Leanne Graham", "", "", Address::default());
        assert!(user.name_contains("lea"));
        assert!(user.name_contains("GRAHAM"));
        assert!(user.name_contains(""));
        assert!(!user.name_contains("zzz"));
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!("42".parse::<UserId>(), Ok(UserId::new(42)));
        assert_eq!(" 7 ".parse::<UserId>(), Ok(UserId::new(7)));
        assert_eq!("".parse::<UserId>(), Err(UserValidationError::EmptyId));
        assert_eq!(
            "abc".parse::<UserId>(),
            Err(UserValidationError::InvalidId("abc".to_string()))
        );
        assert!("-1".parse::<UserId>().is_err());
    }
}
