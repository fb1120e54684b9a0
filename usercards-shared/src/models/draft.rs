//! Form-local draft of a new user and the typed paths that address its fields.

use std::{fmt, mem, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use thiserror::Error;

use super::{Address, Company, User};

/// Error returned when a dotted input key does not name a draft field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    /// The key matched no top-level field or sub-record field.
    #[error("unknown draft field: {key}")]
    UnknownField {
        /// The rejected key.
        key: String,
    },
}

/// Every updatable field of a [`NewUserDraft`], including the nested
/// `address.*` and `company.*` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DraftField {
    /// `name`.
    Name,
    /// `username`.
    Username,
    /// `email`.
    Email,
    /// `phone`.
    Phone,
    /// `website`.
    Website,
    /// `address.street`.
    Street,
    /// `address.suite`.
    Suite,
    /// `address.city`.
    City,
    /// `address.zipcode`.
    Zipcode,
    /// `company.name`.
    CompanyName,
    /// `company.catchPhrase`.
    CatchPhrase,
    /// `company.bs`.
    Bs,
}

impl DraftField {
    /// Dotted input key, used as the form input's `name` attribute.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Street => "address.street",
            Self::Suite => "address.suite",
            Self::City => "address.city",
            Self::Zipcode => "address.zipcode",
            Self::CompanyName => "company.name",
            Self::CatchPhrase => "company.catchPhrase",
            Self::Bs => "company.bs",
        }
    }

    /// Placeholder text shown in the empty input.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Street => "Street",
            Self::Suite => "Suite",
            Self::City => "City",
            Self::Zipcode => "Zipcode",
            Self::CompanyName => "Company Name",
            Self::CatchPhrase => "Catchphrase",
            Self::Bs => "Business Specialty (bs)",
        }
    }

    /// HTML input type for the field.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    /// Whether the browser must block submission while the field is empty.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::CatchPhrase | Self::Bs)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DraftField {
    type Err = FieldPathError;

    /// Resolves a dotted key. The part before the first `.` selects the
    /// sub-record and the remainder names the field inside it.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let field = match key.split_once('.') {
            Some(("address", rest)) => match rest {
                "street" => Some(Self::Street),
                "suite" => Some(Self::Suite),
                "city" => Some(Self::City),
                "zipcode" => Some(Self::Zipcode),
                _ => None,
            },
            Some(("company", rest)) => match rest {
                "name" => Some(Self::CompanyName),
                "catchPhrase" => Some(Self::CatchPhrase),
                "bs" => Some(Self::Bs),
                _ => None,
            },
            Some(_) => None,
            None => match key {
                "name" => Some(Self::Name),
                "username" => Some(Self::Username),
                "email" => Some(Self::Email),
                "phone" => Some(Self::Phone),
                "website" => Some(Self::Website),
                _ => None,
            },
        };

        field.ok_or_else(|| FieldPathError::UnknownField {
            key: key.to_string(),
        })
    }
}

/// A user being composed in the add-user form. Mirrors [`User`] without `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUserDraft {
    /// Display name.
    pub name: String,
    /// Handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Website host.
    pub website: String,
    /// Postal address.
    pub address: Address,
    /// Employer.
    pub company: Company,
}

impl NewUserDraft {
    /// Current value of a single field.
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Username => &self.username,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Website => &self.website,
            DraftField::Street => &self.address.street,
            DraftField::Suite => &self.address.suite,
            DraftField::City => &self.address.city,
            DraftField::Zipcode => &self.address.zipcode,
            DraftField::CompanyName => &self.company.name,
            DraftField::CatchPhrase => &self.company.catch_phrase,
            DraftField::Bs => &self.company.bs,
        }
    }

    /// Replaces exactly one field, leaving every other field untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Builder form of [`NewUserDraft::set`].
    #[must_use]
    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Takes the current contents, leaving an all-empty draft behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Consumes the draft into a [`User`] carrying `id`.
    #[must_use]
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            address: self.address,
            company: self.company,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Username => &mut self.username,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Website => &mut self.website,
            DraftField::Street => &mut self.address.street,
            DraftField::Suite => &mut self.address.suite,
            DraftField::City => &mut self.address.city,
            DraftField::Zipcode => &mut self.address.zipcode,
            DraftField::CompanyName => &mut self.company.name,
            DraftField::CatchPhrase => &mut self.company.catch_phrase,
            DraftField::Bs => &mut self.company.bs,
        }
    }
}
