use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable signup request.
/// Straight out of the request body, fields may still be empty.
#[derive(Deserialize, Debug)]
pub struct DeserSignup {
    pub email: String,
    pub name: String,
}

/// A signup with both fields checked to be non-empty.
#[derive(Debug)]
pub struct ValidSignup {
    pub email: SignupEmail,
    pub name: SignupName,
}

#[derive(Debug)]
pub struct SignupEmail(String);

#[derive(Debug)]
pub struct SignupName(String);

// ###################################
// ->   IMPLS
// ###################################
impl ValidSignup {
    pub fn parse<S>(email: S, name: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        Ok(ValidSignup {
            email: SignupEmail::parse(email)?,
            name: SignupName::parse(name)?,
        })
    }
}

impl TryFrom<DeserSignup> for ValidSignup {
    type Error = DataParsingError;

    fn try_from(deser: DeserSignup) -> Result<Self, Self::Error> {
        ValidSignup::parse(deser.email, deser.name)
    }
}

impl SignupEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(DataParsingError::EmailEmpty);
        }

        Ok(SignupEmail(value.to_owned()))
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SignupName {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(DataParsingError::NameEmpty);
        }

        Ok(SignupName(value.to_owned()))
    }
}

impl AsRef<str> for SignupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email must not be empty")]
    EmailEmpty,
    #[error("name must not be empty")]
    NameEmpty,
    #[error("request body is not a valid signup: {0}")]
    BodyNotJson(String),
}

impl From<JsonRejection> for DataParsingError {
    fn from(rejection: JsonRejection) -> Self {
        DataParsingError::BodyNotJson(rejection.body_text())
    }
}
