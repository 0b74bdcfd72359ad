//! Typed bodies for the mutating routes, checked once at the boundary.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::AppError,
    models::{CoursePayload, ProgramPayload, Role, TermPayload, UserUpdate},
};

/// Request body decoded from JSON when the client says so, and from
/// urlencoded form data otherwise. An empty body decodes like an empty form.
///
/// Rejections become [`AppError::BadRequest`] so they render as the HTML
/// error page.
#[derive(Debug, Clone)]
pub struct Input<T>(pub T);

impl<T, S> FromRequest<S> for Input<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        serde_urlencoded::from_bytes(&body)
            .map(Self)
            .map_err(|e| AppError::BadRequest(format!("Failed to deserialize form body: {}", e)))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| {
            let essence = essence.trim();
            essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseForm {
    pub prefix: String,
    pub suffix: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub credits: f64,
}

impl CourseForm {
    pub fn into_payload(self) -> CoursePayload {
        CoursePayload {
            prefix: self.prefix.trim().to_string(),
            suffix: self.suffix.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            credits: self.credits,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermForm {
    pub title: String,
    pub startyear: i32,
    pub semester: i32,
}

impl TermForm {
    pub fn into_payload(self) -> TermPayload {
        TermPayload {
            title: self.title.trim().to_string(),
            startyear: self.startyear,
            semester: self.semester,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ProgramForm {
    pub fn into_payload(self) -> ProgramPayload {
        ProgramPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// `enabled` as sent by a JSON client (a boolean) or an HTML checkbox (its
/// value text).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Checkbox {
    Flag(bool),
    Value(String),
}

impl Checkbox {
    pub fn is_checked(&self) -> bool {
        match self {
            Checkbox::Flag(flag) => *flag,
            Checkbox::Value(value) => matches!(value.trim(), "on" | "true" | "1"),
        }
    }
}

/// An unchecked checkbox is simply absent from the submitted form.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEditForm {
    #[serde(default)]
    pub enabled: Option<Checkbox>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserEditForm {
    pub fn is_enabled(&self) -> bool {
        self.enabled.as_ref().is_some_and(Checkbox::is_checked)
    }

    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            enable: self.is_enabled(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_form(enabled: Option<&str>) -> UserEditForm {
        UserEditForm {
            enabled: enabled.map(|v| Checkbox::Value(v.to_string())),
            role: Some(Role::Director),
        }
    }

    #[test]
    fn enabled_checkbox_coercion() {
        assert!(user_form(Some("on")).is_enabled());
        assert!(user_form(Some("true")).is_enabled());
        assert!(user_form(Some("1")).is_enabled());
        assert!(!user_form(Some("false")).is_enabled());
        assert!(!user_form(None).is_enabled());

        let update = user_form(None).into_update();
        assert!(!update.enable);
        assert_eq!(update.role, Some(Role::Director));
    }

    #[test]
    fn user_edit_accepts_json_flags_and_form_text() {
        let form: UserEditForm =
            serde_json::from_value(serde_json::json!({ "enabled": true, "role": "director" }))
                .unwrap();
        assert_eq!(form.enabled, Some(Checkbox::Flag(true)));
        assert!(form.is_enabled());

        let form: UserEditForm =
            serde_json::from_value(serde_json::json!({ "enabled": false })).unwrap();
        assert!(!form.is_enabled());
        assert!(form.role.is_none());

        let form: UserEditForm = serde_urlencoded::from_str("enabled=on&role=admin").unwrap();
        assert_eq!(form.enabled, Some(Checkbox::Value("on".to_string())));
        assert_eq!(form.role, Some(Role::Admin));

        let form: UserEditForm = serde_urlencoded::from_str("").unwrap();
        assert!(!form.is_enabled());
        assert!(form.role.is_none());
    }

    #[test]
    fn json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));

        headers.insert(header::CONTENT_TYPE, "application/json; charset=utf-8".parse().unwrap());
        assert!(is_json(&headers));

        headers.insert(header::CONTENT_TYPE, "application/x-www-form-urlencoded".parse().unwrap());
        assert!(!is_json(&headers));
    }

    #[test]
    fn course_form_trims_text_fields() {
        let payload = CourseForm {
            prefix: " CS ".to_string(),
            suffix: "141".to_string(),
            title: "Intro ".to_string(),
            description: String::new(),
            credits: 3.0,
        }
        .into_payload();
        assert_eq!(payload.prefix, "CS");
        assert_eq!(payload.title, "Intro");
    }
}
