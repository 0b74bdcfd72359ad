use serde::Serialize;

/// Snapshot of one course as returned by the advising API.
///
/// Built only by [`crate::serializers::deserialize_course`]; fields the
/// upstream record lacked stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub(crate) id: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) suffix: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) credits: Option<f64>,
}

impl Course {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn credits(&self) -> Option<f64> {
        self.credits
    }
}

/// Body for `POST course` and `PUT course/{id}`. Never carries an id.
#[derive(Debug, Clone, Serialize)]
pub struct CoursePayload {
    pub prefix: String,
    pub suffix: String,
    pub title: String,
    pub description: String,
    pub credits: f64,
}
