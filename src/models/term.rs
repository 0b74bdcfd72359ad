use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) startyear: Option<i64>,
    pub(crate) semester: Option<i64>,
}

impl Term {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn startyear(&self) -> Option<i64> {
        self.startyear
    }

    /// Small integer code assigned by the advising API.
    pub fn semester(&self) -> Option<i64> {
        self.semester
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TermPayload {
    pub title: String,
    pub startyear: i32,
    pub semester: i32,
}
