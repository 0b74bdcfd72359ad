use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
}

impl Program {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramPayload {
    pub title: String,
    pub description: String,
}
