use serde::Serialize;
use serde_json::Value;

use crate::models::{
    Course, CoursePayload, NewUser, Program, ProgramPayload, Term, TermPayload, User, UserUpdate,
};
use crate::serializers;

/// Order of the pagination parameters in a list query.
///
/// The users endpoint has always been called with `offset` first; the
/// others with `limit` first. Both orders are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOrder {
    LimitFirst,
    OffsetFirst,
}

impl QueryOrder {
    pub fn query(self, offset: u64, limit: u64) -> String {
        match self {
            QueryOrder::LimitFirst => format!("limit={}&offset={}", limit, offset),
            QueryOrder::OffsetFirst => format!("offset={}&limit={}", offset, limit),
        }
    }
}

/// One entity type exposed by the advising API.
pub trait Resource: Sized + Send + 'static {
    /// Singular name used in log lines.
    const NAME: &'static str;
    /// Path segment under the API base URL.
    const PATH: &'static str;
    const QUERY_ORDER: QueryOrder;

    type Payload: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    fn from_record(data: &Value) -> Self;

    fn record_id(&self) -> Option<&str>;

    fn label(&self) -> Option<&str>;
}

impl Resource for Course {
    const NAME: &'static str = "Course";
    const PATH: &'static str = "course";
    const QUERY_ORDER: QueryOrder = QueryOrder::LimitFirst;

    type Payload = CoursePayload;
    type Update = CoursePayload;

    fn from_record(data: &Value) -> Self {
        serializers::deserialize_course(data)
    }

    fn record_id(&self) -> Option<&str> {
        self.id()
    }

    fn label(&self) -> Option<&str> {
        self.title()
    }
}

impl Resource for Program {
    const NAME: &'static str = "Program";
    const PATH: &'static str = "program";
    const QUERY_ORDER: QueryOrder = QueryOrder::LimitFirst;

    type Payload = ProgramPayload;
    type Update = ProgramPayload;

    fn from_record(data: &Value) -> Self {
        serializers::deserialize_program(data)
    }

    fn record_id(&self) -> Option<&str> {
        self.id()
    }

    fn label(&self) -> Option<&str> {
        self.title()
    }
}

impl Resource for Term {
    const NAME: &'static str = "Term";
    const PATH: &'static str = "term";
    const QUERY_ORDER: QueryOrder = QueryOrder::LimitFirst;

    type Payload = TermPayload;
    type Update = TermPayload;

    fn from_record(data: &Value) -> Self {
        serializers::deserialize_term(data)
    }

    fn record_id(&self) -> Option<&str> {
        self.id()
    }

    fn label(&self) -> Option<&str> {
        self.title()
    }
}

impl Resource for User {
    const NAME: &'static str = "User";
    const PATH: &'static str = "users";
    const QUERY_ORDER: QueryOrder = QueryOrder::OffsetFirst;

    type Payload = NewUser;
    type Update = UserUpdate;

    fn from_record(data: &Value) -> Self {
        serializers::deserialize_user(data)
    }

    // Users are addressed by the external identity key, not the row id.
    fn record_id(&self) -> Option<&str> {
        self.user_id()
    }

    fn label(&self) -> Option<&str> {
        self.email()
    }
}
