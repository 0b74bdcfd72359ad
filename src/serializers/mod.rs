//! Field mapping from advising API records to local models.
//!
//! These never fail: a missing or mistyped field becomes `None` on the model.

use serde_json::Value;

use crate::models::{Course, Program, Role, Term, User};

pub fn deserialize_course(data: &Value) -> Course {
    Course {
        id: get_text(data, "id"),
        prefix: get_text(data, "prefix"),
        suffix: get_text(data, "suffix"),
        title: get_text(data, "title"),
        description: get_text(data, "description"),
        credits: get_number(data, "credits"),
    }
}

pub fn deserialize_program(data: &Value) -> Program {
    Program {
        id: get_text(data, "id"),
        title: get_text(data, "title"),
        description: get_text(data, "description"),
    }
}

pub fn deserialize_term(data: &Value) -> Term {
    Term {
        id: get_text(data, "id"),
        title: get_text(data, "title"),
        startyear: get_integer(data, "startyear"),
        semester: get_integer(data, "semester"),
    }
}

pub fn deserialize_user(data: &Value) -> User {
    User {
        id: get_text(data, "id"),
        email: get_text(data, "email"),
        user_id: get_text(data, "userId"),
        enable: get_flag(data, "enable"),
        role: get_text(data, "role").and_then(|r| Role::parse(&r)),
    }
}

fn get_text(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn get_number(data: &Value, key: &str) -> Option<f64> {
    match data.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn get_integer(data: &Value, key: &str) -> Option<i64> {
    match data.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn get_flag(data: &Value, key: &str) -> Option<bool> {
    match data.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
