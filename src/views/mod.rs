//! Server-rendered HTML pages.

use axum::http::StatusCode;

use crate::models::{Course, Program, Role, Term, User};

/// Navigation group a page belongs to; decides which navbar link is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Advise,
    Manage,
    Admin,
    AccessDenied,
}

impl Group {
    fn href(self) -> Option<&'static str> {
        match self {
            Group::Advise => Some("/advise"),
            Group::Manage => Some("/manage"),
            Group::Admin => Some("/admin"),
            Group::AccessDenied => None,
        }
    }
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn text(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    match value {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

fn integer(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

pub fn layout(title: &str, group: Group, viewer: &User, body: &str) -> String {
    let mut links = vec![("/advise", "Advise")];
    if viewer.can_manage() {
        links.push(("/manage", "Manage"));
    }
    if viewer.can_administer() {
        links.push(("/admin", "Admin"));
    }

    let mut nav = String::new();
    for (href, label) in links {
        let class = if group.href() == Some(href) {
            "nav-link active"
        } else {
            "nav-link"
        };
        nav.push_str(&format!("<a class=\"{}\" href=\"{}\">{}</a>", class, href, label));
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>\
<nav class=\"navbar\"><a class=\"navbar-brand\" href=\"/advise\">Advisor</a>\
<div class=\"navbar-nav\">{nav}<span class=\"navbar-text\">{email}</span></div></nav>\
<main class=\"container\">{body}</main>\
</body></html>",
        title = escape(title),
        nav = nav,
        email = text(viewer.email()),
        body = body,
    )
}

pub fn advise_page(viewer: &User) -> String {
    let body = format!(
        "<div class=\"card\"><div class=\"card-body\"><h1>Advisement</h1>\
<p>Signed in as {} ({}).</p></div></div>",
        text(viewer.email()),
        viewer.role().map(|r| r.as_str()).unwrap_or("unknown role"),
    );
    layout("Advisor", Group::Advise, viewer, &body)
}

pub fn access_denied_page(viewer: &User) -> String {
    let body = "<div class=\"card\"><div class=\"card-body\"><h1>Access Denied</h1>\
<p>Your account has not been enabled. Contact an administrator.</p></div></div>";
    layout("Access Denied", Group::AccessDenied, viewer, body)
}

pub fn admin_page(viewer: &User, users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        let user_id = text(user.user_id());
        let mut roles = String::new();
        for role in [Role::User, Role::Director, Role::Admin] {
            let selected = if user.role() == Some(role) { " selected" } else { "" };
            roles.push_str(&format!("<option value=\"{0}\"{1}>{0}</option>", role, selected));
        }
        let checked = if user.is_enabled() { " checked" } else { "" };

        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{user_id}</td><td>{email}</td><td>{role}</td><td>{enabled}</td>\
<td><form method=\"post\" action=\"/admin/users/edit/{user_id}\">\
<input type=\"checkbox\" name=\"enabled\" value=\"true\"{checked}>\
<select name=\"role\">{roles}</select><button type=\"submit\">Save</button></form>\
<a href=\"/admin/users/delete/{user_id}\">Delete</a></td></tr>",
            id = text(user.id()),
            user_id = user_id,
            email = text(user.email()),
            role = user.role().map(|r| r.as_str()).unwrap_or(""),
            enabled = if user.is_enabled() { "yes" } else { "no" },
            checked = checked,
            roles = roles,
        ));
    }

    let body = format!(
        "<div class=\"card\"><div class=\"card-header\">Users</div><div class=\"card-body\">\
<table class=\"table\"><thead><tr><th>ID</th><th>User ID</th><th>Email</th><th>Role</th>\
<th>Enabled</th><th></th></tr></thead><tbody>{}</tbody></table></div></div>",
        rows
    );
    layout("Advisor Admin", Group::Admin, viewer, &body)
}

pub fn manage_page(viewer: &User, courses: &[Course], terms: &[Term], programs: &[Program]) -> String {
    let mut course_rows = String::new();
    for course in courses {
        let id = text(course.id());
        course_rows.push_str(&format!(
            "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><a href=\"/manage/course/delete/{id}\">Delete</a></td></tr>",
            text(course.title()),
            text(course.prefix()),
            text(course.suffix()),
            number(course.credits()),
        ));
    }

    let mut term_rows = String::new();
    for term in terms {
        let id = text(term.id());
        term_rows.push_str(&format!(
            "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><a href=\"/manage/term/delete/{id}\">Delete</a></td></tr>",
            text(term.title()),
            integer(term.startyear()),
            integer(term.semester()),
        ));
    }

    let mut program_rows = String::new();
    for program in programs {
        let id = text(program.id());
        program_rows.push_str(&format!(
            "<tr><td>{id}</td><td>{}</td><td>{}</td>\
<td><a href=\"/manage/program/delete/{id}\">Delete</a></td></tr>",
            text(program.title()),
            text(program.description()),
        ));
    }

    let body = format!(
        "<div class=\"card\" id=\"courses\"><div class=\"card-header\">Courses</div><div class=\"card-body\">\
<table class=\"table\"><thead><tr><th>ID</th><th>Title</th><th>Prefix</th><th>Suffix</th><th>Credits</th><th></th></tr></thead>\
<tbody>{course_rows}</tbody></table>\
<form method=\"post\" action=\"/manage/course/add\">\
<input name=\"prefix\" placeholder=\"Prefix\"><input name=\"suffix\" placeholder=\"Suffix\">\
<input name=\"title\" placeholder=\"Title\"><input name=\"description\" placeholder=\"Description\">\
<input name=\"credits\" type=\"number\" step=\"any\" placeholder=\"Credits\"><button type=\"submit\">Add course</button></form>\
</div></div>\
<div class=\"card\" id=\"terms\"><div class=\"card-header\">Terms</div><div class=\"card-body\">\
<table class=\"table\"><thead><tr><th>ID</th><th>Title</th><th>Start year</th><th>Semester</th><th></th></tr></thead>\
<tbody>{term_rows}</tbody></table>\
<form method=\"post\" action=\"/manage/term/add\">\
<input name=\"title\" placeholder=\"Title\"><input name=\"startyear\" type=\"number\" placeholder=\"Start year\">\
<input name=\"semester\" type=\"number\" placeholder=\"Semester\"><button type=\"submit\">Add term</button></form>\
</div></div>\
<div class=\"card\" id=\"programs\"><div class=\"card-header\">Programs</div><div class=\"card-body\">\
<table class=\"table\"><thead><tr><th>ID</th><th>Title</th><th>Description</th><th></th></tr></thead>\
<tbody>{program_rows}</tbody></table>\
<form method=\"post\" action=\"/manage/program/add\">\
<input name=\"title\" placeholder=\"Title\"><input name=\"description\" placeholder=\"Description\">\
<button type=\"submit\">Add program</button></form>\
</div></div>",
    );
    layout("Advisor Management", Group::Manage, viewer, &body)
}

/// Standalone page for failures; it has no viewer, so no navbar.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{code}</title></head><body>\
<h1>{code}</h1><p>{message}</p></body></html>",
        code = escape(&status.to_string()),
        message = escape(message),
    )
}
