pub mod course;
pub mod program;
pub mod term;
pub mod user;

pub use course::{Course, CoursePayload};
pub use program::{Program, ProgramPayload};
pub use term::{Term, TermPayload};
pub use user::{NewUser, Role, User, UserUpdate};
