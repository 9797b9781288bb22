pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod shell;
pub mod test_utils;

pub use crate::core::course::{Course, Roster};
pub use crate::core::member::{Member, MemberId, Student, Teacher};
pub use crate::core::registry::{CourseRegistry, MemberRegistry};
pub use error::{EntityKind, Result, UmsError};
