//! The numbered main menu

use crate::error::{Result, UmsError};

pub const INVALID_CHOICE: &str = "Invalid choice. Please select a number between 1 and 7.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddTeacher,
    AddCourse,
    EnrollStudent,
    DisplayMember,
    DisplayEnrolled,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        Self::AddStudent,
        Self::AddTeacher,
        Self::AddCourse,
        Self::EnrollStudent,
        Self::DisplayMember,
        Self::DisplayEnrolled,
        Self::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::AddStudent => 1,
            Self::AddTeacher => 2,
            Self::AddCourse => 3,
            Self::EnrollStudent => 4,
            Self::DisplayMember => 5,
            Self::DisplayEnrolled => 6,
            Self::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddStudent => "Add Student",
            Self::AddTeacher => "Add Teacher",
            Self::AddCourse => "Add Course",
            Self::EnrollStudent => "Enroll Student in Course",
            Self::DisplayMember => "Display Member Details",
            Self::DisplayEnrolled => "Display Enrolled Students in Course",
            Self::Exit => "Exit",
        }
    }

    /// Accepts exactly one of the characters `1` through `7`. No trimming is
    /// applied beyond the caller removing the line ending.
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.chars();
        let choice = match (chars.next(), chars.next()) {
            (Some(c @ '1'..='7'), None) => c,
            _ => return Err(UmsError::invalid_input("choice", input, INVALID_CHOICE)),
        };

        Self::ALL
            .into_iter()
            .find(|item| char::from(b'0' + item.number()) == choice)
            .ok_or_else(|| UmsError::invalid_input("choice", input, "Unknown menu option."))
    }
}
