//! University members: students and teachers
//!
//! Members are immutable once constructed. All fields are private and only
//! exposed through accessors.

use std::fmt;

/// Identifier shared by students and teachers. Not guaranteed unique.
pub type MemberId = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    id: MemberId,
    course: String,
}

impl Student {
    pub fn new(name: impl Into<String>, id: MemberId, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            course: course.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    /// The course declared when the student was created. Independent of any
    /// enrollment recorded on a [`Course`](super::course::Course).
    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn describe(&self) -> String {
        format!(
            "Student ID: {}\nStudent Name: {}\nCourse: {}",
            self.id, self.name, self.course
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
    id: MemberId,
    subject: String,
}

impl Teacher {
    pub fn new(name: impl Into<String>, id: MemberId, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            subject: subject.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn describe(&self) -> String {
        format!(
            "Teacher ID: {}\nTeacher Name: {}\nSubject: {}",
            self.id, self.name, self.subject
        )
    }
}

/// Any record held by the member registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Student(Student),
    Teacher(Teacher),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Student(s) => s.name(),
            Self::Teacher(t) => t.name(),
        }
    }

    pub fn id(&self) -> MemberId {
        match self {
            Self::Student(s) => s.id(),
            Self::Teacher(t) => t.id(),
        }
    }

    /// Multi-line detail block for display
    pub fn describe(&self) -> String {
        match self {
            Self::Student(s) => s.describe(),
            Self::Teacher(t) => t.describe(),
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Self::Student(s) => Some(s),
            Self::Teacher(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Student(_) => "student",
            Self::Teacher(_) => "teacher",
        }
    }
}

impl From<Student> for Member {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<Teacher> for Member {
    fn from(teacher: Teacher) -> Self {
        Self::Teacher(teacher)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
