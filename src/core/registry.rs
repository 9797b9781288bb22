//! In-memory registries for members and courses
//!
//! Both registries are append-only vectors scanned linearly. Neither enforces
//! unique keys: duplicate member ids and course names are stored, and every
//! lookup returns the first match in insertion order.

use super::course::Course;
use super::member::{Member, MemberId, Student};

#[derive(Debug, Default)]
pub struct MemberRegistry {
    members: Vec<Member>,
}

impl MemberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_member(&mut self, member: impl Into<Member>) {
        self.members.push(member.into());
    }

    pub fn find_member_by_id(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == id)
    }

    /// Like [`find_member_by_id`](Self::find_member_by_id) but skips teachers
    pub fn find_student_by_id(&self, id: MemberId) -> Option<&Student> {
        self.members
            .iter()
            .filter_map(Member::as_student)
            .find(|student| student.id() == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CourseRegistry {
    courses: Vec<Course>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_course(&mut self, name: impl Into<String>) {
        self.courses.push(Course::new(name));
    }

    pub fn find_course_by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.matches_name(name))
    }

    pub fn find_course_by_name_mut(&mut self, name: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.matches_name(name))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
