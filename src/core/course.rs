//! Courses and the students enrolled in them

use super::member::Student;

/// Result of listing a course's enrollments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster<'a> {
    NoneEnrolled,
    Names(Vec<&'a str>),
}

impl<'a> Roster<'a> {
    pub fn names(&self) -> &[&'a str] {
        match self {
            Self::NoneEnrolled => &[],
            Self::Names(names) => names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    enrolled_students: Vec<Student>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enrolled_students: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison, first-match identity for lookups.
    /// Characters are compared pairwise, so names of different lengths never
    /// match even when their full case foldings would.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.chars().count() == name.chars().count()
            && self
                .name
                .chars()
                .zip(name.chars())
                .all(|(a, b)| chars_match_ignore_case(a, b))
    }

    /// Appends the student. Re-enrolling produces a duplicate entry and the
    /// student's declared course is not consulted.
    pub fn enroll(&mut self, student: Student) {
        self.enrolled_students.push(student);
    }

    pub fn enrolled_students(&self) -> &[Student] {
        &self.enrolled_students
    }

    pub fn list_enrolled(&self) -> Roster<'_> {
        if self.enrolled_students.is_empty() {
            Roster::NoneEnrolled
        } else {
            Roster::Names(self.enrolled_students.iter().map(Student::name).collect())
        }
    }
}

/// Equal as-is, after uppercasing, or after lowercasing the uppercase form.
/// The lowercase step catches pairs like `İ` and `i` whose uppercase forms
/// differ.
fn chars_match_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// One-to-one uppercase mapping; characters whose uppercase expands to
/// several characters (`ß` → `SS`) map to themselves
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    // U+0130 lowercases to `i` + combining dot; its one-to-one mapping is `i`
    if c == '\u{130}' {
        return 'i';
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_has_no_enrollments() {
        let course = Course::new("CS101");
        assert_eq!(course.list_enrolled(), Roster::NoneEnrolled);
        assert!(course.list_enrolled().names().is_empty());
    }

    #[test]
    fn test_enroll_keeps_order_and_duplicates() {
        let mut course = Course::new("CS101");
        let alice = Student::new("Alice", 1, "CS101");
        course.enroll(alice.clone());
        course.enroll(Student::new("Carol", 3, "History"));
        course.enroll(alice);

        assert_eq!(
            course.list_enrolled(),
            Roster::Names(vec!["Alice", "Carol", "Alice"])
        );
        assert_eq!(course.enrolled_students().len(), 3);
    }

    #[test]
    fn test_matches_name_ignores_case() {
        let course = Course::new("Math");
        assert!(course.matches_name("math"));
        assert!(course.matches_name("MATH"));
        assert!(!course.matches_name("Math "));
        assert!(!course.matches_name("Mat"));
        assert!(Course::new("Éclair").matches_name("éCLAIR"));
    }

    #[test]
    fn test_matches_name_final_sigma_and_dotted_capital_i() {
        assert!(Course::new("ΟΔΟΣ").matches_name("οδος"));
        assert!(Course::new("οδος").matches_name("ΟΔΟΣ"));
        assert!(Course::new("İ").matches_name("i"));
        assert!(Course::new("Σ").matches_name("ς"));
    }

    #[test]
    fn test_matches_name_requires_same_length() {
        assert!(!Course::new("straße").matches_name("STRASSE"));
        assert!(Course::new("straße").matches_name("STRAßE"));
        assert!(!Course::new("").matches_name("a"));
        assert!(Course::new("").matches_name(""));
    }
}
