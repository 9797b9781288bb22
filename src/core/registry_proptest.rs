//! Property-based tests for the registries
//!
//! These verify first-match lookup and append-only enrollment for arbitrary
//! sequences of additions.

#[cfg(test)]
mod tests {
    use crate::core::course::{Course, Roster};
    use crate::core::member::{Member, Student, Teacher};
    use crate::core::registry::{CourseRegistry, MemberRegistry};
    use proptest::prelude::*;

    // Small id range so duplicates show up often
    prop_compose! {
        fn member()(
            is_student in prop::bool::ANY,
            name in "[A-Za-z]{1,12}",
            id in -5i32..20,
            extra in "[A-Za-z0-9 ]{0,12}",
        ) -> Member {
            if is_student {
                Student::new(name, id, extra).into()
            } else {
                Teacher::new(name, id, extra).into()
            }
        }
    }

    proptest! {
        #[test]
        fn test_find_member_returns_first_with_id(
            members in prop::collection::vec(member(), 0..30),
            probe in -5i32..20,
        ) {
            let mut registry = MemberRegistry::new();
            for m in &members {
                registry.add_member(m.clone());
            }

            let expected = members.iter().find(|m| m.id() == probe);
            prop_assert_eq!(registry.find_member_by_id(probe), expected);
            prop_assert_eq!(registry.len(), members.len());
        }

        #[test]
        fn test_find_student_never_returns_teacher(
            members in prop::collection::vec(member(), 0..30),
            probe in -5i32..20,
        ) {
            let mut registry = MemberRegistry::new();
            for m in &members {
                registry.add_member(m.clone());
            }

            let expected = members
                .iter()
                .filter_map(Member::as_student)
                .find(|s| s.id() == probe);
            prop_assert_eq!(registry.find_student_by_id(probe), expected);
        }

        #[test]
        fn test_enroll_adds_exactly_one_occurrence(
            prior in prop::collection::vec(0usize..4, 0..10),
            pick in 0usize..4,
        ) {
            let students: Vec<Student> = ["Ann", "Ben", "Cy", "Di"]
                .iter()
                .enumerate()
                .map(|(i, name)| Student::new(*name, i as i32, "Any"))
                .collect();

            let mut course = Course::new("Algebra");
            for i in &prior {
                course.enroll(students[*i].clone());
            }

            let count = |c: &Course| {
                c.enrolled_students()
                    .iter()
                    .filter(|s| **s == students[pick])
                    .count()
            };
            let before = count(&course);
            course.enroll(students[pick].clone());

            prop_assert_eq!(count(&course), before + 1);
            match course.list_enrolled() {
                Roster::Names(names) => {
                    prop_assert_eq!(names.len(), prior.len() + 1);
                    prop_assert_eq!(names.last().copied(), Some(students[pick].name()));
                }
                Roster::NoneEnrolled => prop_assert!(false, "course should not be empty"),
            }
        }

        #[test]
        fn test_course_lookup_ignores_ascii_case(name in "[A-Za-z][A-Za-z0-9 ]{0,20}") {
            let mut registry = CourseRegistry::new();
            registry.add_course(name.clone());

            let upper = registry.find_course_by_name(&name.to_uppercase()).map(Course::name);
            let lower = registry.find_course_by_name(&name.to_lowercase()).map(Course::name);
            prop_assert_eq!(upper, Some(name.as_str()));
            prop_assert_eq!(lower, Some(name.as_str()));
        }
    }
}
