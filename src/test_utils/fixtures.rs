//! Test fixtures and session builders

use std::io::{self, Cursor};

use crate::config::ShellConfig;
use crate::core::member::{Student, Teacher};
use crate::core::registry::{CourseRegistry, MemberRegistry};
use crate::prompt::LinePrompt;
use crate::shell::Shell;

pub type TestShell = Shell<LinePrompt<Cursor<String>, io::Sink>, Vec<u8>>;

pub fn alice() -> Student {
    Student::new("Alice", 1, "CS101")
}

pub fn bob() -> Teacher {
    Teacher::new("Bob", 2, "Physics")
}

/// A member registry with a student (id 1) and a teacher (id 2)
pub fn sample_members() -> MemberRegistry {
    let mut registry = MemberRegistry::new();
    registry.add_member(alice());
    registry.add_member(bob());
    registry
}

/// A course registry holding "CS101" and "Math", both empty
pub fn sample_courses() -> CourseRegistry {
    let mut registry = CourseRegistry::new();
    registry.add_course("CS101");
    registry.add_course("Math");
    registry
}

/// Joins menu answers into the newline-terminated text a user would type
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Builds a colorless shell that reads `input` and records its output
pub fn scripted_shell(input: &str) -> TestShell {
    colored::control::set_override(false);
    let prompt = LinePrompt::new(Cursor::new(input.to_string()), io::sink());
    Shell::new(prompt, Vec::new(), ShellConfig::new().with_color(false))
}

/// Runs a full session and returns the shell plus everything it printed
pub fn run_script(lines: &[&str]) -> (TestShell, String) {
    let mut shell = scripted_shell(&script(lines));
    if let Err(e) = shell.run() {
        panic!("session failed: {e}");
    }
    let output = String::from_utf8_lossy(shell.output()).into_owned();
    (shell, output)
}
