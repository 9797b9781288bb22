//! Interactive menu loop driving the member and course registries.
//!
//! The shell owns both registries for the lifetime of the process. Every
//! menu action reads its fields through a [`Prompt`], calls into the core and
//! writes the outcome to the output sink. Lookup misses and malformed input
//! are reported and the loop continues; only I/O failures end it early.

use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

use crate::config::ShellConfig;
use crate::core::course::Roster;
use crate::core::member::{Member, Student, Teacher};
use crate::core::registry::{CourseRegistry, MemberRegistry};
use crate::core::validation::parse_member_id;
use crate::error::{EntityKind, Result, UmsError};
use crate::logging;
use crate::menu::{MenuChoice, INVALID_CHOICE};
use crate::prompt::Prompt;

enum Flow {
    Continue,
    Exit,
}

/// Reads the next line or leaves the current action when input is exhausted
macro_rules! ask {
    ($shell:expr, $prompt:expr) => {
        match $shell.prompt.read_line($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Shell<P, W> {
    prompt: P,
    out: W,
    config: ShellConfig,
    members: MemberRegistry,
    courses: CourseRegistry,
}

impl<P: Prompt, W: Write> Shell<P, W> {
    pub fn new(prompt: P, out: W, config: ShellConfig) -> Self {
        Self {
            prompt,
            out,
            config,
            members: MemberRegistry::new(),
            courses: CourseRegistry::new(),
        }
    }

    pub fn members(&self) -> &MemberRegistry {
        &self.members
    }

    pub fn courses(&self) -> &CourseRegistry {
        &self.courses
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until the exit option is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let line = match self.prompt.read_line("Choose an option (1-7)")? {
                Some(line) => line,
                None => {
                    tracing::debug!("Input closed, leaving menu loop");
                    return Ok(());
                }
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    logging::log_invalid_input("choice", &line);
                    self.say(INVALID_CHOICE.yellow())?;
                    self.say("")?;
                    continue;
                }
            };

            tracing::debug!(choice = choice.label(), "Menu selection");

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::AddTeacher => self.add_teacher(),
            MenuChoice::AddCourse => self.add_course(),
            MenuChoice::EnrollStudent => self.enroll_student(),
            MenuChoice::DisplayMember => self.display_member(),
            MenuChoice::DisplayEnrolled => self.display_enrolled(),
            MenuChoice::Exit => {
                self.say("Exiting the system. Goodbye!".blue().bold())?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let header = format!("==== {} ====", self.config.title);
        self.say(header.blue().bold())?;
        for item in MenuChoice::ALL {
            self.say(format!("{}. {}", item.number(), item.label()))?;
        }
        Ok(())
    }

    fn add_student(&mut self) -> Result<Flow> {
        let name = ask!(self, "Enter Student Name");
        let id_line = ask!(self, "Enter Student ID");
        let id = parse_member_id("Student ID", &id_line)?;
        let course = ask!(self, "Enter Course");

        self.members.add_member(Student::new(name.clone(), id, course));
        logging::log_member_added("student", id, &name, self.members.len());

        self.say("Student added successfully!".green())?;
        self.say("")?;
        Ok(Flow::Continue)
    }

    fn add_teacher(&mut self) -> Result<Flow> {
        let name = ask!(self, "Enter Teacher Name");
        let id_line = ask!(self, "Enter Teacher ID");
        let id = parse_member_id("Teacher ID", &id_line)?;
        let subject = ask!(self, "Enter Subject");

        self.members.add_member(Teacher::new(name.clone(), id, subject));
        logging::log_member_added("teacher", id, &name, self.members.len());

        self.say("Teacher added successfully!".green())?;
        self.say("")?;
        Ok(Flow::Continue)
    }

    fn add_course(&mut self) -> Result<Flow> {
        let name = ask!(self, "Enter Course Name");
        let message = format!("Course {name} added successfully!");

        self.courses.add_course(name.clone());
        logging::log_course_added(&name, self.courses.len());

        self.say(message.green())?;
        self.say("")?;
        Ok(Flow::Continue)
    }

    fn enroll_student(&mut self) -> Result<Flow> {
        let id_line = ask!(self, "Enter Student ID to enroll");
        let id = parse_member_id("Student ID", &id_line)?;

        let student = match self.members.find_student_by_id(id) {
            Some(student) => student.clone(),
            None => {
                logging::log_lookup_miss("student", &id.to_string());
                return Err(UmsError::not_found(EntityKind::Student, id.to_string()));
            }
        };

        let course_name = ask!(self, "Enter Course Name to enroll in");
        let Some(course) = self.courses.find_course_by_name_mut(&course_name) else {
            logging::log_lookup_miss("course", &course_name);
            return Err(UmsError::not_found(EntityKind::Course, course_name));
        };

        let message = format!("Student {} enrolled in {}", student.name(), course.name());
        course.enroll(student);
        logging::log_enrollment(id, course.name(), course.enrolled_students().len());

        self.say(message.green())?;
        Ok(Flow::Continue)
    }

    fn display_member(&mut self) -> Result<Flow> {
        let id_line = ask!(self, "Enter ID of the member to display");
        let id = parse_member_id("member ID", &id_line)?;

        let details = match self.members.find_member_by_id(id) {
            Some(member) => {
                tracing::debug!(id = id, kind = member.kind(), "Displaying member");
                Member::describe(member)
            }
            None => {
                logging::log_lookup_miss("member", &id.to_string());
                return Err(UmsError::not_found(EntityKind::Member, id.to_string()));
            }
        };

        self.say(details)?;
        Ok(Flow::Continue)
    }

    fn display_enrolled(&mut self) -> Result<Flow> {
        let course_name = ask!(self, "Enter Course Name to display enrolled students");

        let Some(course) = self.courses.find_course_by_name(&course_name) else {
            logging::log_lookup_miss("course", &course_name);
            return Err(UmsError::not_found(EntityKind::Course, course_name));
        };

        let mut lines = vec![format!("Enrolled Students in {}:", course.name())
            .bold()
            .to_string()];
        match course.list_enrolled() {
            Roster::NoneEnrolled => {
                lines.push("No students enrolled in this course.".dimmed().to_string())
            }
            Roster::Names(names) => lines.extend(names.into_iter().map(str::to_string)),
        }

        for line in lines {
            self.say(line)?;
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &UmsError) -> Result<()> {
        self.say(error)?;
        self.say("")
    }

    fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| UmsError::io_error("writing output", e))
    }
}
