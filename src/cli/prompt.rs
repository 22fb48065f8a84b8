//! Interactive field prompts.
//!
//! Each prompt repeats until the validation layer accepts the value typed,
//! printing the rejection reason after every failed attempt.
//!
//! On a terminal the prompts are drawn with `dialoguer`. When stdin is not a
//! terminal, input is read one line at a time instead, so the menu can be
//! driven from a pipe or a script.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Confirm, Input};
use employees::{
    Department, EmployeeDetails, Seniority, ValidationError,
    domain::{
        NationalId,
        validation::{
            parse_salary, validate_age, validate_department, validate_name,
            validate_national_id, validate_seniority,
        },
    },
};

use super::terminal::Colorize;

/// Input ended before a value was read.
#[derive(Debug, thiserror::Error)]
#[error("input closed")]
pub struct InputClosed;

enum Source {
    Terminal,
    Lines(Box<dyn BufRead>),
}

/// Reads values typed by the user.
pub struct Prompter {
    source: Source,
}

impl Prompter {
    /// Prompts on the terminal, or reads lines from stdin if it is not one.
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let source = if stdin.is_terminal() {
            Source::Terminal
        } else {
            tracing::debug!("stdin is not a terminal, reading input line by line");
            Source::Lines(Box::new(stdin.lock()))
        };
        Self { source }
    }

    /// Reads input line by line from `reader`.
    #[cfg(test)]
    pub fn from_lines(reader: impl BufRead + 'static) -> Self {
        Self {
            source: Source::Lines(Box::new(reader)),
        }
    }

    /// Reads one line of text.
    ///
    /// Fails with [`InputClosed`] once line input is exhausted.
    pub fn text(&mut self, prompt: &str) -> anyhow::Result<String> {
        match &mut self.source {
            Source::Terminal => Ok(Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?),
            Source::Lines(reader) => {
                eprint!("{prompt}: ");
                read_line(&mut **reader)?.ok_or_else(|| InputClosed.into())
            }
        }
    }

    /// Prompts until `parse` accepts the input.
    pub fn until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> anyhow::Result<T> {
        loop {
            let raw = self.text(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    tracing::debug!(%error, malformed = error.is_malformed(), "input rejected");
                    eprintln!("{}", error.to_string().warning());
                }
            }
        }
    }

    pub fn national_id(&mut self) -> anyhow::Result<NationalId> {
        self.until_valid("National id (CNP)", validate_national_id)
    }

    pub fn department(&mut self) -> anyhow::Result<Department> {
        self.until_valid("Department (HR, IT, Marketing, Finance)", validate_department)
    }

    pub fn seniority(&mut self) -> anyhow::Result<Seniority> {
        self.until_valid("Seniority (junior, mid, senior)", validate_seniority)
    }

    /// Prompts for every field except the national id.
    pub fn details(&mut self) -> anyhow::Result<EmployeeDetails> {
        Ok(EmployeeDetails {
            last_name: self.until_valid("Last name", validate_name)?,
            first_name: self.until_valid("First name", validate_name)?,
            age: self.until_valid("Age", validate_age)?,
            salary: self.until_valid("Salary", parse_salary)?,
            department: self.department()?,
            seniority: self.seniority()?,
        })
    }

    /// Asks a yes/no question. Closed line input counts as "no".
    pub fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        match &mut self.source {
            Source::Terminal => Ok(Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?),
            Source::Lines(reader) => {
                eprint!("{prompt} (y/N) ");
                let answer = read_line(&mut **reader)?.unwrap_or_default();
                let answer = answer.trim();
                Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
            }
        }
    }
}

/// Reads a line without its terminator, or `None` at end of input.
fn read_line(reader: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        eprintln!();
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use employees::domain::Age;
    use test_case::test_case;

    use super::*;

    fn lines(input: &str) -> Prompter {
        Prompter::from_lines(Cursor::new(input.to_string()))
    }

    #[test]
    fn text_strips_line_terminator() {
        let mut prompter = lines("first\r\nsecond\n");
        assert_eq!(prompter.text("One").unwrap(), "first");
        assert_eq!(prompter.text("Two").unwrap(), "second");
    }

    #[test]
    fn last_line_without_newline_is_read() {
        assert_eq!(lines("11").text("Option").unwrap(), "11");
    }

    #[test]
    fn end_of_input_is_input_closed() {
        let error = lines("").text("Option").unwrap_err();
        assert!(error.is::<InputClosed>());
    }

    #[test]
    fn until_valid_skips_rejected_lines() {
        let mut prompter = lines("abc\n17\n\n42\n");
        let age: Age = prompter.until_valid("Age", validate_age).unwrap();
        assert_eq!(age.get(), 42);
    }

    #[test]
    fn until_valid_gives_up_when_input_runs_out() {
        let error = lines("123\nnot an id\n").national_id().unwrap_err();
        assert!(error.is::<InputClosed>());
    }

    #[test]
    fn details_are_read_last_name_first() {
        let mut prompter = lines("Stan\nVlad\n44\n5000\nFinance\nmid\n");
        let details = prompter.details().unwrap();

        assert_eq!(details.last_name.as_str(), "Stan");
        assert_eq!(details.first_name.as_str(), "Vlad");
        assert_eq!(details.department, Department::Finance);
        assert_eq!(details.seniority, Seniority::Mid);
    }

    #[test_case("y\n", true; "y")]
    #[test_case("YES\n", true; "yes")]
    #[test_case("n\n", false; "no")]
    #[test_case("\n", false; "empty")]
    #[test_case("", false; "closed")]
    fn confirm_reads_answer(input: &str, expected: bool) {
        assert_eq!(lines(input).confirm("Proceed?").unwrap(), expected);
    }
}
