use std::{fmt, str::FromStr};

/// An entry of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Find,
    Update,
    Delete,
    ListAll,
    TotalPayroll,
    DepartmentPayroll,
    Payslip,
    ListBySeniority,
    ListByDepartment,
    Exit,
}

impl MenuOption {
    /// Every option, in menu order.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Find,
        Self::Update,
        Self::Delete,
        Self::ListAll,
        Self::TotalPayroll,
        Self::DepartmentPayroll,
        Self::Payslip,
        Self::ListBySeniority,
        Self::ListByDepartment,
        Self::Exit,
    ];

    /// The number the user types to choose this option.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map_or(0, |index| index + 1)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add employee",
            Self::Find => "Find employee by national id",
            Self::Update => "Update employee by national id",
            Self::Delete => "Delete employee",
            Self::ListAll => "List employees",
            Self::TotalPayroll => "Total salary cost",
            Self::DepartmentPayroll => "Total salary cost for a department",
            Self::Payslip => "Employee payslip",
            Self::ListBySeniority => "List employees with a given seniority",
            Self::ListByDepartment => "List employees in a department",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// A menu selection that does not name an option.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid option '{0}': the option must be a number shown in the menu")]
    NotANumber(String),

    #[error("Invalid option {0}: choose one of the options 1-11")]
    OutOfRange(i64),
}

impl FromStr for MenuOption {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| MenuError::NotANumber(s.to_string()))?;

        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(MenuError::OutOfRange(number))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", MenuOption::Add)]
    #[test_case("5", MenuOption::ListAll)]
    #[test_case("9", MenuOption::ListBySeniority)]
    #[test_case("10", MenuOption::ListByDepartment)]
    #[test_case(" 11 ", MenuOption::Exit)]
    fn parses_option_numbers(input: &str, expected: MenuOption) {
        assert_eq!(input.parse::<MenuOption>(), Ok(expected));
    }

    #[test_case("0", 0; "zero")]
    #[test_case("12", 12; "past the end")]
    #[test_case("-3", -3; "negative")]
    fn rejects_out_of_range(input: &str, number: i64) {
        assert_eq!(
            input.parse::<MenuOption>(),
            Err(MenuError::OutOfRange(number))
        );
    }

    #[test_case("abc"; "letters")]
    #[test_case(""; "empty")]
    #[test_case("1.5"; "decimal")]
    fn rejects_non_numbers(input: &str) {
        assert_eq!(
            input.parse::<MenuOption>(),
            Err(MenuError::NotANumber(input.to_string()))
        );
    }

    #[test]
    fn numbers_follow_menu_order() {
        for (index, option) in MenuOption::ALL.into_iter().enumerate() {
            assert_eq!(option.number(), index + 1);
            assert_eq!(
                option.number().to_string().parse::<MenuOption>(),
                Ok(option)
            );
            assert!(option.to_string().starts_with(&format!("{}. ", index + 1)));
        }
    }
}
