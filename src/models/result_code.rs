//! Outcome codes of the mutating operations.
//!
//! Handlers never render a mutation's outcome directly. They redirect to a
//! results page carrying only the wire code, and the results page turns the
//! code back into a message with [`message_for`].

use std::fmt;

/// Message shown for a code that maps to nothing.
pub const CODE_ERROR: &str = "code error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Success {
    Added,
    Deleted,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    IdHasInvalidCharacter,
    IdAlreadyExists,
    IdDoesNotExist,
    IdIsManager,
    ManagerIdHasInvalidCharacter,
    ManagerIdDoesNotExist,
    SalaryHasInvalidCharacter,
    BirthYearHasInvalidCharacter,
    StartYearHasInvalidCharacter,
    NameHasControlCharacter,
    DatabaseError,
}

pub type Outcome = Result<Success, Failure>;

impl Success {
    const ALL: [Success; 3] = [Success::Added, Success::Deleted, Success::Updated];

    pub fn code(self) -> &'static str {
        match self {
            Success::Added => "added",
            Success::Deleted => "deleted",
            Success::Updated => "updated",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Success::Added => "The employee has been added",
            Success::Deleted => "The employee has been deleted",
            Success::Updated => "The employee has been updated",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl Failure {
    const ALL: [Failure; 11] = [
        Failure::IdHasInvalidCharacter,
        Failure::IdAlreadyExists,
        Failure::IdDoesNotExist,
        Failure::IdIsManager,
        Failure::ManagerIdHasInvalidCharacter,
        Failure::ManagerIdDoesNotExist,
        Failure::SalaryHasInvalidCharacter,
        Failure::BirthYearHasInvalidCharacter,
        Failure::StartYearHasInvalidCharacter,
        Failure::NameHasControlCharacter,
        Failure::DatabaseError,
    ];

    /// Wire code used in result URLs. The `-charactor` spelling is kept so
    /// links produced by earlier deployments still resolve.
    pub fn code(self) -> &'static str {
        match self {
            Failure::IdHasInvalidCharacter => "id-has-invalid-charactor",
            Failure::IdAlreadyExists => "id-already-exists",
            Failure::IdDoesNotExist => "id-does-not-exist",
            Failure::IdIsManager => "id-is-manager",
            Failure::ManagerIdHasInvalidCharacter => "manager-id-has-invalid-charactor",
            Failure::ManagerIdDoesNotExist => "manager-id-does-not-exist",
            Failure::SalaryHasInvalidCharacter => "salary-has-invalid-charactor",
            Failure::BirthYearHasInvalidCharacter => "birth-year-has-invalid-charactor",
            Failure::StartYearHasInvalidCharacter => "start-year-has-invalid-charactor",
            Failure::NameHasControlCharacter => "name-has-control-charactor",
            Failure::DatabaseError => "database-error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Failure::IdHasInvalidCharacter => {
                "The employee number contains invalid characters - use digits only"
            }
            Failure::IdAlreadyExists => {
                "The employee number already exists - specify an employee number that does not exist"
            }
            Failure::IdDoesNotExist => "The employee number does not exist",
            Failure::IdIsManager => {
                "The employee has subordinates - change the manager of the subordinates before deleting"
            }
            Failure::ManagerIdHasInvalidCharacter => {
                "The manager's employee number contains invalid characters - use digits only"
            }
            Failure::ManagerIdDoesNotExist => {
                "The manager's employee number does not exist - specify an existing employee number or the employee's own number"
            }
            Failure::SalaryHasInvalidCharacter => {
                "The salary contains invalid characters - use digits only"
            }
            Failure::BirthYearHasInvalidCharacter => {
                "The birth year contains invalid characters - use digits only"
            }
            Failure::StartYearHasInvalidCharacter => {
                "The start year contains invalid characters - use digits only"
            }
            Failure::NameHasControlCharacter => {
                "The name contains control characters - do not use control characters"
            }
            Failure::DatabaseError => "Database error",
        }
    }

    /// Accepts the wire spelling as well as the corrected `-character` one.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = match code.strip_suffix("-character") {
            Some(stem) => format!("{}-charactor", stem),
            None => code.to_string(),
        };
        Self::ALL.into_iter().find(|f| f.code() == normalized)
    }
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wire code for either side of an outcome.
pub fn code_of(outcome: Outcome) -> &'static str {
    match outcome {
        Ok(success) => success.code(),
        Err(failure) => failure.code(),
    }
}

/// Message for a wire code, falling back to [`CODE_ERROR`].
pub fn message_for(code: &str) -> &'static str {
    if let Some(success) = Success::from_code(code) {
        return success.message();
    }
    Failure::from_code(code)
        .map(Failure::message)
        .unwrap_or(CODE_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_maps_to_its_own_message() {
        for failure in Failure::ALL {
            assert_eq!(message_for(failure.code()), failure.message());
        }
        for success in Success::ALL {
            assert_eq!(message_for(success.code()), success.message());
        }
    }

    #[test]
    fn messages_are_distinct() {
        let mut messages: Vec<&str> = Failure::ALL.iter().map(|f| f.message()).collect();
        messages.extend(Success::ALL.iter().map(|s| s.message()));
        let total = messages.len();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), total);
    }

    #[test]
    fn corrected_spelling_resolves_to_same_failure() {
        assert_eq!(
            Failure::from_code("salary-has-invalid-character"),
            Some(Failure::SalaryHasInvalidCharacter)
        );
        assert_eq!(
            Failure::from_code("name-has-control-character"),
            Some(Failure::NameHasControlCharacter)
        );
        assert_eq!(
            Failure::from_code("id-has-invalid-charactor"),
            Some(Failure::IdHasInvalidCharacter)
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_code_error() {
        assert_eq!(message_for("id-does-not-exsit"), CODE_ERROR);
        assert_eq!(message_for(""), CODE_ERROR);
        assert_eq!(message_for("ADDED"), CODE_ERROR);
        assert_eq!(message_for("database-error-character"), CODE_ERROR);
    }

    #[test]
    fn code_of_covers_both_sides() {
        assert_eq!(code_of(Ok(Success::Deleted)), "deleted");
        assert_eq!(code_of(Err(Failure::IdIsManager)), "id-is-manager");
    }
}
