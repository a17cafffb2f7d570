use serde::Deserialize;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: i64,
    pub manager_id: i64,
    pub birth_year: i64,
    pub start_year: i64,
}

impl Employee {
    /// True when the employee is its own manager, i.e. at the top of the hierarchy.
    pub fn is_top_level(&self) -> bool {
        self.manager_id == self.id
    }
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
}

/// Raw form values as submitted. Nothing here has been parsed or checked yet.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub salary: String,
    pub manager_id: String,
    pub birth_year: String,
    pub start_year: String,
}

/// The add form additionally carries the new employee number.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NewEmployeeForm {
    pub id: String,
    pub name: String,
    pub salary: String,
    pub manager_id: String,
    pub birth_year: String,
    pub start_year: String,
}

impl NewEmployeeForm {
    pub fn into_parts(self) -> (String, EmployeeForm) {
        (
            self.id,
            EmployeeForm {
                name: self.name,
                salary: self.salary,
                manager_id: self.manager_id,
                birth_year: self.birth_year,
                start_year: self.start_year,
            },
        )
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct NameFilter {
    pub name_filter: String,
}
