//! Server-side HTML for every page.
//!
//! All text that came from a request or from the database goes through
//! [`escape`] before it is placed in markup.

use std::fmt::Write;

use crate::models::employee::{Employee, EmployeeSummary};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n<hr>\n<p><a href=\"/employees\">Employee list</a> | <a href=\"/\">Home</a></p>\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

pub fn index_page() -> String {
    layout(
        "Employee administration",
        "<p>Maintain the employee records: browse, add, edit and delete employees.</p>\n\
         <ul>\n<li><a href=\"/employees\">Employee list</a></li>\n\
         <li><a href=\"/employee-add\">Add an employee</a></li>\n</ul>",
    )
}

pub fn employees_page(employees: &[EmployeeSummary], name_filter: Option<&str>) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/employees\">\n\
         <label>Name <input type=\"text\" name=\"name_filter\" value=\"{}\"></label>\n\
         <button type=\"submit\">Filter</button>\n</form>\n",
        escape(name_filter.unwrap_or("")),
    );
    if employees.is_empty() {
        body.push_str("<p>No employees.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Employee number</th><th>Name</th><th></th></tr>\n");
        for employee in employees {
            let _ = writeln!(
                body,
                "<tr><td><a href=\"/employee/{id}\">{id}</a></td><td>{name}</td>\
                 <td><a href=\"/employee-edit/{id}\">edit</a> <a href=\"/employee-del/{id}\">delete</a></td></tr>",
                id = employee.id,
                name = escape(&employee.name),
            );
        }
        body.push_str("</table>\n");
    }
    body.push_str("<p><a href=\"/employee-add\">Add an employee</a></p>");
    layout("Employees", &body)
}

pub fn employee_page(employee: &Employee) -> String {
    let manager = if employee.is_top_level() {
        "(none)".to_string()
    } else {
        format!("<a href=\"/employee/{id}\">{id}</a>", id = employee.manager_id)
    };
    let body = format!(
        "<dl>\n<dt>Employee number</dt><dd>{id}</dd>\n<dt>Name</dt><dd>{name}</dd>\n\
         <dt>Salary</dt><dd>{salary}</dd>\n<dt>Manager</dt><dd>{manager}</dd>\n\
         <dt>Birth year</dt><dd>{birth_year}</dd>\n<dt>Start year</dt><dd>{start_year}</dd>\n</dl>\n\
         <p><a href=\"/employee-edit/{id}\">edit</a> <a href=\"/employee-del/{id}\">delete</a></p>",
        id = employee.id,
        name = escape(&employee.name),
        salary = employee.salary,
        manager = manager,
        birth_year = employee.birth_year,
        start_year = employee.start_year,
    );
    layout("Employee", &body)
}

pub fn employee_not_found_page() -> String {
    layout("Employee", "<p>The employee was not found.</p>")
}

fn field_inputs(values: [(&str, &str, String); 5]) -> String {
    let mut out = String::new();
    for (label, field, value) in values {
        let _ = writeln!(
            out,
            "<p><label>{label} <input type=\"text\" name=\"{field}\" value=\"{value}\"></label></p>",
            label = label,
            field = field,
            value = escape(&value),
        );
    }
    out
}

pub fn add_form_page() -> String {
    let body = format!(
        "<form method=\"post\" action=\"/employee-add\">\n\
         <p><label>Employee number <input type=\"text\" name=\"id\"></label></p>\n{}\
         <p>Use the employee's own number as manager for a top-level employee.</p>\n\
         <button type=\"submit\">Add</button>\n</form>",
        field_inputs([
            ("Name", "name", String::new()),
            ("Salary", "salary", String::new()),
            ("Manager's employee number", "manager_id", String::new()),
            ("Birth year", "birth_year", String::new()),
            ("Start year", "start_year", String::new()),
        ]),
    );
    layout("Add employee", &body)
}

pub fn edit_form_page(employee: &Employee) -> String {
    let body = format!(
        "<form method=\"post\" action=\"/employee-edit/{id}\">\n\
         <p>Employee number {id}</p>\n{inputs}\
         <button type=\"submit\">Update</button>\n</form>",
        id = employee.id,
        inputs = field_inputs([
            ("Name", "name", employee.name.clone()),
            ("Salary", "salary", employee.salary.to_string()),
            ("Manager's employee number", "manager_id", employee.manager_id.to_string()),
            ("Birth year", "birth_year", employee.birth_year.to_string()),
            ("Start year", "start_year", employee.start_year.to_string()),
        ]),
    );
    layout("Edit employee", &body)
}

pub fn delete_confirm_page(id: i64) -> String {
    let body = format!(
        "<p>Delete employee {id}?</p>\n\
         <form method=\"post\" action=\"/employee-del/{id}\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n\
         <p><a href=\"/employee/{id}\">Cancel</a></p>",
        id = id,
    );
    layout("Delete employee", &body)
}

/// Which mutation a results page reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPage {
    Add,
    Delete,
    Edit,
}

impl ResultsPage {
    fn title(self) -> &'static str {
        match self {
            ResultsPage::Add => "Add employee results",
            ResultsPage::Delete => "Delete employee results",
            ResultsPage::Edit => "Edit employee results",
        }
    }
}

pub fn results_page(page: ResultsPage, message: &str) -> String {
    layout(page.title(), &format!("<p>{}</p>", escape(message)))
}

pub fn error_page(message: &str) -> String {
    layout("Error", &format!("<p>{}</p>", escape(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain 名前"), "plain 名前");
    }

    #[test]
    fn list_escapes_names_and_keeps_filter() {
        let page = employees_page(
            &[EmployeeSummary { id: 4, name: "<script>".into() }],
            Some("a\"b"),
        );
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("value=\"a&quot;b\""));
        assert!(page.contains("href=\"/employee/4\""));
    }

    #[test]
    fn detail_links_manager_unless_top_level() {
        let mut employee = Employee {
            id: 2,
            name: "Bob".into(),
            salary: 40000,
            manager_id: 1,
            birth_year: 1995,
            start_year: 2020,
        };
        assert!(employee_page(&employee).contains("<a href=\"/employee/1\">1</a>"));
        employee.manager_id = 2;
        assert!(employee_page(&employee).contains("(none)"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let employee = Employee {
            id: 7,
            name: "O'Neil".into(),
            salary: 1,
            manager_id: 7,
            birth_year: 1980,
            start_year: 2000,
        };
        let page = edit_form_page(&employee);
        assert!(page.contains("action=\"/employee-edit/7\""));
        assert!(page.contains("name=\"name\" value=\"O&#39;Neil\""));
        assert!(page.contains("name=\"birth_year\" value=\"1980\""));
    }

    #[test]
    fn results_page_titles_follow_operation() {
        assert!(results_page(ResultsPage::Delete, "done").contains("Delete employee results"));
        assert!(results_page(ResultsPage::Add, "done").contains("<p>done</p>"));
    }
}
