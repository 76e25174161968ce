pub mod debounce;
pub mod select;
pub mod session;

use std::collections::BTreeSet;

use crate::directory::Employee;
use crate::rating::stable_rating;

/// Search text plus the department and rating selections. Every non-empty
/// criterion must match; empty ones let everything through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    pub search: String,
    pub departments: Vec<String>,
    pub ratings: Vec<u8>,
}

impl FeedFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.departments.is_empty() && self.ratings.is_empty()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee)
            && (self.departments.is_empty()
                || employee
                    .department()
                    .is_some_and(|d| self.departments.iter().any(|s| s == d)))
            && (self.ratings.is_empty() || self.ratings.contains(&stable_rating(employee.id)))
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        employee.first_name.to_lowercase().contains(&needle)
            || employee.last_name.to_lowercase().contains(&needle)
            || employee.email.to_lowercase().contains(&needle)
            || employee
                .department()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// Rewrites department selections to the spelling used in `options`
    /// (case-insensitive) and drops repeated selections.
    pub fn normalize(&mut self, options: &[String]) {
        let mut departments: Vec<String> = Vec::with_capacity(self.departments.len());
        for d in self.departments.drain(..) {
            let d = canonical_department(options, &d).map_or(d, str::to_string);
            if !departments.contains(&d) {
                departments.push(d);
            }
        }
        self.departments = departments;

        let mut ratings: Vec<u8> = Vec::with_capacity(self.ratings.len());
        for r in self.ratings.drain(..) {
            if !ratings.contains(&r) {
                ratings.push(r);
            }
        }
        self.ratings = ratings;
    }

    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Distinct departments present in the list, sorted.
pub fn department_options(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .filter_map(|e| e.department())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// The entry of `options` equal to `name` ignoring ASCII case.
pub fn canonical_department<'a>(options: &'a [String], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|d| d.eq_ignore_ascii_case(name))
        .map(String::as_str)
}
