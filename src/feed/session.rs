use super::{FeedFilter, canonical_department};
use super::select::MultiSelect;
use crate::rating::{MAX_RATING, rating_label};

pub const HELP: &str = "\
Type to search by name, email, or department.
  :dept <name>     toggle a department filter
  :rating <1-5>    toggle a rating filter
  :clear           reset search and filters
  :help            show this help
  :quit            leave";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Filter state changed; the list needs recomputing.
    Refilter,
    Help,
    Quit,
    Invalid(String),
}

/// Filter state of an interactive feed, driven one input line at a time.
#[derive(Debug, Clone, Default)]
pub struct FeedSession {
    search: String,
    departments: MultiSelect<String>,
    ratings: MultiSelect<u8>,
    department_options: Vec<String>,
}

impl FeedSession {
    pub fn new(initial: FeedFilter, department_options: Vec<String>) -> Self {
        let mut session = Self {
            search: initial.search,
            department_options,
            ..Default::default()
        };
        for d in initial.departments {
            let d = canonical_department(&session.department_options, &d)
                .map_or(d, str::to_string);
            session.departments.select(d);
        }
        for r in initial.ratings {
            session.ratings.select(r);
        }
        session
    }

    pub fn handle_line(&mut self, line: &str) -> SessionAction {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            self.search = line.to_string();
            return SessionAction::Refilter;
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "q" | "quit" | "exit" => SessionAction::Quit,
            "h" | "help" => SessionAction::Help,
            "clear" => {
                self.search.clear();
                self.departments.clear();
                self.ratings.clear();
                SessionAction::Refilter
            }
            "dept" | "department" if !arg.is_empty() => {
                match canonical_department(&self.department_options, arg) {
                    Some(d) => {
                        self.departments.toggle(d.to_string());
                        SessionAction::Refilter
                    }
                    None => SessionAction::Invalid(format!(
                        "Unknown department '{arg}'. Options: {}",
                        self.department_options.join(", ")
                    )),
                }
            }
            "rating" if !arg.is_empty() => match arg.parse::<u8>() {
                Ok(r) if (1..=MAX_RATING).contains(&r) => {
                    self.ratings.toggle(r);
                    SessionAction::Refilter
                }
                _ => SessionAction::Invalid(format!("Rating must be 1-{MAX_RATING}, got '{arg}'")),
            },
            _ => SessionAction::Invalid(format!("Unknown command ':{command}' (try :help)")),
        }
    }

    pub fn filter(&self) -> FeedFilter {
        FeedFilter {
            search: self.search.clone(),
            departments: self.departments.selected().to_vec(),
            ratings: self.ratings.selected().to_vec(),
        }
    }

    /// One-line summary of the active search and dropdown selections.
    pub fn status_line(&self) -> String {
        format!(
            "Search: {} | {} | {}",
            if self.search.is_empty() { "-" } else { self.search.as_str() },
            self.departments
                .display("Filter by Department", |d| d.clone()),
            self.ratings
                .display("Filter by Rating", |r| rating_label(*r).to_string()),
        )
    }
}
