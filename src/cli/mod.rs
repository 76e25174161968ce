pub mod analytics;
pub mod bookmark;
pub mod employee;
pub mod feed;
pub mod panel;

use clap::{Parser, Subcommand};

use crate::panel::Tab;
use crate::report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "hr-dashboard",
    version,
    about = "Browse employees, keep bookmarks and view HR analytics from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Where employee records come from
    #[arg(long, default_value = "dummyjson", value_parser = ["dummyjson", "fixture"], global = true)]
    pub source: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// List employees with search and filters
    Feed {
        /// Search by name, email, or department
        #[arg(long, short)]
        search: Option<String>,
        /// Only show these departments (comma-separated)
        #[arg(long, value_delimiter = ',')]
        department: Vec<String>,
        /// Only show these ratings, 1-5 (comma-separated)
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Vec<u8>,
        /// Number of employees to fetch
        #[arg(long, default_value_t = crate::config::FEED_LIMIT)]
        limit: u32,
        /// Keep reading search input from stdin and refresh the list as you type
        #[arg(long, short)]
        interactive: bool,
    },
    /// Inspect a single employee
    Employee {
        #[command(subcommand)]
        command: EmployeeCommand,
    },
    /// Manage bookmarked employees
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommand,
    },
    /// Department ratings and bookmark trends
    Analytics {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Terminal)]
        format: ReportFormat,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
        /// Number of employees to aggregate
        #[arg(long, default_value_t = crate::config::ANALYTICS_LIMIT)]
        limit: u32,
        /// Seed for the mock trend data (random if not specified)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Overview, projects and feedback panel
    Tabs {
        #[arg(long, value_enum, default_value_t = Tab::Overview)]
        tab: Tab,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Show the detailed profile of an employee
    Show {
        /// Employee ID
        id: u64,
    },
    /// Trigger the promote action for an employee
    Promote {
        /// Employee ID
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum BookmarkCommand {
    /// List bookmarked employees
    List,
    /// Bookmark an employee
    Add {
        /// Employee ID
        id: u64,
    },
    /// Remove a bookmark
    Remove {
        /// Employee ID
        id: u64,
    },
    /// Bookmark an employee, or remove the bookmark if already present
    Toggle {
        /// Employee ID
        id: u64,
    },
    /// Remove all bookmarks
    Clear,
    /// Trigger the promote action for a bookmarked employee
    Promote {
        /// Employee ID
        id: u64,
    },
    /// Trigger the assign-to-project action for a bookmarked employee
    Assign {
        /// Employee ID
        id: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_feed_filters() {
        let cli = Cli::try_parse_from([
            "hr-dashboard",
            "feed",
            "--search",
            "emily",
            "--department",
            "Engineering,Sales",
            "--rating",
            "4,5",
        ])
        .unwrap();
        match cli.command {
            Command::Feed {
                search,
                department,
                rating,
                limit,
                interactive,
            } => {
                assert_eq!(search.as_deref(), Some("emily"));
                assert_eq!(department, vec!["Engineering", "Sales"]);
                assert_eq!(rating, vec![4, 5]);
                assert_eq!(limit, 20);
                assert!(!interactive);
            }
            _ => panic!("expected feed command"),
        }
        assert_eq!(cli.source, "dummyjson");
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        assert!(Cli::try_parse_from(["hr-dashboard", "feed", "--rating", "6"]).is_err());
    }

    #[test]
    fn test_parse_analytics_and_global_source() {
        let cli = Cli::try_parse_from([
            "hr-dashboard",
            "analytics",
            "--format",
            "html",
            "--seed",
            "9",
            "--source",
            "fixture",
        ])
        .unwrap();
        assert_eq!(cli.source, "fixture");
        match cli.command {
            Command::Analytics {
                format, seed, limit, ..
            } => {
                assert_eq!(format, ReportFormat::Html);
                assert_eq!(seed, Some(9));
                assert_eq!(limit, 100);
            }
            _ => panic!("expected analytics command"),
        }
    }

    #[test]
    fn test_parse_tabs() {
        let cli = Cli::try_parse_from(["hr-dashboard", "tabs", "--tab", "projects"]).unwrap();
        assert!(matches!(cli.command, Command::Tabs { tab: Tab::Projects }));
    }
}
