pub mod data;

use std::fmt;

use clap::ValueEnum;
use comfy_table::Color;
use serde::Serialize;

use crate::analytics::{OverviewStats, overview};
use crate::config::OVERVIEW_LIMIT;
use crate::directory::EmployeeSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    #[default]
    Overview,
    Projects,
    Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn color(self) -> Color {
        match self {
            ProjectStatus::Completed => Color::Green,
            ProjectStatus::InProgress | ProjectStatus::Planned => Color::Yellow,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackKind {
    Praise,
    Suggestion,
    BugReport,
}

impl FeedbackKind {
    pub fn color(self) -> Color {
        match self {
            FeedbackKind::Praise => Color::Green,
            FeedbackKind::Suggestion => Color::Blue,
            FeedbackKind::BugReport => Color::Red,
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeedbackKind::Praise => "Praise",
            FeedbackKind::Suggestion => "Suggestion",
            FeedbackKind::BugReport => "Bug Report",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: u32,
    pub sender: &'static str,
    pub date: &'static str,
    pub message: &'static str,
    pub kind: FeedbackKind,
}

/// What a tab shows once loaded.
#[derive(Debug, Clone)]
pub enum TabContent {
    Overview(OverviewStats),
    OverviewUnavailable(String),
    Projects(&'static [Project]),
    Feedback(&'static [Feedback]),
}

impl Tab {
    /// Only the overview tab touches the network.
    pub async fn load(self, source: &dyn EmployeeSource) -> TabContent {
        match self {
            Tab::Overview => match source.list_employees(OVERVIEW_LIMIT).await {
                Ok(employees) => TabContent::Overview(overview(&employees)),
                Err(e) => {
                    tracing::error!("Failed to fetch overview users: {e:#}");
                    TabContent::OverviewUnavailable(
                        "Failed to load overview data. Please try again.".to_string(),
                    )
                }
            },
            Tab::Projects => TabContent::Projects(data::PROJECTS),
            Tab::Feedback => TabContent::Feedback(data::FEEDBACK),
        }
    }
}
