use super::{Feedback, FeedbackKind, Project, ProjectStatus};

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Next.js Authentication System",
        description: "Developed and integrated NextAuth.js for secure user authentication, including custom sign-in flows and session management.",
        status: ProjectStatus::Completed,
        technologies: &["Next.js", "NextAuth.js", "Tailwind CSS"],
    },
    Project {
        id: 2,
        name: "User Feedback Collection Platform",
        description: "Designed and implemented a system for collecting and categorizing user feedback, allowing for sentiment analysis.",
        status: ProjectStatus::InProgress,
        technologies: &["React", "Node.js", "MongoDB"],
    },
    Project {
        id: 3,
        name: "Dynamic User Feed & Filtering",
        description: "Created a dynamic user feed with advanced search and multi-criteria filtering capabilities for efficient data retrieval.",
        status: ProjectStatus::Completed,
        technologies: &["React", "API Integration", "JavaScript"],
    },
    Project {
        id: 4,
        name: "Database Optimization",
        description: "Improved query performance by 30% by optimizing queries and indexes.",
        status: ProjectStatus::Completed,
        technologies: &["SQL", "Node.js"],
    },
    Project {
        id: 5,
        name: "Payment Gateway Integration",
        description: "Successfully integrated Stripe for secure online payments across the platform.",
        status: ProjectStatus::InProgress,
        technologies: &["Stripe", "React", "Node.js"],
    },
    Project {
        id: 6,
        name: "Real-time Notifications",
        description: "Implemented WebSocket-based real-time notification system for user updates.",
        status: ProjectStatus::Planned,
        technologies: &["WebSockets", "Node.js", "Socket.IO"],
    },
    Project {
        id: 7,
        name: "User Onboarding Flow",
        description: "Designed and built an intuitive user onboarding experience to improve conversion.",
        status: ProjectStatus::Completed,
        technologies: &["React", "UI/UX"],
    },
    Project {
        id: 8,
        name: "Analytics Dashboard Refactor",
        description: "Refactored the analytics dashboard for better performance and new data visualizations.",
        status: ProjectStatus::InProgress,
        technologies: &["React", "D3.js", "Redux"],
    },
    Project {
        id: 9,
        name: "API Rate Limiting",
        description: "Implemented rate limiting on public APIs to prevent abuse and ensure stability.",
        status: ProjectStatus::Completed,
        technologies: &["Node.js", "Express", "Redis"],
    },
    Project {
        id: 10,
        name: "Accessibility Improvements",
        description: "Enhanced website accessibility to meet WCAG 2.1 AA standards.",
        status: ProjectStatus::Planned,
        technologies: &["HTML", "CSS", "A11y"],
    },
];

pub const FEEDBACK: &[Feedback] = &[
    Feedback {
        id: 101,
        sender: "Alice Smith",
        date: "2024-04-20",
        message: "The new search filters are incredibly helpful! Great job on the responsiveness.",
        kind: FeedbackKind::Praise,
    },
    Feedback {
        id: 102,
        sender: "Bob Johnson",
        date: "2024-04-22",
        message: "Could you consider adding an export feature for user data? It would be very useful.",
        kind: FeedbackKind::Suggestion,
    },
    Feedback {
        id: 103,
        sender: "Charlie Brown",
        date: "2024-04-23",
        message: "Experienced a minor bug on mobile when sorting by department.",
        kind: FeedbackKind::BugReport,
    },
    Feedback {
        id: 104,
        sender: "Diana Prince",
        date: "2024-04-25",
        message: "Love the dark mode! Looks super sleek.",
        kind: FeedbackKind::Praise,
    },
    Feedback {
        id: 105,
        sender: "Evan Peters",
        date: "2024-04-26",
        message: "The login screen could use a 'remember me' checkbox.",
        kind: FeedbackKind::Suggestion,
    },
    Feedback {
        id: 106,
        sender: "Fiona Gale",
        date: "2024-04-27",
        message: "Profile picture upload isn't working for large files.",
        kind: FeedbackKind::BugReport,
    },
    Feedback {
        id: 107,
        sender: "George Harrison",
        date: "2024-04-28",
        message: "Fantastic performance on the user list!",
        kind: FeedbackKind::Praise,
    },
    Feedback {
        id: 108,
        sender: "Hannah Montana",
        date: "2024-04-29",
        message: "Would appreciate a 'contact us' form on the site.",
        kind: FeedbackKind::Suggestion,
    },
    Feedback {
        id: 109,
        sender: "Ivan Ivanov",
        date: "2024-04-30",
        message: "The new sorting options are a game-changer. Thanks!",
        kind: FeedbackKind::Praise,
    },
    Feedback {
        id: 110,
        sender: "Julia Roberts",
        date: "2024-05-01",
        message: "Found a broken link in the footer, please check.",
        kind: FeedbackKind::BugReport,
    },
];
