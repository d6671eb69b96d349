//! Static dashboard content: statistic cards, recent activity, and quick
//! actions.
//!
//! None of this is measured; the lists are fixed illustrations and only
//! their shape matters to the page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// One statistic card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    /// Accent class applied to the card icon.
    pub tone: &'static str,
    pub icon: &'static str,
}

/// Outcome shown next to a recent-activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityStatus {
    Completed,
    Pending,
    Warning,
}

impl ActivityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Warning => "warning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Warning => "Needs attention",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Completed => "check-circle",
            Self::Pending => "clock",
            Self::Warning => "alert-circle",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Self::Completed => "tone--green",
            Self::Pending => "tone--blue",
            Self::Warning => "tone--orange",
        }
    }
}

/// One row of the recent-activity list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub title: &'static str,
    /// Pre-formatted relative time, e.g. "2 minutes ago".
    pub time: &'static str,
    pub status: ActivityStatus,
}

/// Shortcut button. Clicking one does nothing yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Total Views", value: "12,543", trend: "+12.5%", tone: "tone--blue", icon: "activity" },
    Stat { label: "Active Users", value: "2,847", trend: "+8.2%", tone: "tone--green", icon: "users" },
    Stat { label: "Revenue", value: "$45,231", trend: "+23.1%", tone: "tone--purple", icon: "trending-up" },
    Stat { label: "Performance", value: "94.2%", trend: "+5.4%", tone: "tone--orange", icon: "bar-chart" },
];

pub const RECENT_ACTIVITY: [Activity; 5] = [
    Activity { id: 1, title: "New user registration", time: "2 minutes ago", status: ActivityStatus::Completed },
    Activity { id: 2, title: "Payment processed", time: "15 minutes ago", status: ActivityStatus::Completed },
    Activity { id: 3, title: "System backup", time: "1 hour ago", status: ActivityStatus::Completed },
    Activity { id: 4, title: "Server maintenance", time: "2 hours ago", status: ActivityStatus::Pending },
    Activity { id: 5, title: "Data export requested", time: "3 hours ago", status: ActivityStatus::Warning },
];

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "View Analytics", icon: "activity" },
    QuickAction { label: "Manage Users", icon: "users" },
    QuickAction { label: "Generate Report", icon: "bar-chart" },
    QuickAction { label: "View Trends", icon: "trending-up" },
];
