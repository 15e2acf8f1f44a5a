use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: String,
}

/// The fixed badge catalog, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    FirstStep,
    Momentum,
    PhaseMaster,
    Halfway,
    Champion,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 5] = [
        BadgeKind::FirstStep,
        BadgeKind::Momentum,
        BadgeKind::PhaseMaster,
        BadgeKind::Halfway,
        BadgeKind::Champion,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BadgeKind::FirstStep => "first-step",
            BadgeKind::Momentum => "momentum",
            BadgeKind::PhaseMaster => "phase-master",
            BadgeKind::Halfway => "halfway",
            BadgeKind::Champion => "champion",
        }
    }

    pub fn badge(self) -> Badge {
        let (name, icon, description, color) = match self {
            BadgeKind::FirstStep => (
                "First Step",
                "🚀",
                "Complete your first task",
                "bg-blue-100 text-blue-600",
            ),
            BadgeKind::Momentum => (
                "Momentum",
                "🔥",
                "Complete 3 tasks",
                "bg-orange-100 text-orange-600",
            ),
            BadgeKind::PhaseMaster => (
                "Phase Master",
                "✨",
                "Complete a project phase",
                "bg-purple-100 text-purple-600",
            ),
            BadgeKind::Halfway => (
                "Halfway There",
                "⛰️",
                "Reach 50% project completion",
                "bg-teal-100 text-teal-600",
            ),
            BadgeKind::Champion => (
                "Champion",
                "🏆",
                "Complete the entire project",
                "bg-yellow-100 text-yellow-600",
            ),
        };

        Badge {
            id: self.id().to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        }
    }
}
