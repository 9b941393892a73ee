use super::{BadgeDefinition, BadgeIcon};

pub(super) fn standard_badges() -> Vec<BadgeDefinition> {
    vec![
        BadgeDefinition::new(
            "top-performer",
            "Top Performer",
            "Finished a period at the top of the leaderboard",
            BadgeIcon::Trophy,
        ),
        BadgeDefinition::new(
            "rising-star",
            "Rising Star",
            "Climbed five or more places in a single period",
            BadgeIcon::Star,
        ),
        BadgeDefinition::new(
            "perfect-attendance",
            "Perfect Attendance",
            "No missed or late days for a full quarter",
            BadgeIcon::Clock,
        ),
        BadgeDefinition::new(
            "team-player",
            "Team Player",
            "Received ten or more peer nominations",
            BadgeIcon::Users,
        ),
        BadgeDefinition::new(
            "innovation-champion",
            "Innovation Champion",
            "Shipped an improvement adopted by another department",
            BadgeIcon::Lightbulb,
        ),
        BadgeDefinition::new(
            "customer-hero",
            "Customer Hero",
            "Recognized by a customer for outstanding service",
            BadgeIcon::Heart,
        ),
        BadgeDefinition::new(
            "mentor",
            "Mentor",
            "Onboarded and coached a new team member",
            BadgeIcon::Award,
        ),
        BadgeDefinition::new(
            "goal-crusher",
            "Goal Crusher",
            "Exceeded every quarterly objective",
            BadgeIcon::Target,
        ),
    ]
}
