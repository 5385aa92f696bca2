//! Badge tiers and the peer-tutor leaderboard.

use crate::api::PeerTutor;
use serde::{Deserialize, Serialize};

/// One badge tier with the minimum points required to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeTier {
    pub name: &'static str,
    pub threshold: u32,
}

/// Badge tiers in ascending threshold order.
pub const INSTRUCTOR_BADGES: [BadgeTier; 5] = [
    BadgeTier { name: "Novice Educator", threshold: 0 },
    BadgeTier { name: "Mentorship Star", threshold: 1000 },
    BadgeTier { name: "Scholar Guide", threshold: 2500 },
    BadgeTier { name: "Master Teacher", threshold: 5000 },
    BadgeTier { name: "Academic Legend", threshold: 10000 },
];

/// The highest tier whose threshold does not exceed `points`.
pub fn badge_for_points(points: u32) -> &'static BadgeTier {
    INSTRUCTOR_BADGES
        .iter()
        .rev()
        .find(|tier| points >= tier.threshold)
        .unwrap_or(&INSTRUCTOR_BADGES[0])
}

/// One leaderboard row: a tutor with their computed badge tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub program: String,
    pub points: u32,
    pub badge: String,
}

/// Tutors ordered by points descending, each with their badge tier.
///
/// The sort is stable, so tutors on equal points keep roster order.
pub fn tutor_leaderboard(tutors: &[PeerTutor]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = tutors
        .iter()
        .map(|tutor| LeaderboardEntry {
            id: tutor.id.value().to_string(),
            name: tutor.name.clone(),
            program: tutor.program.clone(),
            points: tutor.points,
            badge: badge_for_points(tutor.points).name.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TutorId;

    fn tutor(id: &str, points: u32) -> PeerTutor {
        PeerTutor {
            id: TutorId::new(id),
            name: id.to_string(),
            program: "Physics".to_string(),
            year: "Year 2".to_string(),
            points,
            expertise: vec![],
        }
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(badge_for_points(0).name, "Novice Educator");
        assert_eq!(badge_for_points(999).name, "Novice Educator");
        assert_eq!(badge_for_points(1000).name, "Mentorship Star");
        assert_eq!(badge_for_points(2450).name, "Mentorship Star");
        assert_eq!(badge_for_points(5200).name, "Master Teacher");
        assert_eq!(badge_for_points(12500).name, "Academic Legend");
    }

    #[test]
    fn test_leaderboard_orders_by_points_desc() {
        let roster = vec![tutor("t3", 2100), tutor("t1", 12500), tutor("t2", 6200)];
        let board = tutor_leaderboard(&roster);
        let ids: Vec<&str> = board.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert_eq!(board[0].badge, "Academic Legend");
        assert_eq!(board[2].badge, "Mentorship Star");
    }

    #[test]
    fn test_leaderboard_stable_on_ties() {
        let roster = vec![tutor("a", 500), tutor("b", 500)];
        let board = tutor_leaderboard(&roster);
        assert_eq!(board[0].id, "a");
        assert_eq!(board[1].id, "b");
    }
}
