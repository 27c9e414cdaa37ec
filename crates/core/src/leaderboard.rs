//! Leaderboard entries and ranking.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: EntityId,
    pub name: String,
    pub avatar: String,
    pub score: u32,
    pub rank: u32,
    pub progress_percent: u8,
    pub completed_module_count: u32,
}

/// Order by score (highest first) and assign competition ranks: tied
/// scores share a rank and the next rank skips accordingly (1, 2, 2, 4).
///
/// Ties keep their input order.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    let mut previous: Option<(u32, u32)> = None;
    for (idx, entry) in entries.iter_mut().enumerate() {
        let position = idx as u32 + 1;
        entry.rank = match previous {
            Some((score, rank)) if score == entry.score => rank,
            _ => position,
        };
        previous = Some((entry.score, entry.rank));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.into(),
            name: format!("Trainee {id}"),
            avatar: String::new(),
            score,
            rank: 0,
            progress_percent: 0,
            completed_module_count: 0,
        }
    }

    #[test]
    fn highest_score_ranks_first() {
        let ranked = rank_entries(vec![entry("a", 60), entry("b", 98), entry("c", 87)]);
        let order: Vec<(&str, u32)> = ranked.iter().map(|e| (e.id.as_str(), e.rank)).collect();
        assert_eq!(order, vec![("b", 1), ("c", 2), ("a", 3)]);
    }

    #[test]
    fn ties_share_a_rank() {
        let ranked = rank_entries(vec![
            entry("a", 90),
            entry("b", 80),
            entry("c", 80),
            entry("d", 70),
        ]);
        let ranks: Vec<u32> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2, 4]);
        assert_eq!(ranked[1].id, "b", "ties keep input order");
    }

    #[test]
    fn empty_board_stays_empty() {
        assert!(rank_entries(Vec::new()).is_empty());
    }
}
