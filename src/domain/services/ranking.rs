//! League ranking order.
//!
//! The backend returns rankings already sorted; this comparator reproduces
//! its tie-break chain so a locally re-derived order never disagrees with
//! the canonical one: total points (desc), last points calculation (desc),
//! join date (asc).

use crate::domain::model::{LeagueMember, LeagueRanking};
use std::cmp::Ordering;

pub fn compare_members(a: &LeagueMember, b: &LeagueMember) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        // Option orders None first, so reversing puts never-calculated members last.
        .then_with(|| b.last_points_calculation.cmp(&a.last_points_calculation))
        .then_with(|| a.join_date.cmp(&b.join_date))
}

/// Stable, so members equal on all three keys keep their input order.
pub fn sort_ranking(members: &mut [LeagueMember]) {
    members.sort_by(compare_members);
}

impl LeagueRanking {
    pub fn is_canonically_ordered(&self) -> bool {
        self.members
            .windows(2)
            .all(|pair| compare_members(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// 1-based position of a member in the ranking.
    pub fn position_of(&self, user_id: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|member| member.user_id == user_id)
            .map(|index| index + 1)
    }
}
