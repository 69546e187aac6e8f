use super::types::{PlayerTotal, SectionStandings};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Merges per-section standings into one season ranking.
///
/// Players are matched on the exact name string. The result is ordered by
/// total points, then rating, both descending; players that tie on both keep
/// the order in which they were first seen. Ranks are sequential, ties never
/// share a rank.
pub fn aggregate(sections: &[SectionStandings]) -> Vec<PlayerTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut players: Vec<PlayerTotal> = Vec::new();

    for standings in sections {
        for record in &standings.records {
            let slot = *index.entry(record.name.as_str()).or_insert_with(|| {
                players.push(PlayerTotal::new(&record.name, record.rating));
                players.len() - 1
            });

            let player = &mut players[slot];
            player.total_points += record.points;
            player.sections.insert(standings.section.clone(), record.points);
            if record.rating > player.rating {
                player.rating = record.rating;
            }
        }
    }

    // sort_by is stable: equal keys stay in first-seen order.
    players.sort_by(compare_totals);
    for (i, player) in players.iter_mut().enumerate() {
        player.rank = i + 1;
    }

    debug!(
        "Aggregated {} sections into {} players",
        sections.len(),
        players.len()
    );
    players
}

fn compare_totals(a: &PlayerTotal, b: &PlayerTotal) -> Ordering {
    b.total_points
        .total_cmp(&a.total_points)
        .then_with(|| b.rating.cmp(&a.rating))
}
