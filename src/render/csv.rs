use crate::api::SeasonRanking;
use crate::error::RankResult;
use std::io::Write;

/// One row per player: rank, name, rating, points per section, total.
///
/// Sections the player did not play are left empty.
pub fn write_standings<W: Write>(writer: W, ranking: &SeasonRanking) -> RankResult<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);

    let mut header = vec!["rank".to_string(), "name".to_string(), "rating".to_string()];
    header.extend(ranking.sections.iter().map(|s| s.label.clone()));
    header.push("total".to_string());
    wtr.write_record(&header)?;

    for player in &ranking.players {
        let mut row = vec![
            player.rank.to_string(),
            player.name.clone(),
            player.rating.to_string(),
        ];
        for section in &ranking.sections {
            row.push(
                player
                    .points_in(&section.id)
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            );
        }
        row.push(player.total_points.to_string());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
