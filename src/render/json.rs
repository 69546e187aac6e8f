use crate::api::SeasonRanking;
use crate::error::RankResult;
use crate::standings::PlayerTotal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    pub standings: Vec<WidgetPlayer>,
    pub sections: Vec<String>,
    pub updated_at: String,
}

/// Player entry keyed by section label rather than section id.
#[derive(Serialize, Debug)]
pub struct WidgetPlayer {
    pub name: String,
    pub rating: u32,
    pub total: f64,
    pub sections: BTreeMap<String, f64>,
    pub rank: usize,
}

/// Raw ranking as a pretty JSON array.
pub fn standings(players: &[PlayerTotal]) -> RankResult<String> {
    Ok(serde_json::to_string_pretty(players)?)
}

pub fn widget_data(ranking: &SeasonRanking) -> WidgetData {
    let standings = ranking
        .players
        .iter()
        .map(|p| WidgetPlayer {
            name: p.name.clone(),
            rating: p.rating,
            total: p.total_points,
            sections: ranking
                .sections
                .iter()
                .filter_map(|s| p.points_in(&s.id).map(|pts| (s.label.clone(), pts)))
                .collect(),
            rank: p.rank,
        })
        .collect();

    WidgetData {
        standings,
        sections: ranking.sections.iter().map(|s| s.label.clone()).collect(),
        updated_at: ranking.updated_at.to_rfc3339(),
    }
}

pub fn widget_json(ranking: &SeasonRanking) -> RankResult<String> {
    Ok(serde_json::to_string_pretty(&widget_data(ranking))?)
}
