use chessrank::api::SeasonRanking;
use chessrank::standings::{SectionRecord, SectionStandings};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::info;

const PREVIEW_ROWS: usize = 3;

pub fn section_previews(sections: &[SectionStandings]) {
    for s in sections {
        for r in s.records.iter().take(PREVIEW_ROWS) {
            info!("   {} {}. {} - {} points", s.section, r.rank, r.name, r.points);
        }
    }
}

pub fn section_table(title: &str, records: &[SectionRecord]) {
    println!("\nSection: {}", title);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Rtg"),
        Cell::new("Pts").fg(Color::Green),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in records {
        table.add_row(vec![
            Cell::new(r.rank),
            Cell::new(&r.name),
            Cell::new(rating_cell(r.rating)),
            Cell::new(format!("{:.1}", r.points)).fg(Color::Green),
        ]);
    }
    println!("{}", table);
}

pub fn season_table(ranking: &SeasonRanking, top: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Rang").add_attribute(Attribute::Bold),
        Cell::new("Speler").add_attribute(Attribute::Bold),
        Cell::new("Rtg"),
    ];
    header.extend(ranking.sections.iter().map(|s| Cell::new(&s.label)));
    header.push(Cell::new("Totaal").fg(Color::Cyan));
    table.add_row(header);

    let last = ranking.sections.len() + 3;
    for i in (0..=last).filter(|&i| i != 1) {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for p in ranking.players.iter().take(top) {
        let mut row = vec![
            Cell::new(p.rank),
            Cell::new(&p.name),
            Cell::new(rating_cell(p.rating)),
        ];
        row.extend(ranking.sections.iter().map(|s| {
            Cell::new(
                p.points_in(&s.id)
                    .map(|pts| format!("{:.1}", pts))
                    .unwrap_or_else(|| "-".to_string()),
            )
        }));
        row.push(Cell::new(format!("{:.1}", p.total_points)).fg(Color::Cyan));
        table.add_row(row);
    }

    println!("\n🏆 TOP {}", top.min(ranking.players.len()));
    println!("{}", table);
}

fn rating_cell(rating: u32) -> String {
    if rating == 0 {
        "-".to_string()
    } else {
        rating.to_string()
    }
}
