use crate::api::SeasonRanking;
use crate::config::WidgetConfig;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt::Write;

const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

const STYLE: &str = r#"<style>
.standings-widget {
    margin: 20px auto;
    max-width: 1200px;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
}
.standings-widget h2 {
    text-align: center;
    color: #2d3748;
}
.standings-widget .subtitle {
    text-align: center;
    color: #718096;
    margin-bottom: 30px;
}
.standings-table {
    width: 100%;
    border-collapse: collapse;
    margin: 20px 0;
    box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    background: white;
}
.standings-table th {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 16px 12px;
    text-align: left;
    font-weight: 600;
    text-transform: uppercase;
    font-size: 0.85em;
    letter-spacing: 0.5px;
}
.standings-table td {
    padding: 14px 12px;
    border-bottom: 1px solid #e2e8f0;
}
.standings-table tbody tr:hover {
    background-color: #f7fafc;
}
.standings-table tbody tr:nth-child(even) {
    background-color: #f9fafb;
}
.standings-table td:first-child {
    font-weight: 700;
    color: #4a5568;
    width: 60px;
    text-align: center;
}
.standings-table td:nth-child(2) {
    font-weight: 500;
    color: #2d3748;
}
.standings-table td:not(:first-child):not(:nth-child(2)) {
    text-align: center;
    color: #4a5568;
}
.standings-table td:last-child {
    font-weight: 700;
    color: #38a169;
    font-size: 1.1em;
}
.standings-widget .updated {
    text-align: center;
    color: #a0aec0;
    font-size: 0.9em;
    margin-top: 20px;
}
</style>"#;

/// Renders the season ranking as a self-contained HTML fragment.
pub fn widget(ranking: &SeasonRanking, cfg: &WidgetConfig) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"standings-widget\">\n");
    out.push_str(STYLE);
    let _ = writeln!(out, "\n<h2>{}</h2>", escape(&cfg.title));
    let _ = writeln!(out, "<p class=\"subtitle\">{}</p>", escape(&cfg.subtitle));

    out.push_str("<table class=\"standings-table\">\n    <thead>\n        <tr>\n");
    out.push_str("            <th>Rang</th>\n            <th>Speler</th>\n");
    for section in &ranking.sections {
        let _ = writeln!(out, "            <th>{}</th>", escape(&section.label));
    }
    out.push_str("            <th>Totaal</th>\n        </tr>\n    </thead>\n    <tbody>\n");

    for player in &ranking.players {
        out.push_str("        <tr>\n");
        let _ = writeln!(out, "            <td>{}</td>", rank_display(player.rank));
        let _ = writeln!(out, "            <td>{}</td>", escape(&player.name));
        for section in &ranking.sections {
            let _ = writeln!(
                out,
                "            <td>{}</td>",
                section_cell(player.points_in(&section.id))
            );
        }
        let _ = writeln!(
            out,
            "            <td><strong>{:.1}</strong></td>",
            player.total_points
        );
        out.push_str("        </tr>\n");
    }

    out.push_str("    </tbody>\n</table>\n");
    let updated = ranking.updated_at.with_timezone(&Local).date_naive();
    let _ = writeln!(
        out,
        "<p class=\"updated\">Laatst bijgewerkt: {}</p>",
        dutch_date(updated)
    );
    out.push_str("</div>\n");
    out
}

pub fn rank_display(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}

/// Zero and absent both show as a dash.
pub fn section_cell(points: Option<f64>) -> String {
    match points {
        Some(p) if p > 0.0 => format!("{:.1}", p),
        _ => "-".to_string(),
    }
}

/// `19 oktober 2026`
pub fn dutch_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_NL[date.month0() as usize],
        date.year()
    )
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
