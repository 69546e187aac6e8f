use chessrank::standings::{aggregate, extract, SectionStandings};
use chessrank::text::visible_text;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const GIVEN: [&str; 8] = ["Jan", "Anna", "Piet", "Karel", "Lotte", "Bram", "Els", "Wim"];
const FAMILY: [&str; 6] = ["Peeters", "Smit", "de Vries", "Janssens", "Claes", "Wouters"];

fn player(i: usize) -> String {
    format!("{} {} {}", GIVEN[i % GIVEN.len()], FAMILY[i % FAMILY.len()], i)
}

fn synthetic_page(players: usize, offset: usize) -> String {
    let mut lines = vec![
        "Tornelo".to_string(),
        "Standings".to_string(),
        "Round 7/7".to_string(),
        format!("{} items", players),
    ];
    for i in 0..players {
        let id = i + offset;
        lines.push((i + 1).to_string());
        if id % 11 == 0 {
            lines.push("extern".to_string());
        }
        lines.push(player(id));
        lines.push((1200 + (id * 37) % 1000).to_string());
        lines.push(if id % 2 == 0 { "Male" } else { "Female" }.to_string());
        lines.push(format!("{}½", (players - i) % 7));
        lines.push(format!("↑{}", id % 30));
        lines.push(format!("+{}", id % 90));
        lines.push("3-2-2".to_string());
    }
    lines.join("\n")
}

fn synthetic_html(players: usize) -> String {
    let rows: String = synthetic_page(players, 0)
        .lines()
        .map(|l| format!("<div><span>{}</span></div>", l))
        .collect();
    format!(
        "<html><head><script>window.x = 1;</script></head><body>{}</body></html>",
        rows
    )
}

fn criterion_benchmark(c: &mut Criterion) {
    let page = synthetic_page(200, 0);
    c.bench_function("extract (200 players)", |b| {
        b.iter(|| extract(black_box(&page)))
    });

    let html = synthetic_html(200);
    c.bench_function("visible_text (200 players)", |b| {
        b.iter(|| visible_text(black_box(&html)))
    });

    let sections: Vec<SectionStandings> = (0..6)
        .map(|s| SectionStandings::new(format!("blok-{}", s + 1), extract(&synthetic_page(200, s * 40))))
        .collect();
    c.bench_function("aggregate (6 sections)", |b| {
        b.iter(|| aggregate(black_box(&sections)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
