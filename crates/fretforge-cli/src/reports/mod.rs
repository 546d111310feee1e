use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fretforge_core::pitch::Pitch;
use fretforge_core::position::Realization;
use fretforge_core::scorer::StaticCost;
use fretforge_core::solver::{FingeringAlternatives, RankedPath};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn pitch_names(step: &[Pitch]) -> String {
    step.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_best_path(steps: &[Vec<Pitch>], best: &RankedPath) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Pitches"),
        Cell::new("Frets").fg(Color::Cyan),
        Cell::new("Difficulty"),
        Cell::new("Stretch (mm)"),
        Cell::new("Static"),
    ]);
    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, candidate) in best.steps.iter().enumerate() {
        let c: &StaticCost = &candidate.static_cost;
        table.add_row(vec![
            Cell::new(i).add_attribute(Attribute::Bold),
            Cell::new(pitch_names(&steps[i])),
            Cell::new(candidate.realization.tab_string()).fg(Color::Cyan),
            Cell::new(c.difficulty.to_string()),
            Cell::new(format!("{:.1}", c.max_stretch_mm)),
            Cell::new(format!("{:.1}", c.total)),
        ]);
    }

    println!("\n🏆 Best path, total cost {:.1}", best.total_cost);
    println!("{}", table);
}

pub fn print_ranking(paths: &[RankedPath]) {
    if paths.len() < 2 {
        return;
    }
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Frets"),
    ]);

    for (rank, path) in paths.iter().enumerate() {
        let tabs: Vec<String> = path
            .steps
            .iter()
            .map(|c| c.realization.tab_string())
            .collect();
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{:.1}", path.total_cost)).fg(Color::Cyan),
            Cell::new(tabs.join("  ")),
        ]);
    }

    println!("\n{} ranked paths", paths.len());
    println!("{}", table);
}

pub fn print_alternatives(alts: &FingeringAlternatives) {
    let buckets = [
        ("Open position", &alts.open_position),
        ("Compact", &alts.compact),
        ("High position", &alts.high_position),
    ];
    if buckets.iter().all(|(_, p)| p.is_none()) {
        return;
    }

    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Bucket").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Frets"),
    ]);
    for (name, pick) in buckets {
        if let Some(path) = pick {
            let tabs: Vec<String> = path
                .steps
                .iter()
                .map(|c| c.realization.tab_string())
                .collect();
            table.add_row(vec![
                Cell::new(name),
                Cell::new(format!("{:.1}", path.total_cost)).fg(Color::Cyan),
                Cell::new(tabs.join("  ")),
            ]);
        }
    }

    println!("\nAlternative fingerings");
    println!("{}", table);
}

pub fn print_candidates(scored: &[(Realization, StaticCost)]) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Frets").add_attribute(Attribute::Bold),
        Cell::new("Difficulty"),
        Cell::new("Span"),
        Cell::new("Stretch (mm)"),
        Cell::new("Diagonal (mm)"),
        Cell::new("Factor"),
        Cell::new("Total").fg(Color::Cyan),
    ]);
    for i in 2..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (realization, cost) in scored {
        table.add_row(vec![
            Cell::new(realization.tab_string()).add_attribute(Attribute::Bold),
            Cell::new(cost.difficulty.to_string()),
            Cell::new(cost.fret_span),
            Cell::new(format!("{:.1}", cost.max_stretch_mm)),
            Cell::new(format!("{:.1}", cost.diagonal_mm)),
            Cell::new(format!("{:.2}", cost.position_factor)),
            Cell::new(format!("{:.1}", cost.total)).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}
