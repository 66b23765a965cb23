use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        balance::EnergyBalance,
        hour::Hour,
        profile::ConsumptionProfile,
        result::SimulationResult,
        scenario::ScenarioSummary,
    },
    quantity::{cost::Cost, energy::KilowattHours, proportions::Percentage, zero::Zero},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn bill_cell(bill: Cost) -> Cell {
    Cell::new(bill)
        .set_alignment(CellAlignment::Right)
        .fg(if bill > Cost::ZERO { Color::Red } else { Color::Green })
}

fn energy_cell(energy: KilowattHours) -> Cell {
    Cell::new(energy).set_alignment(CellAlignment::Right)
}

#[must_use]
pub fn build_monthly_table(result: &SimulationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Month",
        "Generation",
        "Self-use",
        "Grid import",
        "Excess",
        "Tranche 1",
        "Tranche 2",
        "Bill",
    ]);
    for record in &result.months {
        table.add_row(vec![
            Cell::new(record.month_label()),
            energy_cell(record.generation),
            energy_cell(record.self_consumption),
            energy_cell(record.grid_import).fg(if record.grid_import > KilowattHours::ZERO {
                Color::Reset
            } else {
                Color::Green
            }),
            energy_cell(record.total_excess),
            energy_cell(record.excess_tranche_1).add_attribute(Attribute::Dim),
            energy_cell(record.excess_tranche_2).add_attribute(Attribute::Dim),
            bill_cell(record.bill),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        energy_cell(result.total_generation()),
        energy_cell(result.months.iter().map(|record| record.self_consumption).sum()),
        energy_cell(result.total_grid_import()),
        energy_cell(result.total_excess()),
        energy_cell(result.months.iter().map(|record| record.excess_tranche_1).sum()),
        energy_cell(result.months.iter().map(|record| record.excess_tranche_2).sum()),
        bill_cell(result.annual_cost).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Hourly balance of the typical day.
#[must_use]
pub fn build_balance_table(balances: &[EnergyBalance; Hour::N_HOURS]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Consumption", "Generation", "Self-use", "Surplus", "Deficit"]);
    for (hour, balance) in Hour::iter().zip(balances) {
        table.add_row(vec![
            Cell::new(hour).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.2}", balance.consumption)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", balance.generation)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", balance.self_consumption))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", balance.surplus))
                .set_alignment(CellAlignment::Right)
                .fg(if balance.surplus > KilowattHours::ZERO { Color::Green } else { Color::Reset }),
            Cell::new(format!("{:.2}", balance.deficit))
                .set_alignment(CellAlignment::Right)
                .fg(if balance.deficit > KilowattHours::ZERO { Color::Red } else { Color::Reset }),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(result: &SimulationResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["System size", "Generation", "Grid import", "Coverage", "Annual cost"]);
    table.add_row(vec![
        Cell::new(result.system_size).add_attribute(Attribute::Bold),
        energy_cell(result.total_generation()),
        energy_cell(result.total_grid_import()),
        Cell::new(result.coverage_ratio).set_alignment(CellAlignment::Right).fg(
            if result.coverage_ratio >= Percentage::HUNDRED { Color::Green } else { Color::Reset },
        ),
        bill_cell(result.annual_cost),
    ]);
    table
}

#[must_use]
pub fn build_scenario_table(scenarios: &[ScenarioSummary]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Scenario", "System size", "Coverage", "Annual cost"]);
    for scenario in scenarios {
        table.add_row(vec![
            Cell::new(&scenario.label),
            Cell::new(scenario.system_size).set_alignment(CellAlignment::Right),
            Cell::new(scenario.coverage_ratio).set_alignment(CellAlignment::Right),
            bill_cell(scenario.annual_cost),
        ]);
    }
    table
}

#[must_use]
pub fn build_profile_table(profile: &ConsumptionProfile) -> Table {
    let shares = profile.shares();
    let mut table = new_table();
    table.set_header(vec!["Hour", "Weight", "Share"]);
    for (hour, share) in Hour::iter().zip(shares) {
        let weight = profile.weight(hour);
        table.add_row(vec![
            Cell::new(hour).add_attribute(Attribute::Dim),
            Cell::new(format!("{weight:.2}"))
                .set_alignment(CellAlignment::Right)
                .fg(if weight > 0.0 { Color::Reset } else { Color::DarkYellow }),
            Cell::new(Percentage(share * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
