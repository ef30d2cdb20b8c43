//! Text rendering of a calculator snapshot

use std::fmt::Write;

use crate::state::CalculatorState;
use crate::types::{ActiveMode, Preset};

/// Render the form as a plain-text panel.
///
/// The input side of the active mode is marked `>`; the derived side `=`.
pub fn render(state: &CalculatorState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Running Pace Calculator");
    let _ = writeln!(out, "  {}", mode_tabs(state.mode));
    let _ = writeln!(out, "  Distance: {}", distance_line(state));
    let _ = writeln!(out, "  Unit:     {}", state.unit.name());

    let (pace_marker, time_marker) = match state.mode {
        ActiveMode::PaceToTime => ('>', '='),
        ActiveMode::TimeToPace => ('=', '>'),
    };
    let pace_caption = format!("Pace (per {})", state.unit.abbreviation());
    let pace_line = format!("{} {:<16}{}", pace_marker, pace_caption, state.pace);
    let time_line = format!("{} {:<16}{}", time_marker, "Total Time", state.time);

    match state.mode {
        ActiveMode::PaceToTime => {
            let _ = writeln!(out, "  {}", pace_line);
            let _ = writeln!(out, "  {}", time_line);
        }
        ActiveMode::TimeToPace => {
            let _ = writeln!(out, "  {}", time_line);
            let _ = writeln!(out, "  {}", pace_line);
        }
    }

    if !state.has_valid_distance() {
        let _ = writeln!(out, "  (enter a distance above zero)");
    }
    out
}

fn mode_tabs(mode: ActiveMode) -> String {
    [ActiveMode::PaceToTime, ActiveMode::TimeToPace]
        .iter()
        .map(|tab| {
            if *tab == mode { format!("[{}]", tab.label()) } else { format!(" {} ", tab.label()) }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn distance_line(state: &CalculatorState) -> String {
    if state.is_custom {
        return format!(
            "Custom {} {}",
            trim_number(state.custom_distance),
            state.unit.abbreviation()
        );
    }
    match state.selected_preset() {
        Some(preset) => preset.label().to_string(),
        None => format!("{} {}", trim_number(state.distance), state.unit.abbreviation()),
    }
}

/// Up to six decimals without trailing zeros.
fn trim_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// One line listing the presets, for help output.
pub fn preset_summary() -> String {
    Preset::ALL
        .iter()
        .map(|preset| format!("{} ({} km)", preset.label(), preset.km()))
        .collect::<Vec<_>>()
        .join(", ")
}
