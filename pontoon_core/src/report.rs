//! # Design Reports
//!
//! Renders an evaluated design for a front end. Every renderer implements
//! [`ReportRenderer`], so a CLI, GUI or web form only has to pick one.
//!
//! - [`TextReport`] - summary sheet, optionally followed by the derivation trace
//! - [`JsonReport`] - `{ "input": ..., "result": ... }` as pretty JSON
//! - [`ChartData`] - bar values and legend text for a weight/buoyancy chart
//!
//! ## Example
//!
//! ```rust
//! use pontoon_core::calculations::{evaluate, DesignInput};
//! use pontoon_core::report::{ReportRenderer, TextReport};
//!
//! let input = DesignInput::default();
//! let result = evaluate(&input).unwrap();
//! let text = TextReport::summary().render(&input, &result).unwrap();
//! assert!(text.starts_with("→ Status: VIABLE"));
//! ```

use serde::Serialize;

use crate::calculations::{DesignInput, DesignResult};
use crate::errors::CalcResult;

/// Anything that can turn an evaluated design into displayable text.
pub trait ReportRenderer {
    fn render(&self, input: &DesignInput, result: &DesignResult) -> CalcResult<String>;
}

// ============================================================================
// Text
// ============================================================================

/// Plain-text summary sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport {
    /// Append the derivation trace after the summary
    pub include_explanation: bool,
}

impl TextReport {
    /// Summary only
    pub fn summary() -> Self {
        TextReport {
            include_explanation: false,
        }
    }

    /// Summary plus the derivation trace
    pub fn detailed() -> Self {
        TextReport {
            include_explanation: true,
        }
    }
}

impl ReportRenderer for TextReport {
    fn render(&self, input: &DesignInput, result: &DesignResult) -> CalcResult<String> {
        let dia_ft = result.diameter_ft;
        let lines = [
            format!("→ Status: {}", result.status),
            String::new(),
            "Performance Analysis:".to_string(),
            format!("   • Total Boat Weight: {:.1} lb", result.total_boat_weight_lb),
            format!("   • Total Buoyant Force: {:.1} lb", result.total_buoyant_force_lb),
            format!("   • Actual Safety Factor: {:.2}×", result.actual_safety_factor),
            format!("   • Reserve Buoyancy: {:.1} lb", result.reserve_buoyancy_lb),
            format!("   • Draft (loaded): {:.1} in", result.draft_in),
            String::new(),
            "Pontoon Specifications:".to_string(),
            format!("   • Each Pontoon Volume: {:.2} ft³", result.volume_per_pontoon_cuft),
            format!("   • Cylinder Section: {:.1} ft × {:.1} ft dia", result.cylinder_length_ft, dia_ft),
            format!("   • Cone Section: {:.1} ft × {:.1} ft dia", result.cone_length_ft, dia_ft),
            String::new(),
            "Weight Breakdown:".to_string(),
            format!("   • Payload: {:.1} lb", input.payload_lb),
            format!("   • Pontoons (both): {:.1} lb", result.pontoon_weight_lb),
            format!("   • Frame: {:.1} lb", result.frame_weight_lb),
            format!("   • Total: {:.1} lb", result.total_boat_weight_lb),
            String::new(),
            "Material Requirements:".to_string(),
            format!("   • EPS Foam: {:.1} ft³", result.total_volume_both_cuft),
            format!("   • Coating Area: {:.1} ft²", result.total_surface_area_both_sqft),
            format!("   • Aluminum Tubing: {:.1} ft", result.total_tube_length_ft),
        ];

        let mut out = lines.join("\n");
        if self.include_explanation {
            out.push_str("\n\n--- Detailed Calculations & Explanations ---\n\n");
            out.push_str(&result.explanation_text());
        }
        Ok(out)
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Pretty-printed JSON of the input and result together.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

#[derive(Serialize)]
struct DesignReport<'a> {
    input: &'a DesignInput,
    result: &'a DesignResult,
}

impl ReportRenderer for JsonReport {
    fn render(&self, input: &DesignInput, result: &DesignResult) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&DesignReport { input, result })?)
    }
}

// ============================================================================
// Chart
// ============================================================================

/// One bar of the performance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
    /// Fill color as a hex string
    pub color: &'static str,
}

/// Data for a three-bar chart: weight, buoyancy, safety factor × 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub y_label: &'static str,
    pub bars: Vec<ChartBar>,
    /// Upper axis bound, 20% above the tallest bar
    pub y_max: f64,
}

impl ChartData {
    pub fn from_result(input: &DesignInput, result: &DesignResult) -> Self {
        let bars = vec![
            ChartBar {
                label: "Weight",
                value: result.total_boat_weight_lb,
                color: "#FF6384",
            },
            ChartBar {
                label: "Buoyancy",
                value: result.total_buoyant_force_lb,
                color: "#36A2EB",
            },
            ChartBar {
                label: "Safety Factor (×100)",
                value: result.actual_safety_factor * 100.0,
                color: "#4BC0C0",
            },
        ];
        let tallest = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

        ChartData {
            title: format!("Pontoon Design: {:.0}\" × {:.1} ft", input.diameter_in, input.length_ft),
            y_label: "lb / Safety Factor ×100",
            bars,
            y_max: tallest * 1.2,
        }
    }

    /// Legend text explaining each bar.
    pub fn explanation(&self) -> String {
        let mut out = String::from("Chart Explanation:\n");
        for bar in &self.bars {
            let meaning = match bar.label {
                "Weight" => "Total boat weight including payload, pontoons, and frame",
                "Buoyancy" => "Total buoyant force from submerged pontoon volume",
                _ => "Actual safety factor ×100 for scale",
            };
            out.push_str(&format!(" • '{}' bar = {} → {:.1}\n", bar.label, meaning, bar.value));
        }
        out.push_str(
            "\nA viable design requires the 'Buoyancy' bar to exceed the 'Weight' bar.  \
             If Buoyancy < Weight, increase pontoon diameter or reduce payload to avoid sinking.",
        );
        out
    }
}
