use std::fmt::Write as _;

use chrono::Local;

use super::chart::{ChartKind, ChartSpec};
use super::{QUICK_QUESTIONS, THINKING_LABEL};
use crate::chat::models::ChatMessage;

const PLOT_WIDTH: usize = 32;

pub fn render_message(message: &ChatMessage) -> String {
    let mut out = format!(
        "[{}] {}> {}\n",
        message.created_at.with_timezone(&Local).format("%H:%M:%S"),
        message.role.display_name(),
        message.text
    );
    if let Some(viz) = &message.visualization {
        out.push_str(&render_chart(&ChartSpec::from_payload(viz)));
    }
    out
}

pub fn render_thinking() -> String {
    format!("{THINKING_LABEL}\n")
}

pub fn render_quick_questions() -> String {
    let mut out = String::from("Quick Questions\n");
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {question}", index + 1);
    }
    out
}

/// One row per point. Lines plot a marker, areas fill up to the value, scatters a dot.
pub fn render_chart(spec: &ChartSpec) -> String {
    let mut out = format!("  {} ({} by {})\n", spec.title, spec.y_key, spec.x_key);
    let label_width = spec
        .points
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(0);

    for point in &spec.points {
        let column = (spec.normalized(point.value) * (PLOT_WIDTH - 1) as f64).round() as usize;
        let row: String = (0..PLOT_WIDTH)
            .map(|i| match spec.kind {
                ChartKind::Line if i == column => '*',
                ChartKind::Line if i < column => '-',
                ChartKind::Area if i <= column => '#',
                ChartKind::Scatter if i == column => 'o',
                _ => ' ',
            })
            .collect();
        let _ = writeln!(
            out,
            "  {:>label_width$} |{}| {:.2}",
            point.label,
            row.trim_end(),
            point.value
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::VisualizationPayload;

    #[test]
    fn area_rows_fill_to_the_value() {
        let spec = ChartSpec::from_payload(&VisualizationPayload::salinity());
        let text = render_chart(&spec);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), spec.points.len() + 1);
        // 200 m carries the maximum salinity
        assert!(lines[4].contains(&"#".repeat(PLOT_WIDTH)));
        assert!(lines[4].ends_with("35.80"));
    }

    #[test]
    fn quick_questions_are_numbered_from_one() {
        let text = render_quick_questions();
        assert!(text.contains("  1. Show me temperature trends in the Indian Ocean"));
        assert!(text.contains("  4. Display seasonal temperature variations"));
    }
}
