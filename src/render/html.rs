//! Server-rendered chat page.

use std::fmt::Write as _;

use chrono::Local;

use super::chart::{ChartKind, ChartSpec};
use super::{ChatView, QUICK_QUESTIONS, THINKING_LABEL};
use crate::chat::controller::Transcript;
use crate::chat::models::{ChatMessage, Role, VisualizationKind};

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PAD: f64 = 32.0;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: linear-gradient(135deg, #eff6ff, #ffffff, #f0fdfa); color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 16px 24px; }
header h1 { margin: 0; font-size: 24px; }
header p { margin: 0; font-size: 14px; color: #4b5563; }
main { display: grid; grid-template-columns: 1fr 3fr; gap: 24px; max-width: 1280px; margin: 24px auto; padding: 0 16px; }
aside, section { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; }
aside a { display: block; padding: 8px; margin-bottom: 8px; border-radius: 8px; background: #f9fafb; color: inherit; text-decoration: none; font-size: 14px; }
aside a:hover { background: #eff6ff; color: #1d4ed8; }
section { display: flex; flex-direction: column; height: 80vh; }
.messages { flex: 1; overflow-y: auto; }
.row { display: flex; margin-bottom: 16px; }
.row.user { justify-content: flex-end; }
.bubble { max-width: 48rem; border-radius: 16px; padding: 12px 16px; }
.user .bubble { background: #2563eb; color: #fff; }
.bot .bubble { background: #f3f4f6; }
.who { font-size: 14px; font-weight: 600; margin-bottom: 4px; }
.time { font-size: 12px; margin-top: 8px; opacity: 0.7; }
.chart { margin-top: 16px; padding: 16px; border-radius: 8px; }
.chart.temperature { background: #eff6ff; border: 1px solid #bfdbfe; }
.chart.salinity { background: #f0fdfa; border: 1px solid #99f6e4; }
.chart.currents { background: #faf5ff; border: 1px solid #e9d5ff; }
form { display: flex; gap: 12px; border-top: 1px solid #e5e7eb; padding-top: 16px; }
form input { flex: 1; padding: 12px 16px; border: 1px solid #d1d5db; border-radius: 12px; }
form button { padding: 12px 24px; background: #2563eb; color: #fff; border: 0; border-radius: 12px; }
form button:disabled { opacity: 0.5; cursor: not-allowed; }
"#;

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn render_page(transcript: &Transcript, view: &ChatView) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>FloatChat</title>\n");
    if transcript.pending {
        // Poll until the reply lands.
        html.push_str("<meta http-equiv=\"refresh\" content=\"1; url=/chat#latest\">\n");
    }
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");

    html.push_str(
        "<header><h1>FloatChat</h1><p>AI-Powered ARGO Ocean Data Discovery</p></header>\n<main>\n",
    );
    render_sidebar(&mut html);

    html.push_str("<section>\n<div class=\"messages\">\n");
    for message in &transcript.messages {
        render_message(&mut html, message);
    }
    if transcript.pending {
        let _ = writeln!(
            html,
            "<div class=\"row bot\"><div class=\"bubble\"><div class=\"who\">{THINKING_LABEL}</div></div></div>"
        );
    }
    html.push_str("<div id=\"latest\"></div>\n</div>\n");

    let disabled = if transcript.pending { " disabled" } else { "" };
    let _ = writeln!(
        html,
        "<form id=\"composer\" method=\"post\" action=\"/chat\">\
         <input type=\"text\" name=\"text\" value=\"{}\" autofocus \
         placeholder=\"Ask about ocean temperature, salinity, currents, or any marine data...\">\
         <button type=\"submit\"{disabled}>Send</button></form>",
        escape(view.draft())
    );
    html.push_str("</section>\n</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String) {
    html.push_str("<aside>\n<h3>Quick Questions</h3>\n");
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        let _ = writeln!(
            html,
            "<a href=\"/chat?pick={index}#composer\">{}</a>",
            escape(question)
        );
    }
    html.push_str("</aside>\n");
}

fn render_message(html: &mut String, message: &ChatMessage) {
    let class = match message.role {
        Role::User => "user",
        Role::Bot => "bot",
    };
    let _ = write!(
        html,
        "<div class=\"row {class}\" id=\"m{}\"><div class=\"bubble\"><div class=\"who\">{}</div><div>{}</div>",
        message.id,
        message.role.display_name(),
        escape(&message.text)
    );
    if let Some(viz) = &message.visualization {
        html.push_str(&render_chart(&ChartSpec::from_payload(viz)));
    }
    let _ = writeln!(
        html,
        "<div class=\"time\">{}</div></div></div>",
        message.created_at.with_timezone(&Local).format("%H:%M:%S")
    );
}

fn colors(kind: VisualizationKind) -> (&'static str, &'static str) {
    match kind {
        VisualizationKind::Temperature => ("#2563eb", "none"),
        VisualizationKind::Salinity => ("#0d9488", "#5eead4"),
        VisualizationKind::Currents => ("#7c3aed", "#7c3aed"),
    }
}

/// Inline SVG chart; line, area or scatter depending on the spec.
pub fn render_chart(spec: &ChartSpec) -> String {
    let (stroke, fill) = colors(spec.visualization);
    let plot_w = CHART_WIDTH - 2.0 * CHART_PAD;
    let plot_h = CHART_HEIGHT - 2.0 * CHART_PAD;
    let step = if spec.points.len() > 1 {
        plot_w / (spec.points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<(f64, f64)> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = CHART_PAD + step * i as f64;
            let y = CHART_PAD + plot_h * (1.0 - spec.normalized(p.value));
            (x, y)
        })
        .collect();
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<div class=\"chart {}\"><h4>{}</h4>\
         <svg viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" role=\"img\" data-chart=\"{}\" aria-label=\"{} by {}\">",
        spec.visualization.as_str(),
        escape(&spec.title),
        chart_name(spec.kind),
        spec.y_key,
        spec.x_key
    );

    let baseline = CHART_PAD + plot_h;
    match spec.kind {
        ChartKind::Line => {
            let _ = write!(
                svg,
                "<polyline points=\"{polyline}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"3\"/>"
            );
            for (x, y) in &coords {
                let _ = write!(svg, "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4\" fill=\"{stroke}\"/>");
            }
        }
        ChartKind::Area => {
            if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
                let _ = write!(
                    svg,
                    "<polygon points=\"{:.1},{baseline:.1} {polyline} {:.1},{baseline:.1}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>",
                    first.0, last.0
                );
            }
        }
        ChartKind::Scatter => {
            for (x, y) in &coords {
                let _ = write!(svg, "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"5\" fill=\"{fill}\"/>");
            }
        }
    }

    for ((x, _), point) in coords.iter().zip(&spec.points) {
        let _ = write!(
            svg,
            "<text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"middle\">{}</text>",
            CHART_HEIGHT - CHART_PAD / 3.0,
            escape(&point.label)
        );
    }
    svg.push_str("</svg></div>");
    svg
}

fn chart_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Area => "area",
        ChartKind::Scatter => "scatter",
    }
}
