use super::models::VisualizationPayload;

pub const WELCOME_MESSAGE: &str = "Welcome to FloatChat! I can help you explore ARGO ocean data. Ask me about ocean temperature, salinity, currents, or any marine data insights you need.";

const REPLY_PREAMBLE: &str = "I've analyzed the ARGO ocean data for your query. ";

pub const CLARIFYING_PROMPT: &str = "Could you please specify what ocean parameter you'd like to explore? I can help with temperature, salinity, currents, and more.";

/// Builds the bot reply body for a selected visualization, or a clarifying prompt.
pub fn compose(visualization: Option<&VisualizationPayload>) -> String {
    match visualization {
        Some(viz) => format!(
            "{REPLY_PREAMBLE}Here's what I found regarding {}. {}",
            viz.title.to_lowercase(),
            viz.description
        ),
        None => format!("{REPLY_PREAMBLE}{CLARIFYING_PROMPT}"),
    }
}
