use anyhow::{Context, Result};

use super::OutputFormat;
use crate::api::DEFAULT_MATCH_STATUSES;
use crate::competition::Competition;
use crate::data_provider::FootballDataProvider;
use crate::html;
use crate::normalize::normalize_matches;
use crate::ordering::{order_and_cap, DISPLAY_CAP};
use crate::render::{render_matches, MatchesContent, NO_MATCHES_MESSAGE};

pub fn format_matches_text(competition: Competition, content: &MatchesContent) -> String {
    let cards = match content {
        MatchesContent::Cards(cards) => cards,
        MatchesContent::NoData => return format!("{}\n", NO_MATCHES_MESSAGE),
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", competition.name()));

    for card in cards {
        output.push_str(&format!(
            "\n{}  [{}]\n  {}  {}  {}\n",
            card.kickoff_label, card.status_label, card.home_team, card.score_line, card.away_team
        ));
    }

    output
}

pub async fn run(
    client: &dyn FootballDataProvider,
    competition: Competition,
    format: OutputFormat,
) -> Result<()> {
    let raw = client
        .matches(competition, DEFAULT_MATCH_STATUSES)
        .await
        .context("Failed to fetch matches")?;
    let matches = normalize_matches(&raw).context("Failed to normalize matches")?;
    let content = render_matches(&order_and_cap(matches, DISPLAY_CAP));

    match format {
        OutputFormat::Text => print!("{}", format_matches_text(competition, &content)),
        OutputFormat::Html => println!("{}", html::matches_fragment(&content)),
    }

    Ok(())
}
