use anyhow::{Context, Result};

use super::{pad_right, OutputFormat};
use crate::competition::Competition;
use crate::data_provider::FootballDataProvider;
use crate::html;
use crate::normalize::normalize_standings;
use crate::render::{render_standings, StandingsContent, NO_STANDINGS_MESSAGE};

// Layout Constants
/// Width of position column
const POS_COL_WIDTH: usize = 3;

/// Width of team name column
const TEAM_NAME_COL_WIDTH: usize = 24;

/// Width of played/won/draw/lost columns
const COUNT_COL_WIDTH: usize = 3;

/// Width of points column
const PTS_COL_WIDTH: usize = 4;

/// Total table width for the header underline
const TABLE_WIDTH: usize =
    POS_COL_WIDTH + 1 + TEAM_NAME_COL_WIDTH + 4 * (COUNT_COL_WIDTH + 1) + PTS_COL_WIDTH + 1;

pub fn format_standings_text(competition: Competition, content: &StandingsContent) -> String {
    let table = match content {
        StandingsContent::Table(table) => table,
        StandingsContent::NoData => return format!("{}\n", NO_STANDINGS_MESSAGE),
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", competition.name(), "─".repeat(TABLE_WIDTH)));

    output.push_str(&format!(
        "{} {} {} {} {} {} {:>pts_width$}\n",
        pad_right(table.headers[0], POS_COL_WIDTH),
        pad_right(table.headers[1], TEAM_NAME_COL_WIDTH),
        pad_right(table.headers[2], COUNT_COL_WIDTH),
        pad_right(table.headers[3], COUNT_COL_WIDTH),
        pad_right(table.headers[4], COUNT_COL_WIDTH),
        pad_right(table.headers[5], COUNT_COL_WIDTH),
        table.headers[6],
        pts_width = PTS_COL_WIDTH
    ));

    for row in &table.rows {
        output.push_str(&format!(
            "{} {} {} {} {} {} {:>pts_width$}\n",
            pad_right(&row[0], POS_COL_WIDTH),
            pad_right(&row[1], TEAM_NAME_COL_WIDTH),
            pad_right(&row[2], COUNT_COL_WIDTH),
            pad_right(&row[3], COUNT_COL_WIDTH),
            pad_right(&row[4], COUNT_COL_WIDTH),
            pad_right(&row[5], COUNT_COL_WIDTH),
            row[6],
            pts_width = PTS_COL_WIDTH
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
        .standings(competition)
        .await
        .context("Failed to fetch standings")?;
    let rows = normalize_standings(&raw).context("Failed to normalize standings")?;
    let content = render_standings(&rows);

    match format {
        OutputFormat::Text => print!("{}", format_standings_text(competition, &content)),
        OutputFormat::Html => println!("{}", html::standings_fragment(&content)),
    }

    Ok(())
}
