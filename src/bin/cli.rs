//! Matchcast CLI - match outcome predictions from the terminal

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use matchcast::classifier::{ClassifierModel, TrainOptions, EXTENDED_SAMPLE};
use matchcast::models::{FeatureSource, Outcome, Prediction, TopScorer};
use matchcast::predictor::MatchPredictor;
use matchcast::stats::{StatsClient, StatsConfig};
use matchcast::teams::{is_supported, supported_teams};

#[derive(Parser)]
#[command(name = "matchcast")]
#[command(author, version, about = "Football match outcome prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a single match
    Predict {
        /// Home team name
        #[arg(long)]
        home: String,

        /// Away team name
        #[arg(long)]
        away: String,

        /// Skip the statistics fetch and predict from default features
        #[arg(long)]
        offline: bool,
    },

    /// List supported teams
    Teams,
}

/// Presentation text for an outcome
fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HomeWin => "Home Win",
        Outcome::Draw => "Draw",
        Outcome::AwayWin => "Away Win",
    }
}

fn build_predictor(offline: bool) -> Result<MatchPredictor> {
    let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default())?;

    let client = if offline {
        None
    } else {
        match StatsClient::new(StatsConfig::from_env()) {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!(
                    "{} live statistics disabled: {}",
                    "note:".yellow().bold(),
                    e
                );
                None
            }
        }
    };

    Ok(MatchPredictor::new(model, client)?)
}

async fn predict_match(predictor: &MatchPredictor, home: &str, away: &str) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Predicting {} vs {}...", home, away));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let prediction = predictor.predict(home, away).await?;
    spinner.finish_and_clear();

    print_prediction(&prediction);
    Ok(())
}

fn print_scorer(team: &str, scorer: &Option<TopScorer>) {
    if let Some(scorer) = scorer {
        println!(
            "  {} {}: {} ({} goals)",
            "Key player".cyan(),
            team,
            scorer.name,
            scorer.goals
        );
    }
}

fn print_prediction(prediction: &Prediction) {
    println!();
    println!(
        "{} {} vs {}",
        "Match:".bold(),
        prediction.home_team,
        prediction.away_team
    );

    if prediction.source == FeatureSource::Fallback {
        let reason = prediction
            .fallback_reason
            .as_deref()
            .unwrap_or("unknown reason");
        println!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("no live data ({}), using default stats", reason).yellow()
        );
    }

    print_scorer(&prediction.home_team, &prediction.home_top_scorer);
    print_scorer(&prediction.away_team, &prediction.away_top_scorer);

    let probs = &prediction.result.probabilities;
    println!(
        "{} {}",
        "Prediction:".bold(),
        outcome_label(prediction.result.outcome).green().bold()
    );
    println!(
        "  Home Win ({}): {:.2}%",
        prediction.home_team, probs.home_win
    );
    println!("  Draw: {:.2}%", probs.draw);
    println!(
        "  Away Win ({}): {:.2}%",
        prediction.away_team, probs.away_win
    );
}

fn print_teams() {
    println!("{}", "Supported teams:".bold());
    for team in supported_teams() {
        println!("  {}", team);
    }
}

async fn run_interactive() -> Result<()> {
    let predictor = build_predictor(false)?;
    let teams = supported_teams();
    let theme = ColorfulTheme::default();

    loop {
        let home = Select::with_theme(&theme)
            .with_prompt("Home team")
            .items(&teams)
            .default(0)
            .interact()?;
        let away = Select::with_theme(&theme)
            .with_prompt("Away team")
            .items(&teams)
            .default(0)
            .interact()?;

        predict_match(&predictor, teams[home], teams[away]).await?;

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Predict another match?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.interactive {
        return run_interactive().await;
    }

    match cli.command {
        Some(Commands::Predict { home, away, offline }) => {
            for name in [home.as_str(), away.as_str()] {
                if !is_supported(name) {
                    bail!(
                        "unknown team '{}', run `matchcast teams` for the supported list",
                        name
                    );
                }
            }

            let predictor = build_predictor(offline)?;
            predict_match(&predictor, &home, &away).await?;
        }
        Some(Commands::Teams) => print_teams(),
        None => {
            print_teams();
            println!();
            println!("Run with --interactive or `matchcast predict --home <team> --away <team>`");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_label(Outcome::HomeWin), "Home Win");
        assert_eq!(outcome_label(Outcome::Draw), "Draw");
        assert_eq!(outcome_label(Outcome::AwayWin), "Away Win");
    }
}
