use anyhow::{Context, Result};
use tracing::info_span;

use podium_model::{Season, View};
use podium_transform::selection::{
    athlete_options, category_options, discipline_options, season_options,
};
use podium_transform::scope_to_view;

use podium_cli::load::load_results;
use podium_cli::report::{ViewRequest, build_cross_country, build_lower_cup};
use podium_cli::summary::{render_cross_country, render_lower_cup, render_options};

use crate::cli::{LowerCupArgs, OptionsArgs, ViewArgs};

pub fn run_cross_country(args: &ViewArgs) -> Result<()> {
    let raw = load_results(&args.input.input)?;
    let report = build_cross_country(&raw, &view_request(args))?;
    print!("{}", render_cross_country(&report)?);
    Ok(())
}

pub fn run_lower_cup(args: &LowerCupArgs) -> Result<()> {
    let raw = load_results(&args.view.input.input)?;
    let mut request = view_request(&args.view);
    request.categories = non_empty(&args.categories);
    request.genders = non_empty(&args.audience.genders);
    request.athlete_nations = non_empty(&args.audience.nations);
    request.swiss_only = args.swiss_only;
    let report = build_lower_cup(&raw, &request)?;
    print!("{}", render_lower_cup(&report)?);
    Ok(())
}

pub fn run_options(args: &OptionsArgs) -> Result<()> {
    let view = View::from(args.view);
    let span = info_span!("options", view = %view);
    let _guard = span.enter();

    let raw = load_results(&args.input.input)?;
    let scoped = scope_to_view(&raw, view)?;
    let seasons = season_options(&scoped)?;
    let season = match args.season {
        Some(code) => Season(code),
        None => *seasons.first().context("results contain no season")?,
    };
    let request = ViewRequest {
        genders: non_empty(&args.audience.genders),
        athlete_nations: non_empty(&args.audience.nations),
        ..ViewRequest::default()
    };
    let season_rows = request.audience().with_season(season).apply(&scoped)?;

    let season_labels: Vec<String> = seasons.iter().map(ToString::to_string).collect();
    print!("{}", render_options("Season", &season_labels));
    print!(
        "{}",
        render_options(&format!("Athlete ({season})"), &athlete_options(&season_rows)?)
    );
    print!("{}", render_options("Discipline", &discipline_options(&scoped)?));
    if view.includes_category() {
        print!("{}", render_options("Category", &category_options(&scoped)?));
    }
    Ok(())
}

fn view_request(args: &ViewArgs) -> ViewRequest {
    ViewRequest {
        season: args.season.map(Season::from),
        athletes: args.athletes.clone(),
        disciplines: non_empty(&args.disciplines),
        ..ViewRequest::default()
    }
}

/// An empty repeatable flag means "no restriction".
fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}
