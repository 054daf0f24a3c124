use anyhow::{Context, Result};
use tracing::{info, info_span};

use rxmatch_cli::config::AppConfig;
use rxmatch_cli::loader::{load_catalog, load_source};
use rxmatch_cli::logging::redact_value;
use rxmatch_cli::render::{
    render_cross_check, render_interactions, render_match, render_medications, to_json,
};
use rxmatch_core::{
    CrossChecker, MedicationOptions, collect_interactions, parse_drug_list, resolve_medications,
};
use rxmatch_map::{CatalogMatchOptions, CatalogMatcher, InteractionMatchOptions, InteractionNameMatcher};

use crate::cli::{CheckArgs, InteractionsArgs, MedsArgs, NameMatchArgs, OutputFormatArg, SearchArgs};

/// Settings shared by every subcommand.
pub struct CommandContext {
    pub config: AppConfig,
    pub format: OutputFormatArg,
    pub styled: bool,
}

/// Rendered command output and whether it counts as success for the exit code.
pub struct Outcome {
    pub rendered: String,
    pub success: bool,
}

impl CommandContext {
    fn drug_matcher(&self, path: &std::path::Path) -> Result<CatalogMatcher> {
        let catalog = load_catalog(path)?;
        CatalogMatcher::new(catalog, self.config.catalog).context("build catalog matcher")
    }

    fn json(&self) -> bool {
        self.format == OutputFormatArg::Json
    }
}

pub fn run_search(args: &SearchArgs, ctx: &CommandContext) -> Result<Outcome> {
    let span = info_span!("search", query = %redact_value(&args.query));
    let _guard = span.enter();

    let options = CatalogMatchOptions {
        threshold: args.threshold.unwrap_or(ctx.config.catalog.threshold),
    };
    let catalog = load_catalog(&args.catalog)?;
    let matcher = CatalogMatcher::new(catalog, options).context("build catalog matcher")?;
    let result = matcher.find_best(&args.query);
    if let Some(found) = &result {
        info!(name = %redact_value(found.name()), distance = found.distance, "matched");
    }

    let rendered = if ctx.json() {
        to_json(&result)?
    } else {
        render_match(&args.query, &result, ctx.styled)
    };
    Ok(Outcome {
        rendered,
        success: result.is_some(),
    })
}

pub fn run_meds(args: &MedsArgs, ctx: &CommandContext) -> Result<Outcome> {
    let matcher = ctx.drug_matcher(&args.drugs)?;
    let options = MedicationOptions {
        max_medications: args
            .max_medications
            .unwrap_or(ctx.config.medications.max_medications),
    };
    let resolution = resolve_medications(&args.names, &matcher, &options)?;
    let rendered = if ctx.json() {
        to_json(&resolution)?
    } else {
        render_medications(&resolution, ctx.styled)
    };
    Ok(Outcome {
        rendered,
        success: resolution.all_found(),
    })
}

pub fn run_interactions(args: &InteractionsArgs, ctx: &CommandContext) -> Result<Outcome> {
    let span = info_span!("interactions", drug = %redact_value(&args.drug));
    let _guard = span.enter();

    let matcher = ctx.drug_matcher(&args.drugs)?;
    let source = load_source(&args.source, ctx.config.severity.table()?)?;
    let set = collect_interactions(&source, &matcher, &args.drug)?;
    let rendered = if ctx.json() {
        to_json(&set)?
    } else {
        render_interactions(&args.drug, &set, ctx.styled)
    };
    Ok(Outcome {
        rendered,
        success: true,
    })
}

pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> Result<Outcome> {
    let span = info_span!("check", prescribed = %redact_value(&args.prescribed));
    let _guard = span.enter();

    let matcher = ctx.drug_matcher(&args.drugs)?;
    let source = load_source(&args.source, ctx.config.severity.table()?)?;
    let names = InteractionNameMatcher::new(name_options(&args.matching, ctx.config.interaction))
        .context("build interaction name matcher")?;
    let drugs = parse_drug_list(&args.drugs_list);
    let report = CrossChecker::new(&source, &matcher, names).check(&args.prescribed, &drugs)?;
    let rendered = if ctx.json() {
        to_json(&report)?
    } else {
        render_cross_check(&report, ctx.styled)
    };
    Ok(Outcome {
        rendered,
        success: true,
    })
}

fn name_options(args: &NameMatchArgs, base: InteractionMatchOptions) -> InteractionMatchOptions {
    InteractionMatchOptions {
        window: args.window.unwrap_or(base.window),
        inner_threshold: args.inner_threshold.unwrap_or(base.inner_threshold),
        ..base
    }
}
