//! Subcommand handlers

use crate::EXIT_BLOCKED;
use anyhow::Context;
use clap::ArgMatches;
use std::io::Write;
use std::path::PathBuf;
use stk_catalog::{find_prebuilt, prebuilt_templates, security_levels, CatalogFilter, TypeCategory};
use stk_core::{Workbench, WorkbenchConfig};
use stk_exchange::ExportFormat;
use stk_validation::{FindingStatus, ValidationReport};

pub(crate) fn catalog(args: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<u8> {
    let bench = Workbench::default();
    let mut filter = CatalogFilter::new();
    if let Some(category) = args.get_one::<TypeCategory>("category") {
        filter = filter.with_category(*category);
    }
    if let Some(text) = args.get_one::<String>("search") {
        filter = filter.with_search(text.as_str());
    }

    let entries = bench.browse(&filter);
    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(0);
    }

    for entry in &entries {
        writeln!(
            out,
            "{:<20} {:<12} {}",
            entry.name, entry.human_category, entry.description
        )?;
    }
    writeln!(out, "{} of {} data types", entries.len(), bench.catalog().len())?;
    Ok(0)
}

pub(crate) fn security(args: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<u8> {
    let levels = security_levels();
    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(levels)?)?;
        return Ok(0);
    }

    for level in levels {
        let signature = if level.classification.requires_signature() {
            " (signature)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<14} {}{signature}\n               typical use: {}",
            level.classification.to_string(),
            level.description,
            level.typical_use
        )?;
    }
    Ok(0)
}

pub(crate) fn prebuilt(
    config: &WorkbenchConfig,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let Some(key) = args.get_one::<String>("key") else {
        for template in prebuilt_templates() {
            writeln!(
                out,
                "{:<8} {:<18} {:>2} attributes  {}",
                template.key,
                template.name,
                template.attribute_count(),
                template.description
            )?;
        }
        return Ok(0);
    };

    let bench = Workbench::new(config);
    let template = find_prebuilt(key)?;
    let format = args
        .get_one::<ExportFormat>("format")
        .copied()
        .unwrap_or(config.exchange.default_format);
    let text = bench.export(&template.to_draft(), format)?;
    writeln!(out, "{text}")?;
    Ok(0)
}

pub(crate) async fn validate(
    config: &WorkbenchConfig,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let bench = Workbench::new(config);
    let file = required_path(args, "file")?;

    let mut draft = bench
        .import_file(file)
        .await
        .with_context(|| format!("importing {}", file.display()))?
        .draft;

    let report = if args.get_flag("fix") {
        let outcome = bench.auto_fix(&mut draft);
        for fix in &outcome.applied {
            tracing::info!(%fix, "applied fix");
        }
        outcome.report
    } else {
        bench.validate(&draft)
    };

    if args.get_flag("json") {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&draft.name, &report, out)?;
    }

    if let Some(path) = args.get_one::<PathBuf>("out") {
        bench
            .export_file(&draft, path)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(if report.is_blocked() { EXIT_BLOCKED } else { 0 })
}

pub(crate) async fn convert(
    config: &WorkbenchConfig,
    args: &ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let bench = Workbench::new(config);
    let file = required_path(args, "file")?;
    let format = *args
        .get_one::<ExportFormat>("to")
        .context("missing --to")?;

    if let Some(path) = args.get_one::<PathBuf>("out") {
        let receipt = bench
            .exchange()
            .convert_file(file, path, format)
            .await
            .with_context(|| format!("converting {} to {}", file.display(), path.display()))?;
        tracing::info!(path = %receipt.path.display(), bytes = receipt.bytes, "converted");
        return Ok(0);
    }

    let imported = bench
        .import_file(file)
        .await
        .with_context(|| format!("importing {}", file.display()))?;
    let text = bench.export(&imported.draft, format)?;
    writeln!(out, "{text}")?;
    Ok(0)
}

fn required_path<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a PathBuf> {
    args.get_one::<PathBuf>(name)
        .with_context(|| format!("missing <{name}>"))
}

fn write_report(name: &str, report: &ValidationReport, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "Template: {name}")?;
    for finding in &report.findings {
        if finding.status == FindingStatus::Success {
            continue;
        }
        match &finding.fix {
            Some(fix) => writeln!(out, "  {finding} (fix: {fix})")?,
            None => writeln!(out, "  {finding}")?,
        }
    }
    writeln!(
        out,
        "Score: {} ({} error(s), {} warning(s), {} passed)",
        report.score,
        report.error_count(),
        report.warning_count(),
        report.success_count()
    )?;
    Ok(())
}
