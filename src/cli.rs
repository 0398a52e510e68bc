// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{
    consts::DEFAULT_PAGE_FILE,
    options::{AppOptions, ExportFormat, TableSelector},
    scale::GradeScale,
};
use crate::{file, runner};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

#[derive(Debug, Parser)]
#[command(name = "cli", about = "Compute a GPA from a saved student-portal courses page")]
struct Args {
    /// Saved page source (HTML)
    #[arg(short, long, default_value = DEFAULT_PAGE_FILE)]
    input: PathBuf,

    /// Grade scale CSV with a `grade,points` header (default: built-in A+..F)
    #[arg(long)]
    scale: Option<PathBuf>,

    /// Grade that never counts; repeat to list several (default: Con, 0, empty)
    #[arg(long = "sentinel")]
    sentinels: Vec<String>,

    /// Tag name of the course table
    #[arg(long)]
    table_tag: Option<String>,

    /// Space-separated classes the course table carries
    #[arg(long)]
    table_class: Option<String>,

    /// Also export the course table to this file
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Write a header row in the export
    #[arg(long)]
    include_headers: bool,

    /// Mirror the diagnostics log to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::set_echo(args.verbose);

    let mut scale = match &args.scale {
        Some(p) => file::load_scale(p)
            .wrap_err_with(|| format!("loading grade scale {}", p.display()))?,
        None => GradeScale::default(),
    };
    if !args.sentinels.is_empty() {
        scale = scale.with_sentinels(args.sentinels.iter().cloned());
    }

    let mut opts = AppOptions::default();
    opts.extract.input = args.input.clone();
    let defaults = TableSelector::default();
    opts.extract.selector = TableSelector::new(
        args.table_tag.clone().unwrap_or(defaults.tag),
        args.table_class.clone().unwrap_or(defaults.classes),
    );

    logf!("CLI: input={} selector={}", args.input.display(), opts.extract.selector.to_css());

    let summary = runner::run_file(&opts.extract.input, &opts.extract, &scale)
        .wrap_err("extracting courses")?;

    let report = summary.courses.report(&scale);
    for (i, c) in summary.courses.iter().enumerate() {
        if report.is_counted(i) {
            println!("{:<10} {:<40} {:>3}  {}", c.code, c.name, c.credits, c.grade);
        }
    }
    println!("Total Credits: {}", report.result.total_credits);
    println!("GPA: {}", report.result.gpa_display());

    if let Some(out) = &args.out {
        opts.export.format = match args.format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        };
        opts.export.include_headers = args.include_headers;
        opts.export.set_path(&out.to_string_lossy());

        let path = file::write_export(&opts.export, summary.courses.as_slice(), &report, &scale)
            .wrap_err("writing export")?;
        logf!("Export: wrote {}", path.display());
        println!("Wrote {}", path.display());
    }

    Ok(())
}
