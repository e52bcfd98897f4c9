//! This module contains the main entrypoint to the hboard cli.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use hboard_dataset::{DatasetStatistics, PanelConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
	about = "Render dataset statistics as an html dashboard panel.",
	version,
	disable_help_subcommand = true,
)]
enum Options {
	#[clap(name = "render")]
	Render(RenderOptions),
	#[clap(name = "options")]
	Options(ChartOptionsOptions),
}

#[derive(Parser, Debug)]
#[clap(about = "render the dataset panel")]
#[clap(long_about = "render the dataset panel from a statistics .json file to an html page")]
struct RenderOptions {
	#[clap(short, long, help = "the path to your statistics .json file")]
	stats: PathBuf,
	#[clap(short, long, help = "the path to write the .html file to")]
	output: Option<PathBuf>,
	#[clap(
		short,
		long,
		env = "HBOARD_CONFIG",
		help = "the path to a panel config .json file"
	)]
	config: Option<PathBuf>,
	#[clap(long, help = "write only the panel, without the surrounding html document")]
	fragment: bool,
}

#[derive(Parser, Debug)]
#[clap(about = "print the target distribution chart options")]
#[clap(long_about = "print the ECharts options of the target distribution chart as json")]
struct ChartOptionsOptions {
	#[clap(short, long, help = "the path to your statistics .json file")]
	stats: PathBuf,
	#[clap(long, help = "pretty print the json")]
	pretty: bool,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_env("HBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::Render(options) => cli_render(options),
		Options::Options(options) => cli_options(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_render(options: RenderOptions) -> Result<()> {
	let statistics = read_statistics(&options.stats)?;
	let config = match options.config.as_deref() {
		Some(path) => read_config(path)?,
		None => PanelConfig::default(),
	};
	let html = if options.fragment {
		hboard_dataset::render_panel(&statistics, &config)?
	} else {
		hboard_dataset::render_page(&statistics, &config)?
	};

	// Retrieve the output path from the command line arguments or generate a default.
	let output_path = match options.output {
		Some(output) => output,
		None => {
			let dir = std::env::current_dir()?;
			let name = options
				.stats
				.file_stem()
				.and_then(|stem| stem.to_str())
				.unwrap_or("dataset");
			available_path(&dir, name, "html")?
		}
	};
	std::fs::write(&output_path, html)
		.with_context(|| format!("failed to write {}", output_path.display()))?;
	tracing::info!(path = %output_path.display(), "wrote dataset panel");
	eprintln!("Your dataset panel was written to {}.", output_path.display());
	Ok(())
}

fn cli_options(options: ChartOptionsOptions) -> Result<()> {
	let json = chart_options_json(&options)?;
	println!("{}", json);
	Ok(())
}

fn chart_options_json(options: &ChartOptionsOptions) -> Result<String> {
	let statistics = read_statistics(&options.stats)?;
	let task_type = statistics.target.task_type()?;
	let chart_options =
		hboard_dataset::target_distribution_options(&statistics.target_distribution, task_type)?;
	let json = if options.pretty {
		serde_json::to_string_pretty(&chart_options)?
	} else {
		serde_json::to_string(&chart_options)?
	};
	Ok(json)
}

fn read_statistics(path: &Path) -> Result<DatasetStatistics> {
	let bytes =
		std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
	let statistics = DatasetStatistics::from_slice(&bytes)
		.with_context(|| format!("failed to parse statistics from {}", path.display()))?;
	Ok(statistics)
}

fn read_config(path: &Path) -> Result<PanelConfig> {
	let json = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let config = PanelConfig::from_json(&json)
		.with_context(|| format!("failed to parse config from {}", path.display()))?;
	Ok(config)
}

/// This function checks if a file with the given name and extension already exists in `dir`, and if it does, it appends " 1", " 2", etc. to it until it finds a name that will not overwrite an existing file.
fn available_path(dir: &Path, name: &str, extension: &str) -> Result<PathBuf> {
	let mut i = 0;
	loop {
		let filename = if i > 0 {
			format!("{} {}.{}", name, i, extension)
		} else {
			format!("{}.{}", name, extension)
		};
		let path = dir.join(filename);
		match std::fs::metadata(&path) {
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(path),
			Err(error) => return Err(error.into()),
			Ok(_) => i += 1,
		}
	}
}
