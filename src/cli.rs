use chrono::Weekday;
use clap::Parser;
use std::path::PathBuf;

use fleet_views::application::dto::{CalendarRequest, OutputFormat, ViewKind, ViewRequest};
use fleet_views::config::ConfigFile;
use fleet_views::lifecycle::services::{DEFAULT_GRID_LENGTH, DEFAULT_PAGE_SIZE};
use fleet_views::shared::Result;

/// Render hardware lifecycle dashboard views from a fleet dataset
#[derive(Parser, Debug)]
#[command(name = "fleet-views")]
#[command(version)]
#[command(
    about = "Render hardware lifecycle dashboard views from a fleet dataset",
    long_about = None
)]
pub struct Args {
    /// View to render: inventory, service-board, calendar, firmware,
    /// audit-log, compliance or analytics
    pub view: ViewKind,

    /// Case-insensitive search text (empty keeps every record)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Status label to narrow the view to (e.g. "online", "in-progress")
    #[arg(short, long)]
    pub status: Option<String>,

    /// 1-based page number; out-of-range pages are clamped
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page [default: 6]
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Calendar year (defaults to the month of the earliest service order)
    #[arg(long)]
    pub year: Option<i32>,

    /// Calendar month, 1-12
    #[arg(long)]
    pub month: Option<u32>,

    /// Number of calendar cells [default: 35]
    #[arg(long)]
    pub grid_length: Option<usize>,

    /// Blank calendar cells before day 1 (derived from the weekday when absent)
    #[arg(long)]
    pub leading_offset: Option<usize>,

    /// First day of the calendar week
    #[arg(long, default_value = "sun")]
    pub week_start: Weekday,

    /// Dataset file (.json, .yml, .yaml or .toml); built-in seed data when absent
    #[arg(short, long = "data", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to fleet-views.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress messages on stderr
    #[arg(long)]
    pub quiet: bool,
}

/// Everything one run needs after merging flags with the config file
#[derive(Debug)]
pub struct Invocation {
    pub request: ViewRequest,
    pub format: OutputFormat,
    pub dataset: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl Args {
    /// Merges flags over config values over built-in defaults.
    pub fn resolve(self, config: Option<&ConfigFile>) -> Result<Invocation> {
        let format = match self.format {
            Some(format) => format,
            None => config
                .map(ConfigFile::output_format)
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        };

        let page_size = self
            .page_size
            .or_else(|| config.and_then(|c| c.page_size))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let grid_length = self
            .grid_length
            .or_else(|| config.and_then(ConfigFile::grid_length))
            .unwrap_or(DEFAULT_GRID_LENGTH);
        let leading_offset = self
            .leading_offset
            .or_else(|| config.and_then(ConfigFile::leading_offset));
        let dataset = self
            .data
            .or_else(|| config.and_then(|c| c.dataset.clone()));

        let calendar = CalendarRequest {
            year: self.year,
            month: self.month,
            grid_length,
            leading_offset,
            week_start: self.week_start,
        };

        let mut request = ViewRequest::new(self.view)
            .with_query(self.query)
            .with_page(self.page)
            .with_page_size(page_size)
            .with_calendar(calendar);
        if let Some(status) = self.status {
            request = request.with_status(status);
        }

        Ok(Invocation {
            request,
            format,
            dataset,
            output: self.output,
            quiet: self.quiet,
        })
    }
}
