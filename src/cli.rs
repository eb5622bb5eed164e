use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use mlb_rosters::format::LayoutKind;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// MLB roster extractor
///
/// Fetches the active roster of each team, sorts pitchers and position players
/// by jersey number and prints them as text blocks ready for a scorecard.
///
/// With a bullpen usage report configured, pitchers are split into starters
/// and bullpen.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Team codes, e.g. `cin was nyy`
    #[arg(required_unless_present = "list_config", value_name = "TEAM")]
    pub teams: Vec<String>,

    /// Bullpen usage report URL. Overrides the configured report.
    #[arg(long = "bullpen", value_name = "URL", help_heading = "Classification")]
    pub bullpen_url: Option<String>,

    /// Skip starter/bullpen classification even when a report is configured.
    #[arg(
        long = "no-bullpen",
        conflicts_with = "bullpen_url",
        help_heading = "Classification"
    )]
    pub no_bullpen: bool,

    /// Text layout of the printed blocks: plain or latex
    #[arg(long, default_value_t = LayoutKind::Plain, help_heading = "Output")]
    pub layout: LayoutKind,

    /// Print rosters as JSON instead of text blocks
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
