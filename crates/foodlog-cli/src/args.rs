use clap::{Args as ClapArgs, Parser, Subcommand};
use foodlog_core::service::DEFAULT_BASE_URL;

/// Interactive food entry wizard
///
/// Foodlog walks through logging a food entry in four steps: what the food
/// is, how much was eaten, its nutrition, and which meal it belongs to.
/// Each step is checked against the food backend before moving on.
#[derive(Parser)]
#[command(version, about, name = "foodlog")]
pub struct Args {
    /// Base URL of the food backend
    #[arg(long, global = true, env = "FOODLOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when omitted
    #[arg(long, global = true, env = "FOODLOG_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Login session cookie for the backend, as `name=value` or a bare
    /// value for the default `session` cookie
    #[arg(long, global = true, env = "FOODLOG_SESSION", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `add` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// Log a food entry interactively
    #[command(alias = "a")]
    Add,
    /// Print the label for a serving size, e.g. "60g (2 slices)"
    #[command(alias = "fs")]
    FormatServing(FormatServingArgs),
}

/// Format a serving size label
///
/// The quantity is in grams. With a unit and the weight of one unit, the
/// label also carries the unit count.
#[derive(ClapArgs)]
pub struct FormatServingArgs {
    #[arg(help = "Serving quantity in grams")]
    pub quantity: f64,
    #[arg(default_value = "g", help = "Serving unit (g, ml, slice, cup, ...)")]
    pub unit: String,
    #[arg(short, long, help = "Weight in grams of one unit")]
    pub weight: Option<f64>,
}
