use clap::Parser;
use std::path::PathBuf;

/// Returns the version string with the build id from `build.rs`.
/// Format: "0.1.0@abc1234", or "0.1.0@abc1234-dirty" for uncommitted builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const BUILD_ID: &str = env!("ROSTER_BUILD_ID");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| format!("{}@{}", VERSION, BUILD_ID))
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Interactive employee roster backed by a CSV file", long_about = None)]
pub struct Cli {
    /// CSV file holding the roster (default: `data_file` from roster.json, else employees.csv)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
