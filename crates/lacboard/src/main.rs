//! lacboard - Executive Control Tower preview for LAC (Lugano Arte e Cultura)

mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cli::OutputOptions;
use lacboard_core::preferences::default_config_dir;
use lacboard_core::{
    run_self_check, CoreError, DashboardConfig, DashboardState, EventFilter, Preferences,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LACBOARD_LOG";
const LOG_FILE: &str = "lacboard.log";

#[derive(Parser)]
#[command(
    name = "lacboard",
    version,
    about = "Executive Control Tower preview for LAC - Stagione Arti Performative 2025/26",
    long_about = "Interactive preview of the LAC executive dashboard, backed by static sample data.\n\
                  \n\
                  Shows KPI cards, a 14-day programme heatmap, top events, sales, funnel,\n\
                  revenue mix and the Operations Pulse, all narrowed by a genre/venue filter.\n\
                  \n\
                  Examples:\n\
                    lacboard                         # Run TUI (default)\n\
                    lacboard kpi --genre Opera       # KPI cards for the opera programme\n\
                    lacboard events --venue \"Sala 1\" # Events in Sala 1\n\
                    lacboard heatmap --seed 7        # Heatmap with another sample seed\n\
                    lacboard snapshot                # Whole derived view as JSON\n\
                    lacboard check                   # Self-check of the sample tables\n\
                  \n\
                  Environment Variables:\n\
                    LACBOARD_CONFIG_DIR              # Override config directory\n\
                    LACBOARD_HEATMAP_SEED            # Heatmap sample seed\n\
                    LACBOARD_FORMAT                  # Force output format: json|table\n\
                    LACBOARD_NO_COLOR                # Disable ANSI colors (log-friendly)\n\
                    LACBOARD_LOG                     # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Genre filter (Opera, Teatro, Danza, Musica, Family)
    #[arg(long, global = true)]
    genre: Option<String>,

    /// Venue filter (e.g. "Sala Teatro", Hall, "Sala 1", Agorà)
    #[arg(long, global = true)]
    venue: Option<String>,

    /// Heatmap sample seed (default: from preferences)
    #[arg(long, global = true, env = "LACBOARD_HEATMAP_SEED")]
    seed: Option<u64>,

    /// First heatmap day, YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    from: Option<String>,

    /// Base config directory (default: platform config dir)
    #[arg(long, global = true, env = "LACBOARD_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "LACBOARD_NO_COLOR")]
    no_color: bool,

    /// Force output format (json|table)
    #[arg(long, global = true, env = "LACBOARD_FORMAT", value_parser = ["json", "table"])]
    format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print derived KPI cards
    Kpi,
    /// Print events matching the filter
    Events,
    /// Print the normalized funnel
    Funnel,
    /// Print the filter-scaled heatmap
    Heatmap,
    /// Print the whole derived view as JSON
    Snapshot,
    /// Run the sample-data self-check
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).map_err(with_hint)
}

fn run(cli: Cli) -> Result<()> {
    let mode = cli.mode.unwrap_or(Mode::Tui);
    // A missing platform config dir only disables preferences and the log file
    let app_dir = match resolve_app_dir(cli.config_dir.as_deref()) {
        Err(err) if !matches!(err, CoreError::ConfigDirNotFound) => return Err(err.into()),
        resolved => resolved,
    };

    let log_warning = init_logging(mode, app_dir.as_deref());
    if let Err(err) = &app_dir {
        debug!(error = %err, "Running without a config directory");
    }

    let preferences = app_dir
        .as_deref()
        .map(Preferences::load)
        .unwrap_or_default();
    let config = dashboard_config(&preferences, cli.seed, cli.from.as_deref())?;
    let filter = EventFilter::validated(cli.genre.as_deref(), cli.venue.as_deref())?;

    let mut dashboard = DashboardState::preview(&config);
    dashboard.set_filter(filter);

    info!(
        ?mode,
        seed = config.heatmap_seed,
        start = %config.heatmap_start,
        "lacboard starting"
    );

    let opts = OutputOptions::from_flags(cli.format.as_deref(), cli.no_color);

    match mode {
        Mode::Tui => run_tui(dashboard, &preferences, app_dir.ok(), log_warning),
        Mode::Kpi => {
            println!("{}", cli::format_kpis(&dashboard.view().kpis, opts));
            Ok(())
        }
        Mode::Events => {
            println!("{}", cli::format_events(&dashboard.view().events, opts));
            Ok(())
        }
        Mode::Funnel => {
            println!("{}", cli::format_funnel(dashboard.funnel(), opts));
            Ok(())
        }
        Mode::Heatmap => {
            println!("{}", cli::format_heatmap(&dashboard.view().heatmap, opts));
            Ok(())
        }
        Mode::Snapshot => {
            println!("{}", cli::format_snapshot(&dashboard.snapshot()));
            Ok(())
        }
        Mode::Check => run_check(&dashboard, opts),
    }
}

fn run_tui(
    dashboard: DashboardState,
    preferences: &Preferences,
    app_dir: Option<PathBuf>,
    log_warning: Option<String>,
) -> Result<()> {
    let report = run_self_check(dashboard.data());
    let mut app = lacboard_tui::App::new(dashboard, preferences).with_config_dir(app_dir);
    app.status_message = log_warning;
    app.set_self_check(report);
    lacboard_tui::run(app)
}

fn run_check(dashboard: &DashboardState, opts: OutputOptions) -> Result<()> {
    let report = run_self_check(dashboard.data());
    println!("{}", cli::format_check(&report, opts));

    let (_, failed) = report.counts();
    if failed > 0 {
        anyhow::bail!("{} self-check(s) failed", failed);
    }
    Ok(())
}

/// `<base>/lacboard`, where base is `--config-dir` or the platform config dir
fn resolve_app_dir(base: Option<&Path>) -> Result<PathBuf, CoreError> {
    match base {
        Some(base) if base.exists() && !base.is_dir() => Err(CoreError::InvalidConfig {
            message: format!("{} is not a directory", base.display()),
        }),
        Some(base) => Ok(base.join("lacboard")),
        None => default_config_dir().ok_or(CoreError::ConfigDirNotFound),
    }
}

/// Seed precedence: CLI/env, then preferences
fn dashboard_config(
    preferences: &Preferences,
    seed: Option<u64>,
    from: Option<&str>,
) -> Result<DashboardConfig, CoreError> {
    let mut config = match from {
        Some(value) => DashboardConfig::starting(parse_date(value)?),
        None => DashboardConfig::default(),
    };
    config.heatmap_seed = seed.unwrap_or(preferences.heatmap_seed);
    Ok(config)
}

fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| CoreError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// TUI logs go to a file so they never corrupt the alternate screen.
/// Returns a status-bar message when the TUI log file is unavailable.
fn init_logging(mode: Mode, app_dir: Result<&Path, &CoreError>) -> Option<String> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if mode != Mode::Tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    match tui_log_file(app_dir) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
            None
        }
        Err(e) => Some(log_disabled_message(&e)),
    }
}

fn tui_log_file(app_dir: Result<&Path, &CoreError>) -> Result<std::fs::File> {
    match app_dir {
        Ok(dir) => open_log_file(dir),
        Err(err) => match err.suggestion() {
            Some(hint) => anyhow::bail!("{}. {}", err, hint),
            None => anyhow::bail!("{}", err),
        },
    }
}

fn log_disabled_message(err: &anyhow::Error) -> String {
    format!("Log disattivato: {:#}", err)
}

fn open_log_file(dir: &Path) -> Result<std::fs::File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Append the core error's suggestion, if any
fn with_hint(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<CoreError>().and_then(CoreError::suggestion) {
        Some(hint) => anyhow::anyhow!("{}\n  Hint: {}", err, hint),
        None => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        for var in [
            "LACBOARD_CONFIG_DIR",
            "LACBOARD_HEATMAP_SEED",
            "LACBOARD_FORMAT",
            "LACBOARD_NO_COLOR",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_default_mode_is_tui() {
        clear_env();
        let cli = Cli::try_parse_from(["lacboard"]).unwrap();
        assert!(cli.mode.is_none());
        assert!(cli.format.is_none());
    }

    #[test]
    #[serial]
    fn test_global_flags_after_subcommand() {
        clear_env();
        let cli =
            Cli::try_parse_from(["lacboard", "kpi", "--genre", "opera", "--format", "json"])
                .unwrap();
        assert_eq!(cli.mode, Some(Mode::Kpi));
        assert_eq!(cli.genre.as_deref(), Some("opera"));
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("LACBOARD_HEATMAP_SEED", "99");
        std::env::set_var("LACBOARD_FORMAT", "json");
        let cli = Cli::try_parse_from(["lacboard", "heatmap"]).unwrap();
        clear_env();
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    #[serial]
    fn test_invalid_format_rejected() {
        clear_env();
        assert!(Cli::try_parse_from(["lacboard", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_seed_precedence() {
        let prefs = Preferences {
            heatmap_seed: 5,
            ..Preferences::default()
        };
        let config = dashboard_config(&prefs, None, Some("2025-10-20")).unwrap();
        assert_eq!(config.heatmap_seed, 5);
        let config = dashboard_config(&prefs, Some(8), Some("2025-10-20")).unwrap();
        assert_eq!(config.heatmap_seed, 8);
        assert_eq!(config.heatmap_start, NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        let err = dashboard_config(&Preferences::default(), None, Some("20/10/2025")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
    }

    #[test]
    fn test_app_dir_under_base() {
        let dir = std::env::temp_dir();
        let resolved = resolve_app_dir(Some(dir.as_path())).unwrap();
        assert_eq!(resolved, dir.join("lacboard"));
    }

    #[test]
    fn test_app_dir_without_platform_dir_is_config_error() {
        match (resolve_app_dir(None), default_config_dir()) {
            (Ok(resolved), Some(expected)) => assert_eq!(resolved, expected),
            (Err(CoreError::ConfigDirNotFound), None) => {}
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_app_dir_base_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        let err = resolve_app_dir(Some(file.as_path())).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));
    }

    #[test]
    fn test_tui_log_file_created_in_app_dir() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("lacboard");
        tui_log_file(Ok(app_dir.as_path())).unwrap();
        assert!(app_dir.join(LOG_FILE).is_file());
    }

    #[test]
    fn test_missing_config_dir_disables_log_with_hint() {
        let err = tui_log_file(Err(&CoreError::ConfigDirNotFound)).unwrap_err();
        let message = log_disabled_message(&err);
        assert!(message.starts_with("Log disattivato: Config directory could not be determined"));
        assert!(message.contains("--config-dir"));
    }

    #[test]
    fn test_unwritable_log_dir_reports_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("lacboard");
        std::fs::write(&blocker, "").unwrap();
        let err = tui_log_file(Ok(blocker.as_path())).unwrap_err();
        assert!(log_disabled_message(&err).contains("Failed to create"));
    }

    #[test]
    fn test_unknown_genre_gets_hint() {
        let err = EventFilter::validated(Some("Jazz"), None).unwrap_err();
        let message = with_hint(err.into()).to_string();
        assert!(message.contains("Unknown genre 'Jazz'"));
        assert!(message.contains("Hint:"));
    }
}
