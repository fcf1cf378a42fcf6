use std::path::Path;

use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use release_check::config;
use release_check::domain::Version;
use release_check::fetch::{self, HttpFetcher};
use release_check::manifest;
use release_check::selector;
use release_check::ui;
use release_check::warning::CheckWarning;

#[derive(clap::Parser)]
#[command(
    name = "release-check",
    about = "Check a releases manifest for a newer version and download it"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Releases manifest path (overrides configuration)")]
    manifest: Option<String>,

    #[arg(long, help = "Installed version to compare against (overrides configuration)")]
    current: Option<String>,

    #[arg(long, help = "Directory to download the package into")]
    download_dir: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts")]
    yes: bool,

    #[arg(long, help = "Preview what would happen without downloading")]
    dry_run: bool,

    #[arg(long, help = "Show releases listed in the manifest and exit")]
    list: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);

    if args.version {
        println!("release-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let manifest_path = args.manifest.clone().unwrap_or_else(|| config.manifest.clone());

    if args.list {
        list_releases(&manifest_path)?;
        return Ok(());
    }

    // Resolve the installed version to compare against
    let installed = match args.current.clone().or_else(|| config.installed_version.clone()) {
        Some(version) => version,
        None => {
            ui::display_error(
                "No installed version given. Pass --current or set installed_version in releasecheck.toml",
            );
            std::process::exit(1);
        }
    };

    ui::display_status(&format!(
        "Checking '{}' for releases newer than {}...",
        manifest_path, installed
    ));

    let releases = match manifest::load_manifest(Path::new(&manifest_path)) {
        Ok(releases) => releases,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if releases.is_empty() {
        ui::display_check_warning(&CheckWarning::EmptyManifest {
            path: manifest_path,
        });
        return Ok(());
    }

    let update = match selector::select_update(&installed, &releases) {
        Ok(update) => update,
        Err(e) => {
            ui::display_error(&format!("Cannot establish installed version: {}", e));
            std::process::exit(1);
        }
    };

    let release = match update {
        Some(release) => release,
        None => {
            ui::display_success(&format!(
                "You are on the latest version ({})",
                installed
            ));
            return Ok(());
        }
    };

    ui::display_proposed_update(&installed, &release);

    let download_dir = config.download_dir(args.download_dir.as_deref());

    if args.dry_run {
        ui::display_status("Dry run mode:");
        ui::display_success(&format!("  Step 1: would download {}", release.url));
        ui::display_success(&format!(
            "  Step 2: would save the package under {}",
            download_dir.display()
        ));
        return Ok(());
    }

    let skip_confirmation = args.yes || config.behavior.skip_confirmation;

    if !skip_confirmation
        && !ui::confirm_action(&format!("Download version {} now?", release.version))?
    {
        println!("Update cancelled by user.");
        return Ok(());
    }

    if !release.url.starts_with("https://") {
        let warning = CheckWarning::InsecureDownloadUrl {
            url: release.url.clone(),
        };
        ui::display_check_warning(&warning);

        if !skip_confirmation && !ui::confirm_action("Download over an insecure connection?")? {
            println!("Update cancelled by user.");
            return Ok(());
        }
    }

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ui::display_error(&format!("Cannot build HTTP client: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Downloading {}...", release.url));
    let package_path = match fetch::download_package(&fetcher, &release, &download_dir) {
        Ok(path) => path,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_success(&format!(
        "Downloaded version {} to {}",
        release.version,
        package_path.display()
    ));
    ui::display_manual_install_instruction(&package_path);

    println!(
        "\n\x1b[32m✓\x1b[0m Update {} ready to install\n",
        release.version
    );

    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn list_releases(manifest_path: &str) -> Result<()> {
    let releases = match manifest::load_manifest(Path::new(manifest_path)) {
        Ok(releases) => releases,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if releases.is_empty() {
        ui::display_check_warning(&CheckWarning::EmptyManifest {
            path: manifest_path.to_string(),
        });
        return Ok(());
    }

    ui::display_available_releases(&releases);

    // Flag entries the selector would skip so manifest authors can fix them
    for release in &releases {
        if let Err(e) = Version::parse(&release.version) {
            ui::display_check_warning(&CheckWarning::MalformedRelease {
                version: release.version.clone(),
                reason: e.to_string(),
            });
        }
    }

    Ok(())
}
