//! axlprov: interactive CUCM agent provisioning from the command line
//!
//! Subcommands wrap the provision-engine workflows with a real terminal
//! and a real AXL client. Credentials come from flags or the environment
//! (`CUCM_ADDRESS`, `AXL_USERNAME`, `AXL_PASSWORD`), with a `.env` file
//! loaded when present. Exit status is 0 on success, 1 on an abort or an
//! unrecoverable fault.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

use axl_client::{AxlClient, AxlConfig};
use provision_engine::workflows::{ldap_check, migrate, new_agent, relocalize};
use provision_engine::{RosterEntry, SiteProfile, SyncStatus, Terminal};

#[derive(Parser)]
#[command(name = "axlprov", version, about = "Interactive CUCM agent provisioning over AXL")]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Site profile TOML overriding the built-in cluster constants
    #[arg(long, value_name = "PATH")]
    site: Option<PathBuf>,

    /// Verify the publisher's TLS certificate
    #[arg(long)]
    verify_tls: bool,

    /// Raise log verbosity (-v info, -vv debug with wire payloads)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ConnectionArgs {
    /// CUCM publisher host name or address
    #[arg(long, env = "CUCM_ADDRESS", value_name = "HOST")]
    host: String,

    /// Application account with AXL API access
    #[arg(long, env = "AXL_USERNAME", value_name = "USER")]
    username: String,

    /// Application account password
    #[arg(long, env = "AXL_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand)]
enum Command {
    /// Provision a brand-new agent: mint a DN, create the CSF, wire up the user
    NewAgent,
    /// Migrate an agent's extension-mobility profile onto a new CSF and
    /// remove the old CIPC
    Migrate,
    /// Audit a roster CSV for directory-sync status
    LdapCheck {
        /// Roster file, first column holds the employee numbers
        #[arg(default_value = "agent list.csv", value_name = "CSV")]
        roster: PathBuf,
    },
    /// Apply device pool and localization settings to an existing device
    Relocalize {
        /// Target device name
        #[arg(value_name = "DEVICE")]
        device: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "axlprov={level},provision_engine={level},axl_client={level},axl_core={level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let site = match &cli.site {
        Some(path) => SiteProfile::load(path)?,
        None => SiteProfile::default(),
    };
    let config = AxlConfig::new(
        cli.connection.host,
        cli.connection.username,
        cli.connection.password,
    )
    .with_verify_tls(cli.verify_tls);
    let client = AxlClient::new(config)?;
    let operator = Terminal;

    match cli.command {
        Command::NewAgent => {
            let outcome = new_agent::run(&client, &operator, &site).await?;
            println!(
                "{} {} on {} in pool {}",
                "Provisioned".green().bold(),
                outcome.device_name,
                outcome.primary_dn,
                outcome.device_pool
            );
            if let Some(dn) = outcome.secondary_dn {
                println!("Secondary line: {dn}");
            }
        }
        Command::Migrate => {
            let outcome = migrate::run(&client, &operator, &site).await?;
            println!(
                "{} {} from {}",
                "Migrated".green().bold(),
                outcome.device_name,
                outcome.profile_name
            );
            if !outcome.old_device_removed {
                println!("{} old device left in place", "note:".yellow().bold());
            }
            if !outcome.profile_removed {
                println!("{} device profile left in place", "note:".yellow().bold());
            }
        }
        Command::LdapCheck { roster } => {
            let report = ldap_check::run(&client, &operator, &site, &roster)
                .await
                .with_context(|| format!("auditing {}", roster.display()))?;
            println!("{}", Table::new(report.entries.iter().map(Row::from)));
            println!(
                "{} synced, {} need Workday, {} not found",
                report.count(SyncStatus::Synced),
                report.count(SyncStatus::NeedsWorkday),
                report.count(SyncStatus::NotFound)
            );
        }
        Command::Relocalize { device } => {
            let outcome = relocalize::run(&client, &operator, &site, &device).await?;
            println!(
                "{} {}: pool {}, location {}",
                "Relocalized".green().bold(),
                outcome.device_name,
                outcome.localization.device_pool,
                outcome.localization.location
            );
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "E#")]
    user_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<&RosterEntry> for Row {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            user_id: entry.user_id.clone(),
            name: entry.name.clone(),
            status: match entry.status {
                SyncStatus::Synced => "synced",
                SyncStatus::NeedsWorkday => "needs Workday",
                SyncStatus::NotFound => "not found",
            },
        }
    }
}
