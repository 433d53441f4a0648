use crate::report::ReportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rInventory
/// CLI application to track contracts, devices and maintenance cards with SQLite
#[derive(Parser)]
#[command(
    name = "rinventory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track contracts, devices and maintenance cards and export styled XLSX/PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which report a listing or export works on.
#[derive(Clone, Debug, ValueEnum)]
pub enum ReportKind {
    Contracts,
    Devices,
    Maintenance,
    Coordination,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configured report resources (font, logo)")]
        check: bool,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a record
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },

    /// List records
    List {
        #[arg(long, value_enum, default_value = "contracts")]
        report: ReportKind,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,
    },

    /// Delete a record
    Del {
        #[command(subcommand)]
        target: DelTarget,
    },

    /// Load the sample dataset
    Seed,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export a report
    Export {
        #[arg(long, value_enum, default_value = "contracts")]
        report: ReportKind,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ReportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory for the generated file")]
        out: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AddTarget {
    /// Add a contract
    Contract {
        /// Contract number (primary key)
        number: String,

        /// Contract name
        name: String,

        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long, help = "End date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Add a device
    Device {
        /// Device name
        name: String,

        #[arg(long)]
        serial: Option<String>,

        #[arg(long)]
        invoice: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        warehouse: String,

        #[arg(long, help = "Zone the device is installed in (omit for warehouse)")]
        zone: Option<String>,

        #[arg(long, default_value = "available", help = "installed | available | damaged")]
        status: String,

        #[arg(long)]
        ip: Option<String>,

        #[arg(long)]
        responsible: String,

        #[arg(long, help = "Transfer date (YYYY-MM-DD)")]
        transfer: Option<String>,

        #[arg(long, help = "Installation date (YYYY-MM-DD)")]
        installed: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Add a maintenance card
    Card {
        #[arg(long, help = "Serial number of the affected device")]
        device: String,

        #[arg(long, help = "Report date (YYYY-MM-DD)")]
        reported: Option<String>,

        #[arg(long)]
        issue: String,

        #[arg(long, help = "Repair date (YYYY-MM-DD), omit while unrepaired")]
        repaired: Option<String>,

        #[arg(long)]
        technician: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Add a coordination request
    Coordination {
        /// Type of work the request is about
        work_type: String,

        #[arg(long, help = "Zone the work happens in")]
        zone: Option<String>,

        #[arg(long, help = "Request date (YYYY-MM-DD)")]
        requested: Option<String>,

        #[arg(long)]
        department: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        details: String,

        #[arg(long, help = "Expected execution date (YYYY-MM-DD)")]
        expected: Option<String>,

        #[arg(long)]
        responsible: String,

        #[arg(long)]
        phone: String,

        #[arg(long, help = "Date the request email was sent (YYYY-MM-DD)")]
        email_sent: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum DelTarget {
    /// Delete a contract by number
    Contract { number: String },

    /// Delete a device by id
    Device { id: i64 },

    /// Delete a maintenance card by id
    Card { id: i64 },

    /// Delete a coordination request by id
    Coordination { id: i64 },
}
