use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the answer sheets of one instance, best score first.
    List(ListArgs),
    /// Show one answer sheet with its decoded answer grid.
    Show(ShowArgs),
    /// Import instances from another Klokan store file.
    Import(ImportArgs),
    /// Write the `;`-delimited answer report.
    Export(ExportArgs),
    /// List stored instances.
    Instances,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Competition year.
    #[arg(long)]
    pub year: i32,

    /// Competition category (Cvrcek, Klokanek, Benjamin, Kadet, Junior, Student).
    #[arg(long)]
    pub category: String,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Answer sheet id.
    pub id: i64,

    /// Write the stored scan image to this file.
    #[arg(long)]
    pub scan_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path of the store file to import from. It is opened read-only.
    pub path: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Limit the report to one year (requires --category).
    #[arg(long, requires = "category")]
    pub year: Option<i32>,

    /// Limit the report to one category (requires --year).
    #[arg(long, requires = "year")]
    pub category: Option<String>,

    /// Output file.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Terminate rows with `\n` instead of the configured line ending.
    #[arg(long)]
    pub lf: bool,
}
