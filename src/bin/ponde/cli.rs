use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ponde")]
#[command(author, version, about = "Evaluate and export the lobed-ring (pon-de-ring) surface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON render configuration
    #[arg(long, global = true, env = "PONDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Samples per angular range
    #[arg(long, global = true)]
    pub samples: Option<usize>,

    /// Ring radius
    #[arg(short, global = true, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Lobe radius
    #[arg(short, global = true, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Display colour (#rrggbb)
    #[arg(long, global = true)]
    pub color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the θ, φ, f(θ) table
    Table {
        /// Read the table off this row of the mesh instead of pairing samples
        #[arg(long)]
        mesh_row: Option<usize>,

        /// Write CSV here instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Evaluate the surface and report shape and bounds
    Grid,

    /// Evaluate, tessellate and write the surface
    Export {
        #[arg(long, value_enum, default_value_t = Format::Obj)]
        format: Format,

        /// Output file
        #[arg(long, short)]
        out: PathBuf,
    },

    /// Validate the shape constants
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Obj,
    Ply,
    Json,
}
