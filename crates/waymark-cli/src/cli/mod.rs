use clap::{Parser, Subcommand};

mod args;
mod parsers;


pub use args::{CategoriesArgs, FilterArgs, OutlineArgs, ScanArgs, TrackArgs};

#[derive(Debug, Parser)]
#[command(name = "waymark")]
#[command(about = "Relevance filter and outline toolkit for guide content", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Filter(FilterArgs),
    Categories(CategoriesArgs),
    Outline(OutlineArgs),
    Scan(ScanArgs),
    Track(TrackArgs),
}
