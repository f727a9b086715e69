//! `voxchess` command-line front-end: inspect materials and piece styles.
#![forbid(unsafe_code)]

mod config;

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use voxchess_blocks::{MaterialRegistry, MaterialValue};
use voxchess_pieces::{BoardOrientation, PieceColor, PieceKind, Stone, StyleLibrary};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "voxchess", version, about = "Block-built chess piece styles")]
struct Cli {
    /// Config file (defaults to ./voxchess.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding `<style>.toml` files
    #[arg(long)]
    style_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a material spec and show it turned through each quarter
    Material { spec: String },
    /// List style files in the style directory
    Styles,
    /// Print the layers of one realized stone
    Show {
        style: Option<String>,
        /// Piece by letter, id or name
        #[arg(long, default_value = "K")]
        piece: PieceKind,
        #[arg(long, default_value = "white")]
        color: PieceColor,
        #[arg(long, default_value = "north")]
        facing: BoardOrientation,
        /// Rules-engine stone code; overrides --piece and --color
        #[arg(long, allow_negative_numbers = true)]
        code: Option<i8>,
    },
    /// Print white to black material substitutions
    Diffs { style: Option<String> },
    /// Save a style under a new name
    Save { style: String, new_name: String },
    /// Realize every stone of a style
    Prewarm { style: Option<String> },
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let cfg = AppConfig::load(cli.config.as_deref())?;
    let style_dir = cli.style_dir.unwrap_or(cfg.style_dir);
    let registry = Arc::new(MaterialRegistry::new());
    let library = StyleLibrary::new(style_dir, Arc::clone(&registry));
    let style_or_default = |s: Option<String>| s.unwrap_or_else(|| cfg.default_style.clone());

    match cli.command {
        Command::Material { spec } => {
            let m = registry.get(&spec)?;
            println!("{}  (id {}, data {})", m, m.type_id(), m.data());
            println!("family: {:?}", m.family());
            if let Some(lines) = m.text() {
                println!("text: {:?}", lines);
            }
            for degrees in [90, 180, 270] {
                println!("{:>3}: {}", degrees, m.rotate(&registry, degrees)?);
            }
        }
        Command::Styles => {
            let names = library.available()?;
            if names.is_empty() {
                println!("no styles in {}", library.dir().display());
            }
            for name in names {
                println!("{}", name);
            }
        }
        Command::Show {
            style,
            piece,
            color,
            facing,
            code,
        } => {
            let set = library.get(&style_or_default(style))?;
            let stone = match code {
                Some(code) => set.stone_for_code(code, facing)?,
                None => set.get_stone(piece, color, facing)?,
            };
            print_stone(&stone);
        }
        Command::Diffs { style } => {
            let set = library.get(&style_or_default(style))?;
            for (white, black) in set.white_to_black_diffs() {
                println!("{} -> {}", white, black);
            }
        }
        Command::Save { style, new_name } => {
            library.save_as(&style, &new_name)?;
        }
        Command::Prewarm { style } => {
            let set = library.get(&style_or_default(style))?;
            let n = set.prewarm()?;
            println!("{}: {} stones, {} materials", set.name(), n, registry.len());
        }
    }
    Ok(())
}

/// Layers top to bottom, one letter per distinct material plus a legend.
fn print_stone(stone: &Stone) {
    let mut legend: BTreeMap<String, char> = BTreeMap::new();
    let mut letter_for = |m: &MaterialValue| -> char {
        let next = (b'a' + (legend.len() % 26) as u8) as char;
        *legend.entry(m.to_string()).or_insert(next)
    };

    println!(
        "{} {} facing {} ({}x{}x{})",
        stone.color(),
        stone.piece(),
        stone.orientation(),
        stone.size_x(),
        stone.size_y(),
        stone.size_z()
    );
    for y in (0..stone.size_y()).rev() {
        println!("y={}", y);
        for x in 0..stone.size_x() {
            let row: String = (0..stone.size_z())
                .map(|z| stone.get(x, y, z).map_or('.', |m| letter_for(m.as_ref())))
                .collect();
            println!("  {}", row);
        }
    }
    let mut by_letter: Vec<(char, String)> = legend.into_iter().map(|(m, c)| (c, m)).collect();
    by_letter.sort();
    for (c, m) in by_letter {
        println!("{} = {}", c, m);
    }
}
