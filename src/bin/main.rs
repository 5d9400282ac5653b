//! Declarative Blocks CLI
//!
//! Inspect block packs and print resolved icon assignments.

use clap::{Parser, Subcommand};
use declarative_blocks::{load_block_pack, BlockAssembler, BlockPack, LoadOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "declarative-blocks")]
#[command(author, version, about = "Resolve block icons from declarative block packs", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a block pack
    Info {
        /// Path to block pack (ZIP or directory)
        #[arg(short, long)]
        pack: PathBuf,

        /// Fail on descriptors that cannot be parsed
        #[arg(long)]
        strict: bool,
    },

    /// Resolve icon assignments and print them as JSON
    Resolve {
        /// Path to block pack (ZIP or directory)
        #[arg(short, long)]
        pack: PathBuf,

        /// Only resolve this block (descriptor name, without pack prefix)
        #[arg(short, long)]
        block: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Fail on descriptors that cannot be parsed
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Info { pack, strict } => {
            let pack = load(&pack, strict)?;
            show_pack_info(&pack);
        }
        Commands::Resolve {
            pack,
            block,
            pretty,
            strict,
        } => {
            let pack = load(&pack, strict)?;
            resolve_pack(&pack, block.as_deref(), pretty)?;
        }
    }

    Ok(())
}

fn load(path: &PathBuf, strict: bool) -> Result<BlockPack, Box<dyn std::error::Error>> {
    let options = if strict {
        LoadOptions::default().strict()
    } else {
        LoadOptions::default()
    };
    log::info!("Loading block pack from {:?}", path);
    Ok(load_block_pack(path, &options)?)
}

fn show_pack_info(pack: &BlockPack) {
    println!("Block pack: {}", pack.name);
    if let Some(description) = &pack.description {
        println!("  {}", description);
    }
    println!("  Textures: {}", pack.texture_directory);
    println!("  Descriptors: {}", pack.descriptor_count());

    for (shape, count) in pack.shape_counts() {
        println!("    - {}: {}", shape, count);
    }

    println!();
    for descriptor in pack.descriptors() {
        println!("  {} ({})", descriptor.name(), descriptor.shape());
    }
}

fn resolve_pack(pack: &BlockPack, only: Option<&str>, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let assembler = BlockAssembler::new(pack);

    let descriptors: Vec<_> = match only {
        Some(name) => {
            let descriptor = pack
                .get_descriptor(name)
                .ok_or_else(|| format!("No block named '{}' in pack {}", name, pack.name))?;
            vec![descriptor]
        }
        None => pack.descriptors().iter().collect(),
    };

    let output: Vec<_> = assembler
        .assemble_all(descriptors)
        .iter()
        .map(|block| {
            serde_json::json!({
                "id": block.id(),
                "shape": block.shape_category(),
                "renderLayer": block.render_layer(),
                "fullyOpaque": block.is_fully_opaque(),
                "lightValue": block.light_value(),
                "assignment": block.icon_assignment().shape(),
                "icons": block.icon_assignment(),
            })
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
