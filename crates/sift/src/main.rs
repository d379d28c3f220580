use clap::Parser;
use sift_lib::{Config, ConfigOverrides, DialogPicker, Result, Session};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Interactive scientific-relevance screening for text datasets")]
struct Args {
    #[arg(long, help = "Path to the TSV dataset cache")]
    database: Option<PathBuf>,

    #[arg(long, help = "Directory holding serialized model artifacts")]
    models_dir: Option<PathBuf>,

    #[arg(long, help = "Rows shown per page while browsing")]
    page_size: Option<usize>,

    #[arg(long, help = "Preview length in characters for browsed rows")]
    preview_chars: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = Config::new(ConfigOverrides {
        database: args.database,
        models_dir: args.models_dir,
        page_size: args.page_size,
        preview_chars: args.preview_chars,
    })?;

    let session = Session::new(&config, Box::new(DialogPicker));
    session.run()
}
