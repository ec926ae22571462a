use clap::Parser;
use console::style;
use quill::commands;
use quill::core::config::Config;
use quill::utils::cli::{Args, ValidatedArgs};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.validate() {
        ValidatedArgs::New(new_args) => {
            let config = load_config()?;
            commands::new::run(config, new_args)?;
        }
        ValidatedArgs::MissingTitle => {
            println!(
                "{}",
                style("A new note needs a title unless generated interactively (`-i`).")
                    .red()
                    .bold()
            );
        }
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    match Config::load_default() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("Create ~/.config/quill/config.toml with keys: notes_path, default_file_ext, default_date_format");
            std::process::exit(1);
        }
    }
}
