use clap::Parser;
use song_analyzer::{parse_assignment, run, Assignment, Config};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Settings as key=value, in any order: question=<1-5> and data=<input.csv> are required,
    /// output=<path> (default output.csv) and numbers=<lenient|strict> are optional.
    /// Keys may be written with a leading `--`. Values under unknown keys fill question, then data.
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_assignment)]
    settings: Vec<Assignment>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = Config::from_assignments(args.settings)?;
    run(&config)?;
    Ok(())
}
