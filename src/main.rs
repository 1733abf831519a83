use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mp4scan::report::{self, ConsoleSink};
use mp4scan::{scan, Options, Stats};

#[derive(Parser, Debug)]
#[command(version, about = "Total playback duration of the MP4 files in a folder tree")]
struct Args {
    /// Print the duration of every folder that directly holds MP4 files
    #[arg(short, long)]
    verbose: bool,

    /// Folder to scan; the last one given wins. Defaults to the current directory.
    /// A folder whose name starts with `-` must come after `--`
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let root = match args.paths.into_iter().last() {
        Some(path) => path,
        None => env::current_dir().context("cannot resolve the current directory")?,
    };
    let options = Options {
        verbose: args.verbose,
    };
    let colored = report::colors_enabled();

    println!("{}", report::banner(&root));
    let mut sink = ConsoleSink::new(colored);
    let result = scan(&root, &options, &mut sink);

    let stats = Stats::from(result);
    println!("{}", report::summary(&stats, colored));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_last_path_wins() {
        let args = Args::try_parse_from(["mp4scan", "-v", "/media/a", "/media/b"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.paths.last(), Some(&PathBuf::from("/media/b")));
    }

    #[test]
    fn test_args_dash_folder_after_separator() {
        assert!(Args::try_parse_from(["mp4scan", "-media"]).is_err());

        let args = Args::try_parse_from(["mp4scan", "--", "-media"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.paths, vec![PathBuf::from("-media")]);
    }

    #[test]
    fn test_args_help_mentions_separator() {
        let cmd = Args::command();
        let paths = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "paths")
            .unwrap();
        let help = paths.get_help().unwrap().to_string();
        assert!(help.contains("must come after `--`"));
    }
}
