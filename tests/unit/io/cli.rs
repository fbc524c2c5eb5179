//! Tests for CLI argument parsing and run orchestration

#[cfg(test)]
mod tests {

    use clap::Parser;
    use identikon::IdenticonError;
    use identikon::io::cli::{Cli, NameProcessor};
    use identikon::io::configuration::DEFAULT_OUTPUT_DIR;
    use std::path::PathBuf;

    fn quiet_cli(name: &str, output_dir: PathBuf) -> Cli {
        Cli {
            name: Some(name.to_string()),
            output_dir,
            quiet: true,
            no_skip: false,
        }
    }

    #[test]
    fn test_parses_name_and_defaults() {
        let Ok(cli) = Cli::try_parse_from(["identikon", "alice"]) else {
            unreachable!("a plain name argument must parse");
        };

        assert_eq!(cli.name.as_deref(), Some("alice"));
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!cli.quiet);
        assert!(cli.skip_existing());
    }

    #[test]
    fn test_no_skip_flag_disables_skipping() {
        let Ok(cli) = Cli::try_parse_from(["identikon", "alice", "--no-skip"]) else {
            unreachable!("the no-skip flag must parse");
        };

        assert!(!cli.skip_existing());
    }

    #[test]
    fn test_process_writes_the_output_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let processor = NameProcessor::new(quiet_cli("alice", dir.path().to_path_buf()));

        assert!(processor.process().is_ok());
        assert!(dir.path().join("alice.png").exists());
    }

    #[test]
    fn test_process_skips_existing_output() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let output_path = dir.path().join("alice.png");

        let processor = NameProcessor::new(quiet_cli("alice", dir.path().to_path_buf()));
        assert!(processor.process().is_ok());

        let Ok(created) = std::fs::metadata(&output_path).and_then(|m| m.modified()) else {
            unreachable!("output file must exist after the first run");
        };

        // Second run finds the file and leaves it untouched
        let rerun = NameProcessor::new(quiet_cli("alice", dir.path().to_path_buf()));
        assert!(rerun.process().is_ok());

        let Ok(unchanged) = std::fs::metadata(&output_path).and_then(|m| m.modified()) else {
            unreachable!("output file must survive the second run");
        };
        assert_eq!(created, unchanged);
    }

    #[test]
    fn test_blank_name_argument_is_rejected() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let processor = NameProcessor::new(quiet_cli("   ", dir.path().to_path_buf()));

        assert!(matches!(
            processor.process(),
            Err(IdenticonError::EmptyName)
        ));
    }

    #[test]
    fn test_name_argument_is_trimmed() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory must be creatable");
        };
        let processor = NameProcessor::new(quiet_cli("  dave  ", dir.path().to_path_buf()));

        assert!(processor.process().is_ok());
        assert!(dir.path().join("dave.png").exists());
    }
}
