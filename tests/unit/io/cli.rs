//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use crate::submit::RecordingRunner;
    use cellbatch::ToolError;
    use cellbatch::io::cli::{MergeCli, MergeProcessor, SubmitCli, SubmitProcessor};
    use cellbatch::io::configuration::{
        DEFAULT_BATCH_SIZE, DEFAULT_LOG_DIR, DEFAULT_MEMORY, DEFAULT_NUM_CHANNELS,
    };
    use cellbatch::merge::merger::SourceLayout;
    use cellbatch::submit::batch::ImageCountRule;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests flat mode splits sources from the output directory
    // Verified by treating the first path as the output
    #[test]
    fn test_merge_cli_flat() {
        let cli = MergeCli::parse_from(["merge-tables", "run1", "run2", "merged"]);

        assert_eq!(cli.sources(), &[PathBuf::from("run1"), PathBuf::from("run2")]);
        assert_eq!(cli.output(), Some(&PathBuf::from("merged")));
        assert!(!cli.batch);
        assert!(!cli.verbose);

        let request = cli.request().unwrap();
        assert_eq!(
            request.layout,
            SourceLayout::Flat(vec![PathBuf::from("run1"), PathBuf::from("run2")])
        );
        assert_eq!(request.output_dir, PathBuf::from("merged"));
        assert_eq!(request.extension, "csv");
    }

    // Tests batch mode takes a single parent directory
    // Verified by accepting several parents
    #[test]
    fn test_merge_cli_batch() {
        let cli = MergeCli::parse_from(["merge-tables", "results", "merged", "--batch", "-v"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.request().unwrap().layout,
            SourceLayout::Batch(PathBuf::from("results"))
        );

        let too_many = MergeCli::parse_from(["merge-tables", "--batch", "a", "b", "merged"]);
        let err = too_many.request().unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { .. }));
    }

    // Tests a single path is rejected by the parser
    // Verified by lowering the minimum path count
    #[test]
    fn test_merge_cli_requires_output() {
        assert!(MergeCli::try_parse_from(["merge-tables", "only"]).is_err());
        assert!(MergeCli::try_parse_from(["merge-tables"]).is_err());
    }

    // Tests the extension flag tolerates a leading dot
    // Verified by keeping the dot in the request
    #[test]
    fn test_merge_cli_extension() {
        let cli = MergeCli::parse_from(["merge-tables", "a", "out", "--extension", ".TSV"]);
        assert_eq!(cli.table_extension(), "TSV");
        assert_eq!(cli.request().unwrap().extension, "TSV");

        let empty = MergeCli::parse_from(["merge-tables", "a", "out", "-e", "."]);
        assert!(empty.request().is_err());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let merge = MergeCli::parse_from(["merge-tables", "a", "out"]);
        assert!(merge.should_show_progress());
        let quiet = MergeCli::parse_from(["merge-tables", "a", "out", "-q"]);
        assert!(!quiet.should_show_progress());

        let submit = SubmitCli::parse_from(["submit-batches", "p.cppipe", "out", "img", "--quiet"]);
        assert!(!submit.should_show_progress());
    }

    // Tests the merge processor completes despite empty batch directories
    // Verified by returning an error for empty directories
    #[test]
    fn test_merge_processor_reports_empty_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let parent = temp_dir.path().join("results");
        fs::create_dir_all(parent.join("batch_001")).unwrap();
        fs::create_dir_all(parent.join("batch_002")).unwrap();
        fs::write(parent.join("batch_001/Image.csv"), "n\n1\n").unwrap();
        let output = temp_dir.path().join("merged");

        let cli = MergeCli::parse_from([
            PathBuf::from("merge-tables"),
            parent.clone(),
            output.clone(),
            PathBuf::from("--batch"),
            PathBuf::from("--quiet"),
        ]);
        let report = MergeProcessor::new(cli).process().unwrap();

        assert_eq!(report.empty_dirs, vec![parent.join("batch_002")]);
        assert!(output.join("Image.csv").is_file());
    }

    // Tests CLI parsing with only required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_submit_cli_defaults() {
        let cli = SubmitCli::parse_from(["submit-batches", "p.cppipe", "out", "images"]);

        assert_eq!(cli.pipeline_file, PathBuf::from("p.cppipe"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.image_dir, PathBuf::from("images"));
        assert_eq!(cli.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(cli.num_channels, DEFAULT_NUM_CHANNELS);
        assert_eq!(cli.memory, DEFAULT_MEMORY);
        assert_eq!(cli.log_dir, PathBuf::from(DEFAULT_LOG_DIR));
        assert_eq!(cli.count_rule, ImageCountRule::Inclusive);
        assert!(!cli.verbose);
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the batch size and channel fields
    #[test]
    fn test_submit_cli_all_args() {
        let cli = SubmitCli::parse_from([
            "submit-batches",
            "p.cppipe",
            "out",
            "images",
            "--batch-size",
            "16",
            "--num-channels",
            "3",
            "--memory",
            "32G",
            "--log-dir",
            "logs",
            "--count-rule",
            "exact",
            "--verbose",
        ]);

        let config = cli.config();
        assert_eq!(config.batch_size, 16);
        assert_eq!(config.num_channels, 3);
        assert_eq!(config.memory, "32G");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.count_rule, ImageCountRule::Exact);
        assert!(cli.verbose);
    }

    // Tests non-numeric batch sizes are rejected by the parser
    // Verified by parsing batch size as a string
    #[test]
    fn test_submit_cli_rejects_bad_number() {
        let result = SubmitCli::try_parse_from([
            "submit-batches",
            "p.cppipe",
            "out",
            "images",
            "--batch-size",
            "many",
        ]);
        assert!(result.is_err());
    }

    // Tests the submit processor drives the injected runner
    // Verified by ignoring the injected runner
    #[test]
    fn test_submit_processor_with_runner() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = temp_dir.path().join("p.cppipe");
        fs::write(&pipeline, "").unwrap();
        let images = temp_dir.path().join("images");
        fs::create_dir(&images).unwrap();
        for i in 0..8 {
            fs::write(images.join(format!("{i}.tif")), "").unwrap();
        }

        let cli = SubmitCli::parse_from([
            PathBuf::from("submit-batches"),
            pipeline,
            temp_dir.path().join("out"),
            images,
            PathBuf::from("--log-dir"),
            temp_dir.path().join("logs"),
            PathBuf::from("--quiet"),
        ]);
        let mut runner = RecordingRunner::default();
        let report = SubmitProcessor::new(cli).process_with(&mut runner).unwrap();

        assert_eq!(report.total_images, 3);
        assert_eq!(runner.job_names(), vec!["batch_001"]);
    }
}
