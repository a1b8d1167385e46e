//! Tests for fixed names and configuration defaults

#[cfg(test)]
mod tests {
    use cellbatch::io::configuration::{
        ANALYSIS_PROGRAM, BATCH_NAME_PREFIX, BATCH_NAME_WIDTH, DEFAULT_BATCH_SIZE,
        DEFAULT_LOG_DIR, DEFAULT_MEMORY, DEFAULT_NUM_CHANNELS, DEFAULT_TABLE_EXTENSION,
        JOB_TIME_LIMIT, PIPELINE_EXTENSION, SCHEDULER_PROGRAM, SENTINEL_FILENAME,
    };

    // Tests batch sizing defaults
    // Verified by changing default values
    #[test]
    fn test_batch_defaults() {
        assert_eq!(DEFAULT_BATCH_SIZE, 32);
        assert_eq!(DEFAULT_NUM_CHANNELS, 4);
        assert_eq!(DEFAULT_MEMORY, "16G");
        assert_eq!(DEFAULT_LOG_DIR, "slurm_logs");
    }

    // Tests scheduler invocation constants
    // Verified by changing the time limit
    #[test]
    fn test_scheduler_constants() {
        assert_eq!(SCHEDULER_PROGRAM, "sbatch");
        assert_eq!(ANALYSIS_PROGRAM, "cellprofiler");
        assert_eq!(JOB_TIME_LIMIT, "24:00:00");
    }

    // Tests extensions carry no leading dot
    // Verified by adding a dot prefix
    #[test]
    fn test_extensions_have_no_dot() {
        assert_eq!(PIPELINE_EXTENSION, "cppipe");
        assert_eq!(DEFAULT_TABLE_EXTENSION, "csv");
        assert!(!PIPELINE_EXTENSION.starts_with('.'));
        assert!(!DEFAULT_TABLE_EXTENSION.starts_with('.'));
    }

    // Tests sentinel would otherwise qualify as a table
    // Verified by changing the sentinel extension
    #[test]
    fn test_sentinel_is_a_table_name() {
        let suffix = format!(".{DEFAULT_TABLE_EXTENSION}");
        assert!(SENTINEL_FILENAME.to_lowercase().ends_with(&suffix));
    }

    // Tests batch naming format is filesystem safe
    // Verified by adding a special character to the prefix
    #[test]
    fn test_batch_name_format() {
        assert_eq!(BATCH_NAME_PREFIX, "batch_");
        assert_eq!(BATCH_NAME_WIDTH, 3);
        for ch in BATCH_NAME_PREFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Batch prefix contains invalid character: {ch}"
            );
        }
    }
}
