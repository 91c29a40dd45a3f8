//! Tests for workflow commands and `ActionsReporter`.

use super::{ActionsReporter, FailureReporter, escape_data, format_command};

fn output(reporter: ActionsReporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

mod escaping {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_data("No PR found in context"), "No PR found in context");
    }

    #[test]
    fn percent_is_escaped_first() {
        assert_eq!(escape_data("100%\n"), "100%25%0A");
    }

    #[test]
    fn line_breaks_are_escaped() {
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }

    #[test]
    fn format_command_renders_name_and_value() {
        assert_eq!(format_command("error", "boom\nbang"), "::error::boom%0Abang");
    }
}

mod reporter {
    use super::*;

    #[test]
    fn new_reporter_has_not_failed() {
        let reporter = ActionsReporter::new(Vec::new());

        assert!(!reporter.has_failed());
        assert!(output(reporter).is_empty());
    }

    #[test]
    fn set_failed_writes_error_command() {
        let reporter = ActionsReporter::new(Vec::new());

        reporter.set_failed("Discord webhook URL is not provided");

        assert!(reporter.has_failed());
        assert_eq!(
            output(reporter),
            "::error::Discord webhook URL is not provided\n"
        );
    }

    #[test]
    fn add_mask_writes_mask_command() {
        let reporter = ActionsReporter::new(Vec::new());

        reporter.add_mask("https://discord.com/api/webhooks/1/token");

        assert!(!reporter.has_failed());
        assert_eq!(
            output(reporter),
            "::add-mask::https://discord.com/api/webhooks/1/token\n"
        );
    }

    #[test]
    fn add_mask_ignores_blank_values() {
        let reporter = ActionsReporter::new(Vec::new());

        reporter.add_mask("");
        reporter.add_mask("   ");

        assert!(output(reporter).is_empty());
    }

    #[test]
    fn multiple_failures_are_all_written() {
        let reporter = ActionsReporter::new(Vec::new());

        reporter.set_failed("first");
        reporter.set_failed("second");

        assert_eq!(output(reporter), "::error::first\n::error::second\n");
    }
}
