//! Rendering billing results.

use std::fmt::Write;

use crate::billing::UserResult;

const HEADER: &str = "UserName  Sessions  TotalTimeInSeconds";
const SEPARATOR: &str = "--------------------------------------";

/// Formats results as the plain-text billing table.
///
/// ```text
/// UserName  Sessions  TotalTimeInSeconds
/// --------------------------------------
/// ALICE99   4         240
/// ```
pub fn format_table(results: &[UserResult]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{HEADER}");
    let _ = writeln!(output, "{SEPARATOR}");
    for result in results {
        let _ = writeln!(
            output,
            "{}   {}         {}",
            result.user, result.session_count, result.billable_seconds
        );
    }

    output
}

/// Formats results as a pretty-printed JSON array.
pub fn format_json(results: &[UserResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::billing::bill_lines;
    use crate::types::UserId;

    fn sample_results() -> Vec<UserResult> {
        bill_lines([
            "14:02:03 ALICE99 Start",
            "14:02:05 CHARLIE End",
            "14:02:34 ALICE99 End",
            "14:02:58 ALICE99 Start",
            "14:03:02 CHARLIE Start",
            "14:03:33 ALICE99 Start",
            "14:03:35 ALICE99 End",
            "14:03:37 CHARLIE End",
            "14:04:05 ALICE99 End",
            "14:04:23 ALICE99 End",
            "14:04:41 CHARLIE Start",
        ])
        .results
    }

    #[test]
    fn test_table_lists_users_in_first_seen_order() {
        assert_snapshot!(format_table(&sample_results()), @r"
        UserName  Sessions  TotalTimeInSeconds
        --------------------------------------
        ALICE99   4         240
        CHARLIE   3         37
        ");
    }

    #[test]
    fn test_table_without_results_has_only_header() {
        assert_eq!(
            format_table(&[]),
            "UserName  Sessions  TotalTimeInSeconds\n--------------------------------------\n"
        );
    }

    #[test]
    fn test_json_output() {
        let results = vec![UserResult {
            user: UserId::new("ALICE99").unwrap(),
            session_count: 1,
            billable_seconds: 0,
        }];
        assert_snapshot!(format_json(&results).unwrap(), @r#"
        [
          {
            "user": "ALICE99",
            "session_count": 1,
            "billable_seconds": 0
          }
        ]
        "#);
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(format_json(&[]).unwrap(), "[]");
    }
}
