use hk_domain::error::Error;

/// Exit status for a missing explicitly named input.
pub const EXIT_MISSING_INPUT: u8 = 2;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

pub const DIFF_TIP: &str = "Tip: generate a diff file with `git diff > patch.diff` and pass `--diff patch.diff`, or use `--diff -` to pipe stdin.";

/// Map a failed run to its exit status and the text printed on stderr.
///
/// Missing inputs get their own status plus a hint on producing a diff.
pub fn failure(err: &anyhow::Error) -> (u8, String) {
    if let Some(e @ Error::MissingInput { .. }) = err.downcast_ref::<Error>() {
        return (EXIT_MISSING_INPUT, format!("error: {e}\n\n{DIFF_TIP}"));
    }
    (EXIT_FAILURE, format!("error: {err:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_input_exits_two_with_tip() {
        let err = anyhow::Error::from(Error::MissingInput {
            label: "Diff".into(),
            path: PathBuf::from("/repo/patch.diff"),
        });
        let (code, message) = failure(&err);
        assert_eq!(code, 2);
        assert_eq!(
            message,
            format!("error: Diff file not found: /repo/patch.diff\n\n{DIFF_TIP}")
        );
    }

    #[test]
    fn other_errors_exit_one_without_tip() {
        let err = anyhow::Error::from(Error::ConfigParse {
            path: PathBuf::from("/repo/handoff.toml"),
            message: "expected `=`".into(),
        })
        .context("loading config");
        let (code, message) = failure(&err);
        assert_eq!(code, 1);
        assert!(message.starts_with("error: loading config: "));
        assert!(message.contains("/repo/handoff.toml"));
        assert!(!message.contains("Tip:"));
    }

    #[test]
    fn missing_input_behind_context_still_maps_to_two() {
        let err = anyhow::Error::from(Error::MissingInput {
            label: "Selection".into(),
            path: PathBuf::from("/repo/snippet.rs"),
        })
        .context("reading inputs");
        assert_eq!(failure(&err).0, EXIT_MISSING_INPUT);
    }
}
