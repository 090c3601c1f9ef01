use std::io::Read;
use std::path::{Component, Path, PathBuf};

use hk_contextpack::collect::wrap_fenced;
use hk_domain::error::{Error, Result};

use crate::docs::{decode_lossy, read_text_lossy};

/// Argument value meaning "read from standard input".
pub const STDIN_ARG: &str = "-";

/// Read an optional input (selection, diff) named on the command line.
///
/// `None` argument means the input was not requested. `-` reads stdin until
/// EOF. Relative paths resolve against `project_root`. A named file that does
/// not exist is an error carrying the resolved path. Blank content yields
/// `None`; anything else comes back wrapped as `## <label>` plus a fence.
pub fn read_optional_input(
    arg: Option<&str>,
    project_root: &Path,
    label: &str,
) -> Result<Option<String>> {
    read_optional_input_from(arg, project_root, label, &mut std::io::stdin().lock())
}

pub fn read_optional_input_from(
    arg: Option<&str>,
    project_root: &Path,
    label: &str,
    stdin: &mut dyn Read,
) -> Result<Option<String>> {
    let Some(arg) = arg.filter(|a| !a.is_empty()) else {
        return Ok(None);
    };

    if arg == STDIN_ARG {
        let mut data = Vec::new();
        stdin.read_to_end(&mut data)?;
        return Ok(wrap_fenced(label, &decode_lossy(data)));
    }

    let path = resolve_input_path(arg, project_root);
    if !path.exists() {
        return Err(Error::MissingInput {
            label: label.to_string(),
            path,
        });
    }

    let content = read_text_lossy(&path)?;
    Ok(wrap_fenced(label, &content))
}

fn resolve_input_path(arg: &str, project_root: &Path) -> PathBuf {
    let path = Path::new(arg);
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&project_root.join(path))
    }
}

/// Collapse `.` and `..` components without touching the filesystem, so a
/// missing file still gets a clean absolute path in the error.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
