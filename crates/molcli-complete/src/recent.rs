//! Recent file completion

use crate::action::Action;
use crate::context::Context;
use crate::markup::type_label;
use crate::state::CompletionState;

/// Recently opened files whose path contains `query`
///
/// Committing a candidate clears the line and runs the file's open command.
pub fn complete_recent_files(ctx: &Context, query: &str) -> CompletionState {
    let files: Vec<_> = ctx
        .file_list()
        .into_iter()
        .filter(|f| f.display_path().contains(query))
        .collect();
    let completions = files.iter().map(|f| f.display_path()).collect();
    let info = files
        .iter()
        .map(|f| match &f.thumbnail {
            Some(_) => type_label("recent file, preview"),
            None => type_label("recent file"),
        })
        .collect();
    let actions = files
        .into_iter()
        .map(|f| Action::RecentFile {
            open_command: f.open_command,
        })
        .collect();
    CompletionState::new(query, completions, None)
        .with_info(info)
        .with_actions(actions)
        .with_kind("recent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use molcli_mol::FileSpec;

    #[test]
    fn test_substring_match() {
        let ctx = Context::new().with_file_list(|| {
            vec![
                FileSpec::new("/data/1abc.pdb"),
                FileSpec::new("/data/my map.mrc").with_thumbnail("/tmp/map.png"),
                FileSpec::new("/other/2xyz.cif"),
            ]
        });
        let state = complete_recent_files(&ctx, "data");
        assert_eq!(state.completions(), &["/data/1abc.pdb", "/data/my map.mrc"]);
        assert_eq!(state.kind(), "recent");
        assert_eq!(
            state.actions()[1],
            Action::RecentFile {
                open_command: "open \"/data/my map.mrc\"".to_string()
            }
        );
        assert_eq!(state.info()[1], "(<i>recent file, preview</i>)");

        assert!(complete_recent_files(&ctx, "nothing").is_empty());
        assert_eq!(complete_recent_files(&ctx, "").len(), 3);
    }
}
