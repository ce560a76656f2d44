use std::path::{Path, PathBuf};

fn replace_backslashes_with_slashes(path: &str) -> String {
    path.replace("\\", "/")
}

/// Crate root as recorded by the build script, with a trailing slash.
pub fn get_project_root() -> String {
    replace_backslashes_with_slashes(env!("PROJECT_ROOT"))
}

/// Absolute paths are kept, relative ones are taken from the project root.
pub fn resolve_asset_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&get_project_root()).join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_land_in_the_project() {
        let resolved = resolve_asset_path("assets/terrain.txt");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("assets/terrain.txt"));
        assert!(resolved.starts_with(get_project_root()));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let abs = std::env::temp_dir().join("field.txt");
        assert_eq!(resolve_asset_path(&abs), abs);
    }
}
