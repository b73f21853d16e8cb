//! Write a default form document.

use std::path::Path;

use crate::domain::{AppError, FormState};
use crate::ports::FormStore;

pub fn execute<S: FormStore>(store: &S, path: &Path, force: bool) -> Result<(), AppError> {
    if store.exists(path) && !force {
        return Err(AppError::FileExists(path.display().to_string()));
    }
    store.save(path, &FormState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFormStore;

    #[test]
    fn writes_default_document() {
        let store = MemoryFormStore::new();
        execute(&store, Path::new("scene.yaml"), false).unwrap();

        let document = store.document("scene.yaml").unwrap();
        assert!(document.contains("aspectRatio"));
        assert_eq!(store.load(Path::new("scene.yaml")).unwrap(), FormState::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let store = MemoryFormStore::new().with_document("scene.toml", "sceneTitle = \"Pasar\"\n");

        let err = execute(&store, Path::new("scene.toml"), false).unwrap_err();
        assert!(matches!(err, AppError::FileExists(_)));

        execute(&store, Path::new("scene.toml"), true).unwrap();
        assert_eq!(store.load(Path::new("scene.toml")).unwrap().scene_title, "");
    }
}
