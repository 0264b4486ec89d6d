//! Completeness of a version's data.
//!
//! Both the warning indicator and selection dispatch read [`Completeness`],
//! so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::models::ModelVersion;
use crate::routes::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Completeness {
    Complete,
    /// No files. Takes priority when posts are missing too.
    MissingFiles,
    MissingPosts,
}

impl Completeness {
    pub fn of(version: &ModelVersion) -> Self {
        if version.files.is_empty() {
            Completeness::MissingFiles
        } else if version.posts.is_empty() {
            Completeness::MissingPosts
        } else {
            Completeness::Complete
        }
    }

    pub fn is_incomplete(&self) -> bool {
        !matches!(self, Completeness::Complete)
    }

    /// Wizard step that finishes this version, if any.
    pub fn wizard_step(&self) -> Option<WizardStep> {
        match self {
            Completeness::Complete => None,
            Completeness::MissingFiles => Some(WizardStep::Files),
            Completeness::MissingPosts => Some(WizardStep::Posts),
        }
    }
}

/// True when the version lacks files or posts.
pub fn is_incomplete(version: &ModelVersion) -> bool {
    Completeness::of(version).is_incomplete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelFile, Post};
    use chrono::Utc;

    fn version(files: usize, posts: usize) -> ModelVersion {
        ModelVersion {
            id: 1,
            model_id: 1,
            name: "v1".into(),
            files: (0..files)
                .map(|i| ModelFile {
                    id: i as i64,
                    name: format!("file-{i}.safetensors"),
                    url: format!("https://files.example/{i}"),
                    size_kb: 1.0,
                })
                .collect(),
            posts: (0..posts)
                .map(|i| Post {
                    id: i as i64,
                    title: None,
                })
                .collect(),
            images: Vec::new(),
            size_kb: 0.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_predicate_matches_emptiness() {
        for files in 0..2 {
            for posts in 0..2 {
                let v = version(files, posts);
                assert_eq!(is_incomplete(&v), v.files.is_empty() || v.posts.is_empty());
            }
        }
    }

    #[test]
    fn test_files_take_priority_over_posts() {
        assert_eq!(Completeness::of(&version(0, 0)), Completeness::MissingFiles);
        assert_eq!(Completeness::of(&version(0, 1)), Completeness::MissingFiles);
        assert_eq!(Completeness::of(&version(1, 0)), Completeness::MissingPosts);
        assert_eq!(Completeness::of(&version(1, 1)), Completeness::Complete);
    }

    #[test]
    fn test_wizard_steps() {
        assert_eq!(Completeness::MissingFiles.wizard_step(), Some(WizardStep::Files));
        assert_eq!(Completeness::MissingPosts.wizard_step(), Some(WizardStep::Posts));
        assert_eq!(Completeness::Complete.wizard_step(), None);
    }
}
