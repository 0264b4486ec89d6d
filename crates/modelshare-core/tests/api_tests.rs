//! Integration tests for the ModelShareApi public interface.
//!
//! These tests drive a local database end to end: seeding, loading a model
//! page, navigating versions and deleting through the data service.

use modelshare_core::models::{
    ModelType, NewImage, NewModel, NewModelFile, NewModelVersion, NewUser, UserQuery, UserUpdate,
};
use modelshare_core::navigator::{Extents, MenuAction, ScrollDirection, ScrollPosition};
use modelshare_core::{ErrorCode, ModelDeleteOutcome, ModelShareApi, Route};
use tempfile::TempDir;

struct Seeded {
    _temp_dir: TempDir,
    api: ModelShareApi,
    owner: i64,
    model: i64,
}

fn complete(name: &str, images: usize) -> NewModelVersion {
    NewModelVersion {
        name: name.into(),
        size_kb: 2_097_152.0,
        files: vec![NewModelFile {
            name: format!("{name}.safetensors"),
            url: format!("https://files.example/{name}.safetensors"),
            size_kb: 2_097_152.0,
        }],
        posts: vec![Some(format!("{name} showcase"))],
        images: (0..images)
            .map(|i| NewImage {
                name: None,
                url: format!("https://images.example/{name}/{i}.png"),
            })
            .collect(),
    }
}

/// Model with v1 (no files), v2 (files, no posts) and v3 (complete).
async fn seeded() -> Seeded {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let api = ModelShareApi::open(temp_dir.path().join("modelshare.sqlite"))
        .await
        .unwrap();
    let store = api.store().unwrap();

    let owner = store
        .insert_user(&NewUser {
            name: Some("Model Owner".into()),
            username: Some("owner".into()),
            email: Some("owner@example.com".into()),
            image: None,
        })
        .unwrap();
    let model = store
        .insert_model(&NewModel {
            name: "Wizard Test".into(),
            description: None,
            model_type: ModelType::Lora,
            trained_words: vec!["wzrd".into()],
            user_id: owner.id,
            tags: Vec::new(),
        })
        .unwrap();

    store
        .insert_model_version(
            model,
            &NewModelVersion {
                name: "v1".into(),
                ..Default::default()
            },
        )
        .unwrap();
    let mut files_only = complete("v2", 0);
    files_only.posts.clear();
    store.insert_model_version(model, &files_only).unwrap();
    store.insert_model_version(model, &complete("v3", 3)).unwrap();

    Seeded {
        _temp_dir: temp_dir,
        api,
        owner: owner.id,
        model,
    }
}

#[tokio::test]
async fn test_api_opens_local_database() {
    let temp_dir = TempDir::new().unwrap();
    let api = ModelShareApi::open(temp_dir.path().join("a").join("b.sqlite"))
        .await
        .unwrap();
    assert!(api.is_local());
    assert!(api.store().is_some());
}

#[tokio::test]
async fn test_incomplete_versions_redirect_to_wizard() {
    let s = seeded().await;
    let mut page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(400.0, 800.0))
        .await
        .unwrap();
    let ids: Vec<_> = page.model().model_versions.iter().map(|v| v.id).collect();

    let view = page.render_versions();
    assert_eq!(view.items.len(), 3);
    assert!(view.items[0].show_warning);
    assert!(view.items[1].show_warning);
    assert!(!view.items[2].show_warning);
    assert!(view.items[2].active);

    page.activate_version(ids[0]);
    assert_eq!(
        page.take_navigation().map(|r| r.path()),
        Some(format!(
            "/models/v2/{}/model-versions/{}/wizard?step=2",
            s.model, ids[0]
        ))
    );
    assert_eq!(page.selected(), Some(ids[2]));

    page.activate_version(ids[1]);
    assert_eq!(
        page.take_navigation().map(|r| r.path()),
        Some(format!(
            "/models/v2/{}/model-versions/{}/wizard?step=3",
            s.model, ids[1]
        ))
    );
}

#[tokio::test]
async fn test_owner_deletes_selected_version_through_service() {
    let s = seeded().await;
    let mut page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(400.0, 800.0))
        .await
        .unwrap();
    let ids: Vec<_> = page.model().model_versions.iter().map(|v| v.id).collect();

    assert!(page.activate_menu_action(ids[2], MenuAction::DeleteVersion));
    let service = s.api.data_service();
    assert_eq!(page.confirm_delete_version(&service).await.unwrap(), Some(ids[2]));
    assert_eq!(page.selected(), Some(ids[1]));

    let reloaded = s.api.get_model_by_id(s.model).await.unwrap();
    assert_eq!(reloaded.model_versions.len(), 2);
}

#[tokio::test]
async fn test_edit_version_menu_navigates() {
    let s = seeded().await;
    let mut page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(400.0, 800.0))
        .await
        .unwrap();
    let id = page.model().model_versions[0].id;

    page.activate_menu_action(id, MenuAction::EditVersion);
    assert_eq!(
        page.take_navigation(),
        Some(Route::EditVersion {
            model_id: s.model,
            version_id: id
        })
    );
}

#[tokio::test]
async fn test_visitor_cannot_use_menus() {
    let s = seeded().await;
    let mut page = s
        .api
        .open_model_page(s.model, None, Extents::new(400.0, 800.0))
        .await
        .unwrap();
    let id = page.model().model_versions[0].id;
    assert!(!page.activate_menu_action(id, MenuAction::DeleteVersion));
    assert_eq!(page.pending_delete(), None);
}

#[tokio::test]
async fn test_paging_overflowing_list() {
    let s = seeded().await;
    let mut page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(1000.0, 300.0))
        .await
        .unwrap();

    let view = page.render_versions();
    assert!(!view.show_left_arrow);
    assert!(view.show_right_arrow);

    let request = page.page_versions(ScrollDirection::Right).unwrap();
    page.on_versions_scrolled(ScrollPosition {
        x: request.target_x,
        y: 0.0,
    });
    let view = page.render_versions();
    assert!(view.show_left_arrow);
    assert!(view.show_right_arrow);
}

#[tokio::test]
async fn test_page_display_data() {
    let s = seeded().await;
    let page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(400.0, 800.0))
        .await
        .unwrap();

    let download = page.download().unwrap();
    assert_eq!(download.label, "Download (2 GB)");
    assert!(download.sub_label.starts_with("v3 ("));
    assert!(page.gallery().with_controls);
    assert_eq!(page.review_prefill().model_version_id, None);

    let details = page.details();
    assert_eq!(details[0].value, "LORA");
    assert_eq!(details[3].value, "3");
    assert_eq!(details[6].value, "owner");
}

#[tokio::test]
async fn test_delete_model_flow() {
    let s = seeded().await;
    let service = s.api.data_service();
    let mut page = s
        .api
        .open_model_page(s.model, Some(s.owner), Extents::new(400.0, 800.0))
        .await
        .unwrap();

    assert_eq!(
        page.delete_model(&service).await,
        ModelDeleteOutcome::Redirect { route: Route::Home }
    );
    let err = s.api.get_model_by_id(s.model).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn test_user_procedures() {
    let s = seeded().await;

    let users = s
        .api
        .list_users(&UserQuery {
            query: Some("model".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(users.len(), 1);

    let updated = s
        .api
        .update_user(&UserUpdate {
            id: s.owner,
            username: Some("renamed".into()),
            blur_nsfw: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.username.as_deref(), Some("renamed"));
    assert!(!updated.blur_nsfw);

    let err = s
        .api
        .update_user(&UserUpdate {
            id: 9999,
            username: Some("nobody".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);

    // Deleting the owner cascades to their models.
    s.api.delete_user(s.owner).await.unwrap();
    assert!(s.api.get_model_by_id(s.model).await.is_err());
}
