// tests/legacy_redirect.rs
use std::sync::Arc;

use recipebook_core::application::{
    error::ApplicationError,
    queries::recipes::{GetRecipeByKeyQuery, LegacyResolution, RecipeLookup, RecipeQueryService},
};

mod support;
use support::{InMemoryRecipeRepo, UnavailableRepo, doc, urls};

fn queries(docs: Vec<recipebook_core::domain::recipe::RecipeDocument>) -> RecipeQueryService {
    RecipeQueryService::new(Arc::new(InMemoryRecipeRepo::with_docs(docs)), urls())
}

#[tokio::test]
async fn known_id_redirects_to_slug_page() {
    let svc = queries(vec![doc("abc123", "Tarte aux pommes", Some("tarte-aux-pommes"))]);
    assert_eq!(
        svc.resolve_legacy("abc123").await,
        LegacyResolution::Redirect {
            location: "/recipes/tarte-aux-pommes".into()
        }
    );
}

#[tokio::test]
async fn slugless_record_redirects_to_id_keyed_page() {
    let svc = queries(vec![doc("abc123", "Tarte", None)]);
    assert_eq!(
        svc.resolve_legacy("abc123").await,
        LegacyResolution::Redirect {
            location: "/recipes/abc123".into()
        }
    );
}

#[tokio::test]
async fn unknown_or_malformed_id_is_not_found() {
    let svc = queries(vec![]);
    assert_eq!(svc.resolve_legacy("nope").await, LegacyResolution::NotFound);
    assert_eq!(svc.resolve_legacy("").await, LegacyResolution::NotFound);
    assert_eq!(svc.resolve_legacy("a b").await, LegacyResolution::NotFound);
}

#[tokio::test]
async fn record_without_timestamps_still_redirects() {
    let mut undated = doc("old1", "Quiche", None);
    undated.created_at = None;
    undated.updated_at = None;
    let svc = queries(vec![undated]);
    assert_eq!(
        svc.resolve_legacy("old1").await,
        LegacyResolution::Redirect {
            location: "/recipes/old1".into()
        }
    );
}

#[tokio::test]
async fn invalid_record_is_not_found_rather_than_fallback() {
    let untitled = recipebook_core::domain::recipe::RecipeDocument {
        id: "old2".into(),
        slug: Some("quiche".into()),
        ..Default::default()
    };
    let svc = queries(vec![untitled]);
    assert_eq!(svc.resolve_legacy("old2").await, LegacyResolution::NotFound);
}

#[tokio::test]
async fn backend_failure_falls_back_to_id_view() {
    let svc = RecipeQueryService::new(Arc::new(UnavailableRepo), urls());
    assert_eq!(
        svc.resolve_legacy("abc123").await,
        LegacyResolution::Fallback {
            id: "abc123".into(),
            path: "/recipes?id=abc123".into(),
        }
    );
}

#[tokio::test]
async fn key_lookup_by_slug_renders() {
    let svc = queries(vec![doc("abc123", "Tarte", Some("tarte"))]);
    let lookup = svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "tarte".into() })
        .await
        .unwrap();
    match lookup {
        RecipeLookup::Found(recipe) => assert_eq!(recipe.id, "abc123"),
        other => panic!("unexpected lookup: {other:?}"),
    }
}

#[tokio::test]
async fn key_lookup_by_id_of_slugged_recipe_redirects_once() {
    let svc = queries(vec![doc("abc123", "Tarte", Some("tarte"))]);
    let lookup = svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "abc123".into() })
        .await
        .unwrap();
    assert!(matches!(
        lookup,
        RecipeLookup::Redirect { ref location } if location == "/recipes/tarte"
    ));

    // following the redirect lands on the page itself
    let followed = svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "tarte".into() })
        .await
        .unwrap();
    assert!(matches!(followed, RecipeLookup::Found(_)));
}

#[tokio::test]
async fn key_lookup_by_id_of_slugless_recipe_renders() {
    let svc = queries(vec![doc("abc123", "Tarte", None)]);
    let lookup = svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "abc123".into() })
        .await
        .unwrap();
    assert!(matches!(lookup, RecipeLookup::Found(_)));
}

#[tokio::test]
async fn listed_path_of_slugless_recipe_resolves() {
    let svc = queries(vec![
        doc("abc123", "Quiche Lorraine", None),
        doc("zzz", "Tarte", Some("tarte")),
    ]);
    let listed = svc.list_recipes().await.unwrap();
    let quiche = listed.iter().find(|r| r.id == "abc123").unwrap();
    assert_eq!(quiche.path, "/recipes/quiche-lorraine");

    let key = quiche.path.trim_start_matches("/recipes/").to_string();
    match svc.get_recipe_by_key(GetRecipeByKeyQuery { key }).await.unwrap() {
        RecipeLookup::Found(recipe) => assert_eq!(recipe.id, "abc123"),
        other => panic!("unexpected lookup: {other:?}"),
    }
}

#[tokio::test]
async fn title_derived_key_prefers_oldest_slugless_record() {
    let mut older = doc("b-old", "Quiche", None);
    older.created_at = Some(support::fixed_now() - chrono::Duration::days(3));
    let svc = queries(vec![
        doc("a-new", "Quiche", None),
        older,
        doc("slugged", "Quiche", Some("quiche-2")),
    ]);
    match svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "quiche".into() })
        .await
        .unwrap()
    {
        RecipeLookup::Found(recipe) => assert_eq!(recipe.id, "b-old"),
        other => panic!("unexpected lookup: {other:?}"),
    }
}

#[tokio::test]
async fn key_lookup_of_unknown_key_is_not_found() {
    let svc = queries(vec![]);
    let err = svc
        .get_recipe_by_key(GetRecipeByKeyQuery { key: "ghost".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn listing_skips_malformed_records() {
    let mut older = doc("old", "Soupe", Some("soupe"));
    older.created_at = Some(support::fixed_now() - chrono::Duration::days(1));
    let broken = recipebook_core::domain::recipe::RecipeDocument {
        id: "broken".into(),
        ..Default::default()
    };
    let svc = queries(vec![older, broken, doc("new", "Gratin", Some("gratin"))]);

    let listed = svc.list_recipes().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["new", "old"]);
}
