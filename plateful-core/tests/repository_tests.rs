//! Repository classification tests against the mock catalogue client.

use std::sync::Arc;

use plateful_core::{MockRecipeApi, Outcome, RecipeDto, RecipeRepository, StaticConnectivity};

fn sample_dto(id: &str, name: &str) -> RecipeDto {
    RecipeDto {
        id: id.to_string(),
        name: name.to_string(),
        description: "Delicious recipe".to_string(),
        headline: "Test headline".to_string(),
        time: "PT35M".to_string(),
        difficulty: "0".to_string(),
        calories: "500 kcal".to_string(),
        carbos: "47 g".to_string(),
        fats: "8 g".to_string(),
        proteins: "43 g".to_string(),
        image: "image_url".to_string(),
        thumb: "thumb_url".to_string(),
    }
}

fn repository(api: Arc<MockRecipeApi>, online: bool) -> RecipeRepository {
    RecipeRepository::new(api, Arc::new(StaticConnectivity(online)))
}

#[tokio::test]
async fn offline_short_circuits_without_touching_the_client() {
    let api = Arc::new(MockRecipeApi::with_recipes(vec![sample_dto("r1", "One")]));
    let repo = repository(api.clone(), false);

    assert_eq!(repo.get_recipes().await, Outcome::NetworkUnavailable);
    assert_eq!(repo.get_recipe_by_id("r1").await, Outcome::NetworkUnavailable);
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn success_maps_every_record_verbatim() {
    let api = Arc::new(MockRecipeApi::with_recipes(vec![
        sample_dto("r1", "Crispy Fish Goujons"),
        sample_dto("r2", "Mushroom Risotto"),
        sample_dto("r3", "Carb-Loaded Cauliflower"),
    ]));
    let repo = repository(api, true);

    match repo.get_recipes().await {
        Outcome::Success(recipes) => {
            assert_eq!(recipes.len(), 3);
            assert_eq!(recipes[0].id, "r1");
            assert_eq!(recipes[0].name, "Crispy Fish Goujons");
            assert_eq!(recipes[0].calories, "500 kcal");
            assert_eq!(recipes[2].name, "Carb-Loaded Cauliflower");
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_list_is_success_not_error() {
    let api = Arc::new(MockRecipeApi::with_recipes(Vec::new()));
    let repo = repository(api, true);

    assert_eq!(repo.get_recipes().await, Outcome::Success(Vec::new()));
}

#[tokio::test]
async fn http_failure_keeps_status_and_server_message() {
    let api = Arc::new(MockRecipeApi::with_status(404, Some("Not found")));
    let repo = repository(api, true);

    assert_eq!(
        repo.get_recipes().await,
        Outcome::Error {
            code: 404,
            message: Some("Not found".to_string()),
        }
    );
}

#[tokio::test]
async fn http_failure_without_body_keeps_no_message() {
    let api = Arc::new(MockRecipeApi::with_status(500, None));
    let repo = repository(api, true);

    assert_eq!(
        repo.get_recipes().await,
        Outcome::Error {
            code: 500,
            message: None,
        }
    );
}

#[tokio::test]
async fn transport_failure_classifies_as_network_error() {
    let api = Arc::new(MockRecipeApi::with_transport_error("connection refused"));
    let repo = repository(api, true);

    assert_eq!(
        repo.get_recipes().await,
        Outcome::Error {
            code: -1,
            message: Some("Network Error".to_string()),
        }
    );
}

#[tokio::test]
async fn single_recipe_fetch_maps_and_classifies() {
    let api = Arc::new(MockRecipeApi::with_recipes(vec![sample_dto("r1", "One")]));
    let repo = repository(api, true);

    match repo.get_recipe_by_id("r1").await {
        Outcome::Success(recipe) => assert_eq!(recipe.name, "One"),
        other => panic!("expected Success, got {:?}", other),
    }

    assert_eq!(
        repo.get_recipe_by_id("r2").await,
        Outcome::Error {
            code: 404,
            message: None,
        }
    );
}

#[tokio::test]
async fn invalid_id_classifies_as_unknown_error() {
    let api = Arc::new(MockRecipeApi::with_recipes(vec![sample_dto("r1", "One")]));
    let repo = repository(api, true);

    assert_eq!(
        repo.get_recipe_by_id("").await,
        Outcome::Error {
            code: -1,
            message: Some("Unknown Error".to_string()),
        }
    );
}
