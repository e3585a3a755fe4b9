use mockito::{Matcher, Mock, Server, ServerGuard};
use pantry_chef::{
    normalize_pantry, Diet, PantrySnapshot, RecipeFilter, RecipeId, RecipeProvider,
    SpoonacularClient,
};

fn recipe_json(id: i64, title: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "title": "{title}",
            "image": "https://img.spoonacular.com/recipes/{id}-556x370.jpg",
            "extendedIngredients": [
                {{"original": "2 chicken breasts, cubed", "name": "chicken breasts"}},
                {{"original": "1 cup long grain rice", "name": "long grain rice"}},
                {{"original": "1 tbsp tamari", "name": "tamari"}}
            ],
            "instructions": "<ol><li>Cook the rice.</li><li>Sear the chicken.</li></ol>",
            "sourceUrl": "https://example.com/recipes/{id}"
        }}"#
    )
}

fn stubs_json(ids: &[i64]) -> String {
    let stubs: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id": {id}, "title": "Stub {id}", "usedIngredientCount": 2, "missedIngredientCount": 1, "likes": 0}}"#
            )
        })
        .collect();
    format!("[{}]", stubs.join(","))
}

async fn mock_search(server: &mut ServerGuard, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

async fn mock_detail(server: &mut ServerGuard, id: i64, status: usize, body: &str) -> Mock {
    server
        .mock("GET", format!("/recipes/{}/information", id).as_str())
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn client(server: &ServerGuard) -> SpoonacularClient {
    SpoonacularClient::builder()
        .api_key("test_key")
        .base_url(server.url())
        .build()
        .unwrap()
}

fn chicken_and_rice() -> PantrySnapshot {
    PantrySnapshot::from_json_str(r#"[{"Item Name": "Chicken"}, {"Item Name": "Rice"}]"#).unwrap()
}

#[tokio::test]
async fn test_pantry_to_recipes_drops_invalid_detail() {
    let _ = env_logger::try_init();
    let mut server = Server::new_async().await;

    let terms = normalize_pantry(&chicken_and_rice());
    assert_eq!(terms, vec!["chicken", "rice"]);

    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ingredients".into(), "chicken,rice".into()),
            Matcher::UrlEncoded("number".into(), "8".into()),
            Matcher::UrlEncoded("diet".into(), "gluten free".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(stubs_json(&[101, 102, 103, 104, 105, 106]))
        .create_async()
        .await;

    let d1 = mock_detail(&mut server, 101, 200, &recipe_json(101, "Chicken Fried Rice")).await;
    let d2 = mock_detail(
        &mut server,
        102,
        200,
        r#"{"id": 102, "title": "No Steps", "extendedIngredients": [{"name": "rice"}]}"#,
    )
    .await;
    let d3 = mock_detail(&mut server, 103, 200, &recipe_json(103, "Chicken Congee")).await;
    let d4 = mock_detail(&mut server, 104, 200, &recipe_json(104, "Arroz con Pollo")).await;
    let unused = server
        .mock("GET", Matcher::Regex(r"^/recipes/10[56]/information$".to_string()))
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let filter = RecipeFilter::new().diet(Diet::GlutenFree).count(4);
    let recipes = client(&server).find_recipes(&terms, &filter).await;

    let ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(
        ids,
        vec![
            Some(RecipeId::Api(101)),
            Some(RecipeId::Api(103)),
            Some(RecipeId::Api(104))
        ]
    );
    for recipe in &recipes {
        assert!(!recipe.title.is_empty());
        assert!(!recipe.instructions.is_empty());
        assert!(!recipe.extended_ingredients.is_empty());
    }

    search.assert_async().await;
    d1.assert_async().await;
    d2.assert_async().await;
    d3.assert_async().await;
    d4.assert_async().await;
    unused.assert_async().await;
}

#[tokio::test]
async fn test_only_first_count_stubs_are_resolved() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, 200, &stubs_json(&[1, 2, 3, 4, 5, 6])).await;

    let d1 = mock_detail(&mut server, 1, 200, &recipe_json(1, "One")).await;
    let d2 = mock_detail(&mut server, 2, 200, r#"{"id": 2, "title": "Two"}"#).await;
    let d3 = mock_detail(&mut server, 3, 200, &recipe_json(3, "Three")).await;
    let rest = server
        .mock("GET", Matcher::Regex(r"^/recipes/[456]/information$".to_string()))
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let filter = RecipeFilter::new().diet(Diet::GlutenFree).count(3);
    let recipes = client(&server)
        .find_recipes(&normalize_pantry(&chicken_and_rice()), &filter)
        .await;

    let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Three"]);

    d1.assert_async().await;
    d2.assert_async().await;
    d3.assert_async().await;
    rest.assert_async().await;
}

#[tokio::test]
async fn test_search_failure_returns_empty() {
    let mut server = Server::new_async().await;
    let search = mock_search(&mut server, 500, r#"{"message": "internal error"}"#).await;
    let details = server
        .mock("GET", Matcher::Regex(r"^/recipes/\d+/information$".to_string()))
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let recipes = client(&server)
        .find_recipes(&["egg".to_string()], &RecipeFilter::default())
        .await;

    assert!(recipes.is_empty());
    search.assert_async().await;
    details.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_returns_empty() {
    // Nothing listens on port 1
    let client = SpoonacularClient::builder()
        .api_key("test_key")
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let recipes = client
        .find_recipes(&["egg".to_string()], &RecipeFilter::default())
        .await;
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_empty_terms_make_no_request() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let terms = normalize_pantry(&PantrySnapshot::from_items(["", "   ", "!?"]));
    assert!(terms.is_empty());

    let recipes = client(&server)
        .find_recipes(&terms, &RecipeFilter::default())
        .await;

    assert!(recipes.is_empty());
    search.assert_async().await;
}

#[tokio::test]
async fn test_detail_failures_are_isolated() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, 200, &stubs_json(&[7, 8, 9, 10, 11])).await;

    let _ok1 = mock_detail(&mut server, 7, 200, &recipe_json(7, "Seven")).await;
    let _server_error = mock_detail(&mut server, 8, 503, "").await;
    let _malformed = mock_detail(&mut server, 9, 200, "<html>not json</html>").await;
    let _not_found = mock_detail(&mut server, 10, 404, r#"{"status": "failure"}"#).await;
    let _ok2 = mock_detail(&mut server, 11, 200, &recipe_json(11, "Eleven")).await;

    let recipes = client(&server)
        .find_recipes(&["rice".to_string()], &RecipeFilter::new().count(5))
        .await;

    let titles: Vec<_> = recipes.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Seven", "Eleven"]);
}

#[tokio::test]
async fn test_never_more_than_count() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::UrlEncoded("number".into(), "4".into()))
        .with_status(200)
        .with_body(stubs_json(&[1, 2, 3, 4]))
        .create_async()
        .await;
    let mut details = Vec::new();
    for id in 1..=4 {
        details.push(mock_detail(&mut server, id, 200, &recipe_json(id, "Any")).await);
    }

    let recipes = client(&server)
        .find_recipes(&["rice".to_string()], &RecipeFilter::new().count(2))
        .await;

    assert_eq!(recipes.len(), 2);
    search.assert_async().await;
    assert!(details[0].matched_async().await);
    assert!(details[1].matched_async().await);
    assert!(!details[2].matched_async().await);
}
