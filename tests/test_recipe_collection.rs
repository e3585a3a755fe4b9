use mockito::{Matcher, Server};
use pantry_chef::{
    InMemoryCart, IngredientLine, PantrySnapshot, RecipeCollection, RecipeDetail, RecipeFilter,
    RecipeGenerator, RecipeId, SpoonacularClient,
};

fn detail(id: Option<i64>, title: &str, lines: &[(&str, &str)]) -> RecipeDetail {
    RecipeDetail {
        id: id.map(RecipeId::Api),
        title: title.to_string(),
        image: Some(format!("https://img.example.com/{}.jpg", title)),
        extended_ingredients: lines
            .iter()
            .map(|(original, name)| IngredientLine::new(*original, *name))
            .collect(),
        instructions: "Cook.".to_string(),
        source_url: None,
        meal_type: None,
    }
}

#[test]
fn test_save_twice_keeps_size() {
    let mut collection = RecipeCollection::new();
    let recipe = detail(Some(716429), "Pasta", &[("200g spaghetti", "spaghetti")]);

    assert!(collection.save(&recipe));
    let size = collection.len();
    assert!(!collection.save(&recipe));
    assert_eq!(collection.len(), size);
}

#[test]
fn test_synthetic_id_is_unique() {
    let mut collection = RecipeCollection::new();
    collection.save(&detail(Some(1), "Api recipe", &[("salt", "salt")]));
    collection.save(&detail(None, "Custom A", &[("salt", "salt")]));
    collection.save(&detail(None, "Custom B", &[("salt", "salt")]));
    collection.remove(&RecipeId::Custom(0));
    collection.save(&detail(None, "Custom C", &[("salt", "salt")]));

    let mut ids: Vec<String> = collection.list().iter().map(|r| r.id.to_string()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(collection
        .list()
        .iter()
        .all(|r| r.id != RecipeId::Custom(0)));
}

#[test]
fn test_remove_then_list() {
    let mut collection = RecipeCollection::new();
    collection.save(&detail(Some(1), "One", &[("egg", "egg")]));
    collection.save(&detail(Some(2), "Two", &[("egg", "egg")]));

    collection.remove(&RecipeId::Api(1));
    assert!(collection.list().iter().all(|r| r.id != RecipeId::Api(1)));

    // Removing an unknown id is a no-op
    collection.remove(&RecipeId::Api(999));
    collection.remove(&"custom_5".parse().unwrap());
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_plan_meal_uses_ingredient_names() {
    let mut collection = RecipeCollection::new();
    collection.save(&detail(
        Some(3),
        "Onion Tart",
        &[
            ("2 red onions, diced", "Red Onions"),
            ("1 sheet puff pastry", "Puff Pastry"),
            ("100g goat cheese", "Goat Cheese"),
        ],
    ));

    let pantry = PantrySnapshot::from_items(["onion", "Cheese"]);
    assert_eq!(
        collection.plan_meal(&RecipeId::Api(3), &pantry),
        Some(vec!["puff pastry".to_string()])
    );
    assert!(collection
        .plan_meal(&RecipeId::Custom(0), &pantry)
        .is_none());
}

#[tokio::test]
async fn test_session_flow() {
    let mut server = Server::new_async().await;
    let _search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::UrlEncoded("ingredients".into(), "garlic,pasta".into()))
        .with_status(200)
        .with_body(r#"[{"id": 654959}]"#)
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/recipes/654959/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "id": 654959,
                "title": "Pasta With Garlic",
                "extendedIngredients": [
                    {"original": "8 oz pasta", "name": "pasta"},
                    {"original": "4 cloves garlic, minced", "name": "garlic"},
                    {"original": "1/4 cup parmesan", "name": "parmesan"}
                ],
                "instructions": "<p>Boil pasta.</p><p>Toss with garlic.</p>"
            }"#,
        )
        .create_async()
        .await;

    let client = SpoonacularClient::with_base_url("test_key".to_string(), server.url());
    let pantry = PantrySnapshot::from_items(["Garlic", "Pasta", "garlic"]);
    let generator = RecipeGenerator::new(&client, pantry);

    let suggestions = generator.generate(&RecipeFilter::new().count(1)).await;
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].missing, vec!["1/4 cup parmesan"]);

    let mut cart = InMemoryCart::new();
    assert_eq!(suggestions[0].add_missing_to(&mut cart), 1);
    assert_eq!(cart.items(), &["1/4 cup parmesan"]);

    let mut collection = RecipeCollection::new();
    assert!(collection.save(&suggestions[0].recipe));
    assert!(!collection.save(&suggestions[0].recipe));

    let saved = &collection.list()[0];
    assert_eq!(saved.id, RecipeId::Api(654959));
    assert_eq!(saved.ingredient_names, vec!["pasta", "garlic", "parmesan"]);
    assert_eq!(
        collection.plan_meal(&saved.id, generator.pantry()),
        Some(vec!["parmesan".to_string()])
    );

    let json = serde_json::to_value(saved).unwrap();
    assert_eq!(json["id"], 654959);
    assert_eq!(json["source"], "api");
    assert_eq!(json["meal_type"], "unspecified");
}
