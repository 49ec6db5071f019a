use minibots::dogs::{breed_caption, find_breed, Breed, BreedImage};

fn fixture_breeds() -> Vec<Breed> {
    serde_json::from_str(
        r#"[
            {
                "id": 1,
                "name": "Affenpinscher",
                "life_span": "10 - 12 years",
                "temperament": "Stubborn, Curious, Playful",
                "weight": {"imperial": "6 - 13", "metric": "3 - 6"}
            },
            {
                "id": 264,
                "name": "Welsh Terrier",
                "life_span": "12 - 13 years",
                "description": "A sturdy, compact terrier."
            }
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_breed_list_parses_with_extra_fields() {
    let breeds = fixture_breeds();

    assert_eq!(breeds.len(), 2);
    assert_eq!(breeds[0].id, 1);
    assert_eq!(breeds[0].name, "Affenpinscher");
    assert_eq!(breeds[0].life_span, "10 - 12 years");
    assert!(breeds[0].description.is_none());
    assert_eq!(
        breeds[1].description.as_deref(),
        Some("A sturdy, compact terrier.")
    );
}

#[test]
fn test_find_breed_ignores_case() {
    let breeds = fixture_breeds();

    assert_eq!(find_breed(&breeds, "welsh terrier").unwrap().id, 264);
    assert_eq!(find_breed(&breeds, "AFFENPINSCHER").unwrap().id, 1);
}

#[test]
fn test_find_breed_misses_unknown_names() {
    let breeds = fixture_breeds();

    assert!(find_breed(&breeds, "Welsh").is_none());
    assert!(find_breed(&breeds, "").is_none());
}

#[test]
fn test_caption_includes_description_when_present() {
    let breeds = fixture_breeds();
    let caption = breed_caption(&breeds[1]);

    assert!(caption.contains("Welsh Terrier"));
    assert!(caption.contains("12 - 13 years"));
    assert!(caption.contains("A sturdy, compact terrier."));
}

#[test]
fn test_caption_falls_back_without_description() {
    let breeds = fixture_breeds();
    let caption = breed_caption(&breeds[0]);

    assert!(caption.contains("No description available."));
}

#[test]
fn test_image_search_payload_parses() {
    let images: Vec<BreedImage> = serde_json::from_str(
        r#"[{"id": "abc", "url": "https://cdn2.thedogapi.com/images/abc.jpg", "width": 800, "height": 600}]"#,
    )
    .unwrap();

    assert_eq!(images[0].url, "https://cdn2.thedogapi.com/images/abc.jpg");
}

#[test]
fn test_image_search_payload_may_be_empty() {
    let images: Vec<BreedImage> = serde_json::from_str("[]").unwrap();
    assert!(images.first().is_none());
}
