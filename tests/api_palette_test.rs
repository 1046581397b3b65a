//! Integration tests for catalog browsing endpoints.

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;

const NEUTRALS: [&str; 6] = ["gray", "mauve", "slate", "sage", "olive", "sand"];

#[tokio::test]
async fn test_palettes_lists_catalog_in_order() {
    let app = TestApp::new();
    let json = app.get_json("/api/palettes").await;
    let palettes = json.as_array().unwrap();

    assert_eq!(palettes.len(), 31);

    let neutrals: Vec<&str> = palettes
        .iter()
        .filter(|p| p["neutral"] == true)
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(neutrals, NEUTRALS);

    let indigo = palettes.iter().find(|p| p["name"] == "indigo").unwrap();
    assert_eq!(
        indigo,
        &serde_json::json!({
            "name": "indigo",
            "color": "#3e63dd",
            "neutral": false,
            "gray": "slate",
        })
    );
}

#[tokio::test]
async fn test_palettes_dark_variant_changes_color() {
    let app = TestApp::new();
    let json = app.get_json("/api/palettes?variant=dark").await;
    let slate = json
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "slate")
        .unwrap()
        .clone();
    assert_eq!(slate["color"], "#696e77");
}

#[tokio::test]
async fn test_palette_detail() {
    let app = TestApp::new();
    let json = app.get_json("/api/palettes/iris").await;

    assert_eq!(json["name"], "iris");
    assert_eq!(json["kind"], "base");
    assert_eq!(json["neutral"], false);
    assert_eq!(json["gray"], "slate");
    assert_eq!(json["variant"], "light");

    let shades = json["shades"].as_object().unwrap();
    assert_eq!(shades.len(), 12);
    assert_eq!(shades["1"], "#fdfdff");
    assert_eq!(shades["9"], "#5b5bd6");
    assert_eq!(shades["12"], "#272962");
}

#[tokio::test]
async fn test_palette_detail_dark() {
    let app = TestApp::new();
    let json = app.get_json("/api/palettes/iris?variant=dark").await;
    assert_eq!(json["variant"], "dark");
    assert_eq!(json["shades"]["12"], "#e0dffe");
}

#[tokio::test]
async fn test_neutral_palette_pairs_with_itself() {
    let app = TestApp::new();
    let json = app.get_json("/api/palettes/sand").await;
    assert_eq!(json["neutral"], true);
    assert_eq!(json["gray"], "sand");
}

#[tokio::test]
async fn test_unknown_palette_is_not_found() {
    let app = TestApp::new();
    let response = app.get("/api/palettes/chartreuse").await;
    assert_api_error(&response, StatusCode::NOT_FOUND);

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Palette not found: chartreuse");
}

#[tokio::test]
async fn test_gray_pair_lookup() {
    let app = TestApp::new();

    for (family, gray) in [
        ("tomato", "mauve"),
        ("indigo", "slate"),
        ("teal", "sage"),
        ("lime", "olive"),
        ("amber", "sand"),
        ("slate", "slate"),
        ("unknown", "gray"),
    ] {
        let json = app.get_json(&format!("/api/gray-pair/{family}")).await;
        assert_eq!(
            json,
            serde_json::json!({"family": family, "gray": gray}),
            "{family}"
        );
    }
}

#[tokio::test]
async fn test_every_listed_palette_has_detail() {
    let app = TestApp::new();
    let list = app.get_json("/api/palettes").await;

    for palette in list.as_array().unwrap() {
        let name = palette["name"].as_str().unwrap();
        let detail = app.get_json(&format!("/api/palettes/{name}")).await;
        assert_eq!(detail["shades"]["9"], palette["color"], "{name}");
    }
}
