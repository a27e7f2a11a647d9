//! # 物件 CRUD API の統合テスト
//!
//! インメモリリポジトリを注入したルーターに対し、複数リクエストに
//! またがる CRUD のライフサイクルを検証する。
//!
//! - 作成 → 取得のラウンドトリップ（ペイロード + 採番 id + デフォルト）
//! - 部分更新後の取得が更新後の状態を反映する
//! - 削除は終端的（Get は 404、再 Delete は 204）
//! - 一覧が生存レコードのみを反映する

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use flatify_api::{app_builder::build_app, handler::flat::FlatDto};
use flatify_infra::mock::MockFlatRepository;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

/// テスト用のアプリケーションを構築する
///
/// main.rs と同じルーター・レイヤー構成で、リポジトリのみ
/// インメモリ実装に差し替える。
fn test_app() -> Router {
    build_app(Arc::new(MockFlatRepository::new()))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_body<T: serde::de::DeserializeOwned>(
    response: axum::http::Response<Body>,
) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 物件を作成して DTO を返すヘルパー
async fn create_flat(app: &Router, body: serde_json::Value) -> FlatDto {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/flat", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_body(response).await
}

#[tokio::test]
async fn test_作成した物件を取得するとペイロードとデフォルトが一致する() {
    let app = test_app();

    // 作成（rooms は省略）
    let created = create_flat(
        &app,
        serde_json::json!({
            "address_full": "Turmstraße 33, 10551 Berlin",
            "district": "Tiergarten",
            "area_sqm": 65,
            "rent": 645,
            "landlord": "Flatify GmbH"
        }),
    )
    .await;

    // 取得
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/flat/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: FlatDto = response_body(response).await;

    // ペイロード + 採番済み id + デフォルト（rooms=1）と等しい
    assert_eq!(fetched, created);
    assert_eq!(fetched.address_full, "Turmstraße 33, 10551 Berlin");
    assert_eq!(fetched.rooms, 1);
}

#[tokio::test]
async fn test_部分更新後の取得は更新後の状態を反映する() {
    let app = test_app();

    let created = create_flat(
        &app,
        serde_json::json!({ "address_full": "A通り 1", "rent": 500 }),
    )
    .await;

    // rent のみ更新
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/flat/{}", created.id),
            serde_json::json!({ "rent": 600 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched: FlatDto = response_body(response).await;
    assert_eq!(patched.rent, Some(600.0));
    assert_eq!(patched.address_full, "A通り 1");

    // 取得結果も更新後の状態
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/flat/{}", created.id)))
        .await
        .unwrap();
    let fetched: FlatDto = response_body(response).await;
    assert_eq!(fetched, patched);
}

#[tokio::test]
async fn test_削除は終端的でありgetは404再deleteは204になる() {
    let app = test_app();

    let created = create_flat(&app, serde_json::json!({ "address_full": "X通り 1" })).await;
    let uri = format!("/flat/{}", created.id);

    // 削除 → 削除前の内容が返る
    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: FlatDto = response_body(response).await;
    assert_eq!(deleted, created);

    // 以後の Get はルックアップエラー
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // 再 Delete は空結果（エラーではない）
    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_一覧は生存レコードのみを最終状態で反映する() {
    let app = test_app();

    // 3 件作成し、1 件を削除、1 件を更新
    let first = create_flat(&app, serde_json::json!({ "address_full": "1番目" })).await;
    let second = create_flat(&app, serde_json::json!({ "address_full": "2番目" })).await;
    let third = create_flat(&app, serde_json::json!({ "address_full": "3番目" })).await;

    app.clone()
        .oneshot(empty_request(Method::DELETE, &format!("/flat/{}", second.id)))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/flat/{}", third.id),
            serde_json::json!({ "rooms": 3 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/flat"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed: Vec<FlatDto> = response_body(response).await;

    // N=3 作成、1 削除 → 2 件、各レコードは最終状態
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, third.id);
    assert_eq!(listed[1].rooms, 3);
}

#[tokio::test]
async fn test_未知のidに対するget_patchは404でdeleteは204になる() {
    let app = test_app();
    let unknown = uuid::Uuid::nil();

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/flat/{unknown}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PATCH,
            &format!("/flat/{unknown}"),
            serde_json::json!({ "rent": 100 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &format!("/flat/{unknown}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_健全性チェックエンドポイントが200を返す() {
    let app = test_app();

    let response = app
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response_body(response).await;
    assert_eq!(body["status"], "healthy");
}
