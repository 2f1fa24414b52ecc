use crate::common::{BUCKET, TestApp, routes};

#[tokio::test]
async fn listings_start_empty() {
    let app = TestApp::spawn().await;

    let images = app.get(routes::API_IMAGES).await;
    assert_eq!(images.status, 200);
    assert_eq!(images.body, serde_json::json!([]));

    let covers = app.get(routes::API_COVERS).await;
    assert_eq!(covers.status, 200);
    assert_eq!(covers.body, serde_json::json!({}));

    let testimonials = app.get(routes::API_TESTIMONIALS).await;
    assert_eq!(testimonials.status, 200);
    assert_eq!(testimonials.body, serde_json::json!([]));
}

#[tokio::test]
async fn images_can_be_filtered_by_category() {
    let app = TestApp::spawn().await;
    app.seed_image("Portrait", b"portrait").await;
    app.upload("Commercial", "shoe.png", b"commercial".to_vec())
        .await;

    let all = app.get(routes::API_IMAGES).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);
    assert_eq!(all.body[0]["category"], "Commercial");

    let portraits = app
        .get(&format!("{}?category=Portrait", routes::API_IMAGES))
        .await;
    let portraits = portraits.body.as_array().unwrap();
    assert_eq!(portraits.len(), 1);
    assert_eq!(portraits[0]["category"], "Portrait");
}

#[tokio::test]
async fn uploaded_bytes_are_served_at_the_public_url() {
    let app = TestApp::spawn().await;
    let image = app.seed_image("Baby Shower", b"\xff\xd8\xffshower").await;

    let url = image["url"].as_str().unwrap();
    assert!(url.starts_with(&format!(
        "http://{}/storage/v1/object/public/{BUCKET}/Baby%20Shower/",
        app.addr
    )));
    assert!(url.ends_with(".jpg"));

    let (status, bytes) = app.get_bytes(url).await;
    assert_eq!(status, 200);
    assert_eq!(bytes, b"\xff\xd8\xffshower");

    let res = app.client.get(url).send().await.unwrap();
    let etag = res.headers().get("etag").unwrap().to_str().unwrap().to_string();
    assert_eq!(
        etag,
        format!("\"{:x}\"", md5::compute(b"\xff\xd8\xffshower"))
    );
}

#[tokio::test]
async fn unknown_objects_and_buckets_are_not_found() {
    let app = TestApp::spawn().await;

    let missing = app
        .get(&format!("/storage/v1/object/public/{BUCKET}/Wedding/none.jpg"))
        .await;
    assert_eq!(missing.status, 404);

    let other_bucket = app
        .get("/storage/v1/object/public/elsewhere/Wedding/none.jpg")
        .await;
    assert_eq!(other_bucket.status, 404);
}
