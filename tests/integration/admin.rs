use studio_portfolio::models::message::NewMessage;
use studio_portfolio::services::content_store::ContentStore;

use crate::common::{ADMIN_PASSWORD, ADMIN_USER, TestApp, routes};

mod login {
    use super::*;

    #[tokio::test]
    async fn correct_credentials_open_the_dashboard() {
        let app = TestApp::spawn().await;

        let res = app.login().await;

        assert_eq!(res.status, 200);
        assert_eq!(res.path, routes::ADMIN);
        assert!(res.text.contains("Admin Dashboard"));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_and_the_dashboard_stays_gated() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::LOGIN,
                &[("username", ADMIN_USER), ("password", "guess")],
            )
            .await;
        assert_eq!(res.status, 401);
        assert!(res.text.contains("Invalid credentials"));

        let admin = app.get(routes::ADMIN).await;
        assert!(admin.text.contains("Admin Login"));
        assert!(!admin.text.contains("Admin Dashboard"));
    }

    #[tokio::test]
    async fn logout_closes_the_session() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app.post_form(routes::LOGOUT, &[]).await;

        assert_eq!(res.path, routes::ADMIN);
        assert!(res.text.contains("Admin Login"));
    }
}

mod access_control {
    use super::*;

    #[tokio::test]
    async fn logged_out_session_cookie_no_longer_opens_the_dashboard() {
        let app = TestApp::spawn().await;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        let login = client
            .post(app.url(routes::LOGIN))
            .form(&[("username", ADMIN_USER), ("password", ADMIN_PASSWORD)])
            .send()
            .await
            .unwrap();
        assert_eq!(login.status(), 303);
        let cookie = login
            .headers()
            .get("set-cookie")
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let dashboard = client
            .get(app.url(routes::ADMIN))
            .header("cookie", &cookie)
            .send()
            .await
            .unwrap();
        assert!(dashboard.text().await.unwrap().contains("Admin Dashboard"));

        client
            .post(app.url(routes::LOGOUT))
            .header("cookie", &cookie)
            .send()
            .await
            .unwrap();

        let replay = client
            .get(app.url(routes::ADMIN))
            .header("cookie", &cookie)
            .send()
            .await
            .unwrap();
        assert!(replay.text().await.unwrap().contains("Admin Login"));
    }

    #[tokio::test]
    async fn actions_without_a_session_change_nothing() {
        let app = TestApp::spawn().await;
        let image = app.seed_image("Wedding", b"wedding").await;
        let id = image["id"].as_i64().unwrap();

        let anonymous = reqwest::Client::new();
        let res = anonymous
            .post(app.url(&routes::image_delete(id)))
            .send()
            .await
            .unwrap();
        assert_eq!(res.url().path(), routes::ADMIN);
        assert!(res.text().await.unwrap().contains("Admin Login"));

        assert!(app.content.get_image(id).await.is_ok());
    }
}

mod images {
    use super::*;

    #[tokio::test]
    async fn upload_appears_on_the_dashboard() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app.upload("Portrait", "sneha.jpg", b"portrait".to_vec()).await;

        assert_eq!(res.status, 200, "upload failed: {}", res.text);
        assert!(res.text.contains("Upload successful!"));
        assert!(res.text.contains("/public/portfolio/Portrait/"));
    }

    #[tokio::test]
    async fn upload_without_a_category_is_rejected() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app.upload("  ", "photo.jpg", b"bytes".to_vec()).await;

        assert_eq!(res.status, 400);
        assert!(res.text.contains("Category is required"));
        assert!(app.content.list_images(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cover_for_baby_shower_is_published() {
        let app = TestApp::spawn().await;
        let image = app.seed_image("Baby Shower", b"shower").await;
        let id = image["id"].as_i64().unwrap();
        let url = image["url"].as_str().unwrap().to_string();

        let res = app
            .post_form(&routes::image_cover(id), &[("section_id", "Baby Shower")])
            .await;
        assert_eq!(res.status, 200, "cover failed: {}", res.text);
        assert!(res.text.contains("Updated cover for Baby Shower"));

        let covers = app.get(routes::API_COVERS).await;
        assert_eq!(covers.body["Baby Shower"], url.as_str());

        let gallery = app.get(&routes::gallery("Baby Shower")).await;
        assert!(gallery.text.contains(&url));

        let home = app.get(routes::HOME).await;
        assert!(home.text.contains(&url));
    }

    #[tokio::test]
    async fn cover_for_an_unknown_section_is_rejected() {
        let app = TestApp::spawn().await;
        let image = app.seed_image("Wedding", b"wedding").await;
        let id = image["id"].as_i64().unwrap();

        let res = app
            .post_form(&routes::image_cover(id), &[("section_id", "Maternity")])
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(app.get(routes::API_COVERS).await.body, serde_json::json!({}));
    }

    #[tokio::test]
    async fn hero_flags_put_the_image_in_the_slideshow() {
        let app = TestApp::spawn().await;
        let image = app.seed_image("Wedding", b"wedding").await;
        let id = image["id"].as_i64().unwrap();

        let res = app
            .post_form(&routes::image_hero(id), &[("show_on_desktop_hero", "true")])
            .await;
        assert_eq!(res.status, 200, "hero update failed: {}", res.text);

        let stored = app.content.get_image(id).await.unwrap();
        assert_eq!(stored.show_on_desktop_hero, Some(true));
        assert_eq!(stored.show_on_mobile_hero, Some(false));

        let home = app.get(routes::HOME).await;
        assert!(home.text.contains(image["url"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn deleting_an_image_removes_the_row_and_the_object() {
        let app = TestApp::spawn().await;
        let image = app.seed_image("Commercial", b"product").await;
        let id = image["id"].as_i64().unwrap();
        let url = image["url"].as_str().unwrap().to_string();

        let res = app.post_form(&routes::image_delete(id), &[]).await;
        assert_eq!(res.status, 200, "delete failed: {}", res.text);
        assert!(res.text.contains("Image deleted"));

        assert!(app.content.list_images(None).await.unwrap().is_empty());
        let (status, _) = app.get_bytes(&url).await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn deleting_an_unknown_image_reports_not_found() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app.post_form(&routes::image_delete(9999), &[]).await;

        assert_eq!(res.status, 404);
        assert!(res.text.contains("Admin Dashboard"));
    }
}

mod messages {
    use super::*;

    #[tokio::test]
    async fn admin_can_read_and_delete_messages() {
        let app = TestApp::spawn().await;
        let stored = app
            .content
            .insert_message(&NewMessage {
                name: "Divya".into(),
                email: "divya@example.com".into(),
                subject: "Baby shower in March".into(),
                message: "Do you cover Erode?".into(),
                form_token: None,
            })
            .await
            .unwrap();

        let dashboard = app.login().await;
        assert!(dashboard.text.contains("Baby shower in March"));

        let res = app
            .post_form(&routes::message_delete(stored.id), &[])
            .await;
        assert_eq!(res.status, 200);
        assert!(!res.text.contains("Baby shower in March"));
        assert!(app.content.list_messages().await.unwrap().is_empty());
    }
}

mod testimonials {
    use super::*;

    #[tokio::test]
    async fn added_testimonial_replaces_the_defaults_and_can_be_removed() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app
            .post_form(
                routes::TESTIMONIALS,
                &[
                    ("name", "Anitha"),
                    ("event", "Wedding Photography"),
                    ("feedback", "Every frame was perfect."),
                    ("location", "Chennai"),
                ],
            )
            .await;
        assert_eq!(res.status, 200, "add failed: {}", res.text);

        let listed = app.get(routes::API_TESTIMONIALS).await;
        assert_eq!(listed.body[0]["name"], "Anitha");
        let id = listed.body[0]["id"].as_i64().unwrap();

        let home = app.get(routes::HOME).await;
        assert!(home.text.contains("Every frame was perfect."));
        assert!(!home.text.contains("Divya Lakshmi"));

        let res = app
            .post_form(&format!("{}/{id}/delete", routes::TESTIMONIALS), &[])
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(
            app.get(routes::API_TESTIMONIALS).await.body,
            serde_json::json!([])
        );
    }

    #[tokio::test]
    async fn incomplete_testimonial_is_rejected() {
        let app = TestApp::spawn().await;
        app.login().await;

        let res = app
            .post_form(
                routes::TESTIMONIALS,
                &[
                    ("name", "Anitha"),
                    ("event", ""),
                    ("feedback", "Lovely"),
                    ("location", "Chennai"),
                ],
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(app.content.list_testimonials().await.unwrap().is_empty());
    }
}
