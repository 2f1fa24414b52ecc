use studio_portfolio::services::content_store::ContentStore;

use crate::common::{TestApp, routes};

mod home_page {
    use super::*;

    #[tokio::test]
    async fn empty_site_renders_built_in_content() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::HOME).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Divya Lakshmi"));
        assert!(res.text.contains("name=\"form_token\""));
        assert!(res.text.contains("/gallery/Baby%20Shower"));
    }

    #[tokio::test]
    async fn health_and_readiness_probes_pass() {
        let app = TestApp::spawn().await;

        let health = app.get("/healthz").await;
        assert_eq!(health.status, 200);
        assert_eq!(health.body["status"], "ok");

        let ready = app.get("/readyz").await;
        assert_eq!(ready.status, 200, "readyz failed: {}", ready.text);
        assert_eq!(ready.body["checks"]["content_store"]["ok"], true);
        assert_eq!(ready.body["checks"]["object_store"]["ok"], true);
    }
}

mod contact_form {
    use super::*;

    fn inquiry(token: &'static str) -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Karthik"),
            ("email", "karthik@example.com"),
            ("subject", "Wedding Photography Inquiry"),
            ("message", "Are you free on 12 June?"),
            ("form_token", token),
        ]
    }

    #[tokio::test]
    async fn submission_stores_exactly_one_message() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(routes::CONTACT, &inquiry("4b0c0f5e-1a54-4d5c-b0a1-4f8c3bd1e001"))
            .await;

        assert_eq!(res.status, 200, "submission failed: {}", res.text);
        assert!(res.text.contains("Thank you! Your message has been sent."));

        let messages = app.content.list_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Karthik");
        assert_eq!(messages[0].subject, "Wedding Photography Inquiry");
    }

    #[tokio::test]
    async fn resubmitting_the_same_form_does_not_duplicate_the_message() {
        let app = TestApp::spawn().await;
        let form = inquiry("4b0c0f5e-1a54-4d5c-b0a1-4f8c3bd1e002");

        let first = app.post_form(routes::CONTACT, &form).await;
        let second = app.post_form(routes::CONTACT, &form).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);
        assert_eq!(app.content.list_messages().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_fields_are_rejected_and_nothing_is_stored() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::CONTACT,
                &[
                    ("name", "Karthik"),
                    ("email", ""),
                    ("subject", "Hello"),
                    ("message", "Hi"),
                ],
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(res.text.contains("Please fill in: email"));
        assert!(app.content.list_messages().await.unwrap().is_empty());
    }
}

mod gallery {
    use super::*;

    #[tokio::test]
    async fn unknown_category_shows_the_empty_state() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::gallery("Maternity")).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Maternity"));
        assert!(res.text.contains("No images in this category yet."));
    }

    #[tokio::test]
    async fn gallery_lists_only_images_of_its_category() {
        let app = TestApp::spawn().await;
        let shower = app.seed_image("Baby Shower", b"shower-bytes").await;
        app.upload("Wedding", "wedding.jpg", b"wedding-bytes".to_vec())
            .await;

        let res = app.get(&routes::gallery("Baby Shower")).await;

        assert_eq!(res.status, 200);
        let shower_url = shower["url"].as_str().unwrap();
        assert!(res.text.contains(shower_url));
        assert!(!res.text.contains("/public/portfolio/Wedding/"));
    }
}
