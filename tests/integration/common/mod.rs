use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

use studio_portfolio::services::admin_service::AdminCredentials;
use studio_portfolio::services::content_store::SqliteContentStore;
use studio_portfolio::services::object_store::DiskObjectStore;
use studio_portfolio::state::AppState;

pub const ADMIN_USER: &str = "owner";
pub const ADMIN_PASSWORD: &str = "correct horse";
pub const BUCKET: &str = "portfolio";

pub mod routes {
    pub const HOME: &str = "/";
    pub const CONTACT: &str = "/contact";
    pub const ADMIN: &str = "/admin";
    pub const LOGIN: &str = "/admin/login";
    pub const LOGOUT: &str = "/admin/logout";
    pub const UPLOAD: &str = "/admin/images";
    pub const TESTIMONIALS: &str = "/admin/testimonials";
    pub const API_IMAGES: &str = "/api/images";
    pub const API_COVERS: &str = "/api/covers";
    pub const API_TESTIMONIALS: &str = "/api/testimonials";

    pub fn gallery(category: &str) -> String {
        format!("/gallery/{}", category.replace(' ', "%20"))
    }

    pub fn image_cover(id: i64) -> String {
        format!("/admin/images/{id}/cover")
    }

    pub fn image_hero(id: i64) -> String {
        format!("/admin/images/{id}/hero")
    }

    pub fn image_delete(id: i64) -> String {
        format!("/admin/images/{id}/delete")
    }

    pub fn message_delete(id: i64) -> String {
        format!("/admin/messages/{id}/delete")
    }
}

/// A running test server backed by a throwaway SQLite file and storage dir.
pub struct TestApp {
    pub addr: SocketAddr,
    /// Follows redirects and keeps cookies, like a browser.
    pub client: Client,
    pub content: Arc<SqliteContentStore>,
    pub storage_dir: TempDir,
    _db_dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Path of the final URL after redirects.
    pub path: String,
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let path = res.url().path().to_string();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            path,
            text,
            body,
        }
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_dir = TempDir::new().expect("Failed to create database dir");
        let storage_dir = TempDir::new().expect("Failed to create storage dir");

        let options = SqliteConnectOptions::new()
            .filename(db_dir.path().join("portfolio.db"))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to open test database");
        let content = Arc::new(SqliteContentStore::new(Arc::new(pool)));
        content.migrate().await.expect("Failed to migrate test database");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        let objects = Arc::new(DiskObjectStore::new(
            storage_dir.path(),
            BUCKET,
            format!("http://{addr}"),
        ));
        let state = AppState::new(
            content.clone(),
            objects,
            Some(AdminCredentials {
                username: ADMIN_USER.into(),
                password: ADMIN_PASSWORD.into(),
            }),
            chrono::Duration::hours(1),
        );
        let app = studio_portfolio::app(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            addr,
            client,
            content,
            storage_dir,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        TestResponse::from_response(res).await
    }

    /// GET an absolute URL, e.g. a stored image's public URL.
    pub async fn get_bytes(&self, url: &str) -> (u16, Vec<u8>) {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .expect("Failed to send GET request");
        let status = res.status().as_u16();
        let bytes = res.bytes().await.expect("Failed to read body").to_vec();
        (status, bytes)
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn login(&self) -> TestResponse {
        self.post_form(
            routes::LOGIN,
            &[("username", ADMIN_USER), ("password", ADMIN_PASSWORD)],
        )
        .await
    }

    pub async fn upload(&self, category: &str, file_name: &str, bytes: Vec<u8>) -> TestResponse {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .expect("Failed to set MIME type");
        let form = reqwest::multipart::Form::new()
            .text("category", category.to_string())
            .part("file", part);

        let res = self
            .client
            .post(self.url(routes::UPLOAD))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send upload request");
        TestResponse::from_response(res).await
    }

    /// Log in and upload one image, returning its `/api/images` entry.
    pub async fn seed_image(&self, category: &str, bytes: &[u8]) -> Value {
        let login = self.login().await;
        assert_eq!(login.status, 200, "login failed: {}", login.text);
        let upload = self.upload(category, "photo.jpg", bytes.to_vec()).await;
        assert_eq!(upload.status, 200, "upload failed: {}", upload.text);

        let listed = self.get(routes::API_IMAGES).await;
        listed.body[0].clone()
    }
}
